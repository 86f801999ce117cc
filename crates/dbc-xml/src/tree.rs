//! Minimal element tree read with `quick-xml`.
//!
//! The tree keeps element names, attributes in document order, child
//! elements, and the concatenated character data of each element. Comments,
//! processing instructions, and the doctype are dropped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::str::FromStr;
use tracing::warn;

use crate::error::{Result, XmlError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Text and CDATA content directly inside this element, unescaped.
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Raw value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Required string attribute; empty when absent.
    pub fn string(&self, name: &str) -> String {
        self.attr(name).unwrap_or_default().to_string()
    }

    pub fn opt_string(&self, name: &str) -> Option<String> {
        self.attr(name).map(str::to_string)
    }

    /// Optional flag. Only the literal `true` reads as true.
    pub fn opt_bool(&self, name: &str) -> Option<bool> {
        self.attr(name).map(|value| value == "true")
    }

    pub fn required_bool(&self, name: &str) -> bool {
        self.opt_bool(name).unwrap_or(false)
    }

    /// Optional count. Values that are not a non-negative integer read as absent.
    pub fn opt_u32(&self, name: &str) -> Option<u32> {
        self.attr(name).and_then(|value| value.trim().parse().ok())
    }

    pub fn required_u32(&self, name: &str) -> u32 {
        self.opt_u32(name).unwrap_or(0)
    }

    /// Optional literal. Unknown literals read as absent.
    pub fn opt_enum<T: FromStr>(&self, name: &str) -> Option<T> {
        self.attr(name).and_then(|value| value.parse().ok())
    }

    /// Required literal. Unknown or missing literals read as the default.
    pub fn enum_or_default<T: FromStr + Default>(&self, name: &str) -> T {
        self.opt_enum(name).unwrap_or_default()
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Direct children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first direct child named `name`.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|child| child.text.clone())
    }

    /// First element named `name` below this one, depth first.
    pub fn find_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(name) {
                return Some(found);
            }
        }
        None
    }
}

/// Parses `text` and returns its document element, if any.
///
/// Elements still open at end of input are closed implicitly.
pub fn parse_document(text: &str) -> Result<Option<Element>> {
    parse(text, false)
}

/// Like [`parse_document`], but character data with an entity that cannot
/// be resolved (`&nbsp;`) is kept as written instead of failing the parse.
pub fn parse_document_lenient(text: &str) -> Result<Option<Element>> {
    parse(text, true)
}

fn parse(text: &str, keep_unresolved: bool) -> Result<Option<Element>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|source| XmlError::Syntax {
            position: reader.error_position() as u64,
            source,
        })?;
        match event {
            Event::Start(start) => {
                stack.push(start_element(&start)?);
            }
            Event::Empty(start) => {
                let element = start_element(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    match text.unescape() {
                        Ok(unescaped) => current.text.push_str(&unescaped),
                        Err(source) if keep_unresolved => {
                            warn!(element = %current.name, %source, "keeping text as written");
                            current.text.push_str(&String::from_utf8_lossy(&text));
                        }
                        Err(source) => {
                            return Err(XmlError::Syntax {
                                position: reader.buffer_position() as u64,
                                source,
                            });
                        }
                    }
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        if root.is_some() && stack.is_empty() {
            break;
        }
    }

    while let Some(element) = stack.pop() {
        attach(&mut stack, &mut root, element);
    }
    Ok(root)
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|source| XmlError::Attribute {
            element: element.name.clone(),
            source,
        })?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute
            .unescape_value()
            .map_err(|source| XmlError::Value {
                element: element.name.clone(),
                source,
            })?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Adds a finished element to its parent, or makes it the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_nested_elements_and_attributes() {
        let root = parse_document(
            r#"<?xml version="1.0"?>
<a x="1" y="two &amp; three">
  <b><c z="&lt;" /></b>
  <b />
</a>"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(root.name, "a");
        assert_eq!(root.attr("y"), Some("two & three"));
        assert_eq!(root.children_named("b").count(), 2);
        assert_eq!(root.find_descendant("c").unwrap().attr("z"), Some("<"));
    }

    #[test]
    fn test_text_and_cdata_are_concatenated() {
        let root = parse_document("<sql>a &gt; b<![CDATA[ && c]]></sql>")
            .unwrap()
            .unwrap();
        assert_eq!(root.text, "a > b && c");
    }

    #[test]
    fn test_comments_are_ignored() {
        let root = parse_document("<a><!-- note --><b/></a>").unwrap().unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_empty_input_has_no_root() {
        assert!(parse_document("").unwrap().is_none());
        assert!(parse_document("just text").unwrap().is_none());
    }

    #[test]
    fn test_mismatched_end_tag_is_an_error() {
        let err = parse_document("<a><b></a>").unwrap_err();
        assert!(matches!(err, XmlError::Syntax { .. }));
    }

    #[test]
    fn test_unresolved_entity_in_text() {
        let text = "<a><b>x&nbsp;y</b><c/></a>";
        assert!(parse_document(text).is_err());
        let root = parse_document_lenient(text).unwrap().unwrap();
        assert_eq!(root.child_text("b").as_deref(), Some("x&nbsp;y"));
        assert!(root.child("c").is_some());
    }

    #[test]
    fn test_typed_attribute_helpers() {
        let root = parse_document(r#"<t flag="false" n="12" bad="x" kind="ALN" />"#)
            .unwrap()
            .unwrap();
        assert_eq!(root.opt_bool("flag"), Some(false));
        assert_eq!(root.opt_bool("missing"), None);
        assert_eq!(root.opt_u32("n"), Some(12));
        assert_eq!(root.opt_u32("bad"), None);
        assert_eq!(root.required_u32("bad"), 0);
        assert_eq!(
            root.opt_enum::<dbc_model::MaxType>("kind"),
            Some(dbc_model::MaxType::Aln)
        );
        assert_eq!(root.opt_enum::<dbc_model::MaxType>("bad"), None);
        assert_eq!(root.string("missing"), "");
    }
}
