//! Line-oriented markup assembly.
//!
//! [`MarkupBuilder`] appends one element per line, indented two spaces per
//! nesting level. Encoders build their fragment at depth zero and the
//! serializer splices it into the document with [`MarkupBuilder::splice`].

use quick_xml::escape::escape;

use dbc_model::{
    Context, MaxType, MaxvarType, MenuType, SearchType, SecureLevel, SqlTarget, StorageType,
    TabDisplay, TableType,
};

/// XML declaration written as the first line of every script.
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const INDENT: &str = "  ";

/// A value that can be written as an attribute.
pub trait AttrValue {
    fn to_attr_value(&self) -> String;
}

impl AttrValue for str {
    fn to_attr_value(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for String {
    fn to_attr_value(&self) -> String {
        self.clone()
    }
}

impl AttrValue for bool {
    fn to_attr_value(&self) -> String {
        let literal = if *self { "true" } else { "false" };
        literal.to_string()
    }
}

impl AttrValue for u32 {
    fn to_attr_value(&self) -> String {
        self.to_string()
    }
}

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn to_attr_value(&self) -> String {
        (**self).to_attr_value()
    }
}

macro_rules! wire_attr_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttrValue for $ty {
                fn to_attr_value(&self) -> String {
                    self.as_str().to_string()
                }
            }
        )*
    };
}

wire_attr_value!(
    Context,
    MaxType,
    MaxvarType,
    MenuType,
    SearchType,
    SecureLevel,
    SqlTarget,
    StorageType,
    TabDisplay,
    TableType,
);

/// Ordered attribute list. Insertion order is the order written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute that is always written.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl AttrValue) -> Self {
        self.push(name, value);
        self
    }

    /// Adds an attribute only when `value` is present.
    #[must_use]
    pub fn opt<V: AttrValue>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.push_opt(name, value);
        self
    }

    pub fn push(&mut self, name: &'static str, value: impl AttrValue) {
        self.entries.push((name, value.to_attr_value()));
    }

    pub fn push_opt<V: AttrValue>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        out
    }
}

/// Append-only list of indented lines with a nesting depth.
#[derive(Debug, Clone, Default)]
pub struct MarkupBuilder {
    lines: Vec<String>,
    depth: usize,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn declaration(&mut self) {
        self.raw_line(DECLARATION);
    }

    /// Writes `<name attrs>` and nests subsequent lines one level deeper.
    pub fn open_tag(&mut self, name: &str, attrs: &Attributes) {
        let line = format!("<{name}{}>", attrs.render());
        self.raw_line(&line);
        self.depth += 1;
    }

    /// Leaves one nesting level and writes `</name>`.
    pub fn close_tag(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        let line = format!("</{name}>");
        self.raw_line(&line);
    }

    pub fn self_closing_tag(&mut self, name: &str, attrs: &Attributes) {
        let line = format!("<{name}{} />", attrs.render());
        self.raw_line(&line);
    }

    /// Writes `<name attrs>text</name>` on a single line.
    pub fn text_element(&mut self, name: &str, text: &str, attrs: &Attributes) {
        let line = format!("<{name}{}>{}</{name}>", attrs.render(), escape(text));
        self.raw_line(&line);
    }

    /// Writes `content` unescaped inside a CDATA section.
    pub fn cdata(&mut self, content: &str) {
        let line = format!("<![CDATA[{content}]]>");
        self.raw_line(&line);
    }

    /// Writes `content` at the current indentation without interpreting it.
    pub fn raw_line(&mut self, content: &str) {
        let mut line = INDENT.repeat(self.depth);
        line.push_str(content);
        self.lines.push(line);
    }

    /// Re-indents a depth-zero fragment at the current depth.
    pub fn splice<S: AsRef<str>>(&mut self, fragment: &[S]) {
        for line in fragment {
            self.raw_line(line.as_ref());
        }
    }

    /// Writes `name` self-closing when `children` is empty, wrapped otherwise.
    pub fn element<S: AsRef<str>>(&mut self, name: &str, attrs: &Attributes, children: &[S]) {
        if children.is_empty() {
            self.self_closing_tag(name, attrs);
        } else {
            self.open_tag(name, attrs);
            self.splice(children);
            self.close_tag(name);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Joins all lines, each terminated by a newline.
    pub fn finish(self) -> String {
        let capacity = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
