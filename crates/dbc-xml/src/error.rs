//! Errors raised while reading script text into an element tree.

use thiserror::Error;

/// Failure to read a document as well-formed markup.
///
/// Only [`crate::try_parse_document`] returns these. The lenient
/// [`crate::deserialize`] logs them and falls back to an empty state.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute on <{element}>: {source}")]
    Attribute {
        element: String,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("cannot unescape attribute value on <{element}>: {source}")]
    Value {
        element: String,
        #[source]
        source: quick_xml::Error,
    },

    #[error("invalid UTF-8 in element or attribute name")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, XmlError>;
