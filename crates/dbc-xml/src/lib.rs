//! Script text codec.
//!
//! - [`serialize`] renders a [`dbc_model::BuilderState`] as script text.
//! - [`deserialize`] reads script text back, leniently.
//! - [`MarkupBuilder`] is the line-oriented writer both the serializer and
//!   the per-operation encoders are built on.
//!
//! Serializing a deserialized script reproduces the original text exactly.

pub mod builder;
mod decode;
mod encode;
pub mod error;
mod reader;
pub mod tree;
mod writer;

pub use builder::{AttrValue, Attributes, DECLARATION, MarkupBuilder};
pub use decode::{decode_check, decode_operation};
pub use encode::{encode_check, encode_operation};
pub use error::{Result, XmlError};
pub use reader::{deserialize, deserialize_with, try_parse_document};
pub use tree::{Element, parse_document, parse_document_lenient};
pub use writer::{render_operation, serialize};
