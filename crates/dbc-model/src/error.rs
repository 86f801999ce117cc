use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} literal: {value:?}")]
    UnknownLiteral { kind: &'static str, value: String },
    #[error("unknown operation tag: {0:?}")]
    UnknownTag(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
