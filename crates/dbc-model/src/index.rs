use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyIndex {
    pub object: String,
    pub name: Option<String>,
    pub primary: Option<bool>,
    pub clustered: Option<bool>,
    pub unique: Option<bool>,
    pub text_search: Option<bool>,
    pub required: Option<bool>,
    /// Key columns in index order.
    pub keys: Vec<IndexKey>,
}

/// Drops an index by name, or by the key columns it was built on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropIndex {
    pub object: String,
    pub name: Option<String>,
    pub keys: Vec<IndexKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexKey {
    pub column: String,
    pub ascending: Option<bool>,
}

impl IndexKey {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: None,
        }
    }
}
