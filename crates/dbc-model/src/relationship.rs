use serde::{Deserialize, Serialize};

/// A named join from a parent object to a child object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRelationship {
    pub parent: String,
    pub name: String,
    pub child: String,
    pub where_clause: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyRelationship {
    pub parent: String,
    pub name: String,
    pub child: Option<String>,
    pub where_clause: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropRelationship {
    pub parent: String,
    pub name: String,
}
