//! Table and attribute operations.

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeDefinition, AttributeProperties};
use crate::enums::{StorageType, TableType};

/// Creates a new persistent or non-persistent object with its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefineTable {
    pub object: String,
    pub description: String,
    pub service: String,
    pub class_name: String,
    pub table_type: TableType,
    pub storage_type: Option<StorageType>,
    pub persistent: Option<bool>,
    pub primary_key: Option<String>,
    pub main_object: Option<bool>,
    pub internal: Option<bool>,
    pub trig_root: Option<String>,
    pub text_direction: Option<String>,
    pub attributes: Vec<AttributeDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyTable {
    pub object: String,
    pub description: Option<String>,
    pub service: Option<String>,
    pub class_name: Option<String>,
    pub table_type: Option<TableType>,
    pub storage_type: Option<StorageType>,
    pub primary_key: Option<String>,
    pub internal: Option<bool>,
    pub trig_root: Option<String>,
    pub text_direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropTable {
    pub object: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddAttributes {
    pub object: String,
    pub attributes: Vec<AttributeDefinition>,
}

/// Changes one existing column; only the fields that are set change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyAttribute {
    pub object: String,
    pub attribute: String,
    pub title: Option<String>,
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub properties: AttributeProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropAttributes {
    pub object: String,
    /// Bare column names, written as `attrname` children.
    pub attributes: Vec<String>,
}
