//! Domain operations.
//!
//! A domain constrains the values a column may hold. Each creation shape
//! carries its own kind of value row.

use serde::{Deserialize, Serialize};

use crate::enums::MaxType;

/// Internal values mapped to one or more external synonyms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifySynonymDomain {
    pub domain_id: String,
    pub description: Option<String>,
    pub max_type: MaxType,
    pub length: u32,
    pub overwrite: Option<bool>,
    pub internal: Option<bool>,
    pub values: Vec<SynonymValue>,
}

/// Appends synonyms to an existing synonym domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSynonyms {
    pub domain_id: String,
    pub values: Vec<SynonymValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymValue {
    /// External value shown to users.
    pub value: String,
    /// Internal value the synonym maps to.
    pub max_value: String,
    /// Marks the default synonym for its internal value.
    pub defaults: bool,
    pub description: Option<String>,
    pub site_id: Option<String>,
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyAlnDomain {
    pub domain_id: String,
    pub description: Option<String>,
    pub max_type: MaxType,
    pub length: u32,
    pub overwrite: Option<bool>,
    pub internal: Option<bool>,
    pub values: Vec<AlnValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlnValue {
    pub value: String,
    pub description: Option<String>,
    pub site_id: Option<String>,
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyNumericDomain {
    pub domain_id: String,
    pub description: Option<String>,
    pub max_type: MaxType,
    pub length: u32,
    pub scale: Option<u32>,
    pub overwrite: Option<bool>,
    pub internal: Option<bool>,
    pub values: Vec<NumericValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericValue {
    /// Kept as text so the value is written back exactly as given.
    pub value: String,
    pub description: Option<String>,
    pub site_id: Option<String>,
    pub org_id: Option<String>,
}

/// Copies fields from a looked-up record into the record being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyCrossoverDomain {
    pub domain_id: String,
    pub description: Option<String>,
    pub overwrite: Option<bool>,
    pub internal: Option<bool>,
    pub values: Vec<CrossoverValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossoverValue {
    pub object_name: String,
    pub validation_where_clause: String,
    pub list_where_clause: Option<String>,
    pub error_resource_bundle: Option<String>,
    pub error_key: Option<String>,
    pub site_id: Option<String>,
    pub org_id: Option<String>,
    pub fields: Vec<CrossoverField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossoverField {
    pub source_field: String,
    pub dest_field: String,
    pub copy_if_null: Option<bool>,
    pub copy_even_if_src_null: Option<bool>,
    pub copy_only_if_dest_null: Option<bool>,
    pub source_condition: Option<String>,
    pub dest_condition: Option<String>,
    pub sequence: Option<u32>,
}

/// Validates values against rows of another object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyTableDomain {
    pub domain_id: String,
    pub description: Option<String>,
    pub overwrite: Option<bool>,
    pub internal: Option<bool>,
    pub values: Vec<TableValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableValue {
    pub object_name: String,
    pub validation_where_clause: String,
    pub list_where_clause: Option<String>,
    pub error_resource_bundle: Option<String>,
    pub error_key: Option<String>,
    pub site_id: Option<String>,
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyDomainType {
    pub domain: String,
    pub max_type: MaxType,
    pub length: u32,
    pub scale: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropDomain {
    pub domain_id: String,
}
