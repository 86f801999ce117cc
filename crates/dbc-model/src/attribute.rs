//! Attribute definitions shared by table and attribute operations.

use serde::{Deserialize, Serialize};

use crate::enums::{MaxType, SearchType};

/// One column of an object, as carried by `define_table` and
/// `add_attributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeDefinition {
    pub attribute: String,
    pub title: String,
    pub remarks: String,
    #[serde(flatten)]
    pub properties: AttributeProperties,
}

impl AttributeDefinition {
    pub fn new(
        attribute: impl Into<String>,
        title: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            title: title.into(),
            remarks: remarks.into(),
            properties: AttributeProperties::default(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, max_type: MaxType, length: u32) -> Self {
        self.properties.max_type = Some(max_type);
        self.properties.length = Some(length);
        self
    }
}

/// Optional column properties. Every field is written only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeProperties {
    pub max_type: Option<MaxType>,
    pub length: Option<u32>,
    pub scale: Option<u32>,
    pub persistent: Option<bool>,
    pub has_long_desc: Option<bool>,
    pub required: Option<bool>,
    pub user_defined: Option<bool>,
    /// Domain the column's values are validated against.
    pub domain: Option<String>,
    /// Field-validation class.
    pub class_name: Option<String>,
    pub default_value: Option<String>,
    pub same_as_object: Option<String>,
    pub same_as_attribute: Option<String>,
    pub must_be: Option<bool>,
    pub is_positive: Option<bool>,
    pub auto_key: Option<String>,
    pub can_auto_num: Option<bool>,
    pub search_type: Option<SearchType>,
    pub localizable: Option<bool>,
    pub domain_link: Option<String>,
    pub restricted: Option<bool>,
    pub exclude_tenants: Option<String>,
}

impl AttributeProperties {
    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
