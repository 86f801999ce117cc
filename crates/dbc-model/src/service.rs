//! Service, system property, and system variable (maxvar) operations.

use serde::{Deserialize, Serialize};

use crate::enums::{MaxType, MaxvarType, SecureLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddService {
    pub service_name: String,
    pub description: String,
    pub class_name: String,
    pub singleton: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyService {
    pub service_name: String,
    pub description: Option<String>,
    pub class_name: Option<String>,
    pub singleton: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropService {
    pub service_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddProperty {
    pub name: String,
    pub description: String,
    pub max_type: MaxType,
    pub secure_level: SecureLevel,
    pub default_value: Option<String>,
    pub domain_id: Option<String>,
    pub value: Option<String>,
    pub live_refresh: Option<bool>,
    pub required: Option<bool>,
    pub online_changes: Option<bool>,
    pub user_defined: Option<bool>,
    pub encrypted: Option<bool>,
    pub masked: Option<bool>,
    pub global_only: Option<bool>,
    pub instance_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetProperty {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropProperty {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateMaxvar {
    pub name: String,
    pub description: String,
    pub maxvar_type: MaxvarType,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyMaxvar {
    pub name: String,
    pub description: Option<String>,
    pub maxvar_type: Option<MaxvarType>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropMaxvar {
    pub name: String,
}
