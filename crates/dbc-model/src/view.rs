//! View operations.

use serde::{Deserialize, Serialize};

use crate::enums::TableType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefineView {
    pub name: String,
    pub description: String,
    pub service: String,
    pub class_name: String,
    /// Object whose definition the view extends.
    pub extends: Option<String>,
    pub table_type: Option<TableType>,
    pub main_object: Option<bool>,
    pub internal: Option<bool>,
    pub selection: ViewSelection,
}

/// How a view's rows are selected. The two modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewSelection {
    /// Joins the named tables and maps their columns automatically.
    AutoSelect(AutoSelect),
    /// Explicit select/from text.
    Custom(CustomSelect),
}

impl Default for ViewSelection {
    fn default() -> Self {
        ViewSelection::AutoSelect(AutoSelect::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSelect {
    pub tables: Vec<String>,
    /// Explicit column mappings overriding the automatic ones.
    pub columns: Vec<ViewColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSelect {
    pub select: String,
    pub from: String,
    pub where_clause: Option<String>,
    pub columns: Vec<ViewColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewColumn {
    pub table: String,
    pub column: String,
    pub view_column: String,
    pub same_storage_as: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyView {
    pub name: String,
    pub description: Option<String>,
    pub service: Option<String>,
    pub class_name: Option<String>,
    pub table_type: Option<TableType>,
    pub select: Option<String>,
    pub from: Option<String>,
    pub where_clause: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropView {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddViewAttribute {
    pub view: String,
    pub attribute: String,
    pub table: String,
    pub view_column: Option<String>,
    pub same_storage_as: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropViewAttribute {
    pub view: String,
    pub attribute: String,
}

/// Remaps several view columns at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyViewAttributes {
    pub view: String,
    pub columns: Vec<ViewColumn>,
}
