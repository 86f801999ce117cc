//! Module (application group) operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateModule {
    pub module: String,
    pub description: String,
    pub menu_position: Option<String>,
    pub menu_image: Option<String>,
    pub items: Vec<ModuleMenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyModule {
    pub module: String,
    pub description: Option<String>,
    pub menu_position: Option<String>,
    pub menu_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropModule {
    pub module: String,
}

/// Places an application in a module's menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleApp {
    pub module: String,
    pub app: String,
    pub menu_position: Option<String>,
    pub menu_image: Option<String>,
}

/// Module menus are shallower than application menus: a header holds
/// application entries only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleMenuItem {
    App(ModuleMenuApp),
    Header(ModuleMenuHeader),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleMenuApp {
    pub app: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleMenuHeader {
    pub header_description: String,
    pub apps: Vec<ModuleMenuApp>,
}
