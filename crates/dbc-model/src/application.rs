//! Application, application menu, and signature option operations.

use serde::{Deserialize, Serialize};

use crate::enums::{MenuType, TabDisplay};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateApp {
    pub app: String,
    pub description: String,
    /// Main table the application operates on.
    pub main_tbname: Option<String>,
    pub restrictions: Option<String>,
    pub order_by: Option<String>,
    /// Application the new one is cloned from.
    pub original_app: Option<String>,
    pub is_mobile: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyApp {
    pub app: String,
    pub description: Option<String>,
    pub main_tbname: Option<String>,
    pub restrictions: Option<String>,
    pub order_by: Option<String>,
    pub is_mobile: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropApp {
    pub app: String,
}

/// Replaces an application's menu of the given type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAppMenu {
    pub app: String,
    pub menu_type: MenuType,
    pub items: Vec<AppMenuItem>,
}

/// Adds entries to an existing application menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalAppMenu {
    pub app: String,
    pub menu_type: MenuType,
    pub items: Vec<AppMenuItem>,
}

/// Top-level entry of an application menu.
///
/// Headers nest one level deep and hold only options and separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppMenuItem {
    Option(MenuOption),
    Separator(MenuSeparator),
    Header(MenuHeader),
}

/// Entry allowed beneath a [`MenuHeader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuHeaderItem {
    Option(MenuOption),
    Separator(MenuSeparator),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOption {
    /// Signature option the entry invokes.
    pub option: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub access_key: Option<String>,
    pub tab_display: Option<TabDisplay>,
    pub position: Option<u32>,
    pub sub_position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSeparator {
    pub tab_display: Option<TabDisplay>,
    pub position: Option<u32>,
    pub sub_position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuHeader {
    pub header_description: String,
    pub image: Option<String>,
    pub tab_display: Option<TabDisplay>,
    pub position: Option<u32>,
    pub sub_position: Option<u32>,
    pub items: Vec<MenuHeaderItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSigOption {
    pub app: String,
    pub option_name: String,
    pub description: String,
    pub esig_enabled: Option<bool>,
    pub visible: Option<bool>,
    /// Comma-separated options granted together with this one.
    pub also_grants: Option<String>,
    pub also_revokes: Option<String>,
    pub prerequisite: Option<String>,
    pub lang_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropSigOption {
    pub app: String,
    pub option_name: String,
}
