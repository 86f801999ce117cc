//! Script-level metadata: root attributes and pre-execution checks.

use serde::{Deserialize, Serialize};

use crate::enums::Context;

/// File extension the installer expects for script files.
pub const SCRIPT_EXTENSION: &str = "dbc";

/// Root attributes of a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub author: String,
    pub scriptname: String,
    /// Free text emitted as the `description` child of the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tri-state: `None` means the attribute is not written at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_demo_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_code: Option<String>,
}

impl ScriptConfig {
    pub fn new(author: impl Into<String>, scriptname: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            scriptname: scriptname.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// File name the script is uploaded under, e.g. `V7610_01.dbc`.
    pub fn file_name(&self) -> String {
        let stem = self.scriptname.trim();
        let stem = if stem.is_empty() { "script" } else { stem };
        format!("{stem}.{SCRIPT_EXTENSION}")
    }
}

/// A guard evaluated before the script runs.
///
/// When any query returns rows the installer skips the script (if
/// `skip_script` is set) or stops with the `default` message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Check {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_script: Option<bool>,
    pub queries: Vec<CheckQuery>,
}

impl Check {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            queries: vec![CheckQuery::new(query)],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckQuery {
    pub query: String,
}

impl CheckQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
