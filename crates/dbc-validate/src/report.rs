//! Whole-script validation results.

use std::collections::BTreeSet;
use std::fmt;

use dbc_model::OperationId;
use serde::Serialize;

/// Where in a script an issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Location {
    /// The `script` element's own attributes.
    Script,
    /// A check block, by position.
    Check { index: usize },
    /// An operation, by position, with its id and tag.
    Operation {
        index: usize,
        id: OperationId,
        tag: String,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Script => f.write_str("script"),
            Location::Check { index } => write!(f, "check #{}", index + 1),
            Location::Operation { index, tag, .. } => write!(f, "#{} {tag}", index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub location: Location,
    pub message: String,
}

/// Issues for one script, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn add(&mut self, location: Location, message: impl Into<String>) {
        self.issues.push(Issue {
            location,
            message: message.into(),
        });
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Number of distinct operations with at least one issue.
    pub fn operations_with_issues(&self) -> usize {
        self.issues
            .iter()
            .filter_map(|issue| match issue.location {
                Location::Operation { index, .. } => Some(index),
                _ => None,
            })
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Script.to_string(), "script");
        assert_eq!(Location::Check { index: 0 }.to_string(), "check #1");
        let location = Location::Operation {
            index: 2,
            id: OperationId::new(9),
            tag: "define_table".to_string(),
        };
        assert_eq!(location.to_string(), "#3 define_table");
    }

    #[test]
    fn test_report_serializes_with_scope_tag() {
        let mut report = ValidationReport::default();
        report.add(Location::Check { index: 0 }, "At least one query is required");
        insta::assert_json_snapshot!(report, @r#"
        {
          "issues": [
            {
              "location": {
                "scope": "check",
                "index": 0
              },
              "message": "At least one query is required"
            }
          ]
        }
        "#);
    }
}
