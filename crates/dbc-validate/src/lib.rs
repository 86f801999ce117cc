//! Structural completeness checks.
//!
//! [`validate_operation`] reports the required fields and lists one operation
//! is missing. [`validate_state`] runs it over a whole script and adds the
//! script header and check blocks. Nothing here looks across operations, so
//! a relationship naming a table that is never defined is still valid.

mod operation;
mod report;
mod required;

pub use operation::validate_operation;
pub use report::{Issue, Location, ValidationReport};

use dbc_model::{BuilderState, Check, ScriptConfig};
use tracing::debug;

use crate::required::Required;

/// Validates the script header, every check, and every operation.
pub fn validate_state(state: &BuilderState) -> ValidationReport {
    let mut report = ValidationReport::default();

    for message in validate_config(&state.config) {
        report.add(Location::Script, message);
    }
    for (index, check) in state.checks.iter().enumerate() {
        for message in validate_check(check) {
            report.add(Location::Check { index }, message);
        }
    }
    for (index, entry) in state.operations.iter().enumerate() {
        for message in validate_operation(&entry.operation) {
            report.add(
                Location::Operation {
                    index,
                    id: entry.id,
                    tag: entry.operation.tag().to_string(),
                },
                message,
            );
        }
    }

    debug!(
        operations = state.operations.len(),
        issues = report.len(),
        "validated script"
    );
    report
}

fn validate_config(config: &ScriptConfig) -> Vec<String> {
    Required::new()
        .field("author", &config.author)
        .field("scriptname", &config.scriptname)
        .finish()
}

fn validate_check(check: &Check) -> Vec<String> {
    let mut required = Required::new().list("query", &check.queries);
    for query in &check.queries {
        required = required.field("query", &query.query);
    }
    required.finish()
}
