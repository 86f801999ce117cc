//! Builder state to script text.

use dbc_model::{BuilderState, Operation, ScriptConfig};
use tracing::debug;

use crate::builder::{Attributes, MarkupBuilder};
use crate::encode::{encode_check, encode_operation};

/// Renders the complete script for `state`.
///
/// Nothing is validated here; empty required fields are written as empty
/// attribute values.
pub fn serialize(state: &BuilderState) -> String {
    let mut builder = MarkupBuilder::new();
    builder.declaration();
    builder.open_tag("script", &root_attributes(&state.config));
    if let Some(description) = &state.config.description {
        builder.text_element("description", description, &Attributes::new());
    }
    for check in &state.checks {
        builder.splice(&encode_check(check));
    }
    builder.open_tag("statements", &Attributes::new());
    for entry in &state.operations {
        builder.splice(&encode_operation(&entry.operation));
    }
    builder.close_tag("statements");
    builder.close_tag("script");
    debug!(
        checks = state.checks.len(),
        operations = state.operations.len(),
        "serialized script"
    );
    builder.finish()
}

/// Renders one operation as a standalone fragment with a trailing newline.
pub fn render_operation(operation: &Operation) -> String {
    let mut builder = MarkupBuilder::new();
    builder.splice(&encode_operation(operation));
    builder.finish()
}

fn root_attributes(config: &ScriptConfig) -> Attributes {
    Attributes::new()
        .set("author", &config.author)
        .set("scriptname", &config.scriptname)
        .opt("for_demo_only", config.for_demo_only)
        .opt("context", config.context)
        .opt("tenantcode", config.tenant_code.as_deref())
}
