//! Script text to builder state.

use dbc_model::{BuilderState, IdGenerator, OperationEntry, ScriptConfig, SequentialIds};
use tracing::{debug, warn};

use crate::decode::{decode_check, decode_operation};
use crate::error::Result;
use crate::tree::{Element, parse_document, parse_document_lenient};

/// Reads a script, numbering operations from zero.
///
/// Never fails: text that is not well-formed, or has no `script` element,
/// yields the default state. Character data holding an unknown entity such
/// as `&nbsp;` is kept as written; the same entity inside an attribute value
/// still makes the whole document unreadable.
pub fn deserialize(text: &str) -> BuilderState {
    deserialize_with(text, &mut SequentialIds::new())
}

/// Reads a script, taking operation ids from `ids`.
pub fn deserialize_with(text: &str, ids: &mut impl IdGenerator) -> BuilderState {
    match parse_document_lenient(text).map(|document| read_document(document, ids)) {
        Ok(state) => state,
        Err(error) => {
            warn!(%error, "script is not well-formed, using an empty state");
            BuilderState::default()
        }
    }
}

/// Reads a script, reporting markup that cannot be parsed.
///
/// Structural leniency is the same as [`deserialize`]: a missing `script`
/// or `statements` element and unknown operation tags are not errors.
pub fn try_parse_document(text: &str, ids: &mut impl IdGenerator) -> Result<BuilderState> {
    Ok(read_document(parse_document(text)?, ids))
}

fn read_document(document: Option<Element>, ids: &mut impl IdGenerator) -> BuilderState {
    let Some(document) = document else {
        debug!("document has no root element");
        return BuilderState::default();
    };
    let script = if document.name == "script" {
        Some(&document)
    } else {
        document.find_descendant("script")
    };
    let Some(script) = script else {
        debug!(root = %document.name, "document has no script element");
        return BuilderState::default();
    };
    read_script(script, ids)
}

fn read_script(script: &Element, ids: &mut impl IdGenerator) -> BuilderState {
    let config = ScriptConfig {
        author: script.string("author"),
        scriptname: script.string("scriptname"),
        description: script.child_text("description"),
        for_demo_only: script.opt_bool("for_demo_only"),
        context: script.opt_enum("context"),
        tenant_code: script.opt_string("tenantcode"),
    };
    let checks: Vec<_> = script.children_named("check").map(decode_check).collect();

    let mut operations = Vec::new();
    let statements = script
        .child("statements")
        .or_else(|| script.find_descendant("statements"));
    if let Some(statements) = statements {
        for child in statements.children() {
            match decode_operation(child) {
                Some(operation) => operations.push(OperationEntry {
                    id: ids.next_id(),
                    operation,
                }),
                None => warn!(tag = %child.name, "skipping unknown statement"),
            }
        }
    }

    debug!(
        checks = checks.len(),
        operations = operations.len(),
        "deserialized script"
    );
    BuilderState {
        config,
        checks,
        operations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbc_model::{Context, Operation, OperationId};

    #[test]
    fn test_missing_root_yields_default_state() {
        assert_eq!(deserialize(""), BuilderState::default());
        assert_eq!(deserialize("<other />"), BuilderState::default());
    }

    #[test]
    fn test_malformed_text_yields_default_state() {
        assert_eq!(
            deserialize(r#"<script author="A"><statements></script>"#),
            BuilderState::default()
        );
        assert!(
            try_parse_document(r#"<script author="A"><statements></script>"#, &mut SequentialIds::new())
                .is_err()
        );
    }

    #[test]
    fn test_script_nested_below_another_root_is_found() {
        let state = deserialize(r#"<wrapper><script author="A" scriptname="S" /></wrapper>"#);
        assert_eq!(state.config.author, "A");
        assert_eq!(state.config.scriptname, "S");
    }

    #[test]
    fn test_tri_state_root_attributes() {
        let state = deserialize(
            r#"<script author="A" scriptname="S" for_demo_only="false" context="landlord"><statements /></script>"#,
        );
        assert_eq!(state.config.for_demo_only, Some(false));
        assert_eq!(state.config.context, Some(Context::Landlord));
        assert_eq!(state.config.tenant_code, None);

        let state = deserialize(r#"<script author="A" scriptname="S" />"#);
        assert_eq!(state.config.for_demo_only, None);
    }

    #[test]
    fn test_only_direct_description_is_read() {
        let state = deserialize(
            r#"<script author="A" scriptname="S">
                 <statements>
                   <create_module module="M" description="x">
                     <description>nested</description>
                   </create_module>
                 </statements>
               </script>"#,
        );
        assert_eq!(state.config.description, None);
    }

    #[test]
    fn test_unknown_statement_is_skipped_and_ids_stay_dense() {
        let state = deserialize(
            r#"<script author="A" scriptname="S">
                 <statements>
                   <drop_table object="ONE" />
                   <launch_rockets />
                   <drop_table object="TWO" />
                 </statements>
               </script>"#,
        );
        let ids: Vec<u64> = state.operations.iter().map(|entry| entry.id.get()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(matches!(&state.operations[1].operation, Operation::DropTable(t) if t.object == "TWO"));
    }

    #[test]
    fn test_caller_supplied_ids() {
        let text = r#"<script author="A" scriptname="S"><statements><drop_view name="V" /></statements></script>"#;
        let mut ids = SequentialIds::new();
        let first = deserialize_with(text, &mut ids);
        let second = deserialize_with(text, &mut ids);
        assert_eq!(first.operations[0].id, OperationId::new(0));
        assert_eq!(second.operations[0].id, OperationId::new(1));
        assert_eq!(deserialize(text).operations[0].id, OperationId::new(0));
    }
}
