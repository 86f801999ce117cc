//! Validation of scripts loaded from editor state files.

use dbc_model::BuilderState;
use dbc_validate::{Location, validate_operation, validate_state};

fn load(json: &str) -> BuilderState {
    serde_json::from_str(json).expect("state json")
}

#[test]
fn half_finished_script_reports_each_gap() {
    let state = load(
        r#"{
            "config": {"author": "ADMIN", "scriptname": ""},
            "checks": [{"tag": "WIDGET", "queries": []}],
            "operations": [
                {"id": 0, "operation": {"type": "define_table", "object": "WIDGET",
                    "description": "Widgets", "service": "ASSET",
                    "class_name": "psdi.mbo.custom.CustomMboSet", "table_type": "site"}},
                {"id": 1, "operation": {"type": "set_property", "name": "mxe.widget", "value": "1"}},
                {"id": 5, "operation": {"type": "specify_index", "object": "WIDGET"}}
            ]
        }"#,
    );

    let report = validate_state(&state);
    let lines: Vec<String> = report
        .issues()
        .iter()
        .map(|issue| format!("{}: {}", issue.location, issue.message))
        .collect();
    insta::assert_debug_snapshot!(lines, @r##"
    [
        "script: scriptname is required",
        "check #1: At least one query is required",
        "#1 define_table: At least one attribute is required",
        "#3 specify_index: At least one index key is required",
    ]
    "##);
    assert_eq!(report.operations_with_issues(), 2);
    assert!(matches!(
        report.issues()[3].location,
        Location::Operation { id, .. } if id.get() == 5
    ));
}

#[test]
fn validating_does_not_depend_on_other_operations() {
    let state = load(
        r#"{
            "config": {"author": "ADMIN", "scriptname": "V1000_01"},
            "operations": [
                {"id": 0, "operation": {"type": "create_relationship", "parent": "NOSUCHTABLE",
                    "name": "REL", "child": "ALSOMISSING", "where_clause": "1=1", "remarks": "r"}}
            ]
        }"#,
    );
    assert!(validate_state(&state).is_valid());
    assert!(validate_operation(&state.operations[0].operation).is_empty());
}
