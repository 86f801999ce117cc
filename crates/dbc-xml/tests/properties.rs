//! Property tests for serializer determinism and markup escaping.

use dbc_model::{
    BuilderState, Check, CheckQuery, ColumnValue, CreateRelationship, DropTable, Freeform, Insert,
    InsertRow, InsertValue, ModifyApp, ModifyRelationship, Operation, ScriptConfig,
    SequentialIds, SetProperty, SqlStatement, SqlTarget,
};
use dbc_xml::{deserialize, parse_document, render_operation, serialize};
use proptest::prelude::*;

const TEXT: &str = "[a-zA-Z0-9 &<>\"'=;:.]{0,16}";

fn text() -> impl Strategy<Value = String> {
    TEXT
}

fn insert_value() -> impl Strategy<Value = InsertValue> {
    prop_oneof![
        text().prop_map(InsertValue::String),
        any::<bool>().prop_map(InsertValue::Boolean),
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(InsertValue::Number),
        "[A-Z]{1,8}".prop_map(InsertValue::FromColumn),
    ]
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        text().prop_map(|object| Operation::from(DropTable { object })),
        (text(), text()).prop_map(|(name, value)| Operation::from(SetProperty { name, value })),
        (text(), text(), text(), text(), text()).prop_map(
            |(parent, name, child, where_clause, remarks)| {
                Operation::from(CreateRelationship {
                    parent,
                    name,
                    child,
                    where_clause,
                    remarks,
                })
            }
        ),
        (
            text(),
            proptest::option::of(text()),
            proptest::option::of(text()),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(app, description, restrictions, is_mobile)| {
                Operation::from(ModifyApp {
                    app,
                    description,
                    restrictions,
                    is_mobile,
                    ..ModifyApp::default()
                })
            }),
        (text(), proptest::collection::vec(text(), 0..3)).prop_map(|(description, sql)| {
            Operation::from(Freeform {
                description,
                statements: sql
                    .into_iter()
                    .map(|sql| SqlStatement::new(SqlTarget::All, sql))
                    .collect(),
            })
        }),
        (
            "[A-Z]{1,8}",
            proptest::collection::vec(
                proptest::collection::vec(("[A-Z]{1,8}", insert_value()), 0..3),
                0..3
            ),
        )
            .prop_map(|(table, rows)| {
                Operation::from(Insert {
                    table,
                    ignore_duplicates: None,
                    rows: rows
                        .into_iter()
                        .map(|values| InsertRow {
                            values: values
                                .into_iter()
                                .map(|(column, value)| ColumnValue::new(column, value))
                                .collect(),
                        })
                        .collect(),
                })
            }),
    ]
}

fn check() -> impl Strategy<Value = Check> {
    (
        proptest::option::of(text()),
        proptest::option::of(any::<bool>()),
        proptest::collection::vec(text(), 0..3),
    )
        .prop_map(|(tag, skip_script, queries)| Check {
            tag,
            skip_script,
            queries: queries.into_iter().map(CheckQuery::new).collect(),
            ..Check::default()
        })
}

fn state() -> impl Strategy<Value = BuilderState> {
    (
        text(),
        text(),
        proptest::option::of(text()),
        proptest::collection::vec(check(), 0..3),
        proptest::collection::vec(operation(), 0..8),
    )
        .prop_map(|(author, scriptname, description, checks, operations)| {
            let mut config = ScriptConfig::new(author, scriptname);
            config.description = description;
            let mut state = BuilderState::new(config);
            state.checks = checks;
            let mut ids = SequentialIds::new();
            for operation in operations {
                state.push(operation, &mut ids);
            }
            state
        })
}

proptest! {
    #[test]
    fn serialize_is_deterministic(state in state()) {
        prop_assert_eq!(serialize(&state), serialize(&state.clone()));
    }

    #[test]
    fn deserialize_inverts_serialize(state in state()) {
        let text = serialize(&state);
        let reread = deserialize(&text);
        prop_assert_eq!(&reread, &state);
        prop_assert_eq!(serialize(&reread), text);
    }

    #[test]
    fn attribute_values_are_escaped_once(value in TEXT) {
        let line = render_operation(&SetProperty { name: "p".to_string(), value: value.clone() }.into());
        let expected = value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;");
        prop_assert_eq!(&line, &format!("<set_property name=\"p\" value=\"{expected}\" />\n"));

        let element = parse_document(&line).unwrap().unwrap();
        prop_assert_eq!(element.attr("value"), Some(value.as_str()));
    }

    #[test]
    fn absent_optionals_are_omitted(
        child in proptest::option::of(text()),
        where_clause in proptest::option::of(text()),
        remarks in proptest::option::of(text()),
    ) {
        let operation = ModifyRelationship {
            parent: "ASSET".to_string(),
            name: "REL".to_string(),
            child: child.clone(),
            where_clause: where_clause.clone(),
            remarks: remarks.clone(),
        };
        let element = parse_document(&render_operation(&operation.into())).unwrap().unwrap();
        prop_assert_eq!(element.has_attr("child"), child.is_some());
        prop_assert_eq!(element.has_attr("whereclause"), where_clause.is_some());
        prop_assert_eq!(element.has_attr("remarks"), remarks.is_some());
    }
}
