//! Insert and freeform SQL encoders.

use dbc_model::{Freeform, Insert, InsertValue};

use super::wrapped;
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn insert(op: &Insert) -> Vec<String> {
    let attrs = Attributes::new()
        .set("table", &op.table)
        .opt("ignore_duplicates", op.ignore_duplicates);
    let mut rows = MarkupBuilder::new();
    for row in &op.rows {
        let mut values = MarkupBuilder::new();
        for column in &row.values {
            let attrs = Attributes::new().set("column", &column.column);
            let attrs = match &column.value {
                InsertValue::String(value) => attrs.set("string", value),
                InsertValue::Boolean(value) => attrs.set("boolean", *value),
                InsertValue::Number(value) => attrs.set("number", value),
                InsertValue::FromColumn(value) => attrs.set("fromcolumn", value),
            };
            values.self_closing_tag("columnvalue", &attrs);
        }
        rows.element("insertrow", &Attributes::new(), values.lines());
    }
    wrapped("insert", &attrs, rows.lines())
}

pub(crate) fn freeform(op: &Freeform) -> Vec<String> {
    let attrs = Attributes::new().set("description", &op.description);
    let mut statements = MarkupBuilder::new();
    for statement in &op.statements {
        statements.text_element(
            "sql",
            &statement.sql,
            &Attributes::new().set("target", statement.target),
        );
    }
    wrapped("freeform", &attrs, statements.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbc_model::{ColumnValue, InsertRow, SqlStatement, SqlTarget};

    #[test]
    fn test_insert_writes_one_value_source_per_column() {
        let op = Insert {
            table: "WIDGETTYPE".to_string(),
            ignore_duplicates: Some(true),
            rows: vec![InsertRow {
                values: vec![
                    ColumnValue::new("TYPE", InsertValue::String("PUMP".to_string())),
                    ColumnValue::new("ACTIVE", InsertValue::Boolean(false)),
                    ColumnValue::new("SEQ", InsertValue::Number("007".to_string())),
                    ColumnValue::new("DESCRIPTION", InsertValue::FromColumn("TYPE".to_string())),
                ],
            }],
        };
        assert_eq!(
            insert(&op),
            vec![
                r#"<insert table="WIDGETTYPE" ignore_duplicates="true">"#,
                "  <insertrow>",
                r#"    <columnvalue column="TYPE" string="PUMP" />"#,
                r#"    <columnvalue column="ACTIVE" boolean="false" />"#,
                r#"    <columnvalue column="SEQ" number="007" />"#,
                r#"    <columnvalue column="DESCRIPTION" fromcolumn="TYPE" />"#,
                "  </insertrow>",
                "</insert>",
            ]
        );
    }

    #[test]
    fn test_freeform_statements_keep_target_and_order() {
        let op = Freeform {
            description: "Backfill".to_string(),
            statements: vec![
                SqlStatement::new(SqlTarget::Oracle, "update widget set qty = nvl(qty, 0)"),
                SqlStatement::new(SqlTarget::NotOracle, "update widget set qty = coalesce(qty, 0)"),
            ],
        };
        assert_eq!(
            freeform(&op),
            vec![
                r#"<freeform description="Backfill">"#,
                r#"  <sql target="oracle">update widget set qty = nvl(qty, 0)</sql>"#,
                r#"  <sql target="not_oracle">update widget set qty = coalesce(qty, 0)</sql>"#,
                "</freeform>",
            ]
        );
    }
}
