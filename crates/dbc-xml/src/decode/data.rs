//! Insert and freeform SQL decoders.

use dbc_model::{ColumnValue, Freeform, Insert, InsertRow, InsertValue, SqlStatement};

use crate::tree::Element;

pub(crate) fn insert(el: &Element) -> Insert {
    Insert {
        table: el.string("table"),
        ignore_duplicates: el.opt_bool("ignore_duplicates"),
        rows: el
            .children_named("insertrow")
            .map(|row| InsertRow {
                values: row.children_named("columnvalue").map(column_value).collect(),
            })
            .collect(),
    }
}

pub(crate) fn freeform(el: &Element) -> Freeform {
    Freeform {
        description: el.string("description"),
        statements: el
            .children_named("sql")
            .map(|sql| SqlStatement {
                target: sql.enum_or_default("target"),
                sql: sql.text.clone(),
            })
            .collect(),
    }
}

/// The first value source present wins; none reads as an empty string.
fn column_value(el: &Element) -> ColumnValue {
    let value = if let Some(value) = el.attr("string") {
        InsertValue::String(value.to_string())
    } else if let Some(value) = el.opt_bool("boolean") {
        InsertValue::Boolean(value)
    } else if let Some(value) = el.attr("number") {
        InsertValue::Number(value.to_string())
    } else if let Some(value) = el.attr("fromcolumn") {
        InsertValue::FromColumn(value.to_string())
    } else {
        InsertValue::default()
    };
    ColumnValue {
        column: el.string("column"),
        value,
    }
}
