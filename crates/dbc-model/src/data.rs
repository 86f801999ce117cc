//! Data operations: row inserts and raw SQL.

use serde::{Deserialize, Serialize};

use crate::enums::SqlTarget;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insert {
    pub table: String,
    pub ignore_duplicates: Option<bool>,
    pub rows: Vec<InsertRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsertRow {
    pub values: Vec<ColumnValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnValue {
    pub column: String,
    pub value: InsertValue,
}

impl ColumnValue {
    pub fn new(column: impl Into<String>, value: InsertValue) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
}

/// The single value source of an inserted column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertValue {
    String(String),
    Boolean(bool),
    /// Numeric literal kept verbatim (leading zeros, precision).
    Number(String),
    /// Copies the value of another column of the same row.
    FromColumn(String),
}

impl Default for InsertValue {
    fn default() -> Self {
        InsertValue::String(String::new())
    }
}

/// Raw SQL statements, each bound to the platforms it runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Freeform {
    pub description: String,
    pub statements: Vec<SqlStatement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlStatement {
    pub target: SqlTarget,
    pub sql: String,
}

impl SqlStatement {
    pub fn new(target: SqlTarget, sql: impl Into<String>) -> Self {
        Self {
            target,
            sql: sql.into(),
        }
    }
}
