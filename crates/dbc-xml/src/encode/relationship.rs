//! Relationship encoders.

use dbc_model::{CreateRelationship, DropRelationship, ModifyRelationship};

use super::single;
use crate::builder::Attributes;

pub(crate) fn create_relationship(op: &CreateRelationship) -> Vec<String> {
    let attrs = Attributes::new()
        .set("parent", &op.parent)
        .set("name", &op.name)
        .set("child", &op.child)
        .set("whereclause", &op.where_clause)
        .set("remarks", &op.remarks);
    single("create_relationship", &attrs)
}

pub(crate) fn modify_relationship(op: &ModifyRelationship) -> Vec<String> {
    let attrs = Attributes::new()
        .set("parent", &op.parent)
        .set("name", &op.name)
        .opt("child", op.child.as_deref())
        .opt("whereclause", op.where_clause.as_deref())
        .opt("remarks", op.remarks.as_deref());
    single("modify_relationship", &attrs)
}

pub(crate) fn drop_relationship(op: &DropRelationship) -> Vec<String> {
    let attrs = Attributes::new()
        .set("parent", &op.parent)
        .set("name", &op.name);
    single("drop_relationship", &attrs)
}
