//! Index encoders.

use dbc_model::{DropIndex, IndexKey, SpecifyIndex};

use super::wrapped;
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn specify_index(op: &SpecifyIndex) -> Vec<String> {
    let attrs = Attributes::new()
        .set("object", &op.object)
        .opt("name", op.name.as_deref())
        .opt("primary", op.primary)
        .opt("clustered", op.clustered)
        .opt("unique", op.unique)
        .opt("textsearch", op.text_search)
        .opt("required", op.required);
    wrapped("specify_index", &attrs, &index_keys(&op.keys))
}

pub(crate) fn drop_index(op: &DropIndex) -> Vec<String> {
    let attrs = Attributes::new()
        .set("object", &op.object)
        .opt("name", op.name.as_deref());
    wrapped("drop_index", &attrs, &index_keys(&op.keys))
}

fn index_keys(keys: &[IndexKey]) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    for key in keys {
        let attrs = Attributes::new()
            .set("column", &key.column)
            .opt("ascending", key.ascending);
        builder.self_closing_tag("indexkey", &attrs);
    }
    builder.into_lines()
}
