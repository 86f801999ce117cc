//! Index decoders.

use dbc_model::{DropIndex, IndexKey, SpecifyIndex};

use crate::tree::Element;

pub(crate) fn specify_index(el: &Element) -> SpecifyIndex {
    SpecifyIndex {
        object: el.string("object"),
        name: el.opt_string("name"),
        primary: el.opt_bool("primary"),
        clustered: el.opt_bool("clustered"),
        unique: el.opt_bool("unique"),
        text_search: el.opt_bool("textsearch"),
        required: el.opt_bool("required"),
        keys: index_keys(el),
    }
}

pub(crate) fn drop_index(el: &Element) -> DropIndex {
    DropIndex {
        object: el.string("object"),
        name: el.opt_string("name"),
        keys: index_keys(el),
    }
}

fn index_keys(el: &Element) -> Vec<IndexKey> {
    el.children_named("indexkey")
        .map(|child| IndexKey {
            column: child.string("column"),
            ascending: child.opt_bool("ascending"),
        })
        .collect()
}
