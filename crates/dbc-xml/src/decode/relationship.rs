//! Relationship decoders.

use dbc_model::{CreateRelationship, DropRelationship, ModifyRelationship};

use crate::tree::Element;

pub(crate) fn create_relationship(el: &Element) -> CreateRelationship {
    CreateRelationship {
        parent: el.string("parent"),
        name: el.string("name"),
        child: el.string("child"),
        where_clause: el.string("whereclause"),
        remarks: el.string("remarks"),
    }
}

pub(crate) fn modify_relationship(el: &Element) -> ModifyRelationship {
    ModifyRelationship {
        parent: el.string("parent"),
        name: el.string("name"),
        child: el.opt_string("child"),
        where_clause: el.opt_string("whereclause"),
        remarks: el.opt_string("remarks"),
    }
}

pub(crate) fn drop_relationship(el: &Element) -> DropRelationship {
    DropRelationship {
        parent: el.string("parent"),
        name: el.string("name"),
    }
}
