//! View encoders.

use dbc_model::{
    AddViewAttribute, DefineView, DropView, DropViewAttribute, ModifyView, ModifyViewAttributes,
    ViewColumn, ViewSelection,
};

use super::{single, wrapped};
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn define_view(op: &DefineView) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .set("description", &op.description)
        .set("service", &op.service)
        .set("classname", &op.class_name)
        .opt("extends", op.extends.as_deref())
        .opt("type", op.table_type)
        .opt("mainobject", op.main_object)
        .opt("internal", op.internal);
    let mut body = MarkupBuilder::new();
    match &op.selection {
        ViewSelection::AutoSelect(auto) => {
            let mut children = MarkupBuilder::new();
            for table in &auto.tables {
                children.self_closing_tag("table", &Attributes::new().set("name", table));
            }
            view_columns(&mut children, &auto.columns);
            body.element("autoselect", &Attributes::new(), children.lines());
        }
        ViewSelection::Custom(custom) => {
            let none = Attributes::new();
            body.open_tag("custom", &none);
            body.text_element("view_select", &custom.select, &none);
            body.text_element("view_from", &custom.from, &none);
            if let Some(where_clause) = &custom.where_clause {
                body.text_element("view_where", where_clause, &none);
            }
            view_columns(&mut body, &custom.columns);
            body.close_tag("custom");
        }
    }
    wrapped("define_view", &attrs, body.lines())
}

pub(crate) fn modify_view(op: &ModifyView) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .opt("description", op.description.as_deref())
        .opt("service", op.service.as_deref())
        .opt("classname", op.class_name.as_deref())
        .opt("type", op.table_type);
    let none = Attributes::new();
    let mut body = MarkupBuilder::new();
    if let Some(select) = &op.select {
        body.text_element("view_select", select, &none);
    }
    if let Some(from) = &op.from {
        body.text_element("view_from", from, &none);
    }
    if let Some(where_clause) = &op.where_clause {
        body.text_element("view_where", where_clause, &none);
    }
    wrapped("modify_view", &attrs, body.lines())
}

pub(crate) fn drop_view(op: &DropView) -> Vec<String> {
    single("drop_view", &Attributes::new().set("name", &op.name))
}

pub(crate) fn add_view_attribute(op: &AddViewAttribute) -> Vec<String> {
    let attrs = Attributes::new()
        .set("view", &op.view)
        .set("attribute", &op.attribute)
        .set("table", &op.table)
        .opt("view_column", op.view_column.as_deref())
        .opt("same_storage_as", op.same_storage_as.as_deref());
    single("add_view_attribute", &attrs)
}

pub(crate) fn drop_view_attribute(op: &DropViewAttribute) -> Vec<String> {
    let attrs = Attributes::new()
        .set("view", &op.view)
        .set("attribute", &op.attribute);
    single("drop_view_attribute", &attrs)
}

pub(crate) fn modify_view_attributes(op: &ModifyViewAttributes) -> Vec<String> {
    let mut columns = MarkupBuilder::new();
    view_columns(&mut columns, &op.columns);
    wrapped(
        "modify_view_attributes",
        &Attributes::new().set("view", &op.view),
        columns.lines(),
    )
}

fn view_columns(builder: &mut MarkupBuilder, columns: &[ViewColumn]) {
    for column in columns {
        let attrs = Attributes::new()
            .set("table", &column.table)
            .set("column", &column.column)
            .set("view_column", &column.view_column)
            .opt("same_storage_as", column.same_storage_as.as_deref());
        builder.self_closing_tag("view_column", &attrs);
    }
}
