//! View decoders.

use dbc_model::{
    AddViewAttribute, AutoSelect, CustomSelect, DefineView, DropView, DropViewAttribute,
    ModifyView, ModifyViewAttributes, ViewColumn, ViewSelection,
};

use crate::tree::Element;

pub(crate) fn define_view(el: &Element) -> DefineView {
    DefineView {
        name: el.string("name"),
        description: el.string("description"),
        service: el.string("service"),
        class_name: el.string("classname"),
        extends: el.opt_string("extends"),
        table_type: el.opt_enum("type"),
        main_object: el.opt_bool("mainobject"),
        internal: el.opt_bool("internal"),
        selection: selection(el),
    }
}

/// A `custom` child wins over `autoselect`; neither yields an empty autoselect.
fn selection(el: &Element) -> ViewSelection {
    if let Some(custom) = el.child("custom") {
        return ViewSelection::Custom(CustomSelect {
            select: custom.child_text("view_select").unwrap_or_default(),
            from: custom.child_text("view_from").unwrap_or_default(),
            where_clause: custom.child_text("view_where"),
            columns: view_columns(custom),
        });
    }
    let auto = el
        .child("autoselect")
        .map(|auto| AutoSelect {
            tables: auto
                .children_named("table")
                .map(|table| table.string("name"))
                .collect(),
            columns: view_columns(auto),
        })
        .unwrap_or_default();
    ViewSelection::AutoSelect(auto)
}

pub(crate) fn modify_view(el: &Element) -> ModifyView {
    ModifyView {
        name: el.string("name"),
        description: el.opt_string("description"),
        service: el.opt_string("service"),
        class_name: el.opt_string("classname"),
        table_type: el.opt_enum("type"),
        select: el.child_text("view_select"),
        from: el.child_text("view_from"),
        where_clause: el.child_text("view_where"),
    }
}

pub(crate) fn drop_view(el: &Element) -> DropView {
    DropView {
        name: el.string("name"),
    }
}

pub(crate) fn add_view_attribute(el: &Element) -> AddViewAttribute {
    AddViewAttribute {
        view: el.string("view"),
        attribute: el.string("attribute"),
        table: el.string("table"),
        view_column: el.opt_string("view_column"),
        same_storage_as: el.opt_string("same_storage_as"),
    }
}

pub(crate) fn drop_view_attribute(el: &Element) -> DropViewAttribute {
    DropViewAttribute {
        view: el.string("view"),
        attribute: el.string("attribute"),
    }
}

pub(crate) fn modify_view_attributes(el: &Element) -> ModifyViewAttributes {
    ModifyViewAttributes {
        view: el.string("view"),
        columns: view_columns(el),
    }
}

fn view_columns(el: &Element) -> Vec<ViewColumn> {
    el.children_named("view_column")
        .map(|child| ViewColumn {
            table: child.string("table"),
            column: child.string("column"),
            view_column: child.string("view_column"),
            same_storage_as: child.opt_string("same_storage_as"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_document;

    #[test]
    fn test_custom_view_text_is_unescaped() {
        let el = parse_document(
            r#"<define_view name="V" description="d" service="S" classname="C">
                 <custom>
                   <view_select>select *</view_select>
                   <view_from>a, b</view_from>
                   <view_where>a.x &lt; b.y</view_where>
                 </custom>
               </define_view>"#,
        )
        .unwrap()
        .unwrap();
        let ViewSelection::Custom(custom) = define_view(&el).selection else {
            panic!("expected a custom view");
        };
        assert_eq!(custom.select, "select *");
        assert_eq!(custom.where_clause.as_deref(), Some("a.x < b.y"));
    }

    #[test]
    fn test_modify_view_distinguishes_absent_text() {
        let el = parse_document(r#"<modify_view name="V"><view_from></view_from></modify_view>"#)
            .unwrap()
            .unwrap();
        let op = modify_view(&el);
        assert_eq!(op.select, None);
        assert_eq!(op.from.as_deref(), Some(""));
    }
}
