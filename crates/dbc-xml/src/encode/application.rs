//! Application, menu, and signature option encoders.

use dbc_model::{
    AddSigOption, AdditionalAppMenu, AppMenuItem, CreateApp, CreateAppMenu, DropApp,
    DropSigOption, MenuHeader, MenuHeaderItem, MenuOption, MenuSeparator, MenuType, ModifyApp,
};

use super::{single, wrapped};
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn create_app(op: &CreateApp) -> Vec<String> {
    let attrs = Attributes::new()
        .set("app", &op.app)
        .set("description", &op.description)
        .opt("maintbname", op.main_tbname.as_deref())
        .opt("restrictions", op.restrictions.as_deref())
        .opt("orderby", op.order_by.as_deref())
        .opt("originalapp", op.original_app.as_deref())
        .opt("ismobile", op.is_mobile);
    single("create_app", &attrs)
}

pub(crate) fn modify_app(op: &ModifyApp) -> Vec<String> {
    let attrs = Attributes::new()
        .set("app", &op.app)
        .opt("description", op.description.as_deref())
        .opt("maintbname", op.main_tbname.as_deref())
        .opt("restrictions", op.restrictions.as_deref())
        .opt("orderby", op.order_by.as_deref())
        .opt("ismobile", op.is_mobile);
    single("modify_app", &attrs)
}

pub(crate) fn drop_app(op: &DropApp) -> Vec<String> {
    single("drop_app", &Attributes::new().set("app", &op.app))
}

pub(crate) fn create_app_menu(op: &CreateAppMenu) -> Vec<String> {
    app_menu("create_app_menu", &op.app, op.menu_type, &op.items)
}

pub(crate) fn additional_app_menu(op: &AdditionalAppMenu) -> Vec<String> {
    app_menu("additional_app_menu", &op.app, op.menu_type, &op.items)
}

pub(crate) fn add_sigoption(op: &AddSigOption) -> Vec<String> {
    let attrs = Attributes::new()
        .set("app", &op.app)
        .set("optionname", &op.option_name)
        .set("description", &op.description)
        .opt("esigenabled", op.esig_enabled)
        .opt("visible", op.visible)
        .opt("alsogrants", op.also_grants.as_deref())
        .opt("alsorevokes", op.also_revokes.as_deref())
        .opt("prerequisite", op.prerequisite.as_deref())
        .opt("langcode", op.lang_code.as_deref());
    single("add_sigoption", &attrs)
}

pub(crate) fn drop_sigoption(op: &DropSigOption) -> Vec<String> {
    let attrs = Attributes::new()
        .set("app", &op.app)
        .set("optionname", &op.option_name);
    single("drop_sigoption", &attrs)
}

fn app_menu(tag: &str, app: &str, menu_type: MenuType, items: &[AppMenuItem]) -> Vec<String> {
    let attrs = Attributes::new().set("app", app).set("type", menu_type);
    let mut builder = MarkupBuilder::new();
    for item in items {
        match item {
            AppMenuItem::Option(option) => menu_option(&mut builder, option),
            AppMenuItem::Separator(separator) => menu_separator(&mut builder, separator),
            AppMenuItem::Header(header) => menu_header(&mut builder, header),
        }
    }
    wrapped(tag, &attrs, builder.lines())
}

fn menu_option(builder: &mut MarkupBuilder, option: &MenuOption) {
    let attrs = Attributes::new()
        .set("option", &option.option)
        .opt("description", option.description.as_deref())
        .opt("image", option.image.as_deref())
        .opt("accesskey", option.access_key.as_deref())
        .opt("tabdisplay", option.tab_display)
        .opt("position", option.position)
        .opt("subposition", option.sub_position);
    builder.self_closing_tag("menu_option", &attrs);
}

fn menu_separator(builder: &mut MarkupBuilder, separator: &MenuSeparator) {
    let attrs = Attributes::new()
        .opt("tabdisplay", separator.tab_display)
        .opt("position", separator.position)
        .opt("subposition", separator.sub_position);
    builder.self_closing_tag("menu_separator", &attrs);
}

fn menu_header(builder: &mut MarkupBuilder, header: &MenuHeader) {
    let attrs = Attributes::new()
        .set("headerdescription", &header.header_description)
        .opt("image", header.image.as_deref())
        .opt("tabdisplay", header.tab_display)
        .opt("position", header.position)
        .opt("subposition", header.sub_position);
    let mut children = MarkupBuilder::new();
    for item in &header.items {
        match item {
            MenuHeaderItem::Option(option) => menu_option(&mut children, option),
            MenuHeaderItem::Separator(separator) => menu_separator(&mut children, separator),
        }
    }
    builder.element("menu_header", &attrs, children.lines());
}
