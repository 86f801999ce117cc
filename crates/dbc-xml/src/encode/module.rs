//! Module encoders.

use dbc_model::{
    CreateModule, DropModule, ModifyModule, ModuleApp, ModuleMenuApp, ModuleMenuItem,
};

use super::{single, wrapped};
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn create_module(op: &CreateModule) -> Vec<String> {
    let attrs = Attributes::new()
        .set("module", &op.module)
        .set("description", &op.description)
        .opt("menu_position", op.menu_position.as_deref())
        .opt("menu_image", op.menu_image.as_deref());
    let mut menu = MarkupBuilder::new();
    for item in &op.items {
        match item {
            ModuleMenuItem::App(app) => menu_app(&mut menu, app),
            ModuleMenuItem::Header(header) => {
                let mut apps = MarkupBuilder::new();
                for app in &header.apps {
                    menu_app(&mut apps, app);
                }
                let header_attrs =
                    Attributes::new().set("headerdescription", &header.header_description);
                menu.element("module_menu_header", &header_attrs, apps.lines());
            }
        }
    }
    wrapped("create_module", &attrs, menu.lines())
}

pub(crate) fn modify_module(op: &ModifyModule) -> Vec<String> {
    let attrs = Attributes::new()
        .set("module", &op.module)
        .opt("description", op.description.as_deref())
        .opt("menu_position", op.menu_position.as_deref())
        .opt("menu_image", op.menu_image.as_deref());
    single("modify_module", &attrs)
}

pub(crate) fn drop_module(op: &DropModule) -> Vec<String> {
    single("drop_module", &Attributes::new().set("module", &op.module))
}

pub(crate) fn module_app(op: &ModuleApp) -> Vec<String> {
    let attrs = Attributes::new()
        .set("module", &op.module)
        .set("app", &op.app)
        .opt("menu_position", op.menu_position.as_deref())
        .opt("menu_image", op.menu_image.as_deref());
    single("module_app", &attrs)
}

fn menu_app(builder: &mut MarkupBuilder, app: &ModuleMenuApp) {
    let attrs = Attributes::new()
        .set("app", &app.app)
        .opt("image", app.image.as_deref());
    builder.self_closing_tag("module_menu_app", &attrs);
}
