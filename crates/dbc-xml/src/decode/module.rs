//! Module decoders.

use dbc_model::{
    CreateModule, DropModule, ModifyModule, ModuleApp, ModuleMenuApp, ModuleMenuHeader,
    ModuleMenuItem,
};

use crate::tree::Element;

pub(crate) fn create_module(el: &Element) -> CreateModule {
    CreateModule {
        module: el.string("module"),
        description: el.string("description"),
        menu_position: el.opt_string("menu_position"),
        menu_image: el.opt_string("menu_image"),
        items: el
            .children()
            .filter_map(|child| match child.name.as_str() {
                "module_menu_app" => Some(ModuleMenuItem::App(menu_app(child))),
                "module_menu_header" => Some(ModuleMenuItem::Header(ModuleMenuHeader {
                    header_description: child.string("headerdescription"),
                    apps: child.children_named("module_menu_app").map(menu_app).collect(),
                })),
                _ => None,
            })
            .collect(),
    }
}

pub(crate) fn modify_module(el: &Element) -> ModifyModule {
    ModifyModule {
        module: el.string("module"),
        description: el.opt_string("description"),
        menu_position: el.opt_string("menu_position"),
        menu_image: el.opt_string("menu_image"),
    }
}

pub(crate) fn drop_module(el: &Element) -> DropModule {
    DropModule {
        module: el.string("module"),
    }
}

pub(crate) fn module_app(el: &Element) -> ModuleApp {
    ModuleApp {
        module: el.string("module"),
        app: el.string("app"),
        menu_position: el.opt_string("menu_position"),
        menu_image: el.opt_string("menu_image"),
    }
}

fn menu_app(el: &Element) -> ModuleMenuApp {
    ModuleMenuApp {
        app: el.string("app"),
        image: el.opt_string("image"),
    }
}
