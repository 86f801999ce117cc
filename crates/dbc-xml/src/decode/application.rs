//! Application, menu, and signature option decoders.

use dbc_model::{
    AddSigOption, AdditionalAppMenu, AppMenuItem, CreateApp, CreateAppMenu, DropApp,
    DropSigOption, MenuHeader, MenuHeaderItem, MenuOption, MenuSeparator, ModifyApp,
};

use crate::tree::Element;

pub(crate) fn create_app(el: &Element) -> CreateApp {
    CreateApp {
        app: el.string("app"),
        description: el.string("description"),
        main_tbname: el.opt_string("maintbname"),
        restrictions: el.opt_string("restrictions"),
        order_by: el.opt_string("orderby"),
        original_app: el.opt_string("originalapp"),
        is_mobile: el.opt_bool("ismobile"),
    }
}

pub(crate) fn modify_app(el: &Element) -> ModifyApp {
    ModifyApp {
        app: el.string("app"),
        description: el.opt_string("description"),
        main_tbname: el.opt_string("maintbname"),
        restrictions: el.opt_string("restrictions"),
        order_by: el.opt_string("orderby"),
        is_mobile: el.opt_bool("ismobile"),
    }
}

pub(crate) fn drop_app(el: &Element) -> DropApp {
    DropApp {
        app: el.string("app"),
    }
}

pub(crate) fn create_app_menu(el: &Element) -> CreateAppMenu {
    CreateAppMenu {
        app: el.string("app"),
        menu_type: el.enum_or_default("type"),
        items: menu_items(el),
    }
}

pub(crate) fn additional_app_menu(el: &Element) -> AdditionalAppMenu {
    AdditionalAppMenu {
        app: el.string("app"),
        menu_type: el.enum_or_default("type"),
        items: menu_items(el),
    }
}

pub(crate) fn add_sigoption(el: &Element) -> AddSigOption {
    AddSigOption {
        app: el.string("app"),
        option_name: el.string("optionname"),
        description: el.string("description"),
        esig_enabled: el.opt_bool("esigenabled"),
        visible: el.opt_bool("visible"),
        also_grants: el.opt_string("alsogrants"),
        also_revokes: el.opt_string("alsorevokes"),
        prerequisite: el.opt_string("prerequisite"),
        lang_code: el.opt_string("langcode"),
    }
}

pub(crate) fn drop_sigoption(el: &Element) -> DropSigOption {
    DropSigOption {
        app: el.string("app"),
        option_name: el.string("optionname"),
    }
}

fn menu_items(el: &Element) -> Vec<AppMenuItem> {
    el.children()
        .filter_map(|child| match child.name.as_str() {
            "menu_option" => Some(AppMenuItem::Option(menu_option(child))),
            "menu_separator" => Some(AppMenuItem::Separator(menu_separator(child))),
            "menu_header" => Some(AppMenuItem::Header(menu_header(child))),
            _ => None,
        })
        .collect()
}

fn menu_header(el: &Element) -> MenuHeader {
    MenuHeader {
        header_description: el.string("headerdescription"),
        image: el.opt_string("image"),
        tab_display: el.opt_enum("tabdisplay"),
        position: el.opt_u32("position"),
        sub_position: el.opt_u32("subposition"),
        items: el
            .children()
            .filter_map(|child| match child.name.as_str() {
                "menu_option" => Some(MenuHeaderItem::Option(menu_option(child))),
                "menu_separator" => Some(MenuHeaderItem::Separator(menu_separator(child))),
                _ => None,
            })
            .collect(),
    }
}

fn menu_option(el: &Element) -> MenuOption {
    MenuOption {
        option: el.string("option"),
        description: el.opt_string("description"),
        image: el.opt_string("image"),
        access_key: el.opt_string("accesskey"),
        tab_display: el.opt_enum("tabdisplay"),
        position: el.opt_u32("position"),
        sub_position: el.opt_u32("subposition"),
    }
}

fn menu_separator(el: &Element) -> MenuSeparator {
    MenuSeparator {
        tab_display: el.opt_enum("tabdisplay"),
        position: el.opt_u32("position"),
        sub_position: el.opt_u32("subposition"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_document;
    use dbc_model::{MenuType, TabDisplay};

    #[test]
    fn test_menu_items_keep_document_order_and_nesting() {
        let el = parse_document(
            r#"<create_app_menu app="WIDGET" type="apptool">
                 <menu_separator />
                 <menu_header headerdescription="More">
                   <menu_option option="A" tabdisplay="MAIN" />
                   <menu_separator position="5" />
                   <menu_header headerdescription="ignored" />
                 </menu_header>
                 <menu_option option="B" />
               </create_app_menu>"#,
        )
        .unwrap()
        .unwrap();
        let op = create_app_menu(&el);
        assert_eq!(op.menu_type, MenuType::AppTool);
        assert_eq!(op.items.len(), 3);
        assert!(matches!(op.items[0], AppMenuItem::Separator(_)));
        let AppMenuItem::Header(header) = &op.items[1] else {
            panic!("expected a header");
        };
        assert_eq!(header.items.len(), 2);
        let MenuHeaderItem::Option(option) = &header.items[0] else {
            panic!("expected an option");
        };
        assert_eq!(option.tab_display, Some(TabDisplay::Main));
        assert!(matches!(&op.items[2], AppMenuItem::Option(option) if option.option == "B"));
    }
}
