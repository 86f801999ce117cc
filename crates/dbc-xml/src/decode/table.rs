//! Table and attribute decoders.

use dbc_model::{
    AddAttributes, AttributeDefinition, AttributeProperties, DefineTable, DropAttributes,
    DropTable, ModifyAttribute, ModifyTable,
};

use crate::tree::Element;

pub(crate) fn define_table(el: &Element) -> DefineTable {
    DefineTable {
        object: el.string("object"),
        description: el.string("description"),
        service: el.string("service"),
        class_name: el.string("classname"),
        table_type: el.enum_or_default("type"),
        storage_type: el.opt_enum("storagetype"),
        persistent: el.opt_bool("persistent"),
        primary_key: el.opt_string("primarykey"),
        main_object: el.opt_bool("mainobject"),
        internal: el.opt_bool("internal"),
        trig_root: el.opt_string("trigroot"),
        text_direction: el.opt_string("textdirection"),
        attributes: attribute_definitions(el),
    }
}

pub(crate) fn modify_table(el: &Element) -> ModifyTable {
    ModifyTable {
        object: el.string("object"),
        description: el.opt_string("description"),
        service: el.opt_string("service"),
        class_name: el.opt_string("classname"),
        table_type: el.opt_enum("type"),
        storage_type: el.opt_enum("storagetype"),
        primary_key: el.opt_string("primarykey"),
        internal: el.opt_bool("internal"),
        trig_root: el.opt_string("trigroot"),
        text_direction: el.opt_string("textdirection"),
    }
}

pub(crate) fn drop_table(el: &Element) -> DropTable {
    DropTable {
        object: el.string("object"),
    }
}

pub(crate) fn add_attributes(el: &Element) -> AddAttributes {
    AddAttributes {
        object: el.string("object"),
        attributes: attribute_definitions(el),
    }
}

pub(crate) fn modify_attribute(el: &Element) -> ModifyAttribute {
    ModifyAttribute {
        object: el.string("object"),
        attribute: el.string("attribute"),
        title: el.opt_string("title"),
        remarks: el.opt_string("remarks"),
        properties: properties(el),
    }
}

pub(crate) fn drop_attributes(el: &Element) -> DropAttributes {
    DropAttributes {
        object: el.string("object"),
        attributes: el
            .children_named("attrname")
            .map(|child| child.string("name"))
            .collect(),
    }
}

fn attribute_definitions(el: &Element) -> Vec<AttributeDefinition> {
    el.children_named("attrdef")
        .map(|child| AttributeDefinition {
            attribute: child.string("attribute"),
            title: child.string("title"),
            remarks: child.string("remarks"),
            properties: properties(child),
        })
        .collect()
}

fn properties(el: &Element) -> AttributeProperties {
    AttributeProperties {
        max_type: el.opt_enum("maxtype"),
        length: el.opt_u32("length"),
        scale: el.opt_u32("scale"),
        persistent: el.opt_bool("persistent"),
        has_long_desc: el.opt_bool("haslongdesc"),
        required: el.opt_bool("required"),
        user_defined: el.opt_bool("userdefined"),
        domain: el.opt_string("domain"),
        class_name: el.opt_string("classname"),
        default_value: el.opt_string("defaultvalue"),
        same_as_object: el.opt_string("sameasobject"),
        same_as_attribute: el.opt_string("sameasattribute"),
        must_be: el.opt_bool("mustbe"),
        is_positive: el.opt_bool("ispositive"),
        auto_key: el.opt_string("autokey"),
        can_auto_num: el.opt_bool("canautonum"),
        search_type: el.opt_enum("searchtype"),
        localizable: el.opt_bool("localizable"),
        domain_link: el.opt_string("domainlink"),
        restricted: el.opt_bool("restricted"),
        exclude_tenants: el.opt_string("excludetenants"),
    }
}
