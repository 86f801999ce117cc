//! Table and attribute encoders.

use dbc_model::{
    AddAttributes, AttributeDefinition, AttributeProperties, DefineTable, DropAttributes,
    DropTable, ModifyAttribute, ModifyTable,
};

use super::{single, wrapped};
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn define_table(op: &DefineTable) -> Vec<String> {
    let attrs = Attributes::new()
        .set("object", &op.object)
        .set("description", &op.description)
        .set("service", &op.service)
        .set("classname", &op.class_name)
        .set("type", op.table_type)
        .opt("storagetype", op.storage_type)
        .opt("persistent", op.persistent)
        .opt("primarykey", op.primary_key.as_deref())
        .opt("mainobject", op.main_object)
        .opt("internal", op.internal)
        .opt("trigroot", op.trig_root.as_deref())
        .opt("textdirection", op.text_direction.as_deref());
    wrapped("define_table", &attrs, &attribute_definitions(&op.attributes))
}

pub(crate) fn modify_table(op: &ModifyTable) -> Vec<String> {
    let attrs = Attributes::new()
        .set("object", &op.object)
        .opt("description", op.description.as_deref())
        .opt("service", op.service.as_deref())
        .opt("classname", op.class_name.as_deref())
        .opt("type", op.table_type)
        .opt("storagetype", op.storage_type)
        .opt("primarykey", op.primary_key.as_deref())
        .opt("internal", op.internal)
        .opt("trigroot", op.trig_root.as_deref())
        .opt("textdirection", op.text_direction.as_deref());
    single("modify_table", &attrs)
}

pub(crate) fn drop_table(op: &DropTable) -> Vec<String> {
    single("drop_table", &Attributes::new().set("object", &op.object))
}

pub(crate) fn add_attributes(op: &AddAttributes) -> Vec<String> {
    let attrs = Attributes::new().set("object", &op.object);
    wrapped("add_attributes", &attrs, &attribute_definitions(&op.attributes))
}

pub(crate) fn modify_attribute(op: &ModifyAttribute) -> Vec<String> {
    let mut attrs = Attributes::new()
        .set("object", &op.object)
        .set("attribute", &op.attribute)
        .opt("title", op.title.as_deref())
        .opt("remarks", op.remarks.as_deref());
    push_properties(&mut attrs, &op.properties);
    single("modify_attribute", &attrs)
}

pub(crate) fn drop_attributes(op: &DropAttributes) -> Vec<String> {
    let attrs = Attributes::new().set("object", &op.object);
    let mut names = MarkupBuilder::new();
    for name in &op.attributes {
        names.self_closing_tag("attrname", &Attributes::new().set("name", name));
    }
    wrapped("drop_attributes", &attrs, names.lines())
}

fn attribute_definitions(definitions: &[AttributeDefinition]) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    for definition in definitions {
        let mut attrs = Attributes::new()
            .set("attribute", &definition.attribute)
            .set("title", &definition.title)
            .set("remarks", &definition.remarks);
        push_properties(&mut attrs, &definition.properties);
        builder.self_closing_tag("attrdef", &attrs);
    }
    builder.into_lines()
}

/// Appends the optional attribute properties in wire order.
fn push_properties(attrs: &mut Attributes, props: &AttributeProperties) {
    attrs.push_opt("maxtype", props.max_type);
    attrs.push_opt("length", props.length);
    attrs.push_opt("scale", props.scale);
    attrs.push_opt("persistent", props.persistent);
    attrs.push_opt("haslongdesc", props.has_long_desc);
    attrs.push_opt("required", props.required);
    attrs.push_opt("userdefined", props.user_defined);
    attrs.push_opt("domain", props.domain.as_deref());
    attrs.push_opt("classname", props.class_name.as_deref());
    attrs.push_opt("defaultvalue", props.default_value.as_deref());
    attrs.push_opt("sameasobject", props.same_as_object.as_deref());
    attrs.push_opt("sameasattribute", props.same_as_attribute.as_deref());
    attrs.push_opt("mustbe", props.must_be);
    attrs.push_opt("ispositive", props.is_positive);
    attrs.push_opt("autokey", props.auto_key.as_deref());
    attrs.push_opt("canautonum", props.can_auto_num);
    attrs.push_opt("searchtype", props.search_type);
    attrs.push_opt("localizable", props.localizable);
    attrs.push_opt("domainlink", props.domain_link.as_deref());
    attrs.push_opt("restricted", props.restricted);
    attrs.push_opt("excludetenants", props.exclude_tenants.as_deref());
}
