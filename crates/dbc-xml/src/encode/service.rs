//! Service, property, and maxvar encoders.

use dbc_model::{
    AddProperty, AddService, CreateMaxvar, DropMaxvar, DropProperty, DropService, ModifyMaxvar,
    ModifyService, SetProperty,
};

use super::single;
use crate::builder::Attributes;

pub(crate) fn add_service(op: &AddService) -> Vec<String> {
    let attrs = Attributes::new()
        .set("servicename", &op.service_name)
        .set("description", &op.description)
        .set("classname", &op.class_name)
        .opt("singleton", op.singleton);
    single("add_service", &attrs)
}

pub(crate) fn modify_service(op: &ModifyService) -> Vec<String> {
    let attrs = Attributes::new()
        .set("servicename", &op.service_name)
        .opt("description", op.description.as_deref())
        .opt("classname", op.class_name.as_deref())
        .opt("singleton", op.singleton);
    single("modify_service", &attrs)
}

pub(crate) fn drop_service(op: &DropService) -> Vec<String> {
    single(
        "drop_service",
        &Attributes::new().set("servicename", &op.service_name),
    )
}

pub(crate) fn add_property(op: &AddProperty) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .set("description", &op.description)
        .set("maxtype", op.max_type)
        .set("secure_level", op.secure_level)
        .opt("default_value", op.default_value.as_deref())
        .opt("domainid", op.domain_id.as_deref())
        .opt("value", op.value.as_deref())
        .opt("live_refresh", op.live_refresh)
        .opt("required", op.required)
        .opt("online_changes", op.online_changes)
        .opt("user_defined", op.user_defined)
        .opt("encrypted", op.encrypted)
        .opt("masked", op.masked)
        .opt("global_only", op.global_only)
        .opt("instance_only", op.instance_only);
    single("add_property", &attrs)
}

pub(crate) fn set_property(op: &SetProperty) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .set("value", &op.value);
    single("set_property", &attrs)
}

pub(crate) fn drop_property(op: &DropProperty) -> Vec<String> {
    single("drop_property", &Attributes::new().set("name", &op.name))
}

pub(crate) fn create_maxvar(op: &CreateMaxvar) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .set("description", &op.description)
        .set("type", op.maxvar_type)
        .opt("default", op.default.as_deref());
    single("create_maxvar", &attrs)
}

pub(crate) fn modify_maxvar(op: &ModifyMaxvar) -> Vec<String> {
    let attrs = Attributes::new()
        .set("name", &op.name)
        .opt("description", op.description.as_deref())
        .opt("type", op.maxvar_type)
        .opt("default", op.default.as_deref());
    single("modify_maxvar", &attrs)
}

pub(crate) fn drop_maxvar(op: &DropMaxvar) -> Vec<String> {
    single("drop_maxvar", &Attributes::new().set("name", &op.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbc_model::{MaxType, MaxvarType, SecureLevel};

    #[test]
    fn test_add_property_required_enums_are_always_written() {
        let op = AddProperty {
            name: "mxe.widget.enabled".to_string(),
            description: "Enables widgets".to_string(),
            max_type: MaxType::Yorn,
            secure_level: SecureLevel::Public,
            default_value: Some("0".to_string()),
            live_refresh: Some(true),
            ..AddProperty::default()
        };
        assert_eq!(
            add_property(&op),
            vec![
                r#"<add_property name="mxe.widget.enabled" description="Enables widgets" maxtype="YORN" secure_level="PUBLIC" default_value="0" live_refresh="true" />"#
            ]
        );
    }

    #[test]
    fn test_maxvar_type_attribute() {
        let op = CreateMaxvar {
            name: "WIDGETSTART".to_string(),
            description: "First widget number".to_string(),
            maxvar_type: MaxvarType::Organization,
            default: None,
        };
        assert_eq!(
            create_maxvar(&op),
            vec![
                r#"<create_maxvar name="WIDGETSTART" description="First widget number" type="organization" />"#
            ]
        );
    }
}
