//! Service, property, and maxvar decoders.

use dbc_model::{
    AddProperty, AddService, CreateMaxvar, DropMaxvar, DropProperty, DropService, ModifyMaxvar,
    ModifyService, SetProperty,
};

use crate::tree::Element;

pub(crate) fn add_service(el: &Element) -> AddService {
    AddService {
        service_name: el.string("servicename"),
        description: el.string("description"),
        class_name: el.string("classname"),
        singleton: el.opt_bool("singleton"),
    }
}

pub(crate) fn modify_service(el: &Element) -> ModifyService {
    ModifyService {
        service_name: el.string("servicename"),
        description: el.opt_string("description"),
        class_name: el.opt_string("classname"),
        singleton: el.opt_bool("singleton"),
    }
}

pub(crate) fn drop_service(el: &Element) -> DropService {
    DropService {
        service_name: el.string("servicename"),
    }
}

pub(crate) fn add_property(el: &Element) -> AddProperty {
    AddProperty {
        name: el.string("name"),
        description: el.string("description"),
        max_type: el.enum_or_default("maxtype"),
        secure_level: el.enum_or_default("secure_level"),
        default_value: el.opt_string("default_value"),
        domain_id: el.opt_string("domainid"),
        value: el.opt_string("value"),
        live_refresh: el.opt_bool("live_refresh"),
        required: el.opt_bool("required"),
        online_changes: el.opt_bool("online_changes"),
        user_defined: el.opt_bool("user_defined"),
        encrypted: el.opt_bool("encrypted"),
        masked: el.opt_bool("masked"),
        global_only: el.opt_bool("global_only"),
        instance_only: el.opt_bool("instance_only"),
    }
}

pub(crate) fn set_property(el: &Element) -> SetProperty {
    SetProperty {
        name: el.string("name"),
        value: el.string("value"),
    }
}

pub(crate) fn drop_property(el: &Element) -> DropProperty {
    DropProperty {
        name: el.string("name"),
    }
}

pub(crate) fn create_maxvar(el: &Element) -> CreateMaxvar {
    CreateMaxvar {
        name: el.string("name"),
        description: el.string("description"),
        maxvar_type: el.enum_or_default("type"),
        default: el.opt_string("default"),
    }
}

pub(crate) fn modify_maxvar(el: &Element) -> ModifyMaxvar {
    ModifyMaxvar {
        name: el.string("name"),
        description: el.opt_string("description"),
        maxvar_type: el.opt_enum("type"),
        default: el.opt_string("default"),
    }
}

pub(crate) fn drop_maxvar(el: &Element) -> DropMaxvar {
    DropMaxvar {
        name: el.string("name"),
    }
}
