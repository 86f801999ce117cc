//! Per-operation decoders.
//!
//! Decoders never fail. Missing required attributes read as empty or zero,
//! missing optional attributes stay absent, and unknown child elements are
//! ignored.

mod application;
mod data;
mod domain;
mod index;
mod module;
mod relationship;
mod service;
mod table;
mod view;

use dbc_model::{Check, CheckQuery, Operation, OperationKind};

use crate::tree::Element;

/// Decodes one `statements` child, or `None` when its tag is not an operation.
pub fn decode_operation(el: &Element) -> Option<Operation> {
    let kind = OperationKind::from_tag(&el.name)?;
    let operation = match kind {
        OperationKind::DefineTable => table::define_table(el).into(),
        OperationKind::ModifyTable => table::modify_table(el).into(),
        OperationKind::DropTable => table::drop_table(el).into(),
        OperationKind::AddAttributes => table::add_attributes(el).into(),
        OperationKind::ModifyAttribute => table::modify_attribute(el).into(),
        OperationKind::DropAttributes => table::drop_attributes(el).into(),
        OperationKind::CreateRelationship => relationship::create_relationship(el).into(),
        OperationKind::ModifyRelationship => relationship::modify_relationship(el).into(),
        OperationKind::DropRelationship => relationship::drop_relationship(el).into(),
        OperationKind::SpecifySynonymDomain => domain::specify_synonym_domain(el).into(),
        OperationKind::AddSynonyms => domain::add_synonyms(el).into(),
        OperationKind::SpecifyAlnDomain => domain::specify_aln_domain(el).into(),
        OperationKind::SpecifyNumericDomain => domain::specify_numeric_domain(el).into(),
        OperationKind::SpecifyCrossoverDomain => domain::specify_crossover_domain(el).into(),
        OperationKind::SpecifyTableDomain => domain::specify_table_domain(el).into(),
        OperationKind::ModifyDomainType => domain::modify_domain_type(el).into(),
        OperationKind::DropDomain => domain::drop_domain(el).into(),
        OperationKind::SpecifyIndex => index::specify_index(el).into(),
        OperationKind::DropIndex => index::drop_index(el).into(),
        OperationKind::CreateApp => application::create_app(el).into(),
        OperationKind::ModifyApp => application::modify_app(el).into(),
        OperationKind::DropApp => application::drop_app(el).into(),
        OperationKind::CreateAppMenu => application::create_app_menu(el).into(),
        OperationKind::AdditionalAppMenu => application::additional_app_menu(el).into(),
        OperationKind::AddSigOption => application::add_sigoption(el).into(),
        OperationKind::DropSigOption => application::drop_sigoption(el).into(),
        OperationKind::CreateModule => module::create_module(el).into(),
        OperationKind::ModifyModule => module::modify_module(el).into(),
        OperationKind::DropModule => module::drop_module(el).into(),
        OperationKind::ModuleApp => module::module_app(el).into(),
        OperationKind::DefineView => view::define_view(el).into(),
        OperationKind::ModifyView => view::modify_view(el).into(),
        OperationKind::DropView => view::drop_view(el).into(),
        OperationKind::AddViewAttribute => view::add_view_attribute(el).into(),
        OperationKind::DropViewAttribute => view::drop_view_attribute(el).into(),
        OperationKind::ModifyViewAttributes => view::modify_view_attributes(el).into(),
        OperationKind::AddService => service::add_service(el).into(),
        OperationKind::ModifyService => service::modify_service(el).into(),
        OperationKind::DropService => service::drop_service(el).into(),
        OperationKind::AddProperty => service::add_property(el).into(),
        OperationKind::SetProperty => service::set_property(el).into(),
        OperationKind::DropProperty => service::drop_property(el).into(),
        OperationKind::CreateMaxvar => service::create_maxvar(el).into(),
        OperationKind::ModifyMaxvar => service::modify_maxvar(el).into(),
        OperationKind::DropMaxvar => service::drop_maxvar(el).into(),
        OperationKind::Insert => data::insert(el).into(),
        OperationKind::Freeform => data::freeform(el).into(),
    };
    Some(operation)
}

/// Decodes a `check` element and its direct `check_query` children.
pub fn decode_check(el: &Element) -> Check {
    Check {
        tag: el.opt_string("tag"),
        group: el.opt_string("group"),
        key: el.opt_string("key"),
        default: el.opt_string("default"),
        skip_script: el.opt_bool("skip_script"),
        queries: el
            .children_named("check_query")
            .map(|query| CheckQuery {
                query: query.string("query"),
            })
            .collect(),
    }
}
