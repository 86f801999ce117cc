//! Per-operation encoders.
//!
//! Every encoder is a pure function from one model value to its depth-zero
//! lines. The serializer owns indentation.

mod application;
mod data;
mod domain;
mod index;
mod module;
mod relationship;
mod service;
mod table;
mod view;

use dbc_model::{Check, Operation};

use crate::builder::{Attributes, MarkupBuilder};

/// Renders one operation as depth-zero lines.
pub fn encode_operation(operation: &Operation) -> Vec<String> {
    match operation {
        Operation::DefineTable(op) => table::define_table(op),
        Operation::ModifyTable(op) => table::modify_table(op),
        Operation::DropTable(op) => table::drop_table(op),
        Operation::AddAttributes(op) => table::add_attributes(op),
        Operation::ModifyAttribute(op) => table::modify_attribute(op),
        Operation::DropAttributes(op) => table::drop_attributes(op),
        Operation::CreateRelationship(op) => relationship::create_relationship(op),
        Operation::ModifyRelationship(op) => relationship::modify_relationship(op),
        Operation::DropRelationship(op) => relationship::drop_relationship(op),
        Operation::SpecifySynonymDomain(op) => domain::specify_synonym_domain(op),
        Operation::AddSynonyms(op) => domain::add_synonyms(op),
        Operation::SpecifyAlnDomain(op) => domain::specify_aln_domain(op),
        Operation::SpecifyNumericDomain(op) => domain::specify_numeric_domain(op),
        Operation::SpecifyCrossoverDomain(op) => domain::specify_crossover_domain(op),
        Operation::SpecifyTableDomain(op) => domain::specify_table_domain(op),
        Operation::ModifyDomainType(op) => domain::modify_domain_type(op),
        Operation::DropDomain(op) => domain::drop_domain(op),
        Operation::SpecifyIndex(op) => index::specify_index(op),
        Operation::DropIndex(op) => index::drop_index(op),
        Operation::CreateApp(op) => application::create_app(op),
        Operation::ModifyApp(op) => application::modify_app(op),
        Operation::DropApp(op) => application::drop_app(op),
        Operation::CreateAppMenu(op) => application::create_app_menu(op),
        Operation::AdditionalAppMenu(op) => application::additional_app_menu(op),
        Operation::AddSigOption(op) => application::add_sigoption(op),
        Operation::DropSigOption(op) => application::drop_sigoption(op),
        Operation::CreateModule(op) => module::create_module(op),
        Operation::ModifyModule(op) => module::modify_module(op),
        Operation::DropModule(op) => module::drop_module(op),
        Operation::ModuleApp(op) => module::module_app(op),
        Operation::DefineView(op) => view::define_view(op),
        Operation::ModifyView(op) => view::modify_view(op),
        Operation::DropView(op) => view::drop_view(op),
        Operation::AddViewAttribute(op) => view::add_view_attribute(op),
        Operation::DropViewAttribute(op) => view::drop_view_attribute(op),
        Operation::ModifyViewAttributes(op) => view::modify_view_attributes(op),
        Operation::AddService(op) => service::add_service(op),
        Operation::ModifyService(op) => service::modify_service(op),
        Operation::DropService(op) => service::drop_service(op),
        Operation::AddProperty(op) => service::add_property(op),
        Operation::SetProperty(op) => service::set_property(op),
        Operation::DropProperty(op) => service::drop_property(op),
        Operation::CreateMaxvar(op) => service::create_maxvar(op),
        Operation::ModifyMaxvar(op) => service::modify_maxvar(op),
        Operation::DropMaxvar(op) => service::drop_maxvar(op),
        Operation::Insert(op) => data::insert(op),
        Operation::Freeform(op) => data::freeform(op),
    }
}

/// Renders a check guard with its queries.
///
/// A check is always written in open/close form, even without queries.
pub fn encode_check(check: &Check) -> Vec<String> {
    let attrs = Attributes::new()
        .opt("tag", check.tag.as_deref())
        .opt("group", check.group.as_deref())
        .opt("key", check.key.as_deref())
        .opt("default", check.default.as_deref())
        .opt("skip_script", check.skip_script);
    let mut builder = MarkupBuilder::new();
    builder.open_tag("check", &attrs);
    for query in &check.queries {
        builder.self_closing_tag("check_query", &Attributes::new().set("query", &query.query));
    }
    builder.close_tag("check");
    builder.into_lines()
}

fn single(tag: &str, attrs: &Attributes) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    builder.self_closing_tag(tag, attrs);
    builder.into_lines()
}

fn wrapped(tag: &str, attrs: &Attributes, children: &[String]) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    builder.element(tag, attrs, children);
    builder.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbc_model::{CheckQuery, DropTable};

    #[test]
    fn test_check_optional_attributes_in_order() {
        let check = Check {
            tag: Some("WIDGET".to_string()),
            key: Some("exists".to_string()),
            skip_script: Some(false),
            queries: vec![CheckQuery::new("select 1 from widget where 1=0")],
            ..Check::default()
        };
        assert_eq!(
            encode_check(&check),
            vec![
                r#"<check tag="WIDGET" key="exists" skip_script="false">"#,
                r#"  <check_query query="select 1 from widget where 1=0" />"#,
                "</check>",
            ]
        );
    }

    #[test]
    fn test_check_without_skip_script_omits_attribute() {
        let lines = encode_check(&Check::with_query("q"));
        assert_eq!(lines[0], "<check>");
    }

    #[test]
    fn test_operation_fragment_starts_with_its_tag() {
        let op = Operation::from(DropTable {
            object: "OLDOBJ".to_string(),
        });
        let lines = encode_operation(&op);
        assert!(lines[0].starts_with(&format!("<{}", op.tag())));
    }
}
