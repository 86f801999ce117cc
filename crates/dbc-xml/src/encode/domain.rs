//! Domain encoders.

use dbc_model::{
    AddSynonyms, AlnValue, CrossoverField, CrossoverValue, DropDomain, ModifyDomainType,
    NumericValue, SpecifyAlnDomain, SpecifyCrossoverDomain, SpecifyNumericDomain,
    SpecifySynonymDomain, SpecifyTableDomain, SynonymValue, TableValue,
};

use super::{single, wrapped};
use crate::builder::{Attributes, MarkupBuilder};

pub(crate) fn specify_synonym_domain(op: &SpecifySynonymDomain) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domainid", &op.domain_id)
        .opt("description", op.description.as_deref())
        .set("maxtype", op.max_type)
        .set("length", op.length)
        .opt("overwrite", op.overwrite)
        .opt("internal", op.internal);
    wrapped("specify_synonym_domain", &attrs, &synonym_values(&op.values))
}

pub(crate) fn add_synonyms(op: &AddSynonyms) -> Vec<String> {
    let attrs = Attributes::new().set("domainid", &op.domain_id);
    wrapped("add_synonyms", &attrs, &synonym_values(&op.values))
}

pub(crate) fn specify_aln_domain(op: &SpecifyAlnDomain) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domainid", &op.domain_id)
        .opt("description", op.description.as_deref())
        .set("maxtype", op.max_type)
        .set("length", op.length)
        .opt("overwrite", op.overwrite)
        .opt("internal", op.internal);
    let mut values = MarkupBuilder::new();
    for AlnValue {
        value,
        description,
        site_id,
        org_id,
    } in &op.values
    {
        values.self_closing_tag(
            "alnvalueinfo",
            &value_info(value, description, site_id, org_id),
        );
    }
    wrapped("specify_aln_domain", &attrs, values.lines())
}

pub(crate) fn specify_numeric_domain(op: &SpecifyNumericDomain) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domainid", &op.domain_id)
        .opt("description", op.description.as_deref())
        .set("maxtype", op.max_type)
        .set("length", op.length)
        .opt("scale", op.scale)
        .opt("overwrite", op.overwrite)
        .opt("internal", op.internal);
    let mut values = MarkupBuilder::new();
    for NumericValue {
        value,
        description,
        site_id,
        org_id,
    } in &op.values
    {
        values.self_closing_tag(
            "numericvalueinfo",
            &value_info(value, description, site_id, org_id),
        );
    }
    wrapped("specify_numeric_domain", &attrs, values.lines())
}

pub(crate) fn specify_crossover_domain(op: &SpecifyCrossoverDomain) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domainid", &op.domain_id)
        .opt("description", op.description.as_deref())
        .opt("overwrite", op.overwrite)
        .opt("internal", op.internal);
    let mut values = MarkupBuilder::new();
    for value in &op.values {
        let fields = crossover_fields(&value.fields);
        values.element("crossovervalueinfo", &crossover_value(value), &fields);
    }
    wrapped("specify_crossover_domain", &attrs, values.lines())
}

pub(crate) fn specify_table_domain(op: &SpecifyTableDomain) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domainid", &op.domain_id)
        .opt("description", op.description.as_deref())
        .opt("overwrite", op.overwrite)
        .opt("internal", op.internal);
    let mut values = MarkupBuilder::new();
    for value in &op.values {
        values.self_closing_tag("tablevalueinfo", &table_value(value));
    }
    wrapped("specify_table_domain", &attrs, values.lines())
}

pub(crate) fn modify_domain_type(op: &ModifyDomainType) -> Vec<String> {
    let attrs = Attributes::new()
        .set("domain", &op.domain)
        .set("maxtype", op.max_type)
        .set("length", op.length)
        .opt("scale", op.scale);
    single("modify_domain_type", &attrs)
}

pub(crate) fn drop_domain(op: &DropDomain) -> Vec<String> {
    single("drop_domain", &Attributes::new().set("domainid", &op.domain_id))
}

fn synonym_values(values: &[SynonymValue]) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    for value in values {
        let attrs = Attributes::new()
            .set("value", &value.value)
            .set("maxvalue", &value.max_value)
            .set("defaults", value.defaults)
            .opt("description", value.description.as_deref())
            .opt("siteid", value.site_id.as_deref())
            .opt("orgid", value.org_id.as_deref());
        builder.self_closing_tag("synonymvalueinfo", &attrs);
    }
    builder.into_lines()
}

fn value_info(
    value: &str,
    description: &Option<String>,
    site_id: &Option<String>,
    org_id: &Option<String>,
) -> Attributes {
    Attributes::new()
        .set("value", value)
        .opt("description", description.as_deref())
        .opt("siteid", site_id.as_deref())
        .opt("orgid", org_id.as_deref())
}

fn crossover_value(value: &CrossoverValue) -> Attributes {
    Attributes::new()
        .set("objectname", &value.object_name)
        .set("validationwhereclause", &value.validation_where_clause)
        .opt("listwhereclause", value.list_where_clause.as_deref())
        .opt("errorresourcebundle", value.error_resource_bundle.as_deref())
        .opt("errorkey", value.error_key.as_deref())
        .opt("siteid", value.site_id.as_deref())
        .opt("orgid", value.org_id.as_deref())
}

fn table_value(value: &TableValue) -> Attributes {
    Attributes::new()
        .set("objectname", &value.object_name)
        .set("validationwhereclause", &value.validation_where_clause)
        .opt("listwhereclause", value.list_where_clause.as_deref())
        .opt("errorresourcebundle", value.error_resource_bundle.as_deref())
        .opt("errorkey", value.error_key.as_deref())
        .opt("siteid", value.site_id.as_deref())
        .opt("orgid", value.org_id.as_deref())
}

fn crossover_fields(fields: &[CrossoverField]) -> Vec<String> {
    let mut builder = MarkupBuilder::new();
    for field in fields {
        let attrs = Attributes::new()
            .set("sourcefield", &field.source_field)
            .set("destfield", &field.dest_field)
            .opt("copyifnull", field.copy_if_null)
            .opt("copyevenifsrcnull", field.copy_even_if_src_null)
            .opt("copyonlyifdestnull", field.copy_only_if_dest_null)
            .opt("sourcecondition", field.source_condition.as_deref())
            .opt("destcondition", field.dest_condition.as_deref())
            .opt("sequence", field.sequence);
        builder.self_closing_tag("crossoverfields", &attrs);
    }
    builder.into_lines()
}
