//! Domain decoders.

use dbc_model::{
    AddSynonyms, AlnValue, CrossoverField, CrossoverValue, DropDomain, ModifyDomainType,
    NumericValue, SpecifyAlnDomain, SpecifyCrossoverDomain, SpecifyNumericDomain,
    SpecifySynonymDomain, SpecifyTableDomain, SynonymValue, TableValue,
};

use crate::tree::Element;

pub(crate) fn specify_synonym_domain(el: &Element) -> SpecifySynonymDomain {
    SpecifySynonymDomain {
        domain_id: el.string("domainid"),
        description: el.opt_string("description"),
        max_type: el.enum_or_default("maxtype"),
        length: el.required_u32("length"),
        overwrite: el.opt_bool("overwrite"),
        internal: el.opt_bool("internal"),
        values: synonym_values(el),
    }
}

pub(crate) fn add_synonyms(el: &Element) -> AddSynonyms {
    AddSynonyms {
        domain_id: el.string("domainid"),
        values: synonym_values(el),
    }
}

pub(crate) fn specify_aln_domain(el: &Element) -> SpecifyAlnDomain {
    SpecifyAlnDomain {
        domain_id: el.string("domainid"),
        description: el.opt_string("description"),
        max_type: el.enum_or_default("maxtype"),
        length: el.required_u32("length"),
        overwrite: el.opt_bool("overwrite"),
        internal: el.opt_bool("internal"),
        values: el
            .children_named("alnvalueinfo")
            .map(|child| AlnValue {
                value: child.string("value"),
                description: child.opt_string("description"),
                site_id: child.opt_string("siteid"),
                org_id: child.opt_string("orgid"),
            })
            .collect(),
    }
}

pub(crate) fn specify_numeric_domain(el: &Element) -> SpecifyNumericDomain {
    SpecifyNumericDomain {
        domain_id: el.string("domainid"),
        description: el.opt_string("description"),
        max_type: el.enum_or_default("maxtype"),
        length: el.required_u32("length"),
        scale: el.opt_u32("scale"),
        overwrite: el.opt_bool("overwrite"),
        internal: el.opt_bool("internal"),
        values: el
            .children_named("numericvalueinfo")
            .map(|child| NumericValue {
                value: child.string("value"),
                description: child.opt_string("description"),
                site_id: child.opt_string("siteid"),
                org_id: child.opt_string("orgid"),
            })
            .collect(),
    }
}

pub(crate) fn specify_crossover_domain(el: &Element) -> SpecifyCrossoverDomain {
    SpecifyCrossoverDomain {
        domain_id: el.string("domainid"),
        description: el.opt_string("description"),
        overwrite: el.opt_bool("overwrite"),
        internal: el.opt_bool("internal"),
        values: el
            .children_named("crossovervalueinfo")
            .map(|child| CrossoverValue {
                object_name: child.string("objectname"),
                validation_where_clause: child.string("validationwhereclause"),
                list_where_clause: child.opt_string("listwhereclause"),
                error_resource_bundle: child.opt_string("errorresourcebundle"),
                error_key: child.opt_string("errorkey"),
                site_id: child.opt_string("siteid"),
                org_id: child.opt_string("orgid"),
                fields: child
                    .children_named("crossoverfields")
                    .map(crossover_field)
                    .collect(),
            })
            .collect(),
    }
}

pub(crate) fn specify_table_domain(el: &Element) -> SpecifyTableDomain {
    SpecifyTableDomain {
        domain_id: el.string("domainid"),
        description: el.opt_string("description"),
        overwrite: el.opt_bool("overwrite"),
        internal: el.opt_bool("internal"),
        values: el
            .children_named("tablevalueinfo")
            .map(|child| TableValue {
                object_name: child.string("objectname"),
                validation_where_clause: child.string("validationwhereclause"),
                list_where_clause: child.opt_string("listwhereclause"),
                error_resource_bundle: child.opt_string("errorresourcebundle"),
                error_key: child.opt_string("errorkey"),
                site_id: child.opt_string("siteid"),
                org_id: child.opt_string("orgid"),
            })
            .collect(),
    }
}

pub(crate) fn modify_domain_type(el: &Element) -> ModifyDomainType {
    ModifyDomainType {
        domain: el.string("domain"),
        max_type: el.enum_or_default("maxtype"),
        length: el.required_u32("length"),
        scale: el.opt_u32("scale"),
    }
}

pub(crate) fn drop_domain(el: &Element) -> DropDomain {
    DropDomain {
        domain_id: el.string("domainid"),
    }
}

fn synonym_values(el: &Element) -> Vec<SynonymValue> {
    el.children_named("synonymvalueinfo")
        .map(|child| SynonymValue {
            value: child.string("value"),
            max_value: child.string("maxvalue"),
            defaults: child.required_bool("defaults"),
            description: child.opt_string("description"),
            site_id: child.opt_string("siteid"),
            org_id: child.opt_string("orgid"),
        })
        .collect()
}

fn crossover_field(el: &Element) -> CrossoverField {
    CrossoverField {
        source_field: el.string("sourcefield"),
        dest_field: el.string("destfield"),
        copy_if_null: el.opt_bool("copyifnull"),
        copy_even_if_src_null: el.opt_bool("copyevenifsrcnull"),
        copy_only_if_dest_null: el.opt_bool("copyonlyifdestnull"),
        source_condition: el.opt_string("sourcecondition"),
        dest_condition: el.opt_string("destcondition"),
        sequence: el.opt_u32("sequence"),
    }
}
