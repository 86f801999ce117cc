//! Per-operation required-field checklists.
//!
//! Messages name the wire attribute (`classname`, not `class_name`) so they
//! line up with what a script author sees in the document.

use dbc_model::{
    AddAttributes, CreateRelationship, DefineTable, DefineView, Freeform, Insert, Operation,
    SpecifyIndex, ViewSelection,
};

use crate::required::Required;

/// Returns one message per missing required field or empty required list.
///
/// An empty result means the operation is structurally complete.
pub fn validate_operation(operation: &Operation) -> Vec<String> {
    let required = Required::new();
    let required = match operation {
        Operation::DefineTable(op) => define_table(required, op),
        Operation::ModifyTable(op) => required.field("object", &op.object),
        Operation::DropTable(op) => required.field("object", &op.object),
        Operation::AddAttributes(op) => add_attributes(required, op),
        Operation::ModifyAttribute(op) => required
            .field("object", &op.object)
            .field("attribute", &op.attribute),
        Operation::DropAttributes(op) => required
            .field("object", &op.object)
            .list("attribute", &op.attributes),

        Operation::CreateRelationship(op) => create_relationship(required, op),
        Operation::ModifyRelationship(op) => required
            .field("parent", &op.parent)
            .field("name", &op.name),
        Operation::DropRelationship(op) => required
            .field("parent", &op.parent)
            .field("name", &op.name),

        Operation::SpecifySynonymDomain(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::AddSynonyms(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::SpecifyAlnDomain(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::SpecifyNumericDomain(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::SpecifyCrossoverDomain(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::SpecifyTableDomain(op) => required
            .field("domainid", &op.domain_id)
            .list("value", &op.values),
        Operation::ModifyDomainType(op) => required.field("domain", &op.domain),
        Operation::DropDomain(op) => required.field("domainid", &op.domain_id),

        Operation::SpecifyIndex(op) => specify_index(required, op),
        Operation::DropIndex(op) => required.field("object", &op.object),

        Operation::CreateApp(op) => required
            .field("app", &op.app)
            .field("description", &op.description),
        Operation::ModifyApp(op) => required.field("app", &op.app),
        Operation::DropApp(op) => required.field("app", &op.app),
        Operation::CreateAppMenu(op) => required.field("app", &op.app),
        Operation::AdditionalAppMenu(op) => required.field("app", &op.app),
        Operation::AddSigOption(op) => required
            .field("app", &op.app)
            .field("optionname", &op.option_name)
            .field("description", &op.description),
        Operation::DropSigOption(op) => required
            .field("app", &op.app)
            .field("optionname", &op.option_name),

        Operation::CreateModule(op) => required
            .field("module", &op.module)
            .field("description", &op.description),
        Operation::ModifyModule(op) => required.field("module", &op.module),
        Operation::DropModule(op) => required.field("module", &op.module),
        Operation::ModuleApp(op) => required
            .field("module", &op.module)
            .field("app", &op.app),

        Operation::DefineView(op) => define_view(required, op),
        Operation::ModifyView(op) => required.field("name", &op.name),
        Operation::DropView(op) => required.field("name", &op.name),
        Operation::AddViewAttribute(op) => required
            .field("view", &op.view)
            .field("attribute", &op.attribute)
            .field("table", &op.table),
        Operation::DropViewAttribute(op) => required
            .field("view", &op.view)
            .field("attribute", &op.attribute),
        Operation::ModifyViewAttributes(op) => required
            .field("view", &op.view)
            .list("view column", &op.columns),

        Operation::AddService(op) => required
            .field("servicename", &op.service_name)
            .field("description", &op.description)
            .field("classname", &op.class_name),
        Operation::ModifyService(op) => required.field("servicename", &op.service_name),
        Operation::DropService(op) => required.field("servicename", &op.service_name),
        Operation::AddProperty(op) => required
            .field("name", &op.name)
            .field("description", &op.description),
        Operation::SetProperty(op) => required
            .field("name", &op.name)
            .field("value", &op.value),
        Operation::DropProperty(op) => required.field("name", &op.name),
        Operation::CreateMaxvar(op) => required
            .field("name", &op.name)
            .field("description", &op.description),
        Operation::ModifyMaxvar(op) => required.field("name", &op.name),
        Operation::DropMaxvar(op) => required.field("name", &op.name),

        Operation::Insert(op) => insert(required, op),
        Operation::Freeform(op) => freeform(required, op),
    };
    required.finish()
}

fn define_table(required: Required, op: &DefineTable) -> Required {
    required
        .field("object", &op.object)
        .field("description", &op.description)
        .field("service", &op.service)
        .field("classname", &op.class_name)
        .list("attribute", &op.attributes)
}

fn add_attributes(required: Required, op: &AddAttributes) -> Required {
    required
        .field("object", &op.object)
        .list("attribute", &op.attributes)
}

fn create_relationship(required: Required, op: &CreateRelationship) -> Required {
    required
        .field("parent", &op.parent)
        .field("name", &op.name)
        .field("child", &op.child)
        .field("whereclause", &op.where_clause)
        .field("remarks", &op.remarks)
}

fn specify_index(required: Required, op: &SpecifyIndex) -> Required {
    required
        .field("object", &op.object)
        .list("index key", &op.keys)
}

fn define_view(required: Required, op: &DefineView) -> Required {
    let required = required
        .field("name", &op.name)
        .field("description", &op.description)
        .field("service", &op.service)
        .field("classname", &op.class_name);
    match &op.selection {
        ViewSelection::AutoSelect(auto) => required.list("table", &auto.tables),
        ViewSelection::Custom(custom) => required
            .field("view_select", &custom.select)
            .field("view_from", &custom.from),
    }
}

fn insert(required: Required, op: &Insert) -> Required {
    let mut required = required.field("table", &op.table).list("row", &op.rows);
    for row in &op.rows {
        required = required.list("column value", &row.values);
    }
    required
}

fn freeform(required: Required, op: &Freeform) -> Required {
    required
        .field("description", &op.description)
        .list("SQL statement", &op.statements)
}
