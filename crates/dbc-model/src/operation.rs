//! The operation union and its fieldless kind.
//!
//! [`Operation`] has one variant per element name accepted inside
//! `statements`. [`OperationKind`] mirrors it without payloads so code that
//! dispatches on an element name can match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;
use crate::application::{
    AddSigOption, AdditionalAppMenu, CreateApp, CreateAppMenu, DropApp, DropSigOption, ModifyApp,
};
use crate::data::{Freeform, Insert};
use crate::domain::{
    AddSynonyms, DropDomain, ModifyDomainType, SpecifyAlnDomain, SpecifyCrossoverDomain,
    SpecifyNumericDomain, SpecifySynonymDomain, SpecifyTableDomain,
};
use crate::index::{DropIndex, SpecifyIndex};
use crate::module::{CreateModule, DropModule, ModifyModule, ModuleApp};
use crate::relationship::{CreateRelationship, DropRelationship, ModifyRelationship};
use crate::service::{
    AddProperty, AddService, CreateMaxvar, DropMaxvar, DropProperty, DropService, ModifyMaxvar,
    ModifyService, SetProperty,
};
use crate::table::{
    AddAttributes, DefineTable, DropAttributes, DropTable, ModifyAttribute, ModifyTable,
};
use crate::view::{
    AddViewAttribute, DefineView, DropView, DropViewAttribute, ModifyView, ModifyViewAttributes,
};

/// One schema or configuration change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    // Table
    DefineTable(DefineTable),
    ModifyTable(ModifyTable),
    DropTable(DropTable),
    // Attribute
    AddAttributes(AddAttributes),
    ModifyAttribute(ModifyAttribute),
    DropAttributes(DropAttributes),
    // Relationship
    CreateRelationship(CreateRelationship),
    ModifyRelationship(ModifyRelationship),
    DropRelationship(DropRelationship),
    // Domain
    SpecifySynonymDomain(SpecifySynonymDomain),
    AddSynonyms(AddSynonyms),
    SpecifyAlnDomain(SpecifyAlnDomain),
    SpecifyNumericDomain(SpecifyNumericDomain),
    SpecifyCrossoverDomain(SpecifyCrossoverDomain),
    SpecifyTableDomain(SpecifyTableDomain),
    ModifyDomainType(ModifyDomainType),
    DropDomain(DropDomain),
    // Index
    SpecifyIndex(SpecifyIndex),
    DropIndex(DropIndex),
    // Application
    CreateApp(CreateApp),
    ModifyApp(ModifyApp),
    DropApp(DropApp),
    CreateAppMenu(CreateAppMenu),
    AdditionalAppMenu(AdditionalAppMenu),
    #[serde(rename = "add_sigoption")]
    AddSigOption(AddSigOption),
    #[serde(rename = "drop_sigoption")]
    DropSigOption(DropSigOption),
    // Module
    CreateModule(CreateModule),
    ModifyModule(ModifyModule),
    DropModule(DropModule),
    ModuleApp(ModuleApp),
    // View
    DefineView(DefineView),
    ModifyView(ModifyView),
    DropView(DropView),
    AddViewAttribute(AddViewAttribute),
    DropViewAttribute(DropViewAttribute),
    ModifyViewAttributes(ModifyViewAttributes),
    // Service
    AddService(AddService),
    ModifyService(ModifyService),
    DropService(DropService),
    // Property
    AddProperty(AddProperty),
    SetProperty(SetProperty),
    DropProperty(DropProperty),
    // Maxvar
    CreateMaxvar(CreateMaxvar),
    ModifyMaxvar(ModifyMaxvar),
    DropMaxvar(DropMaxvar),
    // Data
    Insert(Insert),
    Freeform(Freeform),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::DefineTable(_) => OperationKind::DefineTable,
            Operation::ModifyTable(_) => OperationKind::ModifyTable,
            Operation::DropTable(_) => OperationKind::DropTable,
            Operation::AddAttributes(_) => OperationKind::AddAttributes,
            Operation::ModifyAttribute(_) => OperationKind::ModifyAttribute,
            Operation::DropAttributes(_) => OperationKind::DropAttributes,
            Operation::CreateRelationship(_) => OperationKind::CreateRelationship,
            Operation::ModifyRelationship(_) => OperationKind::ModifyRelationship,
            Operation::DropRelationship(_) => OperationKind::DropRelationship,
            Operation::SpecifySynonymDomain(_) => OperationKind::SpecifySynonymDomain,
            Operation::AddSynonyms(_) => OperationKind::AddSynonyms,
            Operation::SpecifyAlnDomain(_) => OperationKind::SpecifyAlnDomain,
            Operation::SpecifyNumericDomain(_) => OperationKind::SpecifyNumericDomain,
            Operation::SpecifyCrossoverDomain(_) => OperationKind::SpecifyCrossoverDomain,
            Operation::SpecifyTableDomain(_) => OperationKind::SpecifyTableDomain,
            Operation::ModifyDomainType(_) => OperationKind::ModifyDomainType,
            Operation::DropDomain(_) => OperationKind::DropDomain,
            Operation::SpecifyIndex(_) => OperationKind::SpecifyIndex,
            Operation::DropIndex(_) => OperationKind::DropIndex,
            Operation::CreateApp(_) => OperationKind::CreateApp,
            Operation::ModifyApp(_) => OperationKind::ModifyApp,
            Operation::DropApp(_) => OperationKind::DropApp,
            Operation::CreateAppMenu(_) => OperationKind::CreateAppMenu,
            Operation::AdditionalAppMenu(_) => OperationKind::AdditionalAppMenu,
            Operation::AddSigOption(_) => OperationKind::AddSigOption,
            Operation::DropSigOption(_) => OperationKind::DropSigOption,
            Operation::CreateModule(_) => OperationKind::CreateModule,
            Operation::ModifyModule(_) => OperationKind::ModifyModule,
            Operation::DropModule(_) => OperationKind::DropModule,
            Operation::ModuleApp(_) => OperationKind::ModuleApp,
            Operation::DefineView(_) => OperationKind::DefineView,
            Operation::ModifyView(_) => OperationKind::ModifyView,
            Operation::DropView(_) => OperationKind::DropView,
            Operation::AddViewAttribute(_) => OperationKind::AddViewAttribute,
            Operation::DropViewAttribute(_) => OperationKind::DropViewAttribute,
            Operation::ModifyViewAttributes(_) => OperationKind::ModifyViewAttributes,
            Operation::AddService(_) => OperationKind::AddService,
            Operation::ModifyService(_) => OperationKind::ModifyService,
            Operation::DropService(_) => OperationKind::DropService,
            Operation::AddProperty(_) => OperationKind::AddProperty,
            Operation::SetProperty(_) => OperationKind::SetProperty,
            Operation::DropProperty(_) => OperationKind::DropProperty,
            Operation::CreateMaxvar(_) => OperationKind::CreateMaxvar,
            Operation::ModifyMaxvar(_) => OperationKind::ModifyMaxvar,
            Operation::DropMaxvar(_) => OperationKind::DropMaxvar,
            Operation::Insert(_) => OperationKind::Insert,
            Operation::Freeform(_) => OperationKind::Freeform,
        }
    }

    /// Element name of this operation inside `statements`.
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// The object, domain, application, or other name the operation acts on.
    pub fn subject(&self) -> &str {
        match self {
            Operation::DefineTable(op) => &op.object,
            Operation::ModifyTable(op) => &op.object,
            Operation::DropTable(op) => &op.object,
            Operation::AddAttributes(op) => &op.object,
            Operation::ModifyAttribute(op) => &op.object,
            Operation::DropAttributes(op) => &op.object,
            Operation::CreateRelationship(op) => &op.name,
            Operation::ModifyRelationship(op) => &op.name,
            Operation::DropRelationship(op) => &op.name,
            Operation::SpecifySynonymDomain(op) => &op.domain_id,
            Operation::AddSynonyms(op) => &op.domain_id,
            Operation::SpecifyAlnDomain(op) => &op.domain_id,
            Operation::SpecifyNumericDomain(op) => &op.domain_id,
            Operation::SpecifyCrossoverDomain(op) => &op.domain_id,
            Operation::SpecifyTableDomain(op) => &op.domain_id,
            Operation::ModifyDomainType(op) => &op.domain,
            Operation::DropDomain(op) => &op.domain_id,
            Operation::SpecifyIndex(op) => &op.object,
            Operation::DropIndex(op) => &op.object,
            Operation::CreateApp(op) => &op.app,
            Operation::ModifyApp(op) => &op.app,
            Operation::DropApp(op) => &op.app,
            Operation::CreateAppMenu(op) => &op.app,
            Operation::AdditionalAppMenu(op) => &op.app,
            Operation::AddSigOption(op) => &op.app,
            Operation::DropSigOption(op) => &op.app,
            Operation::CreateModule(op) => &op.module,
            Operation::ModifyModule(op) => &op.module,
            Operation::DropModule(op) => &op.module,
            Operation::ModuleApp(op) => &op.module,
            Operation::DefineView(op) => &op.name,
            Operation::ModifyView(op) => &op.name,
            Operation::DropView(op) => &op.name,
            Operation::AddViewAttribute(op) => &op.view,
            Operation::DropViewAttribute(op) => &op.view,
            Operation::ModifyViewAttributes(op) => &op.view,
            Operation::AddService(op) => &op.service_name,
            Operation::ModifyService(op) => &op.service_name,
            Operation::DropService(op) => &op.service_name,
            Operation::AddProperty(op) => &op.name,
            Operation::SetProperty(op) => &op.name,
            Operation::DropProperty(op) => &op.name,
            Operation::CreateMaxvar(op) => &op.name,
            Operation::ModifyMaxvar(op) => &op.name,
            Operation::DropMaxvar(op) => &op.name,
            Operation::Insert(op) => &op.table,
            Operation::Freeform(op) => &op.description,
        }
    }
}

/// Each payload struct shares its variant's name.
macro_rules! operation_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Operation {
                fn from(value: $variant) -> Self {
                    Operation::$variant(value)
                }
            }
        )+
    };
}

operation_from!(
    DefineTable,
    ModifyTable,
    DropTable,
    AddAttributes,
    ModifyAttribute,
    DropAttributes,
    CreateRelationship,
    ModifyRelationship,
    DropRelationship,
    SpecifySynonymDomain,
    AddSynonyms,
    SpecifyAlnDomain,
    SpecifyNumericDomain,
    SpecifyCrossoverDomain,
    SpecifyTableDomain,
    ModifyDomainType,
    DropDomain,
    SpecifyIndex,
    DropIndex,
    CreateApp,
    ModifyApp,
    DropApp,
    CreateAppMenu,
    AdditionalAppMenu,
    AddSigOption,
    DropSigOption,
    CreateModule,
    ModifyModule,
    DropModule,
    ModuleApp,
    DefineView,
    ModifyView,
    DropView,
    AddViewAttribute,
    DropViewAttribute,
    ModifyViewAttributes,
    AddService,
    ModifyService,
    DropService,
    AddProperty,
    SetProperty,
    DropProperty,
    CreateMaxvar,
    ModifyMaxvar,
    DropMaxvar,
    Insert,
    Freeform,
);

/// Groups of related operations, in the order editors list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationFamily {
    Table,
    Attribute,
    Relationship,
    Domain,
    Index,
    Application,
    Module,
    View,
    Service,
    Property,
    Maxvar,
    Data,
}

impl OperationFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationFamily::Table => "Table",
            OperationFamily::Attribute => "Attribute",
            OperationFamily::Relationship => "Relationship",
            OperationFamily::Domain => "Domain",
            OperationFamily::Index => "Index",
            OperationFamily::Application => "Application",
            OperationFamily::Module => "Module",
            OperationFamily::View => "View",
            OperationFamily::Service => "Service",
            OperationFamily::Property => "Property",
            OperationFamily::Maxvar => "Maxvar",
            OperationFamily::Data => "Data",
        }
    }
}

impl fmt::Display for OperationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload-free twin of [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    DefineTable,
    ModifyTable,
    DropTable,
    AddAttributes,
    ModifyAttribute,
    DropAttributes,
    CreateRelationship,
    ModifyRelationship,
    DropRelationship,
    SpecifySynonymDomain,
    AddSynonyms,
    SpecifyAlnDomain,
    SpecifyNumericDomain,
    SpecifyCrossoverDomain,
    SpecifyTableDomain,
    ModifyDomainType,
    DropDomain,
    SpecifyIndex,
    DropIndex,
    CreateApp,
    ModifyApp,
    DropApp,
    CreateAppMenu,
    AdditionalAppMenu,
    #[serde(rename = "add_sigoption")]
    AddSigOption,
    #[serde(rename = "drop_sigoption")]
    DropSigOption,
    CreateModule,
    ModifyModule,
    DropModule,
    ModuleApp,
    DefineView,
    ModifyView,
    DropView,
    AddViewAttribute,
    DropViewAttribute,
    ModifyViewAttributes,
    AddService,
    ModifyService,
    DropService,
    AddProperty,
    SetProperty,
    DropProperty,
    CreateMaxvar,
    ModifyMaxvar,
    DropMaxvar,
    Insert,
    Freeform,
}

impl OperationKind {
    /// Every kind in editor order.
    pub const ALL: [OperationKind; 47] = [
        OperationKind::DefineTable,
        OperationKind::ModifyTable,
        OperationKind::DropTable,
        OperationKind::AddAttributes,
        OperationKind::ModifyAttribute,
        OperationKind::DropAttributes,
        OperationKind::CreateRelationship,
        OperationKind::ModifyRelationship,
        OperationKind::DropRelationship,
        OperationKind::SpecifySynonymDomain,
        OperationKind::AddSynonyms,
        OperationKind::SpecifyAlnDomain,
        OperationKind::SpecifyNumericDomain,
        OperationKind::SpecifyCrossoverDomain,
        OperationKind::SpecifyTableDomain,
        OperationKind::ModifyDomainType,
        OperationKind::DropDomain,
        OperationKind::SpecifyIndex,
        OperationKind::DropIndex,
        OperationKind::CreateApp,
        OperationKind::ModifyApp,
        OperationKind::DropApp,
        OperationKind::CreateAppMenu,
        OperationKind::AdditionalAppMenu,
        OperationKind::AddSigOption,
        OperationKind::DropSigOption,
        OperationKind::CreateModule,
        OperationKind::ModifyModule,
        OperationKind::DropModule,
        OperationKind::ModuleApp,
        OperationKind::DefineView,
        OperationKind::ModifyView,
        OperationKind::DropView,
        OperationKind::AddViewAttribute,
        OperationKind::DropViewAttribute,
        OperationKind::ModifyViewAttributes,
        OperationKind::AddService,
        OperationKind::ModifyService,
        OperationKind::DropService,
        OperationKind::AddProperty,
        OperationKind::SetProperty,
        OperationKind::DropProperty,
        OperationKind::CreateMaxvar,
        OperationKind::ModifyMaxvar,
        OperationKind::DropMaxvar,
        OperationKind::Insert,
        OperationKind::Freeform,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::DefineTable => "define_table",
            OperationKind::ModifyTable => "modify_table",
            OperationKind::DropTable => "drop_table",
            OperationKind::AddAttributes => "add_attributes",
            OperationKind::ModifyAttribute => "modify_attribute",
            OperationKind::DropAttributes => "drop_attributes",
            OperationKind::CreateRelationship => "create_relationship",
            OperationKind::ModifyRelationship => "modify_relationship",
            OperationKind::DropRelationship => "drop_relationship",
            OperationKind::SpecifySynonymDomain => "specify_synonym_domain",
            OperationKind::AddSynonyms => "add_synonyms",
            OperationKind::SpecifyAlnDomain => "specify_aln_domain",
            OperationKind::SpecifyNumericDomain => "specify_numeric_domain",
            OperationKind::SpecifyCrossoverDomain => "specify_crossover_domain",
            OperationKind::SpecifyTableDomain => "specify_table_domain",
            OperationKind::ModifyDomainType => "modify_domain_type",
            OperationKind::DropDomain => "drop_domain",
            OperationKind::SpecifyIndex => "specify_index",
            OperationKind::DropIndex => "drop_index",
            OperationKind::CreateApp => "create_app",
            OperationKind::ModifyApp => "modify_app",
            OperationKind::DropApp => "drop_app",
            OperationKind::CreateAppMenu => "create_app_menu",
            OperationKind::AdditionalAppMenu => "additional_app_menu",
            OperationKind::AddSigOption => "add_sigoption",
            OperationKind::DropSigOption => "drop_sigoption",
            OperationKind::CreateModule => "create_module",
            OperationKind::ModifyModule => "modify_module",
            OperationKind::DropModule => "drop_module",
            OperationKind::ModuleApp => "module_app",
            OperationKind::DefineView => "define_view",
            OperationKind::ModifyView => "modify_view",
            OperationKind::DropView => "drop_view",
            OperationKind::AddViewAttribute => "add_view_attribute",
            OperationKind::DropViewAttribute => "drop_view_attribute",
            OperationKind::ModifyViewAttributes => "modify_view_attributes",
            OperationKind::AddService => "add_service",
            OperationKind::ModifyService => "modify_service",
            OperationKind::DropService => "drop_service",
            OperationKind::AddProperty => "add_property",
            OperationKind::SetProperty => "set_property",
            OperationKind::DropProperty => "drop_property",
            OperationKind::CreateMaxvar => "create_maxvar",
            OperationKind::ModifyMaxvar => "modify_maxvar",
            OperationKind::DropMaxvar => "drop_maxvar",
            OperationKind::Insert => "insert",
            OperationKind::Freeform => "freeform",
        }
    }

    /// Looks up the kind for an element name. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "define_table" => Some(OperationKind::DefineTable),
            "modify_table" => Some(OperationKind::ModifyTable),
            "drop_table" => Some(OperationKind::DropTable),
            "add_attributes" => Some(OperationKind::AddAttributes),
            "modify_attribute" => Some(OperationKind::ModifyAttribute),
            "drop_attributes" => Some(OperationKind::DropAttributes),
            "create_relationship" => Some(OperationKind::CreateRelationship),
            "modify_relationship" => Some(OperationKind::ModifyRelationship),
            "drop_relationship" => Some(OperationKind::DropRelationship),
            "specify_synonym_domain" => Some(OperationKind::SpecifySynonymDomain),
            "add_synonyms" => Some(OperationKind::AddSynonyms),
            "specify_aln_domain" => Some(OperationKind::SpecifyAlnDomain),
            "specify_numeric_domain" => Some(OperationKind::SpecifyNumericDomain),
            "specify_crossover_domain" => Some(OperationKind::SpecifyCrossoverDomain),
            "specify_table_domain" => Some(OperationKind::SpecifyTableDomain),
            "modify_domain_type" => Some(OperationKind::ModifyDomainType),
            "drop_domain" => Some(OperationKind::DropDomain),
            "specify_index" => Some(OperationKind::SpecifyIndex),
            "drop_index" => Some(OperationKind::DropIndex),
            "create_app" => Some(OperationKind::CreateApp),
            "modify_app" => Some(OperationKind::ModifyApp),
            "drop_app" => Some(OperationKind::DropApp),
            "create_app_menu" => Some(OperationKind::CreateAppMenu),
            "additional_app_menu" => Some(OperationKind::AdditionalAppMenu),
            "add_sigoption" => Some(OperationKind::AddSigOption),
            "drop_sigoption" => Some(OperationKind::DropSigOption),
            "create_module" => Some(OperationKind::CreateModule),
            "modify_module" => Some(OperationKind::ModifyModule),
            "drop_module" => Some(OperationKind::DropModule),
            "module_app" => Some(OperationKind::ModuleApp),
            "define_view" => Some(OperationKind::DefineView),
            "modify_view" => Some(OperationKind::ModifyView),
            "drop_view" => Some(OperationKind::DropView),
            "add_view_attribute" => Some(OperationKind::AddViewAttribute),
            "drop_view_attribute" => Some(OperationKind::DropViewAttribute),
            "modify_view_attributes" => Some(OperationKind::ModifyViewAttributes),
            "add_service" => Some(OperationKind::AddService),
            "modify_service" => Some(OperationKind::ModifyService),
            "drop_service" => Some(OperationKind::DropService),
            "add_property" => Some(OperationKind::AddProperty),
            "set_property" => Some(OperationKind::SetProperty),
            "drop_property" => Some(OperationKind::DropProperty),
            "create_maxvar" => Some(OperationKind::CreateMaxvar),
            "modify_maxvar" => Some(OperationKind::ModifyMaxvar),
            "drop_maxvar" => Some(OperationKind::DropMaxvar),
            "insert" => Some(OperationKind::Insert),
            "freeform" => Some(OperationKind::Freeform),
            _ => None,
        }
    }

    /// Short human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::DefineTable => "Define table",
            OperationKind::ModifyTable => "Modify table",
            OperationKind::DropTable => "Drop table",
            OperationKind::AddAttributes => "Add attributes",
            OperationKind::ModifyAttribute => "Modify attribute",
            OperationKind::DropAttributes => "Drop attributes",
            OperationKind::CreateRelationship => "Create relationship",
            OperationKind::ModifyRelationship => "Modify relationship",
            OperationKind::DropRelationship => "Drop relationship",
            OperationKind::SpecifySynonymDomain => "Synonym domain",
            OperationKind::AddSynonyms => "Add synonyms",
            OperationKind::SpecifyAlnDomain => "ALN domain",
            OperationKind::SpecifyNumericDomain => "Numeric domain",
            OperationKind::SpecifyCrossoverDomain => "Crossover domain",
            OperationKind::SpecifyTableDomain => "Table domain",
            OperationKind::ModifyDomainType => "Modify domain type",
            OperationKind::DropDomain => "Drop domain",
            OperationKind::SpecifyIndex => "Specify index",
            OperationKind::DropIndex => "Drop index",
            OperationKind::CreateApp => "Create application",
            OperationKind::ModifyApp => "Modify application",
            OperationKind::DropApp => "Drop application",
            OperationKind::CreateAppMenu => "Create application menu",
            OperationKind::AdditionalAppMenu => "Additional application menu",
            OperationKind::AddSigOption => "Add signature option",
            OperationKind::DropSigOption => "Drop signature option",
            OperationKind::CreateModule => "Create module",
            OperationKind::ModifyModule => "Modify module",
            OperationKind::DropModule => "Drop module",
            OperationKind::ModuleApp => "Module application",
            OperationKind::DefineView => "Define view",
            OperationKind::ModifyView => "Modify view",
            OperationKind::DropView => "Drop view",
            OperationKind::AddViewAttribute => "Add view attribute",
            OperationKind::DropViewAttribute => "Drop view attribute",
            OperationKind::ModifyViewAttributes => "Modify view attributes",
            OperationKind::AddService => "Add service",
            OperationKind::ModifyService => "Modify service",
            OperationKind::DropService => "Drop service",
            OperationKind::AddProperty => "Add property",
            OperationKind::SetProperty => "Set property",
            OperationKind::DropProperty => "Drop property",
            OperationKind::CreateMaxvar => "Create maxvar",
            OperationKind::ModifyMaxvar => "Modify maxvar",
            OperationKind::DropMaxvar => "Drop maxvar",
            OperationKind::Insert => "Insert rows",
            OperationKind::Freeform => "Freeform SQL",
        }
    }

    pub fn family(&self) -> OperationFamily {
        match self {
            OperationKind::DefineTable
            | OperationKind::ModifyTable
            | OperationKind::DropTable => OperationFamily::Table,
            OperationKind::AddAttributes
            | OperationKind::ModifyAttribute
            | OperationKind::DropAttributes => OperationFamily::Attribute,
            OperationKind::CreateRelationship
            | OperationKind::ModifyRelationship
            | OperationKind::DropRelationship => OperationFamily::Relationship,
            OperationKind::SpecifySynonymDomain
            | OperationKind::AddSynonyms
            | OperationKind::SpecifyAlnDomain
            | OperationKind::SpecifyNumericDomain
            | OperationKind::SpecifyCrossoverDomain
            | OperationKind::SpecifyTableDomain
            | OperationKind::ModifyDomainType
            | OperationKind::DropDomain => OperationFamily::Domain,
            OperationKind::SpecifyIndex
            | OperationKind::DropIndex => OperationFamily::Index,
            OperationKind::CreateApp
            | OperationKind::ModifyApp
            | OperationKind::DropApp
            | OperationKind::CreateAppMenu
            | OperationKind::AdditionalAppMenu
            | OperationKind::AddSigOption
            | OperationKind::DropSigOption => OperationFamily::Application,
            OperationKind::CreateModule
            | OperationKind::ModifyModule
            | OperationKind::DropModule
            | OperationKind::ModuleApp => OperationFamily::Module,
            OperationKind::DefineView
            | OperationKind::ModifyView
            | OperationKind::DropView
            | OperationKind::AddViewAttribute
            | OperationKind::DropViewAttribute
            | OperationKind::ModifyViewAttributes => OperationFamily::View,
            OperationKind::AddService
            | OperationKind::ModifyService
            | OperationKind::DropService => OperationFamily::Service,
            OperationKind::AddProperty
            | OperationKind::SetProperty
            | OperationKind::DropProperty => OperationFamily::Property,
            OperationKind::CreateMaxvar
            | OperationKind::ModifyMaxvar
            | OperationKind::DropMaxvar => OperationFamily::Maxvar,
            OperationKind::Insert
            | OperationKind::Freeform => OperationFamily::Data,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OperationKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::from_tag(s).ok_or_else(|| ModelError::UnknownTag(s.to_string()))
    }
}
