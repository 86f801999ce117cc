//! Typed model of a database configuration script.
//!
//! A script is a [`ScriptConfig`], an ordered list of [`Check`]s, and an
//! ordered list of [`Operation`]s. The model is plain data; reading, writing,
//! and validating scripts live in the `dbc-xml` and `dbc-validate` crates.

pub mod application;
pub mod attribute;
pub mod data;
pub mod domain;
pub mod enums;
pub mod error;
pub mod execution;
pub mod index;
pub mod module;
pub mod operation;
pub mod relationship;
pub mod script;
pub mod service;
pub mod state;
pub mod table;
pub mod view;

pub use application::{
    AddSigOption, AdditionalAppMenu, AppMenuItem, CreateApp, CreateAppMenu, DropApp,
    DropSigOption, MenuHeader, MenuHeaderItem, MenuOption, MenuSeparator, ModifyApp,
};
pub use attribute::{AttributeDefinition, AttributeProperties};
pub use data::{ColumnValue, Freeform, Insert, InsertRow, InsertValue, SqlStatement};
pub use domain::{
    AddSynonyms, AlnValue, CrossoverField, CrossoverValue, DropDomain, ModifyDomainType,
    NumericValue, SpecifyAlnDomain, SpecifyCrossoverDomain, SpecifyNumericDomain,
    SpecifySynonymDomain, SpecifyTableDomain, SynonymValue, TableValue,
};
pub use enums::{
    Context, MaxType, MaxvarType, MenuType, SearchType, SecureLevel, SqlTarget, StorageType,
    TabDisplay, TableType,
};
pub use error::{ModelError, Result};
pub use execution::{ExecutionEvent, ExecutionPhase, ScriptExecutor};
pub use index::{DropIndex, IndexKey, SpecifyIndex};
pub use module::{
    CreateModule, DropModule, ModifyModule, ModuleApp, ModuleMenuApp, ModuleMenuHeader,
    ModuleMenuItem,
};
pub use operation::{Operation, OperationFamily, OperationKind};
pub use relationship::{CreateRelationship, DropRelationship, ModifyRelationship};
pub use script::{Check, CheckQuery, SCRIPT_EXTENSION, ScriptConfig};
pub use service::{
    AddProperty, AddService, CreateMaxvar, DropMaxvar, DropProperty, DropService, ModifyMaxvar,
    ModifyService, SetProperty,
};
pub use state::{BuilderState, IdGenerator, OperationEntry, OperationId, SequentialIds};
pub use table::{
    AddAttributes, DefineTable, DropAttributes, DropTable, ModifyAttribute, ModifyTable,
};
pub use view::{
    AddViewAttribute, AutoSelect, CustomSelect, DefineView, DropView, DropViewAttribute,
    ModifyView, ModifyViewAttributes, ViewColumn, ViewSelection,
};

