//! The editable aggregate: script config, checks, and ordered operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::operation::Operation;
use crate::script::{Check, ScriptConfig};

/// Presentation key for one operation entry.
///
/// Ids exist only in memory; they are never written to a script and are
/// minted afresh whenever a script is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(u64);

impl OperationId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op-{}", self.0)
    }
}

/// Source of fresh operation ids, supplied by the caller.
pub trait IdGenerator {
    fn next_id(&mut self) -> OperationId;
}

/// Hands out `0, 1, 2, ...`.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after the highest id already present in `state`.
    pub fn after(state: &BuilderState) -> Self {
        let next = state
            .operations
            .iter()
            .map(|entry| entry.id.get().saturating_add(1))
            .max()
            .unwrap_or(0);
        Self { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> OperationId {
        let id = OperationId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> OperationId,
{
    fn next_id(&mut self) -> OperationId {
        self()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEntry {
    pub id: OperationId,
    pub operation: Operation,
}

/// Everything needed to write one script.
///
/// `operations` order is the order of elements inside `statements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderState {
    pub config: ScriptConfig,
    pub checks: Vec<Check>,
    pub operations: Vec<OperationEntry>,
}

impl BuilderState {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Appends an operation under a fresh id and returns that id.
    pub fn push(
        &mut self,
        operation: impl Into<Operation>,
        ids: &mut impl IdGenerator,
    ) -> OperationId {
        let id = ids.next_id();
        self.operations.push(OperationEntry {
            id,
            operation: operation.into(),
        });
        id
    }

    /// Removes the entry with `id`, returning its operation.
    pub fn remove(&mut self, id: OperationId) -> Option<Operation> {
        let index = self.position(id)?;
        Some(self.operations.remove(index).operation)
    }

    /// Moves the entry with `id` to `index` (clamped to the end).
    pub fn move_to(&mut self, id: OperationId, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let entry = self.operations.remove(from);
        let index = index.min(self.operations.len());
        self.operations.insert(index, entry);
        true
    }

    pub fn get(&self, id: OperationId) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.operation)
    }

    /// Operations in document order, without their ids.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter().map(|entry| &entry.operation)
    }

    fn position(&self, id: OperationId) -> Option<usize> {
        self.operations.iter().position(|entry| entry.id == id)
    }
}
