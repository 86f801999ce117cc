//! Contract for running a rendered script on a remote installer.
//!
//! The codec only produces text. Whatever uploads and runs it reports back
//! through [`ExecutionEvent`]s in this order: phase changes, output lines
//! while executing, then exactly one terminal outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionPhase {
    Connecting,
    LocatingTarget,
    Uploading,
    Executing,
}

impl ExecutionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionPhase::Connecting => "connecting",
            ExecutionPhase::LocatingTarget => "locating-target",
            ExecutionPhase::Uploading => "uploading",
            ExecutionPhase::Executing => "executing",
        }
    }
}

impl fmt::Display for ExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExecutionEvent {
    Phase {
        phase: ExecutionPhase,
        message: Option<String>,
    },
    /// One raw line of installer output.
    Output { line: String },
    Completed,
    Failed { error: String },
}

impl ExecutionEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionEvent::Completed | ExecutionEvent::Failed { .. })
    }
}

/// Uploads and runs one rendered script.
pub trait ScriptExecutor {
    /// Runs `script` under `file_name`, reporting progress to `events`.
    ///
    /// Implementations must finish by emitting exactly one terminal event.
    fn execute(&mut self, script: &str, file_name: &str, events: &mut dyn FnMut(ExecutionEvent));
}
