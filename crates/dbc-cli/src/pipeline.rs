//! File-level steps shared by the commands: loading scripts and state
//! files, writing results, and comparing a script with its re-rendering.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dbc_model::{BuilderState, ScriptConfig, SequentialIds};
use dbc_xml::{deserialize, serialize, try_parse_document};
use tracing::{debug, info};

/// How an input file is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Script markup (`.dbc`, `.xml`, or anything else).
    Script,
    /// Editor state serialized as JSON.
    State,
}

impl InputKind {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputKind::State,
            _ => InputKind::Script,
        }
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Reads a state JSON file.
pub fn read_state(path: &Path) -> Result<BuilderState> {
    let text = read_text(path)?;
    let state: BuilderState =
        serde_json::from_str(&text).with_context(|| format!("parse state {}", path.display()))?;
    debug!(
        path = %path.display(),
        operations = state.operations.len(),
        "loaded state"
    );
    Ok(state)
}

/// Reads a script file.
///
/// With `strict`, markup that cannot be parsed is an error instead of an
/// empty state.
pub fn read_script(path: &Path, strict: bool) -> Result<BuilderState> {
    let text = read_text(path)?;
    let state = if strict {
        try_parse_document(&text, &mut SequentialIds::new())
            .with_context(|| format!("parse script {}", path.display()))?
    } else {
        deserialize(&text)
    };
    debug!(
        path = %path.display(),
        checks = state.checks.len(),
        operations = state.operations.len(),
        "loaded script"
    );
    Ok(state)
}

/// Reads either kind of input, chosen by file extension.
pub fn read_input(path: &Path, strict: bool) -> Result<BuilderState> {
    match InputKind::of(path) {
        InputKind::State => read_state(path),
        InputKind::Script => read_script(path, strict),
    }
}

pub fn state_to_json(state: &BuilderState) -> Result<String> {
    let mut json = serde_json::to_string_pretty(state).context("serialize state")?;
    json.push('\n');
    Ok(json)
}

/// Writes `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => print!("{contents}"),
    }
    Ok(())
}

/// Default location for a rendered script: `<scriptname>.dbc` beside the input.
pub fn default_script_path(input: &Path, config: &ScriptConfig) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    dir.join(config.file_name())
}

/// First line where two renderings disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// One-based line number.
    pub line: usize,
    pub original: Option<String>,
    pub rendered: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub operations: usize,
    pub checks: usize,
    pub difference: Option<LineDifference>,
}

impl RoundTrip {
    /// True when re-rendering reproduced the input byte for byte.
    pub fn is_canonical(&self) -> bool {
        self.difference.is_none()
    }
}

/// Reads `text`, renders it again, and reports where the two diverge.
pub fn check_roundtrip(text: &str) -> RoundTrip {
    let state = deserialize(text);
    let rendered = serialize(&state);
    RoundTrip {
        operations: state.operations.len(),
        checks: state.checks.len(),
        difference: first_difference(text, &rendered),
    }
}

fn first_difference(original: &str, rendered: &str) -> Option<LineDifference> {
    if original == rendered {
        return None;
    }
    let mut left = original.split('\n');
    let mut right = rendered.split('\n');
    let mut line = 1;
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            (None, None) => return None,
            (a, b) => {
                return Some(LineDifference {
                    line,
                    original: a.map(str::to_string),
                    rendered: b.map(str::to_string),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_by_extension() {
        assert_eq!(InputKind::of(Path::new("state.json")), InputKind::State);
        assert_eq!(InputKind::of(Path::new("STATE.JSON")), InputKind::State);
        assert_eq!(InputKind::of(Path::new("V1000_01.dbc")), InputKind::Script);
        assert_eq!(InputKind::of(Path::new("script")), InputKind::Script);
    }

    #[test]
    fn test_default_script_path() {
        let config = ScriptConfig::new("ADMIN", "V1000_01");
        assert_eq!(
            default_script_path(Path::new("work/state.json"), &config),
            Path::new("work").join("V1000_01.dbc")
        );
        assert_eq!(
            default_script_path(Path::new("state.json"), &config),
            PathBuf::from("V1000_01.dbc")
        );
    }

    #[test]
    fn test_canonical_script() {
        let text = serialize(&BuilderState::new(ScriptConfig::new("ADMIN", "V1000_01")));
        let result = check_roundtrip(&text);
        assert!(result.is_canonical());
        assert_eq!(result.operations, 0);
    }

    #[test]
    fn test_difference_is_reported_by_line() {
        let text = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                    <script author=\"ADMIN\" scriptname=\"V1000_01\">\n\
                    <statements>\n\
                    </statements>\n\
                    </script>\n";
        let result = check_roundtrip(text);
        let difference = result.difference.unwrap();
        assert_eq!(difference.line, 3);
        assert_eq!(difference.original.as_deref(), Some("<statements>"));
        assert_eq!(difference.rendered.as_deref(), Some("  <statements>"));
    }

    #[test]
    fn test_missing_trailing_newline_is_a_difference() {
        let text = serialize(&BuilderState::new(ScriptConfig::new("ADMIN", "V1000_01")));
        let trimmed = text.trim_end();
        let difference = check_roundtrip(trimmed).difference.unwrap();
        assert_eq!(difference.line, 6);
        assert_eq!(difference.original, None);
        assert_eq!(difference.rendered.as_deref(), Some(""));
    }

    #[test]
    fn test_state_json_ends_with_newline() {
        let json = state_to_json(&BuilderState::default()).unwrap();
        assert!(json.ends_with("}\n"));
    }
}
