use std::path::PathBuf;

use anyhow::{Result, bail};
use dbc_cli::pipeline::{
    RoundTrip, check_roundtrip, default_script_path, read_input, read_script, read_state,
    read_text, state_to_json, write_output,
};
use dbc_model::{BuilderState, ScriptConfig};
use dbc_validate::{ValidationReport, validate_state};
use dbc_xml::serialize;
use tracing::{info, info_span, warn};

use crate::cli::{NewArgs, ParseArgs, RenderArgs, ReportFormatArg, RoundtripArgs, ValidateArgs};
use crate::summary::{print_roundtrip, print_validation};

pub fn run_new(args: &NewArgs) -> Result<()> {
    let span = info_span!("new", scriptname = %args.scriptname);
    let _guard = span.enter();
    let mut config = ScriptConfig::new(&args.author, &args.scriptname);
    config.description = args.description.clone();
    config.context = args.context.map(Into::into);
    let json = state_to_json(&BuilderState::new(config))?;
    write_output(args.output.as_deref(), &json)
}

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let span = info_span!("render", state = %args.state.display());
    let _guard = span.enter();
    let state = read_state(&args.state)?;
    if args.validate {
        let report = validate_state(&state);
        if !report.is_valid() {
            print_validation(&args.state.display().to_string(), &report);
            bail!("{} has {} validation issue(s)", args.state.display(), report.len());
        }
    }
    let output: Option<PathBuf> = if args.beside {
        Some(default_script_path(&args.state, &state.config))
    } else {
        args.output.clone()
    };
    let text = serialize(&state);
    info!(operations = state.operations.len(), "rendered script");
    write_output(output.as_deref(), &text)
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let span = info_span!("parse", script = %args.script.display());
    let _guard = span.enter();
    let state = read_script(&args.script, args.strict)?;
    if state == BuilderState::default() {
        warn!("script produced an empty state");
    }
    info!(
        checks = state.checks.len(),
        operations = state.operations.len(),
        "parsed script"
    );
    write_output(args.output.as_deref(), &state_to_json(&state)?)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("validate", input = %args.input.display());
    let _guard = span.enter();
    let state = read_input(&args.input, false)?;
    let report = validate_state(&state);
    info!(issues = report.len(), "validated");
    match args.format {
        ReportFormatArg::Table => print_validation(&args.input.display().to_string(), &report),
        ReportFormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report)
}

pub fn run_check_roundtrip(args: &RoundtripArgs) -> Result<RoundTrip> {
    let span = info_span!("check_roundtrip", script = %args.script.display());
    let _guard = span.enter();
    let text = read_text(&args.script)?;
    let result = check_roundtrip(&text);
    if let Some(difference) = &result.difference {
        warn!(line = difference.line, "rendering differs from file");
    }
    print_roundtrip(&args.script.display().to_string(), &result);
    Ok(result)
}
