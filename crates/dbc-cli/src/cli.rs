//! CLI argument definitions for the `dbc` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dbc_model::Context;

#[derive(Parser)]
#[command(
    name = "dbc",
    version,
    about = "Build, render, and check database configuration scripts",
    long_about = "Build, render, and check database configuration scripts.\n\n\
                  Scripts are read and written as markup; editor state is kept\n\
                  as JSON so it can be edited by other tools between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write an empty state file for a new script.
    New(NewArgs),

    /// Render a state file as script markup.
    Render(RenderArgs),

    /// Read a script into a state file.
    Parse(ParseArgs),

    /// Report missing required fields in a script or state file.
    Validate(ValidateArgs),

    /// Check that a script survives being read and rendered again unchanged.
    CheckRoundtrip(RoundtripArgs),

    /// List every supported operation tag.
    Tags,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Script author.
    #[arg(long)]
    pub author: String,

    /// Script name, e.g. V7612_01.
    #[arg(long)]
    pub scriptname: String,

    /// Free text written as the script description.
    #[arg(long)]
    pub description: Option<String>,

    /// Multitenant context the script targets.
    #[arg(long, value_enum)]
    pub context: Option<ContextArg>,

    /// Output state file (default: stdout).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// State JSON file to render.
    #[arg(value_name = "STATE")]
    pub state: PathBuf,

    /// Output script file (default: stdout).
    #[arg(short, long, value_name = "PATH", conflicts_with = "beside")]
    pub output: Option<PathBuf>,

    /// Write `<scriptname>.dbc` next to the state file.
    #[arg(long)]
    pub beside: bool,

    /// Refuse to render a state that fails validation.
    #[arg(long)]
    pub validate: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Script file to read.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output state file (default: stdout).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail on malformed markup instead of producing an empty state.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Script (.dbc, .xml) or state (.json) file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct RoundtripArgs {
    /// Script file to check.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ContextArg {
    Master,
    Landlord,
    Tenants,
    All,
}

impl From<ContextArg> for Context {
    fn from(value: ContextArg) -> Self {
        match value {
            ContextArg::Master => Context::Master,
            ContextArg::Landlord => Context::Landlord,
            ContextArg::Tenants => Context::Tenants,
            ContextArg::All => Context::All,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_with_global_flags() {
        let cli = Cli::try_parse_from([
            "dbc",
            "validate",
            "V1000_01.dbc",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.input, PathBuf::from("V1000_01.dbc"));
        assert!(matches!(args.format, ReportFormatArg::Json));
    }

    #[test]
    fn test_render_output_conflicts_with_beside() {
        let result = Cli::try_parse_from(["dbc", "render", "s.json", "-o", "x.dbc", "--beside"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_maps_context() {
        let cli = Cli::try_parse_from([
            "dbc",
            "new",
            "--author",
            "ADMIN",
            "--scriptname",
            "V1000_01",
            "--context",
            "tenants",
        ])
        .unwrap();
        let Command::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.context.map(Context::from), Some(Context::Tenants));
    }
}
