//! Convert command
//!
//! Usage: apicompat convert <FILE> [--output <FILE>]

use apicompat_core_types::RequestContext;
use apicompat_engine::convert_file;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Contract to convert (OpenAPI JSON or simplified JSON)
    pub input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute convert command
pub fn execute(args: ConvertArgs, ctx: &RequestContext) -> anyhow::Result<ExitCode> {
    let converted = convert_file(&args.input, ctx)?;

    for warning in &converted.warnings {
        eprintln!("warning: {}", warning);
    }

    let mut json = serde_json::to_string_pretty(&converted.contract)?;
    json.push('\n');
    super::emit(args.output.as_deref(), &json)?;
    Ok(ExitCode::SUCCESS)
}
