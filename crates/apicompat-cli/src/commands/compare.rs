//! Compare command
//!
//! Usage: apicompat compare --old <FILE> --new <FILE> [--format text|json|md]
//!        [--policy <FILE>] [--fail-on-breaking] [--output <FILE>]

use apicompat_core::diff::{render, ReportFormat};
use apicompat_core::policy::CompatibilityPolicy;
use apicompat_core_types::RequestContext;
use apicompat_engine::{compare_files, load_policy_file};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when `--fail-on-breaking` is set and breaking changes exist
const EXIT_BREAKING: u8 = 2;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Previous contract (simplified JSON or OpenAPI JSON)
    #[arg(long)]
    pub old: PathBuf,

    /// Candidate contract (simplified JSON or OpenAPI JSON)
    #[arg(long)]
    pub new: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// TOML file overriding the default compatibility rules
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Exit with status 2 when the report has breaking changes
    #[arg(long)]
    pub fail_on_breaking: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    #[value(alias = "markdown")]
    Md,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Md => ReportFormat::Markdown,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs, ctx: &RequestContext) -> anyhow::Result<ExitCode> {
    let policy = match &args.policy {
        Some(path) => load_policy_file(path, ctx)?,
        None => CompatibilityPolicy::default(),
    };

    let comparison = compare_files(&args.old, &args.new, &policy, ctx)?;

    for (side, warning) in comparison.labelled_warnings() {
        eprintln!("warning: [{}] {}", side, warning);
    }

    let rendered = render(&comparison.report, args.format.into())?;
    super::emit(args.output.as_deref(), &rendered)?;

    if args.fail_on_breaking && !comparison.report.is_compatible() {
        return Ok(ExitCode::from(EXIT_BREAKING));
    }
    Ok(ExitCode::SUCCESS)
}
