//! apicompat CLI
//!
//! Command-line interface for API contract compatibility checks

use apicompat_core::logging_facility::{self, Profile};
use apicompat_core_types::RequestContext;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "apicompat")]
#[command(about = "apicompat - API contract backward-compatibility checker", long_about = None)]
struct Cli {
    /// Diagnostic log output on stderr (RUST_LOG overrides the filter)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Off)]
    log_format: LogFormat,

    /// Correlation id attached to log events and errors (default: fresh UUIDv7)
    #[arg(long, global = true)]
    request_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Off,
    Pretty,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Off => Profile::Quiet,
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two contracts and report breaking changes
    Compare(commands::compare::CompareArgs),
    /// Convert a contract to the simplified JSON form
    Convert(commands::convert::ConvertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.profile());

    let ctx = match cli.request_id {
        Some(id) => RequestContext::with_request_id(id),
        None => RequestContext::new(),
    };

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, &ctx),
        Commands::Convert(args) => commands::convert::execute(args, &ctx),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
