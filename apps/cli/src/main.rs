//! `vellum`: inspect, check and convert FHIR resources stored as JSON or BSON

mod commands;
mod config;
mod logging;
mod outline;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use vellum_format::Format;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "vellum", version, about = "Resolve FHIR resources in JSON and BSON")]
struct Cli {
    /// Configuration file (defaults to ./vellum.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved resource tree
    Inspect {
        file: PathBuf,
        /// Input format; inferred from the extension when omitted
        #[arg(long)]
        format: Option<Format>,
    },
    /// Resolve each file and report ok or the error
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Re-encode a resource in another format
    Convert {
        file: PathBuf,
        #[arg(long)]
        to: Format,
        /// Input format; inferred from the extension when omitted
        #[arg(long)]
        format: Option<Format>,
        /// Destination file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    match cli.command {
        Command::Inspect { file, format } => {
            commands::inspect(&file, format, &mut io::stdout().lock())?
        }
        Command::Check { files } => {
            if !commands::check(&files, &mut io::stdout().lock())? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Convert {
            file,
            to,
            format,
            output,
        } => commands::convert(&file, format, to, output.as_deref(), &config.output)?,
    }

    Ok(ExitCode::SUCCESS)
}
