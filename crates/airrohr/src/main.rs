use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use airrohr_core::{analyze, report_error, AnalyzeOptions, OutputStyle, DEFAULT_TOP};
use airrohr_parser::DEFAULT_DATA_FILE;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Ranks sensors in a sensor.community dump by how many distinct parameters they report.
///
/// With no flags it reads `sensor_data.json` from the working directory, lists
/// the top 10 as text and exits 0 even after printing an error.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON array of sensor records
    #[arg(long, env = "AIRROHR_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Number of sensors to list
    #[arg(long, env = "AIRROHR_TOP", default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Render the ranking as a table
    #[arg(long)]
    table: bool,

    /// Exit with a non-zero status when the run fails
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            path: self.file.clone(),
            top: self.top,
            style: if self.table {
                OutputStyle::Table
            } else {
                OutputStyle::Text
            },
        }
    }
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let status = match analyze(&cli.options(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                error = %err,
                path = %cli.file.display(),
                file_access = err.is_file_access(),
                "analysis failed"
            );
            report_error(&err, &mut out).context("failed to write error report")?;
            if cli.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    };

    out.flush()?;
    Ok(status)
}
