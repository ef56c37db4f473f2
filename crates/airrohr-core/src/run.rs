use std::io::Write;
use std::path::PathBuf;

use airrohr_parser::{load_records, LoadError, DEFAULT_DATA_FILE};
use tracing::{debug, info};

use crate::aggregate::SensorAggregator;
use crate::error::{AnalyzeError, Result};
use crate::rank::rank;
use crate::render::{render_ranking, render_table_report, DEFAULT_TOP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Text,
    Table,
}

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub path: PathBuf,
    pub top: usize,
    pub style: OutputStyle,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            top: DEFAULT_TOP,
            style: OutputStyle::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub records: usize,
    pub sensors: usize,
    pub skipped: usize,
    pub rendered: usize,
}

/// Load, aggregate, rank and render in one pass. Nothing of the ranking is
/// written unless loading succeeded.
pub fn analyze<W: Write>(options: &AnalyzeOptions, out: &mut W) -> Result<RunSummary> {
    writeln!(out, "Reading local data...")?;

    let records = load_records(&options.path)?;
    writeln!(out, "Total records loaded: {}", records.len())?;

    let mut aggregator = SensorAggregator::new();
    for record in &records {
        aggregator.ingest(record);
    }
    if aggregator.is_empty() {
        debug!(records = records.len(), "no record carried a usable sensor id");
    }
    let skipped = aggregator.skipped();
    let ranked = rank(aggregator.into_aggregates());
    debug!(sensors = ranked.len(), "ranked sensors");

    match options.style {
        OutputStyle::Text => render_ranking(out, &ranked, options.top)?,
        OutputStyle::Table => render_table_report(out, &ranked, options.top)?,
    }

    let summary = RunSummary {
        records: records.len(),
        sensors: ranked.len(),
        skipped,
        rendered: ranked.len().min(options.top),
    };
    info!(
        records = summary.records,
        sensors = summary.sensors,
        skipped = summary.skipped,
        rendered = summary.rendered,
        "analysis complete"
    );
    Ok(summary)
}

/// Prints the single user-facing line for a failed run.
pub fn report_error<W: Write>(err: &AnalyzeError, out: &mut W) -> std::io::Result<()> {
    match err {
        AnalyzeError::Load(LoadError::NotFound { path }) => writeln!(
            out,
            "Error: {} not found. Please download it first.",
            path.display()
        ),
        other => writeln!(out, "Error: {other}"),
    }
}
