pub mod aggregate;
pub mod error;
pub mod rank;
pub mod render;
pub mod run;

pub use aggregate::{aggregate, SensorAggregate, SensorAggregator, SensorInfo};
pub use error::AnalyzeError;
pub use rank::{rank, RankedSensor};
pub use render::{format_location, render_ranking, render_table, DEFAULT_TOP};
pub use run::{analyze, report_error, AnalyzeOptions, OutputStyle, RunSummary};

#[cfg(test)]
mod tests;
