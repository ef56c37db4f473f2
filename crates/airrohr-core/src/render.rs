use std::io::{self, Write};

use airrohr_parser::{Location, PLACEHOLDER};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::rank::RankedSensor;

pub const DEFAULT_TOP: usize = 10;

const SEPARATOR_WIDTH: usize = 30;

fn or_placeholder<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), ToString::to_string)
}

/// `"{country}, {city} (Lat: {latitude}, Lon: {longitude})"`, with the
/// placeholder for any missing part.
pub fn format_location(location: Option<&Location>) -> String {
    let location = location.cloned().unwrap_or_default();
    format!(
        "{}, {} (Lat: {}, Lon: {})",
        or_placeholder(location.country.as_ref()),
        or_placeholder(location.city.as_ref()),
        or_placeholder(location.latitude.as_ref()),
        or_placeholder(location.longitude.as_ref()),
    )
}

fn join_params(params: &[Option<String>]) -> String {
    params
        .iter()
        .map(|param| param.as_deref().unwrap_or(PLACEHOLDER))
        .collect::<Vec<_>>()
        .join(", ")
}

fn type_name(sensor: &RankedSensor) -> &str {
    sensor.info.type_name.as_deref().unwrap_or(PLACEHOLDER)
}

fn write_header<W: Write>(out: &mut W, limit: usize) -> io::Result<()> {
    writeln!(out, "\n--- TOP {limit} Sensors with Most Parameters ---")
}

/// Writes the header and at most `limit` entries of an already ranked list.
pub fn render_ranking<W: Write>(
    out: &mut W,
    ranked: &[RankedSensor],
    limit: usize,
) -> io::Result<()> {
    write_header(out, limit)?;

    for sensor in ranked.iter().take(limit) {
        writeln!(out, "ID: {}", sensor.info.id)?;
        writeln!(out, "Type: {}", type_name(sensor))?;
        writeln!(
            out,
            "Location: {}",
            format_location(sensor.info.location.as_ref())
        )?;
        writeln!(
            out,
            "Parameters ({}): {}",
            sensor.param_count,
            join_params(&sensor.params)
        )?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}

pub fn render_table(ranked: &[RankedSensor], limit: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Type", "Location", "Count", "Parameters"]);

    for sensor in ranked.iter().take(limit) {
        table.add_row(vec![
            sensor.info.id.to_string(),
            type_name(sensor).to_string(),
            format_location(sensor.info.location.as_ref()),
            sensor.param_count.to_string(),
            join_params(&sensor.params),
        ]);
    }

    table
}

pub(crate) fn render_table_report<W: Write>(
    out: &mut W,
    ranked: &[RankedSensor],
    limit: usize,
) -> io::Result<()> {
    write_header(out, limit)?;
    if limit == 0 || ranked.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", render_table(ranked, limit))
}
