//! Rendering of calculation results: text table, JSON or CSV.

use crate::core::allocator::Allocation;
use crate::errors::{AppError, AppResult};
use crate::utils::table::{Column, Table};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Flat row used by every output format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub task: String,
    pub ratio: String,
    pub time: String,
    pub minutes: f64,
}

/// Pair each allocation with the ratio text it came from.
pub fn build_rows(label: &str, ratios: &[String], results: &[Allocation]) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, a)| ResultRow {
            task: format!("{} {}", label, i + 1),
            ratio: ratios.get(i).cloned().unwrap_or_default(),
            time: a.formatted.clone(),
            minutes: a.raw,
        })
        .collect()
}

pub fn render(
    rows: &[ResultRow],
    format: OutputFormat,
    label: &str,
    decimals: usize,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(rows, label, decimals)),
        OutputFormat::Json => render_json(rows),
        OutputFormat::Csv => render_csv(rows),
    }
}

/// Table of shares followed by the bare times, one per line. `label` heads the
/// first column, matching the row names from [`build_rows`].
pub fn render_text(rows: &[ResultRow], label: &str, decimals: usize) -> String {
    let mut table = Table::new(vec![
        Column::new(label),
        Column::new("Ratio"),
        Column::new("Time"),
        Column::new("Minutes"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.task.clone(),
            r.ratio.clone(),
            r.time.clone(),
            format!("approx. {:.*}", decimals, r.minutes),
        ]);
    }

    let mut out = table.render();
    out.push('\n');
    out.push_str("All times:\n");
    for r in rows {
        out.push_str(&r.time);
        out.push('\n');
    }
    out
}

pub fn render_json(rows: &[ResultRow]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn render_csv(rows: &[ResultRow]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}
