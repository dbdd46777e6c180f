//! Subcommand bodies, returning their output as text

use std::fmt::Write;
use std::path::Path;

use socialviz_core::{
    box_plot_shapes, first_seen_order, load_rows, summarize_rows, Config, CoreResult,
    GroupedSummaries, Renderer, ShapeLog,
};

use crate::Format;

/// Summaries for `input`, in the order groups first appear in the file
pub fn summarize(input: &Path, config: &Config, format: Format) -> CoreResult<String> {
    let rows = load_rows(input)?;
    let summaries = summarize_rows(&rows, config)?;
    let order = first_seen_order(rows.iter().map(|row| row.field(config.group_field)));

    match format {
        Format::Table => Ok(render_table(&summaries, &order, &config.group_field.to_string())),
        Format::Json => Ok(format!("{}\n", to_json(&summaries)?)),
    }
}

/// Box plot shapes for `input` as pretty JSON
pub fn shapes(input: &Path, config: &Config) -> CoreResult<String> {
    let rows = load_rows(input)?;
    let summaries = summarize_rows(&rows, config)?;
    let order = first_seen_order(rows.iter().map(|row| row.field(config.group_field)));

    let mut log = ShapeLog::new();
    log.render(&box_plot_shapes(&summaries, &order))?;
    to_json(log.shapes())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_table(summaries: &GroupedSummaries, order: &[String], header: &str) -> String {
    let width = order
        .iter()
        .map(String::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        header, "min", "q1", "median", "q3", "max", "iqr"
    );
    for key in order {
        if let Some(s) = summaries.get(key) {
            let _ = writeln!(
                out,
                "{:<width$}  {:>10.2}  {:>10.2}  {:>10.2}  {:>10.2}  {:>10.2}  {:>10.2}",
                key, s.min, s.q1, s.median, s.q3, s.max, s.iqr
            );
        }
    }
    out
}
