//! Plain-text and JSON renderings of a sweep report.

use std::fmt::Write;

use clap::ValueEnum;
use tariffsweep_core::{AggregatedSeries, SweepReport};

use crate::util::format::{format_axis_value, format_probability, roman};

/// How the binary presents its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Interactive terminal charts
    #[default]
    Chart,
    /// Aligned text table on stdout
    Table,
    /// JSON document on stdout
    Json,
}

/// Panel title for the `index`-th series (0-based), e.g. `(i) scale diseconomy b1`
pub fn series_title(index: usize, series: &AggregatedSeries) -> String {
    format!(
        "({}) {} {}",
        roman(index + 1),
        series.axis.description(),
        series.axis.symbol()
    )
}

/// Render the summary line and one table per series
pub fn render_table(report: &SweepReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "cells: {}  filtered: {}  wins: {}  losses: {}  ties: {}  P(q_m > q_l): {}",
        summary.total_cells,
        summary.filtered_cells,
        summary.wins,
        summary.losses,
        summary.ties,
        format_probability(summary.overall_probability()),
    );

    for (index, series) in report.series.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", series_title(index, series));
        let _ = writeln!(out, "  {:<10} {:>10} {:>10}", series.axis.symbol(), "P", "cells");
        for point in &series.points {
            let _ = writeln!(
                out,
                "  {:<10} {:>10} {:>10}",
                format_axis_value(point.value),
                format_probability(point.probability),
                point.defined_cells,
            );
        }
    }

    out
}

/// Render the report as pretty-printed JSON. Undefined probabilities are `null`.
pub fn render_json(report: &SweepReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
