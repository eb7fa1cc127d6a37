//! One end-to-end run: fetch, filter, rank, render, publish.

use crate::config::Settings;
use crate::error::Result;
use crate::output::BarChart;
use crate::remote::{PublishSink, StatsProvider};
use crate::stats::{CategorizedCounts, IgnoreSet, TOP_N, filter, rank, top_n};

/// What a run produced, for verbose reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The published chart text.
    pub chart: String,
    /// Tags returned by the provider across all categories.
    pub fetched: usize,
    /// Tags left after the ignore list was applied.
    pub kept: usize,
    /// Rows in the chart.
    pub rendered: usize,
}

/// Turns raw per-category counts into the chart text and row counts.
///
/// Pure: no I/O happens here.
#[must_use]
pub fn compose(raw: &CategorizedCounts, ignore: &IgnoreSet, chart: &BarChart) -> RunReport {
    let ranked = rank(filter(raw, ignore));
    let top = top_n(&ranked, TOP_N);
    RunReport {
        chart: chart.render(top),
        fetched: raw.total_tags(),
        kept: ranked.len(),
        rendered: top.len(),
    }
}

/// Fetches the user's stats, renders the chart and publishes it.
///
/// The chart is published even when it is empty.
///
/// # Errors
/// Returns the provider's error before anything is published, or the sink's
/// error if publishing fails.
pub fn run(
    provider: &impl StatsProvider,
    settings: &Settings,
    sink: &impl PublishSink,
) -> Result<RunReport> {
    let raw = provider.fetch(&settings.username)?;
    let chart = BarChart::new(settings.width).hide_category(settings.hide_category);
    let report = compose(&raw, &settings.ignore, &chart);
    sink.publish(settings.target(), &report.chart)?;
    Ok(report)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
