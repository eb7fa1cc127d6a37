//! Fixed-width horizontal bar chart.
//!
//! Row template:
//!
//! ```text
//! {label:<L} ({count:>D}) {█ × filled}{░ × empty} {category}
//! ```
//!
//! `L + D + 4 + bar` equals the width budget. The label column shrinks (with an
//! ellipsis) before the budget is exceeded, and the bar clamps at zero. The
//! count column is never cut; [`MIN_WIDTH`] is wide enough for any `u64`.

use std::fmt::Write;

use crate::stats::SkillEntry;

/// Default character budget for the label, count and bar of one row.
pub const DEFAULT_WIDTH: usize = 46;

/// Parentheses around the count plus the two separating spaces.
const ROW_PUNCTUATION: usize = 4;

/// Digits in `u64::MAX`.
const MAX_COUNT_DIGITS: usize = 20;

/// Narrowest budget that fits a row for every possible count.
pub const MIN_WIDTH: usize = MAX_COUNT_DIGITS + ROW_PUNCTUATION;

const FILLED_GLYPH: char = '█';
const EMPTY_GLYPH: char = '░';
const ELLIPSIS: char = '…';

/// Column widths shared by every row of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub label_width: usize,
    pub count_width: usize,
    pub bar_length: usize,
    pub max_count: u64,
}

impl ChartLayout {
    /// Computes the layout from the entries actually being rendered.
    #[must_use]
    pub fn compute(entries: &[SkillEntry], width: usize) -> Self {
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        let count_width = digit_count(max_count);
        let max_label = entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0);

        let label_room = width.saturating_sub(count_width + ROW_PUNCTUATION);
        let label_width = max_label.min(label_room);
        let bar_length = width.saturating_sub(label_width + count_width + ROW_PUNCTUATION);

        Self {
            label_width,
            count_width,
            bar_length,
            max_count,
        }
    }

    /// Filled glyphs for `count`: `count / max_count * bar_length`, rounded half up.
    ///
    /// Computed on integers so `.5` boundaries are exact. A chart whose largest
    /// count is zero has no filled glyphs.
    #[must_use]
    pub fn filled(&self, count: u64) -> usize {
        if self.max_count == 0 || self.bar_length == 0 {
            return 0;
        }
        let count = u128::from(count.min(self.max_count));
        let max = u128::from(self.max_count);
        let bar = self.bar_length as u128;
        let filled = (2 * count * bar + max) / (2 * max);
        usize::try_from(filled).map_or(self.bar_length, |f| f.min(self.bar_length))
    }
}

/// Layout of a single chart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub label: String,
    pub count: u64,
    pub filled: usize,
    pub empty: usize,
    pub category_label: &'static str,
}

/// Renders ranked skill entries as a text bar chart.
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    width: usize,
    hide_category: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl BarChart {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            hide_category: false,
        }
    }

    /// Leave the trailing category column empty.
    #[must_use]
    pub const fn hide_category(mut self, hide: bool) -> Self {
        self.hide_category = hide;
        self
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn layout(&self, entries: &[SkillEntry]) -> ChartLayout {
        ChartLayout::compute(entries, self.width)
    }

    #[must_use]
    pub fn rows(&self, entries: &[SkillEntry]) -> Vec<RenderRow> {
        let layout = self.layout(entries);
        entries
            .iter()
            .map(|entry| {
                let filled = layout.filled(entry.count);
                RenderRow {
                    label: fit_label(&entry.label, layout.label_width),
                    count: entry.count,
                    filled,
                    empty: layout.bar_length - filled,
                    category_label: if self.hide_category {
                        ""
                    } else {
                        entry.category.display_name()
                    },
                }
            })
            .collect()
    }

    /// Renders one newline-terminated row per entry, in the given order.
    ///
    /// No entries render to the empty string.
    #[must_use]
    pub fn render(&self, entries: &[SkillEntry]) -> String {
        let layout = self.layout(entries);
        let mut output = String::new();
        for row in self.rows(entries) {
            let _ = writeln!(
                output,
                "{label:<lw$} ({count:>cw$}) {filled}{empty} {category}",
                label = row.label,
                lw = layout.label_width,
                count = row.count,
                cw = layout.count_width,
                filled = glyphs(FILLED_GLYPH, row.filled),
                empty = glyphs(EMPTY_GLYPH, row.empty),
                category = row.category_label,
            );
        }
        output
    }
}

fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

fn glyphs(glyph: char, n: usize) -> String {
    std::iter::repeat_n(glyph, n).collect()
}

/// Cuts `label` to `width` characters, marking the cut with an ellipsis.
fn fit_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = label.chars().take(width - 1).collect();
    fitted.push(ELLIPSIS);
    fitted
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
