use super::model::SkillEntry;

/// Number of entries the published chart shows.
pub const TOP_N: usize = 5;

/// Sorts entries by count, highest first.
///
/// The sort is stable: entries with equal counts keep their input order, so the
/// category-then-provider order produced by filtering breaks ties.
#[must_use]
pub fn rank(mut entries: Vec<SkillEntry>) -> Vec<SkillEntry> {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// The first `n` ranked entries, or all of them when there are fewer.
#[must_use]
pub fn top_n(ranked: &[SkillEntry], n: usize) -> &[SkillEntry] {
    &ranked[..n.min(ranked.len())]
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
