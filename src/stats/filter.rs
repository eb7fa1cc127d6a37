//! Ignore-list parsing and exclusion of categories and tags.
//!
//! One comma-separated list names both categories and tag labels. An entry that
//! matches a category name (case-insensitively) is a category rule; every other
//! entry is title-cased and compared exactly against tag labels.

use std::collections::BTreeSet;

use indexmap::IndexSet;

use super::model::{CategorizedCounts, Category, SkillEntry};

/// Normalized ignore rules, split into category rules and label rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    categories: BTreeSet<Category>,
    labels: IndexSet<String>,
}

impl IgnoreSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated ignore list. `None` means no exclusions.
    #[must_use]
    pub fn parse(list: Option<&str>) -> Self {
        list.map_or_else(Self::new, |list| Self::from_entries(list.split(',')))
    }

    /// Builds the set from individual raw entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    /// Adds one raw entry, normalizing it. Blank entries are dropped.
    pub fn insert(&mut self, raw: &str) {
        let entry = raw.trim();
        if entry.is_empty() {
            return;
        }
        match Category::from_name(entry) {
            Some(category) => {
                self.categories.insert(category);
            }
            None => {
                self.labels.insert(title_case(entry));
            }
        }
    }

    #[must_use]
    pub fn ignores_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    #[must_use]
    pub fn ignores_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.labels.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    /// Label rules in the order they were first given.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Title-cases `s`: the first letter of every alphabetic run is upper-cased and
/// the rest of the run lower-cased. Any non-letter character ends a run.
///
/// `"hash table"` becomes `"Hash Table"`, `"depth-first SEARCH"` becomes
/// `"Depth-First Search"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Flattens `raw` into skill entries, dropping ignored categories and labels.
///
/// Output order is category order, then provider order within a category.
#[must_use]
pub fn filter(raw: &CategorizedCounts, ignore: &IgnoreSet) -> Vec<SkillEntry> {
    raw.iter()
        .filter(|(category, _)| !ignore.ignores_category(*category))
        .flat_map(|(category, tags)| {
            tags.iter()
                .filter(move |tag| !ignore.ignores_label(&tag.label))
                .map(move |tag| SkillEntry::new(tag.label.clone(), tag.count, category))
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
