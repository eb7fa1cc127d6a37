use std::fmt;

/// Difficulty bucket under which the provider groups tag counts.
///
/// Variant order is the order the provider delivers the buckets and doubles as
/// the tie-break order when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Advanced,
    Intermediate,
    Fundamental,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Advanced, Self::Intermediate, Self::Fundamental];

    /// Canonical lowercase name, as used by the provider and in ignore lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
            Self::Fundamental => "fundamental",
        }
    }

    /// Name shown in the chart's trailing column.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Fundamental => "Fundamental",
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One provider record: a tag and how many problems were solved under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub label: String,
    pub count: u64,
}

impl TagCount {
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Raw provider data keyed by category. Missing buckets hold zero entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCounts {
    buckets: [Vec<TagCount>; 3],
}

impl CategorizedCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, category: Category, tags: Vec<TagCount>) -> Self {
        self.set(category, tags);
        self
    }

    pub fn set(&mut self, category: Category, tags: Vec<TagCount>) {
        self.buckets[category as usize] = tags;
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &[TagCount] {
        &self.buckets[category as usize]
    }

    /// Buckets in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[TagCount])> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Total number of tag records across all buckets.
    #[must_use]
    pub fn total_tags(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// A tag that survived filtering, tagged with its source category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: String,
    pub count: u64,
    pub category: Category,
}

impl SkillEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64, category: Category) -> Self {
        Self {
            label: label.into(),
            count,
            category,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
