use super::*;
use crate::stats::model::TagCount;

fn sample_counts() -> CategorizedCounts {
    CategorizedCounts::new()
        .with(
            Category::Advanced,
            vec![
                TagCount::new("Dynamic Programming", 30),
                TagCount::new("Backtracking", 12),
            ],
        )
        .with(
            Category::Intermediate,
            vec![TagCount::new("Hash Table", 25), TagCount::new("Math", 18)],
        )
        .with(
            Category::Fundamental,
            vec![TagCount::new("Array", 50), TagCount::new("String", 20)],
        )
}

fn labels(entries: &[SkillEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.label.as_str()).collect()
}

// =============================================================================
// IgnoreSet parsing
// =============================================================================

#[test]
fn parse_none_is_empty() {
    assert!(IgnoreSet::parse(None).is_empty());
}

#[test]
fn parse_trims_and_drops_blank_entries() {
    let set = IgnoreSet::parse(Some(" array ,, ,  hash table "));
    let labels: Vec<_> = set.labels().collect();
    assert_eq!(labels, vec!["Array", "Hash Table"]);
    assert_eq!(set.categories().count(), 0);
}

#[test]
fn parse_empty_string_is_empty() {
    assert!(IgnoreSet::parse(Some("")).is_empty());
    assert!(IgnoreSet::parse(Some(" , ,")).is_empty());
}

#[test]
fn parse_recognizes_categories_case_insensitively() {
    let set = IgnoreSet::parse(Some("ADVANCED, Fundamental"));
    assert!(set.ignores_category(Category::Advanced));
    assert!(set.ignores_category(Category::Fundamental));
    assert!(!set.ignores_category(Category::Intermediate));
    assert_eq!(set.labels().count(), 0);
}

#[test]
fn category_names_never_become_label_rules() {
    let set = IgnoreSet::parse(Some("advanced"));
    assert!(!set.ignores_label("Advanced"));
    assert!(!set.ignores_label("advanced"));
}

#[test]
fn label_rules_match_title_cased_form_only() {
    let set = IgnoreSet::parse(Some("hash TABLE"));
    assert!(set.ignores_label("Hash Table"));
    assert!(!set.ignores_label("hash table"));
    assert!(!set.ignores_label("Hash TABLE"));
}

#[test]
fn duplicate_label_rules_collapse() {
    let set = IgnoreSet::parse(Some("array,Array,ARRAY"));
    assert_eq!(set.labels().count(), 1);
}

// =============================================================================
// title_case
// =============================================================================

#[test]
fn title_case_capitalizes_each_word() {
    assert_eq!(title_case("hash table"), "Hash Table");
    assert_eq!(title_case("DYNAMIC programming"), "Dynamic Programming");
}

#[test]
fn title_case_treats_non_letters_as_word_breaks() {
    assert_eq!(title_case("depth-first search"), "Depth-First Search");
    assert_eq!(title_case("two pointers2x"), "Two Pointers2X");
}

#[test]
fn title_case_lowercases_inner_connectives() {
    assert_eq!(title_case("divide and conquer"), "Divide And Conquer");
}

// =============================================================================
// filter
// =============================================================================

#[test]
fn empty_ignore_list_keeps_every_pair() {
    let raw = sample_counts();
    let entries = filter(&raw, &IgnoreSet::new());
    assert_eq!(entries.len(), raw.total_tags());
}

#[test]
fn output_follows_category_then_provider_order() {
    let entries = filter(&sample_counts(), &IgnoreSet::new());
    assert_eq!(
        labels(&entries),
        vec![
            "Dynamic Programming",
            "Backtracking",
            "Hash Table",
            "Math",
            "Array",
            "String"
        ]
    );
}

#[test]
fn entries_carry_their_source_category() {
    let entries = filter(&sample_counts(), &IgnoreSet::new());
    let array = entries.iter().find(|e| e.label == "Array").unwrap();
    assert_eq!(array.category, Category::Fundamental);
    assert_eq!(array.category.display_name(), "Fundamental");
    assert_eq!(array.count, 50);
}

#[test]
fn ignored_category_drops_all_its_labels() {
    let ignore = IgnoreSet::parse(Some("intermediate"));
    let entries = filter(&sample_counts(), &ignore);
    assert!(
        entries
            .iter()
            .all(|e| e.category != Category::Intermediate)
    );
    assert_eq!(entries.len(), 4);
}

#[test]
fn ignored_category_and_label_combination() {
    let ignore = IgnoreSet::parse(Some("Advanced, Array"));
    let entries = filter(&sample_counts(), &ignore);
    assert!(entries.iter().all(|e| e.category != Category::Advanced));
    assert!(entries.iter().all(|e| e.label != "Array"));
    assert_eq!(labels(&entries), vec!["Hash Table", "Math", "String"]);
}

#[test]
fn label_rule_applies_across_categories() {
    let raw = CategorizedCounts::new()
        .with(Category::Advanced, vec![TagCount::new("Graph", 3)])
        .with(Category::Intermediate, vec![TagCount::new("Graph", 7)]);
    let entries = filter(&raw, &IgnoreSet::parse(Some("graph")));
    assert!(entries.is_empty());
}

#[test]
fn label_rule_is_case_sensitive_against_provider_labels() {
    let raw = CategorizedCounts::new()
        .with(Category::Advanced, vec![TagCount::new("Divide and Conquer", 4)]);
    let entries = filter(&raw, &IgnoreSet::parse(Some("divide and conquer")));
    assert_eq!(entries.len(), 1);
}

#[test]
fn ignoring_everything_yields_no_entries() {
    let ignore = IgnoreSet::parse(Some("advanced,intermediate,fundamental"));
    assert!(filter(&sample_counts(), &ignore).is_empty());
}

#[test]
fn empty_buckets_yield_no_entries() {
    let entries = filter(&CategorizedCounts::new(), &IgnoreSet::new());
    assert!(entries.is_empty());
}
