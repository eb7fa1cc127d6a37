use super::*;

#[test]
fn category_from_name_is_case_insensitive() {
    assert_eq!(Category::from_name("advanced"), Some(Category::Advanced));
    assert_eq!(Category::from_name("ADVANCED"), Some(Category::Advanced));
    assert_eq!(
        Category::from_name("Intermediate"),
        Some(Category::Intermediate)
    );
    assert_eq!(Category::from_name("fUnDaMeNtAl"), Some(Category::Fundamental));
    assert_eq!(Category::from_name("Array"), None);
    assert_eq!(Category::from_name(""), None);
}

#[test]
fn category_display_capitalizes_first_letter() {
    assert_eq!(Category::Advanced.to_string(), "Advanced");
    assert_eq!(Category::Fundamental.display_name(), "Fundamental");
    assert_eq!(Category::Intermediate.as_str(), "intermediate");
}

#[test]
fn category_order_matches_provider_order() {
    assert!(Category::Advanced < Category::Intermediate);
    assert!(Category::Intermediate < Category::Fundamental);
    assert_eq!(
        Category::ALL,
        [
            Category::Advanced,
            Category::Intermediate,
            Category::Fundamental
        ]
    );
}

#[test]
fn categorized_counts_missing_bucket_is_empty() {
    let counts = CategorizedCounts::new()
        .with(Category::Fundamental, vec![TagCount::new("Array", 50)]);

    assert!(counts.get(Category::Advanced).is_empty());
    assert!(counts.get(Category::Intermediate).is_empty());
    assert_eq!(counts.get(Category::Fundamental).len(), 1);
    assert_eq!(counts.total_tags(), 1);
}

#[test]
fn categorized_counts_iterates_in_category_order() {
    let counts = CategorizedCounts::new()
        .with(Category::Fundamental, vec![TagCount::new("Array", 1)])
        .with(Category::Advanced, vec![TagCount::new("Trie", 2)]);

    let order: Vec<_> = counts.iter().map(|(category, _)| category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}
