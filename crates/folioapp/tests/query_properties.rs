use folioapp::content::ContentStore;
use folioapp::model::{ContentRecord, FilterState, ALL, CHIP_ALL};
use folioapp::query::{chip_filter, search};

fn alpha() -> ContentRecord {
    ContentRecord {
        key: "alpha".to_string(),
        title: "Alpha project".to_string(),
        description: "A Kotlin app".to_string(),
        category: "Mobile".to_string(),
        tech: vec!["Kotlin".to_string()],
        features: vec!["Widgets".to_string()],
        link: "https://example.com/alpha".to_string(),
    }
}

fn filter(term: &str, category: &str, technology: &str) -> FilterState {
    FilterState {
        search_term: term.to_string(),
        category: category.to_string(),
        technology: technology.to_string(),
    }
}

/// `found` appears in `records` in the same relative order.
fn is_ordered_subsequence(found: &[&ContentRecord], records: &[ContentRecord]) -> bool {
    let mut rest = records.iter();
    found
        .iter()
        .all(|wanted| rest.any(|candidate| candidate.key == wanted.key))
}

#[test]
fn test_results_are_ordered_subsequences() {
    let store = ContentStore::bundled().unwrap();
    let records = store.records();

    let filters = [
        filter("", ALL, ALL),
        filter("a", ALL, ALL),
        filter("", "Mobile", ALL),
        filter("", ALL, "TypeScript"),
        filter("sync", "Mobile", ALL),
    ];
    for f in &filters {
        assert!(is_ordered_subsequence(&search(records, f), records));
    }

    for chip in ["Kotlin", "Web", "beacon", CHIP_ALL] {
        assert!(is_ordered_subsequence(&chip_filter(records, chip), records));
    }
}

#[test]
fn test_sentinel_filter_returns_records_unchanged() {
    let store = ContentStore::bundled().unwrap();
    let found: Vec<ContentRecord> = search(store.records(), &FilterState::default())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(found, store.records());
}

#[test]
fn test_and_semantics_excludes_category_mismatch() {
    let records = vec![alpha()];
    assert!(search(&records, &filter("alpha", "Web", ALL)).is_empty());
    assert_eq!(search(&records, &filter("alpha", "Mobile", ALL)).len(), 1);
}

#[test]
fn test_chip_or_semantics() {
    let records = vec![alpha()];
    assert_eq!(chip_filter(&records, "Kotlin").len(), 1);
    assert_eq!(chip_filter(&records, "Mobile").len(), 1);
    assert_eq!(chip_filter(&records, "alpha").len(), 1);
    assert!(chip_filter(&records, "Web").is_empty());
}

#[test]
fn test_case_rules() {
    let records = vec![alpha()];
    assert_eq!(search(&records, &filter("ALPHA", ALL, ALL)).len(), 1);
    assert!(search(&records, &filter("", "mobile", ALL)).is_empty());
}

#[test]
fn test_empty_inputs() {
    assert!(search(&[], &filter("x", "Mobile", "Kotlin")).is_empty());
    let store = ContentStore::bundled().unwrap();
    assert!(search(store.records(), &filter("zzz-no-match", ALL, ALL)).is_empty());
}

#[test]
fn test_bundled_facets() {
    let store = ContentStore::bundled().unwrap();
    assert_eq!(store.categories(), vec!["Mobile", "Web", "Open Source"]);
    let tech = store.technologies();
    assert_eq!(tech.first(), Some(&"Kotlin"));
    assert_eq!(
        tech.iter().filter(|t| **t == "Kotlin").count(),
        1,
        "technologies must be distinct"
    );
}
