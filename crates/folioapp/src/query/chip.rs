//! Chip query: one value matched against key, technology tags or category.

use crate::model::{ContentRecord, CHIP_ALL};

/// Returns the records the chip `value` selects, in input order.
///
/// A record matches when `value` is the [`CHIP_ALL`] sentinel, equals the
/// record key, is one of its technology tags, or equals its category. All
/// comparisons are exact.
pub fn chip_filter<'a>(records: &'a [ContentRecord], value: &str) -> Vec<&'a ContentRecord> {
    records.iter().filter(|r| chip_matches(r, value)).collect()
}

pub fn chip_matches(record: &ContentRecord, value: &str) -> bool {
    value == CHIP_ALL
        || record.key == value
        || record.has_tech(value)
        || record.category == value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, category: &str, tech: &[&str]) -> ContentRecord {
        ContentRecord {
            key: key.to_string(),
            title: key.to_uppercase(),
            description: String::new(),
            category: category.to_string(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            features: vec![],
            link: String::new(),
        }
    }

    fn sample() -> Vec<ContentRecord> {
        vec![
            record("alpha", "Mobile", &["Kotlin"]),
            record("beta", "Web", &["React"]),
            record("gamma", "Mobile", &["Swift", "Kotlin"]),
        ]
    }

    fn keys(found: &[&ContentRecord]) -> Vec<String> {
        found.iter().map(|r| r.key.clone()).collect()
    }

    #[test]
    fn test_sentinel_selects_everything() {
        let records = sample();
        assert_eq!(
            keys(&chip_filter(&records, CHIP_ALL)),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn test_lowercase_all_is_not_the_chip_sentinel() {
        let records = sample();
        assert!(chip_filter(&records, "all").is_empty());
    }

    #[test]
    fn test_matches_tech_membership() {
        let records = sample();
        assert_eq!(keys(&chip_filter(&records, "Kotlin")), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_matches_category() {
        let records = sample();
        assert_eq!(keys(&chip_filter(&records, "Mobile")), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_matches_key() {
        let records = sample();
        assert_eq!(keys(&chip_filter(&records, "beta")), vec!["beta"]);
    }

    #[test]
    fn test_comparisons_are_exact() {
        let records = sample();
        assert!(chip_filter(&records, "mobile").is_empty());
        assert!(chip_filter(&records, "Kot").is_empty());
    }

    #[test]
    fn test_unknown_value_and_empty_input_yield_empty() {
        let records = sample();
        assert!(chip_filter(&records, "Haskell").is_empty());
        assert!(chip_filter(&[], CHIP_ALL).is_empty());
    }
}
