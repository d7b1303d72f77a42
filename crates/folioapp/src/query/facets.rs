//! Facet extraction, grouping and sorting over records.

use crate::model::ContentRecord;
use std::collections::HashSet;

/// Distinct categories in first-seen order.
pub fn categories(records: &[ContentRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Distinct technology tags in first-seen order.
pub fn technologies(records: &[ContentRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|r| r.tech.iter().map(String::as_str))
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Groups records by category. Groups appear in first-seen order and keep
/// the input order of their members.
pub fn group_by_category<'a, I>(records: I) -> Vec<(&'a str, Vec<&'a ContentRecord>)>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let mut groups: Vec<(&'a str, Vec<&'a ContentRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.category.as_str(), vec![record])),
        }
    }
    groups
}

/// Case-insensitive, stable sort by title.
pub fn sort_by_title(records: &mut [&ContentRecord]) {
    records.sort_by_cached_key(|r| r.title.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, title: &str, category: &str, tech: &[&str]) -> ContentRecord {
        ContentRecord {
            key: key.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            features: vec![],
            link: String::new(),
        }
    }

    fn sample() -> Vec<ContentRecord> {
        vec![
            record("a", "zeta", "Mobile", &["Kotlin", "Room"]),
            record("b", "Alpha", "Web", &["React", "Kotlin"]),
            record("c", "beta", "Mobile", &["Swift"]),
        ]
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories(&sample()), vec!["Mobile", "Web"]);
    }

    #[test]
    fn test_technologies_deduplicated() {
        assert_eq!(
            technologies(&sample()),
            vec!["Kotlin", "Room", "React", "Swift"]
        );
    }

    #[test]
    fn test_grouping_keeps_member_order() {
        let records = sample();
        let groups = group_by_category(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Mobile");
        let mobile: Vec<&str> = groups[0].1.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(mobile, vec!["a", "c"]);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_sort_ignores_case() {
        let records = sample();
        let mut view: Vec<&ContentRecord> = records.iter().collect();
        sort_by_title(&mut view);
        let titles: Vec<&str> = view.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(categories(&[]).is_empty());
        assert!(technologies(&[]).is_empty());
        assert!(group_by_category(&Vec::<ContentRecord>::new()).is_empty());
    }
}
