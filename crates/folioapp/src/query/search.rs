//! Search-panel query: free-text term AND category AND technology.

use crate::model::{ContentRecord, FilterState, ALL};

/// Returns the records matching every axis of `filter`, in input order.
pub fn search<'a>(records: &'a [ContentRecord], filter: &FilterState) -> Vec<&'a ContentRecord> {
    let term_lower = filter.search_term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_all_axes(record, filter, &term_lower))
        .collect()
}

/// Single-record form of [`search`].
pub fn search_matches(record: &ContentRecord, filter: &FilterState) -> bool {
    matches_all_axes(record, filter, &filter.search_term.to_lowercase())
}

fn matches_all_axes(record: &ContentRecord, filter: &FilterState, term_lower: &str) -> bool {
    matches_term(record, term_lower)
        && (filter.category == ALL || record.category == filter.category)
        && (filter.technology == ALL || record.has_tech(&filter.technology))
}

/// Case-insensitive substring match on title, description or any feature.
fn matches_term(record: &ContentRecord, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(term_lower);

    contains(record.title.as_str())
        || contains(record.description.as_str())
        || record.features.iter().any(|f| contains(f.as_str()))
}
