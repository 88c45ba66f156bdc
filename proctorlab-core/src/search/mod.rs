//! Record list filtering
//!
//! Case-insensitive substring search over the fields shown in the list
//! view (project name and sample id). A blank query matches everything.

use crate::models::SoilProctor;

/// Returns true when the record matches the search query.
///
/// Matching is case-insensitive over `project_name` and `sample_id`; a
/// query that is empty or all whitespace matches every record.
#[must_use]
pub fn matches_query(record: &SoilProctor, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    record.project_name.to_lowercase().contains(&query)
        || record.sample_id.to_lowercase().contains(&query)
}

/// Filters records down to those matching the query, preserving order.
#[must_use]
pub fn filter<'a>(records: &'a [SoilProctor], query: &str) -> Vec<&'a SoilProctor> {
    records
        .iter()
        .filter(|record| matches_query(record, query))
        .collect()
}
