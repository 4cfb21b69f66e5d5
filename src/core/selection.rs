use crate::db::Question;
use rand::seq::SliceRandom;

/// Returns the page window `[(page-1)*size, page*size)` of `records`.
///
/// Pages are numbered from 1; page 0 and any window past the end of the
/// collection yield an empty vector.
///
/// # Arguments
///
/// * `records` - The already-fetched collection to slice
/// * `page_number` - 1-based page number
/// * `page_size` - Number of records per page
pub fn page_window<T: Clone>(records: &[T], page_number: usize, page_size: usize) -> Vec<T> {
    if page_number == 0 || page_size == 0 {
        return Vec::new();
    }

    let start = match (page_number - 1).checked_mul(page_size) {
        Some(start) if start < records.len() => start,
        _ => return Vec::new(),
    };
    let end = usize::min(start.saturating_add(page_size), records.len());

    records[start..end].to_vec()
}

/// Returns the questions whose text contains `term`, case-insensitively.
///
/// Input order is preserved, so callers passing primary-key ordered rows get
/// primary-key ordered matches back.
///
/// # Arguments
///
/// * `records` - Questions to search through
/// * `term` - Substring to match against the question text
pub fn search_by_substring(records: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();

    records
        .iter()
        .filter(|record| record.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns the questions whose category reference equals `category_id`
///
/// # Arguments
///
/// * `records` - Questions to filter
/// * `category_id` - Exact category id to keep
pub fn filter_by_category(records: &[Question], category_id: i32) -> Vec<Question> {
    records
        .iter()
        .filter(|record| record.category == category_id)
        .cloned()
        .collect()
}

/// Picks one question uniformly at random from `candidates`, skipping any
/// whose id appears in `excluded_ids`.
///
/// Returns `None` when exclusion empties the pool, which callers surface as
/// the no-selection condition.
///
/// # Arguments
///
/// * `candidates` - The quiz candidate pool
/// * `excluded_ids` - Ids of previously served questions
pub fn select_random_excluding(candidates: &[Question], excluded_ids: &[i32]) -> Option<Question> {
    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|candidate| !excluded_ids.contains(&candidate.id))
        .collect();

    remaining
        .choose(&mut rand::thread_rng())
        .map(|picked| (*picked).clone())
}
