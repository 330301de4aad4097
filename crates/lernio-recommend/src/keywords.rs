use lernio_core::models::Lesson;

/// Tokens shorter than this carry no signal ("the", "and", "to", ...).
const MIN_KEYWORD_LEN: usize = 4;

/// Extract ranking keywords from the titles of completed lessons.
///
/// Titles are whitespace-tokenized and lower-cased; short tokens are
/// dropped. The result is a flat list, NOT a set: a keyword that appears
/// in several completed titles occurs once per appearance and contributes
/// one score point per occurrence in [`crate::rank::match_score`].
pub fn completion_keywords(completed: &[&Lesson]) -> Vec<String> {
    completed
        .iter()
        .flat_map(|lesson| lesson.title.split_whitespace())
        .map(str::to_lowercase)
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .collect()
}
