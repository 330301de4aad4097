use lernio_core::models::Lesson;

use crate::keywords::completion_keywords;

/// A recommendation list never exceeds this many lessons.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Rank lessons for the learner given their completion history.
///
/// With no completions yet, falls back to popularity: the whole catalogue
/// by likes descending. Otherwise, uncompleted lessons are scored by
/// keyword overlap with completed titles and ranked by score descending,
/// then likes descending. All sorts are stable, so equally-ranked lessons
/// keep their catalogue order. Returns at most [`MAX_RECOMMENDATIONS`].
pub fn recommend<'a>(lessons: &'a [Lesson], completed: &[&Lesson]) -> Vec<&'a Lesson> {
    if completed.is_empty() {
        let mut by_likes: Vec<&Lesson> = lessons.iter().collect();
        by_likes.sort_by(|a, b| b.likes.cmp(&a.likes));
        by_likes.truncate(MAX_RECOMMENDATIONS);
        return by_likes;
    }

    let keywords = completion_keywords(completed);

    let mut scored: Vec<(usize, &Lesson)> = lessons
        .iter()
        .filter(|lesson| !lesson.completed)
        .map(|lesson| (match_score(&lesson.title, &keywords), lesson))
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then(b.likes.cmp(&a.likes))
    });

    scored
        .into_iter()
        .map(|(_, lesson)| lesson)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

/// Count the keywords that match somewhere in `title`.
///
/// A keyword matches when at least one whitespace-separated title word
/// contains it as a substring. Counted over the raw keyword list, so a
/// repeated keyword counts once per repetition.
pub fn match_score(title: &str, keywords: &[String]) -> usize {
    let title = title.to_lowercase();
    let words: Vec<&str> = title.split_whitespace().collect();

    keywords
        .iter()
        .filter(|keyword| words.iter().any(|word| word.contains(keyword.as_str())))
        .count()
}
