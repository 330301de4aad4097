use lernio_core::models::Lesson;
use lernio_core::seed;
use lernio_recommend::keywords::completion_keywords;
use lernio_recommend::rank::match_score;
use lernio_recommend::recommend;

fn complete(lessons: &mut [Lesson], id: &str) {
    let lesson = lessons.iter_mut().find(|l| l.id == id).unwrap();
    lesson.completed = true;
    lesson.date_completed = Some("Aug 25, 2026, 10:00 AM".to_string());
}

fn completed(lessons: &[Lesson]) -> Vec<&Lesson> {
    lessons.iter().filter(|l| l.completed).collect()
}

#[test]
fn no_completions_recommends_by_popularity() {
    // Seed likes are [24, 18, 32, 27, 41] for ids "1".."5", so the
    // popularity order is 5, 3, 4, 1, 2, truncated to the top three.
    let lessons = seed::default_lessons();
    let recs = recommend(&lessons, &[]);

    let ids: Vec<&str> = recs.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "3", "4"]);
}

#[test]
fn popularity_ties_keep_catalogue_order() {
    let mut lessons = seed::default_lessons();
    for lesson in &mut lessons {
        lesson.likes = 10;
    }

    let recs = recommend(&lessons, &[]);
    let ids: Vec<&str> = recs.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn never_more_than_three_and_never_a_completed_lesson() {
    let mut lessons = seed::default_lessons();
    complete(&mut lessons, "1");
    complete(&mut lessons, "3");

    let done = completed(&lessons);
    let recs = recommend(&lessons, &done);

    assert!(recs.len() <= 3);
    assert!(recs.iter().all(|l| !l.completed));
    assert!(recs.iter().all(|l| l.id != "1" && l.id != "3"));
}

#[test]
fn keyword_overlap_outranks_likes() {
    // Completing the Math lesson yields keywords [math, basics, addition,
    // subtraction]. Only "Computer Science - Algorithms Basics" shares a
    // word ("basics"), so it ranks first despite the Science lesson's
    // higher-liked neighbors; the rest fall back to likes descending.
    let mut lessons = seed::default_lessons();
    complete(&mut lessons, "1");

    let done = completed(&lessons);
    let recs = recommend(&lessons, &done);

    let ids: Vec<&str> = recs.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "3", "4"]);
}

#[test]
fn keyword_scores_break_ties_by_likes() {
    let mut lessons = vec![
        Lesson::new("a", "Drawing Fundamentals", "Sketching basics.", lernio_core::models::Difficulty::Beginner),
        Lesson::new("b", "Painting Fundamentals", "Color theory.", lernio_core::models::Difficulty::Beginner),
        Lesson::new("c", "Music Fundamentals", "Rhythm and melody.", lernio_core::models::Difficulty::Beginner),
    ];
    lessons[1].likes = 9;
    lessons[2].likes = 4;

    let mut all = lessons.clone();
    all.push(Lesson::new("d", "Guitar Fundamentals", "Chords.", lernio_core::models::Difficulty::Beginner));
    complete(&mut all, "d");

    // Every uncompleted lesson scores 1 on "fundamentals", so likes
    // decide: b (9), c (4), a (0).
    let done = completed(&all);
    let recs = recommend(&all, &done);
    let ids: Vec<&str> = recs.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn keywords_drop_short_tokens_and_keep_duplicates() {
    let mut one = Lesson::new("x", "Intro to Basics", "", lernio_core::models::Difficulty::Beginner);
    let mut two = Lesson::new("y", "Guitar Basics", "", lernio_core::models::Difficulty::Beginner);
    one.completed = true;
    two.completed = true;

    let keywords = completion_keywords(&[&one, &two]);
    // "to" is dropped; "basics" appears once per completed title.
    assert_eq!(keywords, vec!["intro", "basics", "guitar", "basics"]);
}

#[test]
fn repeated_keywords_score_once_per_occurrence() {
    let keywords = vec!["basics".to_string(), "basics".to_string(), "guitar".to_string()];
    assert_eq!(match_score("Algorithms Basics", &keywords), 2);
    assert_eq!(match_score("Guitar Basics", &keywords), 3);
    assert_eq!(match_score("Ancient History", &keywords), 0);
}

#[test]
fn keyword_matches_as_substring_of_a_title_word() {
    let keywords = vec!["photo".to_string()];
    // "photosynthesis" contains "photo".
    assert_eq!(match_score("Introduction to Photosynthesis", &keywords), 1);
}
