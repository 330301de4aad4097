//! First-run seed catalogue.
//!
//! Loaded when the store has no `lessons` key, so a fresh profile starts
//! with the same five lessons as every other fresh profile. Seed ids are
//! the fixed strings "1".."5"; generated ids (UUIDs) can never collide
//! with them.

use crate::models::{Difficulty, Lesson};

/// The five lessons a fresh profile starts with.
pub fn default_lessons() -> Vec<Lesson> {
    vec![
        seed_lesson(
            "1",
            "Math Basics - Addition and Subtraction",
            "Learn the fundamental operations of addition and subtraction with interactive examples.",
            Difficulty::Beginner,
            24,
        ),
        seed_lesson(
            "2",
            "English Grammar - Nouns and Pronouns",
            "Understand the building blocks of sentences with this introduction to nouns and pronouns.",
            Difficulty::Beginner,
            18,
        ),
        seed_lesson(
            "3",
            "Science - Introduction to Photosynthesis",
            "Explore how plants convert sunlight into energy through the process of photosynthesis.",
            Difficulty::Intermediate,
            32,
        ),
        seed_lesson(
            "4",
            "History - Ancient Civilizations",
            "Journey through time to discover the wonders of ancient Egypt, Greece, and Rome.",
            Difficulty::Intermediate,
            27,
        ),
        seed_lesson(
            "5",
            "Computer Science - Algorithms Basics",
            "Learn the fundamentals of algorithmic thinking and problem-solving techniques.",
            Difficulty::Advanced,
            41,
        ),
    ]
}

fn seed_lesson(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    likes: i64,
) -> Lesson {
    Lesson {
        likes,
        ..Lesson::new(id, title, description, difficulty)
    }
}
