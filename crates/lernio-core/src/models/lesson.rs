use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Difficulty tier of a lesson. Closed enumeration; persisted by variant
/// name ("Beginner", "Intermediate", "Advanced").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Difficulty filter applied to the catalogue view. Session-local state,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => wanted == difficulty,
        }
    }
}

/// A single educational item with difficulty, completion, and vote state.
///
/// Persisted under the `lessons` key as a camelCase JSON record. The id is
/// assigned once at creation and never reused; `date_completed` is present
/// iff `completed` is true.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub completed: bool,
    /// Net vote count. Can go negative.
    pub likes: i64,
    /// The current user's standing vote: `Some(true)` liked,
    /// `Some(false)` disliked, `None` not voted.
    pub user_liked: Option<bool>,
    /// Human-readable completion timestamp, e.g. "Aug 25, 2026, 02:14 PM".
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_completed: Option<String>,
}

impl Lesson {
    /// A fresh lesson: uncompleted, unvoted, zero likes.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            difficulty,
            completed: false,
            likes: 0,
            user_liked: None,
            date_completed: None,
        }
    }
}
