pub mod lesson;
pub mod timeline;

pub use lesson::{Difficulty, DifficultyFilter, Lesson};
pub use timeline::TimelineEntry;
