//! lernio-lessons
//!
//! The lesson state container. Owns the in-memory catalogue and the
//! completion timeline, applies every mutation, derives the filtered /
//! completed / recommended views, and re-persists itself through
//! lernio-store after each change. Presentation layers hold a
//! [`LessonRepository`] and go through its named operations; they never
//! touch the records directly.

pub mod repository;

pub use repository::LessonRepository;
