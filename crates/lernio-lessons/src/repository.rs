use lernio_core::keys;
use lernio_core::models::{Difficulty, DifficultyFilter, Lesson, TimelineEntry};
use lernio_core::seed;
use lernio_store::LocalStore;
use tracing::debug;
use uuid::Uuid;

/// Owned lesson state: catalogue, completion timeline, and the session's
/// search/filter settings.
///
/// Constructed per caller from a [`LocalStore`] handle; there is no
/// global instance. Mutations run synchronously to completion and
/// re-persist both stored keys before returning; operations addressed to
/// an unknown lesson id are no-ops. Derived views are recomputed on each
/// call (linear in catalogue size, which stays in the tens).
pub struct LessonRepository {
    store: LocalStore,
    lessons: Vec<Lesson>,
    timeline: Vec<TimelineEntry>,
    search_term: String,
    difficulty_filter: DifficultyFilter,
}

impl LessonRepository {
    /// Load persisted state, falling back to the seed catalogue and an
    /// empty timeline when nothing usable is stored.
    pub fn load(store: LocalStore) -> Self {
        let lessons: Vec<Lesson> = store.get(keys::LESSONS, seed::default_lessons());
        let timeline: Vec<TimelineEntry> = store.get(keys::TIMELINE, Vec::new());
        debug!(
            lessons = lessons.len(),
            timeline = timeline.len(),
            "lesson state loaded"
        );

        Self {
            store,
            lessons,
            timeline,
            search_term: String::new(),
            difficulty_filter: DifficultyFilter::All,
        }
    }

    // --- mutations -------------------------------------------------------

    /// Append a new lesson to the catalogue. Input validation is the
    /// caller's concern; this always succeeds.
    pub fn add_lesson(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) {
        let id = Uuid::new_v4().to_string();
        self.lessons
            .push(Lesson::new(id, title, description, difficulty));
        self.persist();
    }

    /// Flip a lesson's completion state.
    ///
    /// Completing stamps `date_completed` and appends a timeline entry
    /// with a snapshot of the title; un-completing clears the stamp and
    /// removes that lesson's timeline entries. Unknown ids are ignored.
    pub fn toggle_lesson_completion(&mut self, id: &str) {
        let Some(lesson) = self.lessons.iter_mut().find(|l| l.id == id) else {
            return;
        };

        if lesson.completed {
            lesson.completed = false;
            lesson.date_completed = None;
            self.timeline.retain(|entry| entry.lesson_id != id);
        } else {
            let stamp = completion_timestamp();
            lesson.completed = true;
            lesson.date_completed = Some(stamp.clone());
            let entry = TimelineEntry {
                lesson_id: lesson.id.clone(),
                lesson_title: lesson.title.clone(),
                date_completed: stamp,
            };
            self.timeline.push(entry);
        }

        self.persist();
    }

    /// Register the user's vote on a lesson.
    ///
    /// `likes` moves by the transition between the standing vote and the
    /// new one: first vote ±1, switching sides ±2, re-casting the same
    /// vote 0. The standing vote is then set to `liked` unconditionally.
    /// Unknown ids are ignored.
    pub fn handle_like(&mut self, id: &str, liked: bool) {
        let Some(lesson) = self.lessons.iter_mut().find(|l| l.id == id) else {
            return;
        };

        let delta = match (lesson.user_liked, liked) {
            (None, true) => 1,
            (None, false) => -1,
            (Some(true), false) => -2,
            (Some(false), true) => 2,
            (Some(true), true) | (Some(false), false) => 0,
        };
        lesson.likes += delta;
        lesson.user_liked = Some(liked);

        self.persist();
    }

    /// Set the search term used by [`filtered_lessons`](Self::filtered_lessons).
    /// Session-local; not persisted.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Set the difficulty filter used by [`filtered_lessons`](Self::filtered_lessons).
    /// Session-local; not persisted.
    pub fn set_difficulty_filter(&mut self, filter: DifficultyFilter) {
        self.difficulty_filter = filter;
    }

    // --- derived views ---------------------------------------------------

    /// Lessons whose title or description contains the search term
    /// (case-insensitive) and whose difficulty passes the filter.
    pub fn filtered_lessons(&self) -> Vec<&Lesson> {
        let needle = self.search_term.to_lowercase();
        self.lessons
            .iter()
            .filter(|lesson| {
                let matches_search = lesson.title.to_lowercase().contains(&needle)
                    || lesson.description.to_lowercase().contains(&needle);
                matches_search && self.difficulty_filter.matches(lesson.difficulty)
            })
            .collect()
    }

    pub fn completed_lessons(&self) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.completed).collect()
    }

    /// Completed share of the catalogue as a whole percentage, rounded
    /// half away from zero. 0 for an empty catalogue.
    pub fn progress_percentage(&self) -> u32 {
        let total = self.lessons.len();
        if total == 0 {
            return 0;
        }
        let completed = self.lessons.iter().filter(|l| l.completed).count();
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }

    /// Up to three lessons ranked for the learner; see lernio-recommend.
    pub fn recommended_lessons(&self) -> Vec<&Lesson> {
        let completed = self.completed_lessons();
        lernio_recommend::recommend(&self.lessons, &completed)
    }

    // --- read access -----------------------------------------------------

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn difficulty_filter(&self) -> DifficultyFilter {
        self.difficulty_filter
    }

    /// Write both stored keys. Two independent best-effort writes; a
    /// crash between them can leave the keys mutually inconsistent, which
    /// the load path tolerates.
    fn persist(&self) {
        self.store.set(keys::LESSONS, &self.lessons);
        self.store.set(keys::TIMELINE, &self.timeline);
    }
}

/// Human-readable local timestamp, e.g. "Aug 25, 2026, 02:14 PM".
fn completion_timestamp() -> String {
    jiff::Zoned::now()
        .strftime("%b %-d, %Y, %I:%M %p")
        .to_string()
}
