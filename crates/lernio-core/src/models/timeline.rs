use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One completion event in the learner's timeline.
///
/// Denormalized historical record: `lesson_title` is a snapshot taken at
/// completion time and does not follow later edits to the lesson. Entries
/// are appended in completion order and removed by `lesson_id` match when
/// a lesson is un-marked complete.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TimelineEntry {
    pub lesson_id: String,
    pub lesson_title: String,
    pub date_completed: String,
}
