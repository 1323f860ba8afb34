use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking recurrence mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// A single lesson at the chosen time.
    #[default]
    Once,
    /// The same slot every week; recurring-conflict resolution is the
    /// server's responsibility.
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Once => write!(f, "once"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

/// Request body for `POST /book-lesson/{tutor_id}`.
///
/// `time_slot` is wire-shifted; `duration` counts 30-minute increments.
/// Only the response status code is relied upon for the happy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLessonRequest {
    pub student_id: i64,
    pub day_of_week: u8,
    pub time_slot: u8,
    pub duration: u8,
    pub frequency: Frequency,
}
