use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::booking::Frequency;

/// Profile fields of the other party to a lesson.
///
/// The next-lesson endpoint returns tutor-side fields to students and
/// student-side fields to tutors; the two groups never appear together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Counterpart {
    Tutor {
        tutor_first_name: String,
        tutor_last_name: String,
        tutor_profile_picture: Option<String>,
        tutor_subject: Option<String>,
        tutor_public_id: String,
        tutor_hourly_rate: Option<f64>,
    },
    Student {
        student_first_name: String,
        student_last_name: String,
        student_profile_picture: Option<String>,
        student_public_id: String,
    },
}

impl Counterpart {
    /// Display name of the counterpart.
    pub fn full_name(&self) -> String {
        match self {
            Counterpart::Tutor {
                tutor_first_name,
                tutor_last_name,
                ..
            } => format!("{tutor_first_name} {tutor_last_name}"),
            Counterpart::Student {
                student_first_name,
                student_last_name,
                ..
            } => format!("{student_first_name} {student_last_name}"),
        }
    }
}

/// The next upcoming lesson as returned by `GET /students/next-lesson`.
///
/// `time_left` is a server-side snapshot in seconds at fetch time; the
/// client derives a continuously decreasing local countdown from it.
/// Identity and schedule are immutable from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextLesson {
    pub scheduled_at: DateTime<Utc>,
    /// Lesson length in minutes.
    pub duration: u32,
    pub frequency: Frequency,
    pub day_of_week: u8,
    /// Seconds until the lesson starts, negative once it has.
    pub time_left: f64,
    #[serde(flatten)]
    pub counterpart: Counterpart,
}

/// Either an upcoming lesson or the server's "nothing scheduled" reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NextLessonReply {
    Lesson(Box<NextLesson>),
    NoLesson { message: String },
}

/// One entry of the lessons list (`GET /lessons`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub scheduled_at: DateTime<Utc>,
    /// Lesson length in minutes.
    pub duration: u32,
    pub frequency: Frequency,
    #[serde(flatten)]
    pub counterpart: Counterpart,
}

/// Response body for `GET /get-lesson-link`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonLinkResponse {
    pub lesson_link: String,
}
