/// Availability template models and wire shapes
pub mod availability;
/// Booking request models
pub mod booking;
/// Lesson and next-lesson models
pub mod lesson;
