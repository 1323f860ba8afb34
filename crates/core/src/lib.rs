//! # UchiOnline Core
//!
//! Domain logic for the UchiOnline tutoring marketplace client. This crate
//! holds everything that can be expressed without I/O:
//!
//! - **Grid**: the 7×48 half-hour availability matrix a tutor edits
//! - **Codec**: the shift between the grid's internal slot indices and the
//!   wire/display index space whose day starts at a configurable hour
//! - **Blocks**: aggregation of sparse slots into maximal bookable blocks
//!   and the legal booking durations derived from them
//! - **Planner**: the booking selection state machine
//! - **Countdown**: the lesson countdown and time-gated join-link release
//!
//! Networking lives in the companion `uchionline-client` crate; the server
//! is an opaque collaborator reached over HTTP.

/// Error types shared across the workspace
pub mod errors;
/// Wire-format and domain data models
pub mod models;

/// Maximal contiguous block aggregation and duration queries
pub mod blocks;
/// Internal/wire slot index translation and time labels
pub mod codec;
/// Lesson countdown state machine and join-link gating
pub mod countdown;
/// Weekly availability grid with paint-style editing
pub mod grid;
/// Booking selection state machine
pub mod planner;
