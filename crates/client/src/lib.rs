//! # UchiOnline Client
//!
//! The networking side of the UchiOnline tutoring marketplace client. The
//! server is an opaque collaborator reached over a handful of JSON-over-HTTP
//! contracts; this crate wraps them behind the [`api::MarketplaceApi`]
//! trait and builds the three stateful services the UI drives:
//!
//! - **Availability editor**: loads a tutor's weekly template into a
//!   [`uchionline_core::grid::SlotGrid`] and saves it back in wire space
//! - **Booking flow**: at-most-once submission of a validated booking
//!   selection, preserving the selection on failure for a user retry
//! - **Lesson watcher**: owns the 1-second ticker behind the lesson
//!   countdown and performs the time-gated join-link fetches
//!
//! Authentication is injected as an explicit [`api::Session`] rather than
//! read from ambient storage; token refresh and 401 redirects belong to the
//! auth collaborator, not this crate.

/// HTTP contracts and the bearer-token session
pub mod api;
/// Availability template loading and saving
pub mod availability;
/// Booking submission flow
pub mod booking;
/// Environment-based configuration
pub mod config;
/// Next-lesson countdown runner and lessons list
pub mod lessons;

/// Mock API implementation for tests
pub mod mock;

pub use api::{HttpApi, MarketplaceApi, Session};
pub use config::ClientConfig;
