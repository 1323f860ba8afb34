//! # Booking Flow
//!
//! Drives a validated booking selection through submission. Submission is
//! at-most-once from the UI's perspective: a second submit while one is in
//! flight is rejected outright. A failed submission preserves the user's
//! selection so they can retry without re-entering input; a successful one
//! clears it and signals a short redirect delay so the confirmation message
//! can be read.

use std::time::Duration;

use tracing::{error, info};

use uchionline_core::codec::SlotShiftCodec;
use uchionline_core::errors::{MarketError, MarketResult};
use uchionline_core::models::availability::AvailabilitySlot;
use uchionline_core::planner::BookingPlanner;

use crate::api::MarketplaceApi;

/// Pause before navigating to the lessons view after a confirmed booking.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// Where the submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Booking page state: a planner plus the submission lifecycle.
pub struct BookingFlow {
    tutor_id: String,
    codec: SlotShiftCodec,
    planner: BookingPlanner,
    phase: SubmitPhase,
    last_error: Option<String>,
}

impl BookingFlow {
    /// Fetches the tutor's availability and builds the selection planner.
    ///
    /// On a fetch error the caller gets the error and no flow; the view
    /// falls back to its empty "no available hours" rendering.
    pub async fn load<A: MarketplaceApi>(
        api: &A,
        tutor_id: impl Into<String>,
        codec: SlotShiftCodec,
    ) -> eyre::Result<Self> {
        let tutor_id = tutor_id.into();
        let wire = api.get_availability(&tutor_id, true).await?;

        let slots: Vec<AvailabilitySlot> = wire
            .iter()
            .map(|slot| AvailabilitySlot {
                day_of_week: slot.day_of_week,
                time_slot: codec.to_internal(slot.time_slot),
            })
            .collect();

        Ok(Self {
            tutor_id,
            codec,
            planner: BookingPlanner::new(&slots, &codec),
            phase: SubmitPhase::default(),
            last_error: None,
        })
    }

    pub fn planner(&self) -> &BookingPlanner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut BookingPlanner {
        &mut self.planner
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// The last submission error, for inline display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.planner.is_ready() && self.phase != SubmitPhase::Submitting
    }

    /// Submits the current selection.
    ///
    /// Returns the redirect delay to wait before navigating to the lessons
    /// view. On failure the selection survives untouched and the flow moves
    /// to [`SubmitPhase::Failed`]; retries are user-initiated only.
    pub async fn submit<A: MarketplaceApi>(
        &mut self,
        api: &A,
        student_id: i64,
    ) -> MarketResult<Duration> {
        if self.phase == SubmitPhase::Submitting {
            return Err(MarketError::AlreadySubmitting);
        }

        let request = self.planner.build_request(student_id, &self.codec)?;

        self.phase = SubmitPhase::Submitting;
        match api.book_lesson(&self.tutor_id, request).await {
            Ok(()) => {
                self.phase = SubmitPhase::Success;
                self.last_error = None;
                self.planner.clear_selection();
                info!(tutor_id = %self.tutor_id, "Lesson booked");
                Ok(REDIRECT_DELAY)
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                self.last_error = Some(err.to_string());
                error!(tutor_id = %self.tutor_id, %err, "Booking failed");
                Err(MarketError::Network(err))
            }
        }
    }
}
