//! # Booking Planner
//!
//! The selection state machine behind the booking page: a student expands a
//! day, picks a start slot inside one of its availability blocks, picks a
//! duration from the legal set, and optionally switches the recurrence
//! mode. The planner guarantees that an invalid selection can never reach
//! the submit step; the client-side check is a UX convenience, with the
//! server remaining the authority on conflicts.

use std::collections::BTreeMap;

use crate::blocks::{aggregate_week, available_durations};
use crate::codec::SlotShiftCodec;
use crate::errors::{MarketError, MarketResult};
use crate::models::availability::{AvailabilityBlock, AvailabilitySlot};
use crate::models::booking::{BookLessonRequest, Frequency};

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerPhase {
    /// No day expanded yet.
    NoDaySelected,
    /// A day is expanded but no start slot chosen.
    DayExpanded,
    /// A start slot (and therefore a valid duration) is chosen.
    StartSelected,
}

/// Validated booking selection over a tutor's availability blocks.
#[derive(Debug, Clone)]
pub struct BookingPlanner {
    blocks: BTreeMap<u8, Vec<AvailabilityBlock>>,
    expanded_day: Option<u8>,
    selected_start: Option<(u8, u8)>,
    duration: u8,
    frequency: Frequency,
}

impl BookingPlanner {
    /// Builds a planner from a tutor's raw slot set (internal space).
    pub fn new(slots: &[AvailabilitySlot], codec: &SlotShiftCodec) -> Self {
        Self {
            blocks: aggregate_week(slots, codec),
            expanded_day: None,
            selected_start: None,
            duration: 1,
            frequency: Frequency::Once,
        }
    }

    /// The aggregated blocks, for rendering.
    pub fn blocks(&self) -> &BTreeMap<u8, Vec<AvailabilityBlock>> {
        &self.blocks
    }

    pub fn phase(&self) -> PlannerPhase {
        if self.selected_start.is_some() {
            PlannerPhase::StartSelected
        } else if self.expanded_day.is_some() {
            PlannerPhase::DayExpanded
        } else {
            PlannerPhase::NoDaySelected
        }
    }

    pub fn expanded_day(&self) -> Option<u8> {
        self.expanded_day
    }

    pub fn selected_start(&self) -> Option<(u8, u8)> {
        self.selected_start
    }

    pub fn duration(&self) -> u8 {
        self.duration
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Expands a day, or collapses it when already expanded.
    ///
    /// Either way the start selection is discarded and the duration resets
    /// to 1, so a stale selection can never survive a day switch.
    pub fn toggle_day(&mut self, day: u8) {
        self.expanded_day = if self.expanded_day == Some(day) {
            None
        } else {
            Some(day)
        };
        self.clear_selection();
    }

    /// Selects the booking start slot.
    ///
    /// The slot must fall inside an availability block for that day.
    /// Selecting a new start always resets the duration to 1, which keeps
    /// the selection valid regardless of what was previously chosen.
    pub fn select_start(&mut self, day: u8, slot: u8) -> MarketResult<()> {
        let in_block = self
            .blocks
            .get(&day)
            .is_some_and(|blocks| blocks.iter().any(|b| b.contains(slot)));
        if !in_block {
            return Err(MarketError::Validation(format!(
                "slot {slot} on day {day} is not available"
            )));
        }

        self.expanded_day = Some(day);
        self.selected_start = Some((day, slot));
        self.duration = 1;
        Ok(())
    }

    /// Legal durations for the current start slot, empty when none is set.
    pub fn available_durations(&self) -> Vec<u8> {
        match self.selected_start {
            Some((day, slot)) => self
                .blocks
                .get(&day)
                .map(|blocks| available_durations(blocks, slot))
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Picks a duration; it must be one of the currently legal values.
    pub fn select_duration(&mut self, duration: u8) -> MarketResult<()> {
        if !self.available_durations().contains(&duration) {
            return Err(MarketError::Validation(format!(
                "duration {duration} exceeds the contiguous span from the chosen start"
            )));
        }
        self.duration = duration;
        Ok(())
    }

    /// Switches the recurrence mode; never affects start/duration validity.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    /// Whether the selection is complete enough to submit.
    pub fn is_ready(&self) -> bool {
        self.selected_start.is_some()
    }

    /// Builds the validated booking request, wire-shifting the start slot.
    pub fn build_request(
        &self,
        student_id: i64,
        codec: &SlotShiftCodec,
    ) -> MarketResult<BookLessonRequest> {
        let (day, slot) = self.selected_start.ok_or_else(|| {
            MarketError::Validation("no start slot selected".to_string())
        })?;

        Ok(BookLessonRequest {
            student_id,
            day_of_week: day,
            time_slot: codec.to_wire(slot),
            duration: self.duration,
            frequency: self.frequency,
        })
    }

    /// Drops the start selection and resets the duration to 1.
    pub fn clear_selection(&mut self) {
        self.selected_start = None;
        self.duration = 1;
    }
}
