//! # Availability Editor
//!
//! One tutor's editing session over their weekly template. The grid is
//! rebuilt from server state on every load and owned exclusively by this
//! session; saving serializes the whole template back in one call, so
//! slots are created and destroyed wholesale, never partially.

use eyre::Result;
use tracing::{info, warn};

use uchionline_core::codec::{SlotShiftCodec, SLOTS_PER_DAY};
use uchionline_core::grid::{SlotGrid, DAYS_PER_WEEK};
use uchionline_core::models::availability::{AvailabilitySlot, DaySlots};

use crate::api::MarketplaceApi;

/// Editing session over a tutor's weekly availability grid.
pub struct AvailabilityEditor {
    tutor_id: String,
    codec: SlotShiftCodec,
    grid: SlotGrid,
}

impl AvailabilityEditor {
    /// Starts a session with an all-unavailable grid.
    pub fn new(tutor_id: impl Into<String>, codec: SlotShiftCodec) -> Self {
        Self {
            tutor_id: tutor_id.into(),
            codec,
            grid: SlotGrid::new(),
        }
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut SlotGrid {
        &mut self.grid
    }

    /// Rebuilds the grid from the server's saved template.
    ///
    /// Wire slots are translated into internal index space before they land
    /// in the grid; slots with an out-of-range day or index are dropped
    /// rather than trusted into the fixed-size matrix. On a fetch error the
    /// grid keeps its current (initially all-false) state, so the view can
    /// render an empty template alongside an inline error.
    pub async fn load<A: MarketplaceApi>(&mut self, api: &A) -> Result<()> {
        let wire = api.get_availability(&self.tutor_id, false).await?;

        let slots: Vec<AvailabilitySlot> = wire
            .iter()
            .filter(|slot| {
                let in_range = (slot.day_of_week as usize) < DAYS_PER_WEEK
                    && slot.time_slot < SLOTS_PER_DAY;
                if !in_range {
                    warn!(
                        day = slot.day_of_week,
                        slot = slot.time_slot,
                        "Dropping out-of-range availability slot"
                    );
                }
                in_range
            })
            .map(|slot| AvailabilitySlot {
                day_of_week: slot.day_of_week,
                time_slot: self.codec.to_internal(slot.time_slot),
            })
            .collect();

        self.grid.load_from_slots(&slots);
        info!(tutor_id = %self.tutor_id, slots = slots.len(), "Loaded availability template");
        Ok(())
    }

    /// Persists the grid, wire-shifted and grouped per day.
    ///
    /// All seven days are sent, days without availability with an empty
    /// slot list. Failures are surfaced to the caller; the grid is
    /// untouched so the user can retry the save.
    pub async fn save<A: MarketplaceApi>(&self, api: &A) -> Result<()> {
        let availability = self.to_wire_days();
        api.save_availability(&self.tutor_id, availability).await?;
        info!(tutor_id = %self.tutor_id, "Saved availability template");
        Ok(())
    }

    fn to_wire_days(&self) -> Vec<DaySlots> {
        let mut days: Vec<DaySlots> = (0..DAYS_PER_WEEK as u8)
            .map(|day| DaySlots {
                day,
                slots: Vec::new(),
            })
            .collect();
        for slot in self.grid.to_sparse_slots() {
            days[slot.day_of_week as usize]
                .slots
                .push(self.codec.to_wire(slot.time_slot));
        }
        days
    }
}
