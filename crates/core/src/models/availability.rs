use serde::{Deserialize, Serialize};

/// One 30-minute availability interval in a tutor's weekly template.
///
/// `day_of_week` is 0 (Monday) through 6 (Sunday); `time_slot` is 0 through
/// 47, counting half hours from local midnight in *internal* index space.
/// Slots form a set per tutor: no duplicates, no ordering significance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day_of_week: u8,
    pub time_slot: u8,
}

/// A single slot as it appears on the wire, in the shifted index space.
///
/// Same shape as [`AvailabilitySlot`] but `time_slot` is a wire index; the
/// codec translates between the two spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSlot {
    pub day_of_week: u8,
    pub time_slot: u8,
}

/// Request body for `POST /get-availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAvailabilityRequest {
    pub tutor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_booking: Option<bool>,
}

/// Response body for `POST /get-availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAvailabilityResponse {
    pub availability: Vec<WireSlot>,
}

/// One day's saved slots, wire space, for `POST /save-availability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub day: u8,
    pub slots: Vec<u8>,
}

/// Request body for `POST /save-availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAvailabilityRequest {
    pub tutor_id: String,
    pub availability: Vec<DaySlots>,
}

/// A maximal run of contiguous available slots within one day.
///
/// Derived, never persisted: recomputed from the raw slot set whenever it
/// changes. `start_slot`/`end_slot` are internal indices, both inclusive.
/// The time labels are display strings; `end_time` is exclusive (the end of
/// the last half hour, not its start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityBlock {
    pub day_of_week: u8,
    pub start_slot: u8,
    pub end_slot: u8,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityBlock {
    /// Whether `slot` falls inside this block.
    pub fn contains(&self, slot: u8) -> bool {
        self.start_slot <= slot && slot <= self.end_slot
    }

    /// Number of half-hour slots the block covers.
    pub fn span(&self) -> u8 {
        self.end_slot - self.start_slot + 1
    }
}
