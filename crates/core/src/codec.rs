//! # Slot Shift Codec
//!
//! The grid stores availability in *internal* index space, where index 0 is
//! local midnight. The wire format and every user-facing label use a
//! shifted space whose day starts at a configurable hour, so the UI can
//! present a day beginning at a sensible time without changing the bit
//! layout contract with the server.
//!
//! The shift is a fixed constant for the deployment, not user-configurable,
//! but it is parameterized here so it can be changed in one place.

/// Half-hour slots per day.
pub const SLOTS_PER_DAY: u8 = 48;

/// Default day-start shift: 16 slots, i.e. the displayed day begins at 08:00.
pub const DEFAULT_DAY_START_SLOTS: u8 = 16;

/// Bidirectional mapping between internal and wire slot index spaces.
#[derive(Debug, Clone, Copy)]
pub struct SlotShiftCodec {
    offset_slots: u8,
}

impl Default for SlotShiftCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DAY_START_SLOTS)
    }
}

impl SlotShiftCodec {
    /// Creates a codec with the given day-start offset in slots.
    ///
    /// # Panics
    ///
    /// Panics if `offset_slots >= 48`; a larger shift is a programmer error.
    pub fn new(offset_slots: u8) -> Self {
        assert!(
            offset_slots < SLOTS_PER_DAY,
            "day-start offset must be below {SLOTS_PER_DAY}, got {offset_slots}"
        );
        Self { offset_slots }
    }

    /// The configured day-start offset in slots.
    pub fn offset_slots(&self) -> u8 {
        self.offset_slots
    }

    /// Maps an internal slot index to its wire index.
    pub fn to_wire(&self, internal: u8) -> u8 {
        (internal + self.offset_slots) % SLOTS_PER_DAY
    }

    /// Maps a wire slot index back to the internal index.
    ///
    /// Inverse of [`to_wire`](Self::to_wire) for every index in `0..48`.
    pub fn to_internal(&self, wire: u8) -> u8 {
        (wire + SLOTS_PER_DAY - self.offset_slots) % SLOTS_PER_DAY
    }

    /// Renders the `HH:MM` label for an internal index.
    ///
    /// Labels reflect the user-facing day start, so the wire shift is
    /// applied first. The end-exclusive index 48 is accepted for block end
    /// labels and wraps to the day-start time.
    pub fn format_label(&self, internal: u8) -> String {
        let wire = (internal + self.offset_slots) % SLOTS_PER_DAY;
        let hours = wire / 2;
        let minutes = (wire % 2) * 30;
        format!("{hours:02}:{minutes:02}")
    }
}
