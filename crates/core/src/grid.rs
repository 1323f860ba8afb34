//! # Availability Grid
//!
//! A tutor's weekly availability template: 7 days of 48 half-hour cells,
//! edited with paint-style drag gestures. The grid is owned exclusively by
//! one editing session, starts fully unavailable, and is rebuilt from
//! server state on every load. Persistence is an explicit separate call in
//! the client crate; everything here is in-memory.

use crate::models::availability::AvailabilitySlot;

/// Days in the weekly template, Monday first.
pub const DAYS_PER_WEEK: usize = 7;

/// Half-hour cells per day.
pub const SLOTS_PER_DAY: usize = 48;

/// Fixed-size boolean availability matrix.
///
/// Index bounds are a programmer error, not a recoverable condition: the UI
/// cannot produce an out-of-range cell, so writes panic on bad indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    cells: [[bool; SLOTS_PER_DAY]; DAYS_PER_WEEK],
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotGrid {
    /// Creates a grid with every cell unavailable.
    pub fn new() -> Self {
        Self {
            cells: [[false; SLOTS_PER_DAY]; DAYS_PER_WEEK],
        }
    }

    /// Rebuilds the grid so that exactly the given slots are available.
    ///
    /// An empty set is valid and yields an all-false grid.
    pub fn load_from_slots(&mut self, slots: &[AvailabilitySlot]) {
        self.cells = [[false; SLOTS_PER_DAY]; DAYS_PER_WEEK];
        for slot in slots {
            self.cells[slot.day_of_week as usize][slot.time_slot as usize] = true;
        }
    }

    /// Single-cell write.
    pub fn set(&mut self, day: u8, slot: u8, available: bool) {
        self.cells[day as usize][slot as usize] = available;
    }

    /// Single-cell read.
    pub fn get(&self, day: u8, slot: u8) -> bool {
        self.cells[day as usize][slot as usize]
    }

    /// Writes `available` to every cell between `start` and `end` inclusive,
    /// in either direction.
    pub fn paint_range(&mut self, day: u8, start: u8, end: u8, available: bool) {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        for slot in lo..=hi {
            self.set(day, slot, available);
        }
    }

    /// Whether no cell is available.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|day| day.iter().all(|c| !c))
    }

    /// The set of currently available slots, sorted by day then slot.
    pub fn to_sparse_slots(&self) -> Vec<AvailabilitySlot> {
        let mut slots = Vec::new();
        for (day, row) in self.cells.iter().enumerate() {
            for (slot, &available) in row.iter().enumerate() {
                if available {
                    slots.push(AvailabilitySlot {
                        day_of_week: day as u8,
                        time_slot: slot as u8,
                    });
                }
            }
        }
        slots
    }
}

/// Drag-gesture capture for continuous painting.
///
/// The first cell of a gesture fixes whether the whole gesture paints
/// "available" or "unavailable"; the value never flips mid-gesture, even if
/// the pointer re-enters a cell it already painted.
#[derive(Debug, Default)]
pub struct PaintGesture {
    action: Option<bool>,
}

impl PaintGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture on the given cell, fixing the paint value.
    pub fn begin(&mut self, grid: &mut SlotGrid, day: u8, slot: u8, make_available: bool) {
        self.action = Some(make_available);
        grid.set(day, slot, make_available);
    }

    /// Paints a cell the pointer dragged over with the fixed value.
    ///
    /// Ignored when no gesture is active.
    pub fn drag_over(&mut self, grid: &mut SlotGrid, day: u8, slot: u8) {
        if let Some(action) = self.action {
            grid.set(day, slot, action);
        }
    }

    /// Ends the gesture.
    pub fn release(&mut self) {
        self.action = None;
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.action.is_some()
    }
}
