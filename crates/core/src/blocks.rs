//! # Block Aggregation
//!
//! Collapses a sparse, unordered slot set into maximal contiguous blocks
//! per day and answers duration queries against them. Blocks own no
//! lifecycle of their own: they are recomputed from the raw slot set every
//! time it changes, never cached.
//!
//! The scan is the same single pass the booking page performs: sort the
//! day's indices, extend the current block while the next index is
//! adjacent, otherwise close it and start a new one.

use std::collections::BTreeMap;

use crate::codec::SlotShiftCodec;
use crate::models::availability::{AvailabilityBlock, AvailabilitySlot};

/// Aggregates one day's slot indices into ordered maximal blocks.
///
/// Input order does not matter; duplicates are tolerated and collapse into
/// the same block. Block time labels come from the codec, with the end
/// label exclusive: a block covering slots 10 and 11 at zero offset reads
/// `"05:00 - 06:00"`.
pub fn aggregate_day(day_of_week: u8, slots: &[u8], codec: &SlotShiftCodec) -> Vec<AvailabilityBlock> {
    let mut indices: Vec<u8> = slots.to_vec();
    indices.sort_unstable();
    indices.dedup();

    let mut blocks: Vec<AvailabilityBlock> = Vec::new();
    for index in indices {
        match blocks.last_mut() {
            Some(block) if index == block.end_slot + 1 => {
                block.end_slot = index;
                block.end_time = codec.format_label(index + 1);
            }
            _ => blocks.push(AvailabilityBlock {
                day_of_week,
                start_slot: index,
                end_slot: index,
                start_time: codec.format_label(index),
                end_time: codec.format_label(index + 1),
            }),
        }
    }
    blocks
}

/// Aggregates a whole week's slot set, keyed by day of week.
///
/// Days with no availability are absent from the map.
pub fn aggregate_week(
    slots: &[AvailabilitySlot],
    codec: &SlotShiftCodec,
) -> BTreeMap<u8, Vec<AvailabilityBlock>> {
    let mut per_day: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
    for slot in slots {
        per_day.entry(slot.day_of_week).or_default().push(slot.time_slot);
    }

    per_day
        .into_iter()
        .map(|(day, indices)| (day, aggregate_day(day, &indices, codec)))
        .collect()
}

/// Legal booking durations from `start_slot`, in 30-minute increments.
///
/// Finds the block containing `start_slot`; if none exists the result is
/// empty, otherwise `[1, 2, ..., N]` where `N` is the number of contiguous
/// slots remaining from `start_slot` to the block end.
pub fn available_durations(blocks: &[AvailabilityBlock], start_slot: u8) -> Vec<u8> {
    blocks
        .iter()
        .find(|block| block.contains(start_slot))
        .map(|block| (1..=block.end_slot - start_slot + 1).collect())
        .unwrap_or_default()
}
