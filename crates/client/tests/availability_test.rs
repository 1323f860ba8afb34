use eyre::eyre;
use pretty_assertions::assert_eq;
use uchionline_client::availability::AvailabilityEditor;
use uchionline_client::mock::MockApi;
use uchionline_core::codec::SlotShiftCodec;
use uchionline_core::models::availability::{DaySlots, WireSlot};

fn wire(day: u8, slot: u8) -> WireSlot {
    WireSlot {
        day_of_week: day,
        time_slot: slot,
    }
}

#[test_log::test(tokio::test)]
async fn load_translates_wire_slots_into_internal_space() {
    let mut api = MockApi::new();
    api.expect_get_availability()
        .withf(|tutor_id, with_booking| tutor_id == "t-1" && !with_booking)
        .returning(|_, _| Ok(vec![wire(0, 32), wire(0, 33), wire(4, 0)]));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::new(16));
    editor.load(&api).await.expect("load should succeed");

    // Wire 32/33 shift back to internal 16/17; wire 0 wraps to internal 32
    assert!(editor.grid().get(0, 16));
    assert!(editor.grid().get(0, 17));
    assert!(editor.grid().get(4, 32));
    assert_eq!(editor.grid().to_sparse_slots().len(), 3);
}

#[test_log::test(tokio::test)]
async fn load_tolerates_an_empty_template() {
    let mut api = MockApi::new();
    api.expect_get_availability().returning(|_, _| Ok(vec![]));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::default());
    editor.load(&api).await.expect("load should succeed");

    assert!(editor.grid().is_empty());
}

#[test_log::test(tokio::test)]
async fn failed_load_keeps_the_default_grid() {
    let mut api = MockApi::new();
    api.expect_get_availability()
        .returning(|_, _| Err(eyre!("server unavailable")));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::default());
    let result = editor.load(&api).await;

    assert!(result.is_err());
    assert!(editor.grid().is_empty());
}

#[test_log::test(tokio::test)]
async fn load_drops_out_of_range_wire_slots() {
    let mut api = MockApi::new();
    // Day 7 and a slot index past the day's end must never reach the grid
    api.expect_get_availability()
        .returning(|_, _| Ok(vec![wire(0, 32), wire(7, 32), wire(0, 48), wire(0, 200)]));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::new(16));
    editor.load(&api).await.expect("load should succeed");

    assert!(editor.grid().get(0, 16));
    assert_eq!(editor.grid().to_sparse_slots().len(), 1);
}

#[test_log::test(tokio::test)]
async fn save_sends_all_seven_days_grouped_in_wire_space() {
    let mut api = MockApi::new();
    api.expect_save_availability()
        .withf(|tutor_id, availability| {
            tutor_id == "t-1"
                && availability.len() == 7
                && availability[0] == DaySlots { day: 0, slots: vec![32, 33] }
                && availability[2] == DaySlots { day: 2, slots: vec![8] }
                && availability[1] == DaySlots { day: 1, slots: vec![] }
                && availability[6] == DaySlots { day: 6, slots: vec![] }
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::new(16));
    editor.grid_mut().paint_range(0, 16, 17, true);
    // Internal 40 wraps past midnight to wire 8
    editor.grid_mut().set(2, 40, true);

    editor.save(&api).await.expect("save should succeed");
}

#[test_log::test(tokio::test)]
async fn failed_save_leaves_the_grid_editable() {
    let mut api = MockApi::new();
    api.expect_save_availability()
        .returning(|_, _| Err(eyre!("save failed")));

    let mut editor = AvailabilityEditor::new("t-1", SlotShiftCodec::default());
    editor.grid_mut().set(1, 10, true);

    assert!(editor.save(&api).await.is_err());
    // Selection state is preserved for a user-initiated retry
    assert!(editor.grid().get(1, 10));
}
