use eyre::eyre;
use pretty_assertions::assert_eq;
use uchionline_client::booking::{BookingFlow, SubmitPhase, REDIRECT_DELAY};
use uchionline_client::mock::MockApi;
use uchionline_core::codec::SlotShiftCodec;
use uchionline_core::errors::MarketError;
use uchionline_core::models::availability::WireSlot;
use uchionline_core::models::booking::Frequency;

// Monday 08:00-10:00 with the default offset: internal 16..=19, wire 32..=35
fn monday_morning() -> Vec<WireSlot> {
    (32..=35)
        .map(|time_slot| WireSlot {
            day_of_week: 0,
            time_slot,
        })
        .collect()
}

fn mock_with_availability() -> MockApi {
    let mut api = MockApi::new();
    api.expect_get_availability()
        .withf(|tutor_id, with_booking| tutor_id == "t-1" && *with_booking)
        .returning(|_, _| Ok(monday_morning()));
    api
}

#[test_log::test(tokio::test)]
async fn load_builds_blocks_in_internal_space() {
    let api = mock_with_availability();
    let flow = BookingFlow::load(&api, "t-1", SlotShiftCodec::default())
        .await
        .expect("load should succeed");

    let blocks = &flow.planner().blocks()[&0];
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_slot, 16);
    assert_eq!(blocks[0].end_slot, 19);
    assert_eq!(blocks[0].start_time, "08:00");
    assert_eq!(blocks[0].end_time, "10:00");
}

#[test_log::test(tokio::test)]
async fn successful_submit_clears_selection_and_returns_redirect_delay() {
    let mut api = mock_with_availability();
    api.expect_book_lesson()
        .withf(|tutor_id, request| {
            tutor_id == "t-1"
                && request.student_id == 7
                && request.day_of_week == 0
                && request.time_slot == 33
                && request.duration == 3
                && request.frequency == Frequency::Weekly
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let mut flow = BookingFlow::load(&api, "t-1", SlotShiftCodec::default())
        .await
        .expect("load should succeed");

    flow.planner_mut().toggle_day(0);
    flow.planner_mut().select_start(0, 17).expect("in block");
    flow.planner_mut().select_duration(3).expect("legal");
    flow.planner_mut().set_frequency(Frequency::Weekly);
    assert!(flow.can_submit());

    let delay = flow.submit(&api, 7).await.expect("submit should succeed");

    assert_eq!(delay, REDIRECT_DELAY);
    assert_eq!(flow.phase(), SubmitPhase::Success);
    assert!(!flow.planner().is_ready());
    assert_eq!(flow.last_error(), None);
}

#[test_log::test(tokio::test)]
async fn failed_submit_preserves_the_selection_for_retry() {
    let mut api = mock_with_availability();
    api.expect_book_lesson()
        .times(1)
        .returning(|_, _| Err(eyre!("slot already booked")));

    let mut flow = BookingFlow::load(&api, "t-1", SlotShiftCodec::default())
        .await
        .expect("load should succeed");
    flow.planner_mut().select_start(0, 16).expect("in block");

    let result = flow.submit(&api, 7).await;

    assert!(matches!(result, Err(MarketError::Network(_))));
    assert_eq!(flow.phase(), SubmitPhase::Failed);
    assert_eq!(flow.planner().selected_start(), Some((0, 16)));
    assert!(flow.last_error().is_some_and(|e| e.contains("slot already booked")));
    // The user may retry; the flow is not stuck in a submitting state
    assert!(flow.can_submit());
}

#[test_log::test(tokio::test)]
async fn submit_without_a_selection_never_hits_the_server() {
    let api = mock_with_availability();
    let mut flow = BookingFlow::load(&api, "t-1", SlotShiftCodec::default())
        .await
        .expect("load should succeed");

    assert!(!flow.can_submit());
    let result = flow.submit(&api, 7).await;
    assert!(matches!(result, Err(MarketError::Validation(_))));
    assert_eq!(flow.phase(), SubmitPhase::Idle);
}

#[test_log::test(tokio::test)]
async fn oversized_duration_is_rejected_before_submission() {
    let api = mock_with_availability();
    let mut flow = BookingFlow::load(&api, "t-1", SlotShiftCodec::default())
        .await
        .expect("load should succeed");

    flow.planner_mut().select_start(0, 17).expect("in block");
    assert_eq!(flow.planner().available_durations(), vec![1, 2, 3]);
    assert!(flow.planner_mut().select_duration(4).is_err());
    // The rejected pick leaves the previous (valid) duration in place
    assert_eq!(flow.planner().duration(), 1);
}

#[test_log::test(tokio::test)]
async fn failed_load_surfaces_the_error() {
    let mut api = MockApi::new();
    api.expect_get_availability()
        .returning(|_, _| Err(eyre!("tutor not found")));

    let result = BookingFlow::load(&api, "t-404", SlotShiftCodec::default()).await;
    assert!(result.is_err());
}
