use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_value};
use uchionline_core::models::{
    availability::{DaySlots, GetAvailabilityRequest, GetAvailabilityResponse, SaveAvailabilityRequest},
    booking::{BookLessonRequest, Frequency},
    lesson::{Counterpart, LessonLinkResponse, NextLesson, NextLessonReply},
};

#[test]
fn get_availability_request_omits_the_optional_flag() {
    let request = GetAvailabilityRequest {
        tutor_id: "t-123".to_string(),
        with_booking: None,
    };
    assert_eq!(to_value(&request).unwrap(), json!({ "tutor_id": "t-123" }));

    let request = GetAvailabilityRequest {
        tutor_id: "t-123".to_string(),
        with_booking: Some(true),
    };
    assert_eq!(
        to_value(&request).unwrap(),
        json!({ "tutor_id": "t-123", "with_booking": true })
    );
}

#[test]
fn availability_response_parses_the_observed_shape() {
    let response: GetAvailabilityResponse = from_str(
        r#"{"availability": [{"day_of_week": 0, "time_slot": 32}, {"day_of_week": 4, "time_slot": 33}]}"#,
    )
    .expect("Failed to deserialize availability response");

    assert_eq!(response.availability.len(), 2);
    assert_eq!(response.availability[0].day_of_week, 0);
    assert_eq!(response.availability[1].time_slot, 33);
}

#[test]
fn save_availability_request_groups_slots_per_day() {
    let request = SaveAvailabilityRequest {
        tutor_id: "t-123".to_string(),
        availability: vec![
            DaySlots { day: 0, slots: vec![32, 33, 34] },
            DaySlots { day: 6, slots: vec![] },
        ],
    };

    assert_eq!(
        to_value(&request).unwrap(),
        json!({
            "tutor_id": "t-123",
            "availability": [
                { "day": 0, "slots": [32, 33, 34] },
                { "day": 6, "slots": [] }
            ]
        })
    );
}

#[test]
fn frequency_serializes_lowercase() {
    assert_eq!(to_value(Frequency::Once).unwrap(), json!("once"));
    assert_eq!(to_value(Frequency::Weekly).unwrap(), json!("weekly"));
    assert_eq!(from_str::<Frequency>(r#""weekly""#).unwrap(), Frequency::Weekly);
}

#[test]
fn book_lesson_request_matches_the_wire_contract() {
    let request = BookLessonRequest {
        student_id: 2,
        day_of_week: 0,
        time_slot: 33,
        duration: 3,
        frequency: Frequency::Once,
    };

    assert_eq!(
        to_value(&request).unwrap(),
        json!({
            "student_id": 2,
            "day_of_week": 0,
            "time_slot": 33,
            "duration": 3,
            "frequency": "once"
        })
    );
}

#[test]
fn next_lesson_parses_the_tutor_counterpart_fields() {
    let reply: NextLessonReply = from_str(
        r#"{
            "tutor_first_name": "Мария",
            "tutor_last_name": "Иванова",
            "tutor_profile_picture": "/uploads/maria.png",
            "tutor_subject": "Математика",
            "tutor_public_id": "pub-9",
            "tutor_hourly_rate": 40.0,
            "day_of_week": 2,
            "duration": 90,
            "frequency": "weekly",
            "scheduled_at": "2026-08-26T14:00:00Z",
            "time_left": 259200.0
        }"#,
    )
    .expect("Failed to deserialize next lesson reply");

    let NextLessonReply::Lesson(lesson) = reply else {
        panic!("expected a lesson");
    };
    assert_eq!(lesson.duration, 90);
    assert_eq!(lesson.frequency, Frequency::Weekly);
    assert_eq!(lesson.counterpart.full_name(), "Мария Иванова");
    assert_eq!(
        lesson.scheduled_at,
        Utc.with_ymd_and_hms(2026, 8, 26, 14, 0, 0).unwrap()
    );
}

#[test]
fn next_lesson_parses_the_student_counterpart_fields() {
    let lesson: NextLesson = from_str(
        r#"{
            "student_first_name": "Георги",
            "student_last_name": "Петров",
            "student_profile_picture": null,
            "student_public_id": "pub-2",
            "day_of_week": 0,
            "duration": 60,
            "frequency": "once",
            "scheduled_at": "2026-08-24T10:30:00Z",
            "time_left": 120.5
        }"#,
    )
    .expect("Failed to deserialize next lesson");

    assert!(matches!(lesson.counterpart, Counterpart::Student { .. }));
    assert_eq!(lesson.counterpart.full_name(), "Георги Петров");
    assert_eq!(lesson.time_left, 120.5);
}

#[test]
fn no_lesson_reply_is_recognized() {
    let reply: NextLessonReply = from_str(r#"{"message": "No upcoming lessons found"}"#)
        .expect("Failed to deserialize no-lesson reply");
    assert!(matches!(reply, NextLessonReply::NoLesson { .. }));
}

#[test]
fn lesson_link_response_round_trips() {
    let response: LessonLinkResponse =
        from_str(r#"{"lesson_link": "https://meet.example:8443/booking_5?jwt=abc"}"#)
            .expect("Failed to deserialize lesson link");
    assert_eq!(response.lesson_link, "https://meet.example:8443/booking_5?jwt=abc");
}
