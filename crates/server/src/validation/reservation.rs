use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use database::entities::reservation;
use models::{
    phone::normalize_phone, reservation::NewReservation, reservation_status::ReservationStatus,
};
use serde_json::Value;
use std::str::FromStr;

use crate::{dtos::reservation::ReservationPayload, error::ApiError};

/// Opening and last-seating times, inclusive bounds for bookings.
const OPENING: (u32, u32) = (10, 30);
const LAST_SEATING: (u32, u32) = (21, 30);

/// Runs the full booking-policy chain over a create or edit payload and
/// returns the typed reservation. Checks run in a fixed order and the
/// first failure wins.
pub fn validate_reservation(
    payload: &ReservationPayload,
    now: NaiveDateTime,
) -> Result<NewReservation, ApiError> {
    known_fields_only(payload)?;

    let first_name = require(&payload.first_name, "first_name")?;
    let last_name = require(&payload.last_name, "last_name")?;
    let mobile_number = require(&payload.mobile_number, "mobile_number")?;
    let date_raw = require(&payload.reservation_date, "reservation_date")?;
    let time_raw = require(&payload.reservation_time, "reservation_time")?;
    let people_raw = payload
        .people
        .as_ref()
        .ok_or_else(|| missing_field("people"))?;

    check_non_empty(first_name, "First name is required.")?;
    check_non_empty(last_name, "Last name is required.")?;
    check_mobile_number(mobile_number)?;
    let people = check_people(people_raw)?;
    let reservation_time = check_time(time_raw)?;
    let reservation_date = check_future_date(date_raw, reservation_time, now)?;
    check_not_tuesday(date_raw, reservation_date)?;
    check_open_hours(reservation_time)?;
    let status = check_initial_status(payload.status.as_deref())?;

    Ok(NewReservation {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        mobile_number: mobile_number.to_string(),
        reservation_date,
        reservation_time,
        people,
        status,
    })
}

/// Status-route chain: the loaded reservation must still be updatable and
/// the requested status must be a known one.
pub fn validate_status_update(
    reservation: &reservation::Model,
    payload: &ReservationPayload,
) -> Result<ReservationStatus, ApiError> {
    check_not_finished(reservation)?;

    let raw = payload.status.as_deref().unwrap_or_default();
    ReservationStatus::from_str(raw).map_err(|_| {
        ApiError::Validation(format!("Status: {raw}, not allowed for this reservation"))
    })
}

/// A finished reservation can never be updated again.
pub fn check_not_finished(reservation: &reservation::Model) -> Result<(), ApiError> {
    if reservation.status.is_finished() {
        return Err(ApiError::Validation(
            "A finished reservation can't be updated".to_string(),
        ));
    }
    Ok(())
}

fn known_fields_only(payload: &ReservationPayload) -> Result<(), ApiError> {
    // Anything the deserializer could not place on a named payload field
    // ends up in `unrecognized`.
    if payload.unrecognized.is_empty() {
        return Ok(());
    }

    let fields: Vec<&str> = payload.unrecognized.keys().map(String::as_str).collect();
    Err(ApiError::Validation(format!(
        "Invalid field(s): {}",
        fields.join(", ")
    )))
}

fn missing_field(name: &str) -> ApiError {
    ApiError::Validation(format!("Must include {name}."))
}

fn require<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, ApiError> {
    field.as_deref().ok_or_else(|| missing_field(name))
}

fn check_non_empty(value: &str, message: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

fn check_mobile_number(raw: &str) -> Result<(), ApiError> {
    if normalize_phone(raw).len() != 10 {
        return Err(ApiError::Validation(
            "Mobile number format is invalid.".to_string(),
        ));
    }
    Ok(())
}

fn check_people(raw: &Value) -> Result<i32, ApiError> {
    raw.as_i64()
        .filter(|&people| people > 0)
        .and_then(|people| i32::try_from(people).ok())
        .ok_or_else(|| {
            ApiError::Validation("Number of people must be a positive whole number.".to_string())
        })
}

/// Accepts 24-hour `HH:MM` or `HH:MM:SS` with zero-padded fields.
fn check_time(raw: &str) -> Result<NaiveTime, ApiError> {
    parse_time(raw).ok_or_else(|| ApiError::Validation("Invalid reservation_time.".to_string()))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }
    if parts
        .iter()
        .any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let hour = parts[0].parse().ok()?;
    let minute = parts[1].parse().ok()?;
    let second = if parts.len() == 3 {
        parts[2].parse().ok()?
    } else {
        0
    };

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// The booking moment (date + time, UTC) must be strictly in the future.
fn check_future_date(
    raw: &str,
    time: NaiveTime,
    now: NaiveDateTime,
) -> Result<NaiveDate, ApiError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Invalid reservation_date.".to_string()))?;

    if date.and_time(time) <= now {
        return Err(ApiError::Validation(format!(
            "reservation_date: {raw} is in the past. Reservations must be in the future."
        )));
    }
    Ok(date)
}

/// The restaurant is closed on Tuesdays.
fn check_not_tuesday(raw: &str, date: NaiveDate) -> Result<(), ApiError> {
    if date.weekday() == Weekday::Tue {
        return Err(ApiError::Validation(format!(
            "Reservation date: {raw} is invalid. Restaurant is closed on Tuesdays."
        )));
    }
    Ok(())
}

fn check_open_hours(time: NaiveTime) -> Result<(), ApiError> {
    let at = (time.hour(), time.minute());
    if at < OPENING || at > LAST_SEATING {
        return Err(ApiError::Validation(
            "reservation_time must be between 10:30 a.m. and 9:30 p.m.".to_string(),
        ));
    }
    Ok(())
}

/// A brand-new or edited reservation may only carry a status that still
/// has to pass through seating.
fn check_initial_status(status: Option<&str>) -> Result<Option<ReservationStatus>, ApiError> {
    let Some(raw) = status else {
        return Ok(None);
    };

    let invalid = || ApiError::Validation(format!("Status: {raw} is not valid."));
    let parsed = ReservationStatus::from_str(raw).map_err(|_| invalid())?;
    if matches!(
        parsed,
        ReservationStatus::Seated | ReservationStatus::Finished
    ) {
        return Err(invalid());
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    // 2030-04-01 is a Monday; the fixture books the following Wednesday.
    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn payload() -> ReservationPayload {
        ReservationPayload {
            first_name: Some("Rick".to_string()),
            last_name: Some("Sanchez".to_string()),
            mobile_number: Some("(202) 555-0164".to_string()),
            reservation_date: Some("2030-04-03".to_string()),
            reservation_time: Some("18:30".to_string()),
            people: Some(json!(4)),
            ..Default::default()
        }
    }

    fn message(result: Result<NewReservation, ApiError>) -> String {
        match result {
            Err(ApiError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_payload_defaults_to_booked() {
        let new = validate_reservation(&payload(), clock()).unwrap();
        assert_eq!(new.first_name, "Rick");
        assert_eq!(new.people, 4);
        assert_eq!(new.status, None);
        assert_eq!(
            new.reservation_date,
            NaiveDate::from_ymd_opt(2030, 4, 3).unwrap()
        );
    }

    #[test]
    fn test_explicit_booked_status_is_allowed() {
        let mut body = payload();
        body.status = Some("booked".to_string());
        let new = validate_reservation(&body, clock()).unwrap();
        assert_eq!(new.status, Some(ReservationStatus::Booked));
    }

    #[test]
    fn test_unknown_fields_are_listed() {
        let mut body = payload();
        body.unrecognized
            .insert("half_and_half".to_string(), json!(true));
        body.unrecognized.insert("nickname".to_string(), json!("R"));

        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Invalid field(s): half_and_half, nickname"
        );
    }

    #[test]
    fn test_unknown_field_wins_over_later_checks() {
        let mut body = payload();
        body.mobile_number = Some("911".to_string());
        body.unrecognized.insert("extra".to_string(), json!(1));

        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Invalid field(s): extra"
        );
    }

    #[test]
    fn test_missing_fields_report_the_first_one() {
        let mut body = payload();
        body.first_name = None;
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Must include first_name."
        );

        let mut body = payload();
        body.people = None;
        body.reservation_time = None;
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Must include reservation_time."
        );
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut body = payload();
        body.first_name = Some(String::new());
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "First name is required."
        );

        let mut body = payload();
        body.last_name = Some(String::new());
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Last name is required."
        );
    }

    #[test]
    fn test_mobile_number_must_have_ten_digits() {
        for bad in ["911", "(202) 555-016", "(202) 555-01645", "call me"] {
            let mut body = payload();
            body.mobile_number = Some(bad.to_string());
            assert_eq!(
                message(validate_reservation(&body, clock())),
                "Mobile number format is invalid.",
                "mobile_number {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_formatted_and_plain_numbers_both_pass() {
        for good in ["(202) 555-0164", "2025550164", "202-555-0164"] {
            let mut body = payload();
            body.mobile_number = Some(good.to_string());
            assert!(validate_reservation(&body, clock()).is_ok());
        }
    }

    #[test]
    fn test_people_must_be_a_positive_integer() {
        for bad in [json!(0), json!(-2), json!(2.5), json!("4"), json!(null)] {
            let mut body = payload();
            body.people = Some(bad.clone());
            assert_eq!(
                message(validate_reservation(&body, clock())),
                "Number of people must be a positive whole number.",
                "people {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_time_format() {
        for bad in ["9:5", "25:00", "24:00", "18:61", "183:0", "half past six"] {
            let mut body = payload();
            body.reservation_time = Some(bad.to_string());
            assert_eq!(
                message(validate_reservation(&body, clock())),
                "Invalid reservation_time.",
                "reservation_time {bad:?} should be rejected"
            );
        }

        let mut body = payload();
        body.reservation_time = Some("18:30:00".to_string());
        assert!(validate_reservation(&body, clock()).is_ok());
    }

    #[test]
    fn test_past_dates_are_rejected() {
        let mut body = payload();
        body.reservation_date = Some("2020-01-03".to_string());
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "reservation_date: 2020-01-03 is in the past. Reservations must be in the future."
        );
    }

    #[test]
    fn test_future_comparison_includes_the_time_of_day() {
        // Booking for 11:00 on the clock's own day: fine at 09:00,
        // already past once the clock reads 12:00.
        let mut body = payload();
        body.reservation_date = Some("2030-04-01".to_string());
        body.reservation_time = Some("11:00".to_string());

        assert!(validate_reservation(&body, clock()).is_ok());

        let after_lunch = clock().date().and_hms_opt(12, 0, 0).unwrap();
        assert!(validate_reservation(&body, after_lunch).is_err());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut body = payload();
        body.reservation_date = Some("not-a-date".to_string());
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Invalid reservation_date."
        );
    }

    #[test]
    fn test_closed_on_tuesdays() {
        // 2030-04-09 is a Tuesday
        let mut body = payload();
        body.reservation_date = Some("2030-04-09".to_string());
        assert_eq!(
            message(validate_reservation(&body, clock())),
            "Reservation date: 2030-04-09 is invalid. Restaurant is closed on Tuesdays."
        );
    }

    #[test]
    fn test_business_hours_bounds_are_inclusive() {
        for (time, ok) in [
            ("10:29", false),
            ("10:30", true),
            ("21:30", true),
            ("21:31", false),
            ("09:00", false),
            ("22:00", false),
        ] {
            let mut body = payload();
            body.reservation_time = Some(time.to_string());
            let result = validate_reservation(&body, clock());
            if ok {
                assert!(result.is_ok(), "{time} should be inside business hours");
            } else {
                assert_eq!(
                    message(result),
                    "reservation_time must be between 10:30 a.m. and 9:30 p.m."
                );
            }
        }
    }

    #[test]
    fn test_seated_and_finished_are_not_valid_initial_statuses() {
        for bad in ["seated", "finished", "waitlisted"] {
            let mut body = payload();
            body.status = Some(bad.to_string());
            assert_eq!(
                message(validate_reservation(&body, clock())),
                format!("Status: {bad} is not valid.")
            );
        }
    }

    fn stored_reservation(status: ReservationStatus) -> reservation::Model {
        reservation::Model {
            id: Uuid::new_v4(),
            first_name: "Rick".to_string(),
            last_name: "Sanchez".to_string(),
            mobile_number: "2025550164".to_string(),
            reservation_date: NaiveDate::from_ymd_opt(2030, 4, 3).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            people: 4,
            status,
            created_at: clock(),
            updated_at: clock(),
        }
    }

    #[test]
    fn test_status_update_accepts_known_statuses() {
        let stored = stored_reservation(ReservationStatus::Booked);
        for (raw, expected) in [
            ("seated", ReservationStatus::Seated),
            ("finished", ReservationStatus::Finished),
            ("cancelled", ReservationStatus::Cancelled),
            ("booked", ReservationStatus::Booked),
        ] {
            let mut body = ReservationPayload::default();
            body.status = Some(raw.to_string());
            assert_eq!(validate_status_update(&stored, &body).unwrap(), expected);
        }
    }

    #[test]
    fn test_status_update_rejects_unknown_status() {
        let stored = stored_reservation(ReservationStatus::Booked);
        let mut body = ReservationPayload::default();
        body.status = Some("unknown".to_string());

        match validate_status_update(&stored, &body) {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, "Status: unknown, not allowed for this reservation")
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_finished_reservations_are_immutable() {
        let stored = stored_reservation(ReservationStatus::Finished);
        let mut body = ReservationPayload::default();
        body.status = Some("seated".to_string());

        match validate_status_update(&stored, &body) {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, "A finished reservation can't be updated")
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
