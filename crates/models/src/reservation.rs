use crate::reservation_status::ReservationStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A fully validated reservation, ready to be persisted.
///
/// Produced by the request-validation layer; every field has already
/// passed the booking policy checks (future date, business hours,
/// party size, phone format).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
    /// Status supplied by the client, if any. Defaults to booked on insert;
    /// omitted on update so the stored status is left untouched.
    pub status: Option<ReservationStatus>,
}
