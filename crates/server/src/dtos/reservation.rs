use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use database::entities::reservation;
use models::reservation_status::ReservationStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Raw reservation fields as submitted by the client. Everything is
/// optional here; the validation chain decides what is missing, malformed
/// or out of policy, and in which order to report it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReservationPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub reservation_date: Option<String>,
    /// 24-hour time, `HH:MM` or `HH:MM:SS`.
    pub reservation_time: Option<String>,
    /// Kept as raw JSON so a non-integer party size is reported by the
    /// people check rather than rejected during deserialization.
    #[schema(value_type = Option<i64>)]
    pub people: Option<Value>,
    pub status: Option<String>,

    // Round-tripped by the edit form; accepted and ignored.
    #[schema(ignore)]
    pub created_at: Option<Value>,
    #[schema(ignore)]
    pub updated_at: Option<Value>,
    #[schema(ignore)]
    pub reservation_id: Option<Value>,

    /// Anything else the client sent; rejected by the field-name check.
    #[serde(flatten)]
    #[schema(ignore)]
    pub unrecognized: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
    #[schema(value_type = String, example = "booked")]
    pub status: ReservationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(model: reservation::Model) -> Self {
        Self {
            id: model.id.to_string(),
            first_name: model.first_name,
            last_name: model.last_name,
            mobile_number: model.mobile_number,
            reservation_date: model.reservation_date,
            reservation_time: model.reservation_time,
            people: model.people,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReservationQueryParams {
    /// List reservations for this date (`YYYY-MM-DD`).
    pub date: Option<String>,

    /// Search reservations by (partial) phone number instead.
    pub mobile_number: Option<String>,
}
