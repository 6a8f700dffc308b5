use chrono::NaiveDateTime;
use database::entities::table;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Raw table fields as submitted by the admin form or the seat request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TablePayload {
    pub table_name: Option<String>,
    /// Raw JSON so a fractional or quoted capacity is reported by the
    /// capacity check rather than rejected during deserialization.
    #[schema(value_type = Option<i64>)]
    pub capacity: Option<Value>,
    /// Reservation to seat at this table (seat requests only).
    pub reservation_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TableResponse {
    pub id: String,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<table::Model> for TableResponse {
    fn from(model: table::Model) -> Self {
        Self {
            id: model.id.to_string(),
            table_name: model.table_name,
            capacity: model.capacity,
            reservation_id: model.reservation_id.map(|id| id.to_string()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
