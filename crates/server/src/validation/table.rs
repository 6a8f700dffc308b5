use database::entities::{reservation, table};
use models::{reservation_status::ReservationStatus, table::NewTable};
use serde_json::Value;
use uuid::Uuid;

use crate::{dtos::table::TablePayload, error::ApiError};

/// Validates a new-table payload: a name of at least two characters and a
/// positive whole-number capacity.
pub fn validate_table(payload: &TablePayload) -> Result<NewTable, ApiError> {
    let table_name = check_table_name(payload.table_name.as_deref())?;
    let capacity = check_capacity(payload.capacity.as_ref())?;

    Ok(NewTable {
        table_name: table_name.to_string(),
        capacity,
    })
}

fn check_table_name(raw: Option<&str>) -> Result<&str, ApiError> {
    let name = raw
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::Validation("table_name field is required.".to_string()))?;

    if name.chars().count() < 2 {
        return Err(ApiError::Validation(
            "table_name must be two or more characters.".to_string(),
        ));
    }
    Ok(name)
}

fn check_capacity(raw: Option<&Value>) -> Result<i32, ApiError> {
    let value = raw
        .filter(|value| !value.is_null())
        .ok_or_else(|| ApiError::Validation("Table capacity field is required.".to_string()))?;

    value
        .as_i64()
        .filter(|&capacity| capacity > 0)
        .and_then(|capacity| i32::try_from(capacity).ok())
        .ok_or_else(|| {
            ApiError::Validation(
                "Table capacity must be a whole number greater than zero.".to_string(),
            )
        })
}

/// The seat payload must name the reservation to seat. An id that does
/// not parse can't refer to any stored reservation, so it reads as
/// not-found rather than malformed.
pub fn required_reservation_id(payload: &TablePayload) -> Result<Uuid, ApiError> {
    let raw = payload
        .reservation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation("reservation_id field is required.".to_string()))?;

    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("Reservation: {raw} not found.")))
}

pub fn check_unoccupied(table: &table::Model) -> Result<(), ApiError> {
    if table.reservation_id.is_some() {
        return Err(ApiError::Validation(
            "Table is already occupied.".to_string(),
        ));
    }
    Ok(())
}

/// Returns the id of the seated reservation; a free table cannot be
/// finished.
pub fn check_occupied(table: &table::Model) -> Result<Uuid, ApiError> {
    table
        .reservation_id
        .ok_or_else(|| ApiError::Validation("Table is not occupied.".to_string()))
}

pub fn check_sufficient_capacity(
    table: &table::Model,
    reservation: &reservation::Model,
) -> Result<(), ApiError> {
    if reservation.people > table.capacity {
        return Err(ApiError::Validation(
            "Table capacity is not large enough for number of people in party.".to_string(),
        ));
    }
    Ok(())
}

pub fn check_not_already_seated(reservation: &reservation::Model) -> Result<(), ApiError> {
    if reservation.status == ReservationStatus::Seated {
        return Err(ApiError::Validation(
            "Reservation is currently seated.".to_string(),
        ));
    }
    Ok(())
}
