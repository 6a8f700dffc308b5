use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use database::{entities::reservation, services::reservation::ReservationService};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    dtos::{
        DataBody,
        reservation::{ReservationPayload, ReservationQueryParams, ReservationResponse},
    },
    error::{ApiError, ErrorBody},
    validation,
};

/// Create a new reservation
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = DataBody<ReservationPayload>,
    responses(
        (status = 201, description = "Reservation created", body = DataBody<ReservationResponse>),
        (status = 400, description = "Payload failed a booking-policy check", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(db): State<DatabaseConnection>,
    Json(body): Json<DataBody<ReservationPayload>>,
) -> Result<(StatusCode, Json<DataBody<ReservationResponse>>), ApiError> {
    let new = validation::reservation::validate_reservation(&body.data, Utc::now().naive_utc())?;
    let created = ReservationService::create(&db, new).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataBody {
            data: created.into(),
        }),
    ))
}

/// List reservations for a date, or search them by phone number
#[utoipa::path(
    get,
    path = "/reservations",
    params(ReservationQueryParams),
    responses(
        (status = 200, description = "Matching reservations", body = DataBody<Vec<ReservationResponse>>),
        (status = 400, description = "Malformed date", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(db): State<DatabaseConnection>,
    Query(params): Query<ReservationQueryParams>,
) -> Result<Json<DataBody<Vec<ReservationResponse>>>, ApiError> {
    let reservations = if let Some(date) = params.date.as_deref() {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ApiError::Validation(format!("Invalid date: {date}.")))?;
        ReservationService::list_by_date(&db, date).await?
    } else if let Some(mobile_number) = params.mobile_number.as_deref() {
        ReservationService::search(&db, mobile_number).await?
    } else {
        Vec::new()
    };

    Ok(Json(DataBody {
        data: reservations.into_iter().map(Into::into).collect(),
    }))
}

/// Get a single reservation
#[utoipa::path(
    get,
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = DataBody<ReservationResponse>),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn read_reservation(
    State(db): State<DatabaseConnection>,
    Path(reservation_id): Path<String>,
) -> Result<Json<DataBody<ReservationResponse>>, ApiError> {
    let found = load_reservation(&db, &reservation_id).await?;

    Ok(Json(DataBody { data: found.into() }))
}

/// Edit every client-supplied field of a reservation
#[utoipa::path(
    put,
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "Reservation ID")
    ),
    request_body = DataBody<ReservationPayload>,
    responses(
        (status = 200, description = "Reservation updated", body = DataBody<ReservationResponse>),
        (status = 400, description = "Payload failed a booking-policy check", body = ErrorBody),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(db): State<DatabaseConnection>,
    Path(reservation_id): Path<String>,
    Json(body): Json<DataBody<ReservationPayload>>,
) -> Result<Json<DataBody<ReservationResponse>>, ApiError> {
    let existing = load_reservation(&db, &reservation_id).await?;
    validation::reservation::check_not_finished(&existing)?;

    let updated =
        validation::reservation::validate_reservation(&body.data, Utc::now().naive_utc())?;
    let saved = ReservationService::update(&db, existing.id, updated).await?;

    Ok(Json(DataBody { data: saved.into() }))
}

/// Move a reservation through its lifecycle (booked, seated, finished, cancelled)
#[utoipa::path(
    put,
    path = "/reservations/{reservation_id}/status",
    params(
        ("reservation_id" = String, Path, description = "Reservation ID")
    ),
    request_body = DataBody<ReservationPayload>,
    responses(
        (status = 200, description = "Status updated", body = DataBody<ReservationResponse>),
        (status = 400, description = "Unknown status or reservation already finished", body = ErrorBody),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation_status(
    State(db): State<DatabaseConnection>,
    Path(reservation_id): Path<String>,
    Json(body): Json<DataBody<ReservationPayload>>,
) -> Result<Json<DataBody<ReservationResponse>>, ApiError> {
    let existing = load_reservation(&db, &reservation_id).await?;
    let status = validation::reservation::validate_status_update(&existing, &body.data)?;
    let saved = ReservationService::update_status(&db, existing.id, status).await?;

    Ok(Json(DataBody { data: saved.into() }))
}

/// Loads a reservation by its raw path id. An id that does not parse as a
/// UUID cannot refer to any stored reservation, so it reads as not-found.
pub async fn load_reservation(
    db: &DatabaseConnection,
    raw_id: &str,
) -> Result<reservation::Model, ApiError> {
    let not_found = || ApiError::NotFound(format!("Reservation: {raw_id} not found"));

    let id: Uuid = raw_id.parse().map_err(|_| not_found())?;
    ReservationService::read(db, id).await?.ok_or_else(not_found)
}
