use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::table,
    services::{reservation::ReservationService, table::TableService},
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    dtos::{
        DataBody,
        table::{TablePayload, TableResponse},
    },
    error::{ApiError, ErrorBody},
    validation,
};

/// Create a new table
#[utoipa::path(
    post,
    path = "/tables",
    request_body = DataBody<TablePayload>,
    responses(
        (status = 201, description = "Table created", body = DataBody<TableResponse>),
        (status = 400, description = "Invalid table name or capacity", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn create_table(
    State(db): State<DatabaseConnection>,
    Json(body): Json<DataBody<TablePayload>>,
) -> Result<(StatusCode, Json<DataBody<TableResponse>>), ApiError> {
    let new = validation::table::validate_table(&body.data)?;
    let created = TableService::create(&db, new).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataBody {
            data: created.into(),
        }),
    ))
}

/// List every table, ordered by name
#[utoipa::path(
    get,
    path = "/tables",
    responses(
        (status = 200, description = "All tables", body = DataBody<Vec<TableResponse>>)
    ),
    tag = "Tables"
)]
pub async fn list_tables(
    State(db): State<DatabaseConnection>,
) -> Result<Json<DataBody<Vec<TableResponse>>>, ApiError> {
    let tables = TableService::list(&db).await?;

    Ok(Json(DataBody {
        data: tables.into_iter().map(Into::into).collect(),
    }))
}

/// Seat a reservation at a table
#[utoipa::path(
    put,
    path = "/tables/{table_id}/seat",
    params(
        ("table_id" = String, Path, description = "Table ID")
    ),
    request_body = DataBody<TablePayload>,
    responses(
        (status = 200, description = "Reservation seated at the table", body = DataBody<TableResponse>),
        (status = 400, description = "Occupied table, oversized party or reservation already seated", body = ErrorBody),
        (status = 404, description = "Table or reservation not found", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn seat_table(
    State(db): State<DatabaseConnection>,
    Path(table_id): Path<String>,
    Json(body): Json<DataBody<TablePayload>>,
) -> Result<Json<DataBody<TableResponse>>, ApiError> {
    let table = load_table(&db, &table_id).await?;
    let reservation_id = validation::table::required_reservation_id(&body.data)?;
    validation::table::check_unoccupied(&table)?;

    let reservation = ReservationService::read(&db, reservation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Reservation: {reservation_id} not found.")))?;
    validation::table::check_sufficient_capacity(&table, &reservation)?;
    validation::table::check_not_already_seated(&reservation)?;

    let seated = TableService::seat(&db, table.id, reservation.id).await?;

    Ok(Json(DataBody {
        data: seated.into(),
    }))
}

/// Finish the reservation seated at a table, freeing the table
#[utoipa::path(
    delete,
    path = "/tables/{table_id}/seat",
    params(
        ("table_id" = String, Path, description = "Table ID")
    ),
    responses(
        (status = 200, description = "Table freed", body = DataBody<TableResponse>),
        (status = 400, description = "Table is not occupied", body = ErrorBody),
        (status = 404, description = "Table not found", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn finish_table(
    State(db): State<DatabaseConnection>,
    Path(table_id): Path<String>,
) -> Result<Json<DataBody<TableResponse>>, ApiError> {
    let table = load_table(&db, &table_id).await?;
    let reservation_id = validation::table::check_occupied(&table)?;

    let freed = TableService::finish(&db, table.id, reservation_id).await?;

    Ok(Json(DataBody { data: freed.into() }))
}

/// Loads a table by its raw path id; unparseable ids read as not-found.
pub async fn load_table(db: &DatabaseConnection, raw_id: &str) -> Result<table::Model, ApiError> {
    let not_found = || ApiError::NotFound(format!("Table: {raw_id} was not found."));

    let id: Uuid = raw_id.parse().map_err(|_| not_found())?;
    TableService::read(db, id).await?.ok_or_else(not_found)
}
