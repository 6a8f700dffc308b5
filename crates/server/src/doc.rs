use crate::{
    dtos::{
        DataBody,
        reservation::{ReservationPayload, ReservationResponse},
        table::{TablePayload, TableResponse},
    },
    error::ErrorBody,
    routes::{health, reservation, table},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        reservation::create_reservation,
        reservation::list_reservations,
        reservation::read_reservation,
        reservation::update_reservation,
        reservation::update_reservation_status,
        table::create_table,
        table::list_tables,
        table::seat_table,
        table::finish_table
    ),
    components(schemas(
        DataBody<ReservationPayload>,
        DataBody<ReservationResponse>,
        DataBody<Vec<ReservationResponse>>,
        DataBody<TablePayload>,
        DataBody<TableResponse>,
        DataBody<Vec<TableResponse>>,
        ErrorBody
    )),
    tags(
        (name = "Reservations", description = "Reservation booking and lifecycle endpoints"),
        (name = "Tables", description = "Table and seating endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Restaurant Reservation API",
        version = "1.0.0",
        description = "Reservation and table management for the restaurant dashboard",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
