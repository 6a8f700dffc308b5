use axum::{
    Router,
    routing::{get, put},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::shutdown::shutdown_signal;

mod doc;
mod dtos;
mod error;
mod routes;
mod utils;
mod validation;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = database::db::create_connection()
        .await
        .expect("Failed to connect to the database");

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", doc::ApiDoc::openapi()))
        .route("/health", get(routes::health::health))
        .route(
            "/reservations",
            get(routes::reservation::list_reservations)
                .post(routes::reservation::create_reservation),
        )
        .route(
            "/reservations/{reservation_id}",
            get(routes::reservation::read_reservation).put(routes::reservation::update_reservation),
        )
        .route(
            "/reservations/{reservation_id}/status",
            put(routes::reservation::update_reservation_status),
        )
        .route(
            "/tables",
            get(routes::table::list_tables).post(routes::table::create_table),
        )
        .route(
            "/tables/{table_id}/seat",
            put(routes::table::seat_table).delete(routes::table::finish_table),
        )
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(db);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind the listener");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
