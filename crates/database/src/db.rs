use sea_orm::{Database, DatabaseConnection, DbErr};

/// Creates a database connection from the `DATABASE_URL` environment
/// variable, loading `.env` if present.
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_string()))?;

    Database::connect(database_url).await
}
