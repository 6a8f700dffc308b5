use crate::entities::{reservation, table};
use chrono::Utc;
use models::{reservation_status::ReservationStatus, table::NewTable};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

pub struct TableService;

impl TableService {
    pub async fn create(db: &DatabaseConnection, new: NewTable) -> Result<table::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = table::ActiveModel {
            id: Set(Uuid::new_v4()),
            table_name: Set(new.table_name),
            capacity: Set(new.capacity),
            reservation_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        table::Entity::insert(model).exec_with_returning(db).await
    }

    pub async fn read(db: &DatabaseConnection, id: Uuid) -> Result<Option<table::Model>, DbErr> {
        table::Entity::find_by_id(id).one(db).await
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<table::Model>, DbErr> {
        table::Entity::find()
            .order_by_asc(table::Column::TableName)
            .all(db)
            .await
    }

    /// Seats a reservation at a table: marks the reservation seated and
    /// links it to the table. Both writes happen in one transaction, so
    /// a failure of either leaves reservation and table untouched.
    pub async fn seat(
        db: &DatabaseConnection,
        table_id: Uuid,
        reservation_id: Uuid,
    ) -> Result<table::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let txn = db.begin().await?;

        reservation::Entity::update_many()
            .col_expr(
                reservation::Column::Status,
                Expr::value(ReservationStatus::Seated),
            )
            .col_expr(reservation::Column::UpdatedAt, Expr::value(now))
            .filter(reservation::Column::Id.eq(reservation_id))
            .exec(&txn)
            .await?;

        table::Entity::update_many()
            .col_expr(table::Column::ReservationId, Expr::value(reservation_id))
            .col_expr(table::Column::UpdatedAt, Expr::value(now))
            .filter(table::Column::Id.eq(table_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Self::read(db, table_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Table {table_id} not found")))
    }

    /// Finishes the reservation seated at a table: marks it finished and
    /// frees the table. Same all-or-nothing guarantee as `seat`.
    pub async fn finish(
        db: &DatabaseConnection,
        table_id: Uuid,
        reservation_id: Uuid,
    ) -> Result<table::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let txn = db.begin().await?;

        reservation::Entity::update_many()
            .col_expr(
                reservation::Column::Status,
                Expr::value(ReservationStatus::Finished),
            )
            .col_expr(reservation::Column::UpdatedAt, Expr::value(now))
            .filter(reservation::Column::Id.eq(reservation_id))
            .exec(&txn)
            .await?;

        table::Entity::update_many()
            .col_expr(table::Column::ReservationId, Expr::value(None::<Uuid>))
            .col_expr(table::Column::UpdatedAt, Expr::value(now))
            .filter(table::Column::Id.eq(table_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Self::read(db, table_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Table {table_id} not found")))
    }
}
