use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on reservations.reservation_date for the daily listing
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_reservation_date")
                    .table(Reservations::Table)
                    .col(Reservations::ReservationDate)
                    .to_owned(),
            )
            .await?;

        // Index on tables.table_name for the ordered table listing
        manager
            .create_index(
                Index::create()
                    .name("idx_tables_table_name")
                    .table(Tables::Table)
                    .col(Tables::TableName)
                    .to_owned(),
            )
            .await?;

        // Index on tables.reservation_id for occupancy lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_tables_reservation_id")
                    .table(Tables::Table)
                    .col(Tables::ReservationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_tables_reservation_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_tables_table_name").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_reservation_date")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    ReservationDate,
}

#[derive(Iden)]
enum Tables {
    Table,
    TableName,
    ReservationId,
}
