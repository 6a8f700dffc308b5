use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::FirstName).string().not_null())
                    .col(ColumnDef::new(Reservations::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::MobileNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationTime)
                            .time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::People).integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("booked"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tables table
        manager
            .create_table(
                Table::create()
                    .table(Tables::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tables::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tables::TableName).string().not_null())
                    .col(ColumnDef::new(Tables::Capacity).integer().not_null())
                    .col(ColumnDef::new(Tables::ReservationId).uuid())
                    .col(ColumnDef::new(Tables::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Tables::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tables-reservation_id")
                            .from(Tables::Table, Tables::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order to respect the foreign key
        manager
            .drop_table(Table::drop().table(Tables::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    FirstName,
    LastName,
    MobileNumber,
    ReservationDate,
    ReservationTime,
    People,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tables {
    Table,
    Id,
    TableName,
    Capacity,
    ReservationId,
    CreatedAt,
    UpdatedAt,
}
