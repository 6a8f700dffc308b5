use crate::entities::reservation;
use chrono::{NaiveDate, Utc};
use models::{
    phone::normalize_phone, reservation::NewReservation, reservation_status::ReservationStatus,
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

pub struct ReservationService;

impl ReservationService {
    /// Inserts a new reservation with a generated id. Status defaults to
    /// booked unless the (already validated) payload supplied one.
    pub async fn create(
        db: &DatabaseConnection,
        new: NewReservation,
    ) -> Result<reservation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = reservation::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            mobile_number: Set(new.mobile_number),
            reservation_date: Set(new.reservation_date),
            reservation_time: Set(new.reservation_time),
            people: Set(new.people),
            status: Set(new.status.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        reservation::Entity::insert(model).exec_with_returning(db).await
    }

    pub async fn read(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<reservation::Model>, DbErr> {
        reservation::Entity::find_by_id(id).one(db).await
    }

    /// All reservations for a given date, earliest first. Finished and
    /// cancelled reservations are excluded from the daily dashboard.
    pub async fn list_by_date(
        db: &DatabaseConnection,
        date: NaiveDate,
    ) -> Result<Vec<reservation::Model>, DbErr> {
        reservation::Entity::find()
            .filter(reservation::Column::ReservationDate.eq(date))
            .filter(reservation::Column::Status.ne(ReservationStatus::Finished))
            .filter(reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .order_by_asc(reservation::Column::ReservationTime)
            .all(db)
            .await
    }

    /// Partial-match search on the phone number. Both sides are compared
    /// with formatting separators stripped, so `(555) 123-4567` is found
    /// by `5551234`.
    pub async fn search(
        db: &DatabaseConnection,
        mobile_number: &str,
    ) -> Result<Vec<reservation::Model>, DbErr> {
        let digits = normalize_phone(mobile_number);

        reservation::Entity::find()
            .filter(Expr::cust_with_values(
                "translate(mobile_number, '() -', '') LIKE ?",
                [format!("%{digits}%")],
            ))
            .order_by_asc(reservation::Column::ReservationDate)
            .all(db)
            .await
    }

    /// Replaces every client-editable field of an existing reservation.
    /// The stored status is kept unless the payload carried one.
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        updated: NewReservation,
    ) -> Result<reservation::Model, DbErr> {
        let model = reservation::ActiveModel {
            id: Set(id),
            first_name: Set(updated.first_name),
            last_name: Set(updated.last_name),
            mobile_number: Set(updated.mobile_number),
            reservation_date: Set(updated.reservation_date),
            reservation_time: Set(updated.reservation_time),
            people: Set(updated.people),
            status: updated
                .status
                .map(Set)
                .unwrap_or(sea_orm::ActiveValue::NotSet),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        reservation::Entity::update(model).exec(db).await
    }

    pub async fn update_status(
        db: &DatabaseConnection,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<reservation::Model, DbErr> {
        let model = reservation::ActiveModel {
            id: Set(id),
            status: Set(status),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        reservation::Entity::update(model).exec(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn booked_reservation() -> reservation::Model {
        let now = chrono::NaiveDate::from_ymd_opt(2030, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        reservation::Model {
            id: Uuid::new_v4(),
            first_name: "Rick".to_string(),
            last_name: "Sanchez".to_string(),
            mobile_number: "(202) 555-0164".to_string(),
            reservation_date: NaiveDate::from_ymd_opt(2030, 4, 3).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            people: 4,
            status: ReservationStatus::Booked,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_read_returns_reservation() {
        let expected = booked_reservation();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expected.clone()]])
            .into_connection();

        let found = ReservationService::read(&db, expected.id).await.unwrap();
        assert_eq!(found, Some(expected));
    }

    #[tokio::test]
    async fn test_read_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<reservation::Model>::new()])
            .into_connection();

        let found = ReservationService::read(&db, Uuid::new_v4()).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_read_is_idempotent() {
        let expected = booked_reservation();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expected.clone()], vec![expected.clone()]])
            .into_connection();

        let first = ReservationService::read(&db, expected.id).await.unwrap();
        let second = ReservationService::read(&db, expected.id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_status_returns_updated_row() {
        let mut seated = booked_reservation();
        seated.status = ReservationStatus::Seated;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![seated.clone()]])
            .into_connection();

        let updated = ReservationService::update_status(&db, seated.id, ReservationStatus::Seated)
            .await
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::Seated);
    }
}
