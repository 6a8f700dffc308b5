use models::reservation_status::ReservationStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: Date,
    pub reservation_time: Time,
    pub people: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::table::Entity")]
    Tables,
}

impl Related<super::table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
