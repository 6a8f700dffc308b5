use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Lifecycle state of a reservation.
///
/// A reservation starts out `booked` and either moves through
/// `seated` to `finished`, or is `cancelled` while still booked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    /// A finished reservation can never be updated again.
    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for ReservationStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "ReservationStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<ReservationStatus> for Value {
    fn from(status: ReservationStatus) -> Self {
        Value::String(Some(Box::new(status.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for ReservationStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse().map_err(|_| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Unknown reservation status: {val}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for ReservationStatus {
    fn null() -> Value {
        Value::String(None)
    }
}
