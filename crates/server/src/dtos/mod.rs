use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod reservation;
pub mod table;

/// Envelope wrapping every request and response body: `{ "data": ... }`.
///
/// `data` defaults on requests, so a body without it is treated as an
/// empty payload and reported by the field-level checks.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: serde::de::Deserialize<'de> + Default"))]
pub struct DataBody<T> {
    #[serde(default)]
    pub data: T,
}
