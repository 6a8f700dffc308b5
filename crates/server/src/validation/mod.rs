//! Request validation. Each check is a small pure function returning
//! `Result<(), ApiError>`; the `validate_*` entry points run them in a
//! fixed order and stop at the first failure, so clients always see the
//! earliest applicable message.

pub mod reservation;
pub mod table;
