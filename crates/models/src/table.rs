use serde::Serialize;

/// A validated table definition, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTable {
    pub table_name: String,
    pub capacity: i32,
}
