//! Person Model

use serde::{Deserialize, Serialize};

/// Person entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
}

/// Create person payload
///
/// The name is optional on the wire; the store rejects absent or blank
/// names with a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonCreate {
    pub full_name: Option<String>,
}

/// Update person payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub full_name: Option<String>,
}
