use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::RecordsError;

/// Longest accepted record name, counted in characters.
pub const MAX_NAME_LEN: usize = 55;

/// A persisted row of the `records` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// Body of `POST /api/records`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecord {
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /api/records`; echoed back on success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Request payloads checked before they reach the store.
pub trait Validate {
    fn validate(&self) -> Result<(), RecordsError>;
}

pub fn validate_name(name: &str) -> Result<(), RecordsError> {
    if name.is_empty() {
        return Err(RecordsError::validation("Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(RecordsError::validation(format!(
            "Name cannot be longer than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

impl Validate for CreateRecord {
    fn validate(&self) -> Result<(), RecordsError> {
        validate_name(&self.name)
    }
}

impl Validate for UpdateRecord {
    fn validate(&self) -> Result<(), RecordsError> {
        if self.id == 0 {
            return Err(RecordsError::validation("Id is required"));
        }
        validate_name(&self.name)
    }
}
