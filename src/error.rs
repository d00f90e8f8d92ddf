//! Crate-wide error type. Every variant maps to a fixed string code.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Record already persisted with id {0}")]
    AlreadyPersisted(i64),

    #[error("Record has not been persisted yet")]
    NotPersisted,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyPersisted(_) => "ALREADY_PERSISTED",
            Self::NotPersisted => "NOT_PERSISTED",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rusqlite_errors_map_to_db_code() {
        let err: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.code(), "DB_ERROR");
    }

    #[test]
    fn serializes_code_and_message() {
        let json = serde_json::to_value(AppError::AlreadyPersisted(7)).unwrap();
        assert_eq!(json["code"], "ALREADY_PERSISTED");
        assert_eq!(json["message"], "Record already persisted with id 7");
        assert!(json["details"].is_null());
    }
}
