//! # Command Errors
//!
//! Every command returns [`ApiResult`]. Whatever went wrong underneath is
//! folded into one serializable [`ApiError`] the view can switch on.
//!
//! ```text
//!   DbError ──────────────┐
//!   CoreError ────────────┤
//!   CatalogError ─────────┼──► ApiError { code, message, fieldErrors }
//!   ConfigError ──────────┤
//!   Vec<ValidationError> ─┘      fieldErrors: [{ field, key }]
//! ```
//!
//! Storage details never reach the view. They are logged here and replaced
//! by a fixed message.

use atelier_core::{CoreError, ValidationError};
use atelier_db::DbError;
use serde::Serialize;
use ts_rs::TS;

use crate::state::{CatalogError, ConfigError};

/// What a failed command sends back.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "email does not look like an email address",
///   "fieldErrors": [{ "field": "email", "key": "modal.errors.email.invalid" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    /// English text for logs and the CLI; the view prefers `fieldErrors`.
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    DatabaseError,
    /// Neither catalog source produced anything usable.
    CatalogError,
    /// Gallery settings missing or unusable, such as no contact number.
    ConfigError,
    Internal,
}

/// One rejected form field and the key of its inline message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub key: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn not_found(what: &str, id: &str) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found: {}", what, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// `(field, key)` pairs in form order.
    pub fn field_keys(&self) -> Vec<(&str, &str)> {
        self.field_errors
            .iter()
            .map(|e| (e.field.as_str(), e.key.as_str()))
            .collect()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        let summary = match &err {
            DbError::NotFound { entity, id } => return ApiError::not_found(entity, id),
            DbError::UniqueViolation { field, value } => {
                return ApiError::validation(format!("{} '{}' is already taken", field, value))
            }
            DbError::ConstraintViolation(rule) => return ApiError::validation(rule.clone()),
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => "Database unavailable",
            DbError::MigrationFailed(_) => "Database schema could not be upgraded",
            _ => "Database operation failed",
        };
        tracing::error!(error = %err, "{}", summary);
        ApiError::new(ErrorCode::DatabaseError, summary)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ArtworkNotFound(id) => ApiError::not_found("Artwork", &id.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        vec![err].into()
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        ApiError {
            code: ErrorCode::ValidationError,
            message,
            field_errors: errors
                .iter()
                .map(|e| FieldError {
                    field: e.field().to_string(),
                    key: e.translation_key(),
                })
                .collect(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Database(e) => e.into(),
            other => ApiError::new(ErrorCode::CatalogError, other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::config(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_keep_field_keys() {
        let err: ApiError = vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::InvalidEmail {
                field: "email".to_string(),
            },
        ]
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.field_keys(),
            vec![
                ("name", "modal.errors.name.required"),
                ("email", "modal.errors.email.invalid"),
            ]
        );
    }

    #[test]
    fn test_serialization_shape() {
        let err = ApiError::not_found("Artwork", "7");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Artwork not found: 7");
        assert!(json.get("fieldErrors").is_none());
    }

    #[test]
    fn test_db_errors_hide_details() {
        let err: ApiError = DbError::QueryFailed("syntax error near SELECT".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");

        let err: ApiError = DbError::PoolExhausted.into();
        assert_eq!(err.message, "Database unavailable");

        let err: ApiError = DbError::not_found("Artwork", 3).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Artwork not found: 3");
    }
}
