//! # Field Validators
//!
//! Rules for the purchase inquiry form.
//!
//! ```text
//!   name     ──► validate_min_length(2)
//!   email    ──► validate_email
//!   address  ──► validate_min_length(10)
//!                    │
//!                    ▼
//!   every failing field reported at once ──► no link until the list is empty
//! ```
//!
//! The view runs the same rules as the visitor types. Filter criteria are
//! never validated: the criteria store takes every value as given.
//!
//! ```rust
//! use atelier_core::validation::{validate_email, validate_min_length};
//!
//! assert!(validate_email("email", "anna@example.nl").is_ok());
//! assert!(validate_min_length("name", "A", 2).is_err());
//! ```

use crate::error::ValidationError;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails when the trimmed value is empty.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Required, then at least `min` characters (not bytes) after trimming.
///
/// ## Example
/// ```rust
/// use atelier_core::validation::validate_min_length;
///
/// assert!(validate_min_length("name", "Jo", 2).is_ok());
/// assert!(validate_min_length("name", "  ", 2).is_err());
/// ```
pub fn validate_min_length(field: &str, value: &str, min: usize) -> ValidationResult<()> {
    validate_required(field, value)?;

    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    Ok(())
}

/// Required, then a syntactically valid `local@domain` address.
///
/// ## Rules
/// - Exactly one `@` with a non-empty local part
/// - No whitespace anywhere
/// - Domain made of non-empty dot-separated labels of letters, digits and `-`
pub fn validate_email(field: &str, value: &str) -> ValidationResult<()> {
    validate_required(field, value)?;

    let invalid = || ValidationError::InvalidEmail {
        field: field.to_string(),
    };

    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Anna").is_ok());
        assert_eq!(
            validate_required("name", "   "),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_min_length_counts_chars() {
        assert!(validate_min_length("name", "Åø", 2).is_ok());
        assert_eq!(
            validate_min_length("address", "Dam 1", 10),
            Err(ValidationError::TooShort {
                field: "address".to_string(),
                min: 10
            })
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "anna@example.nl").is_ok());
        assert!(validate_email("email", "anna@localhost").is_ok());
        assert!(validate_email("email", "anna.de.vries+art@mail.example.com").is_ok());

        assert!(matches!(
            validate_email("email", ""),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["anna", "@example.nl", "anna@", "anna@@example.nl", "an na@example.nl", "anna@example..nl"] {
            assert!(
                matches!(validate_email("email", bad), Err(ValidationError::InvalidEmail { .. })),
                "{} should be invalid",
                bad
            );
        }
    }
}
