//! Configuration error handling.
//!
//! Every failure here is a startup failure: a deployment whose settings
//! do not validate must not start. Field errors are collected so the
//! operator sees every bad key in one run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single field that failed to resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Required field with no value from any source
    #[error("{field}: field required")]
    Missing { field: &'static str },

    /// Raw value could not be coerced into the declared type
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Path-typed field pointing at a file that is not on disk
    #[error("{field}: file {} does not exist", path.display())]
    FileNotFound { field: &'static str, path: PathBuf },
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        FieldError::Missing { field }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FieldError::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub fn file_not_found(field: &'static str, path: impl Into<PathBuf>) -> Self {
        FieldError::FileNotFound {
            field,
            path: path.into(),
        }
    }

    /// Name of the offending configuration key.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field }
            | FieldError::Invalid { field, .. }
            | FieldError::FileNotFound { field, .. } => field,
        }
    }

    /// Stable error code for tooling
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Missing { .. } => "MISSING_FIELD",
            FieldError::Invalid { .. } => "INVALID_VALUE",
            FieldError::FileNotFound { .. } => "FILE_NOT_FOUND",
        }
    }
}

/// Settings construction errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The override file exists but could not be read or parsed
    #[error("failed to read override file {}: {source}", path.display())]
    OverrideFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// One or more fields failed validation
    #[error("{}", FieldErrors(.0))]
    Validation(Vec<FieldError>),
}

impl ConfigError {
    pub fn override_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        ConfigError::OverrideFile {
            path: path.into(),
            source,
        }
    }

    /// Get error code for tooling
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::OverrideFile { .. } => "OVERRIDE_FILE_ERROR",
            ConfigError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Field errors carried by this error (empty for file errors).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigError::Validation(errors) => errors,
            ConfigError::OverrideFile { .. } => &[],
        }
    }
}

struct FieldErrors<'a>(&'a [FieldError]);

impl fmt::Display for FieldErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        write!(
            f,
            "{} validation error{} for settings",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for error in self.0 {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages_name_the_field() {
        assert_eq!(
            FieldError::missing("SQL_USERNAME").to_string(),
            "SQL_USERNAME: field required"
        );
        assert_eq!(
            FieldError::invalid("SQL_PORT", "invalid digit found in string").to_string(),
            "SQL_PORT: invalid digit found in string"
        );
        assert_eq!(
            FieldError::file_not_found("LOGGING_CONFIG_FILE", "/nope.conf").to_string(),
            "LOGGING_CONFIG_FILE: file /nope.conf does not exist"
        );
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let err = ConfigError::Validation(vec![
            FieldError::missing("SQL_USERNAME"),
            FieldError::missing("REDIS_HOST"),
        ]);

        let message = err.to_string();
        assert!(message.starts_with("2 validation errors for settings"));
        assert!(message.contains("SQL_USERNAME: field required"));
        assert!(message.contains("REDIS_HOST: field required"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_single_error_is_not_pluralized() {
        let err = ConfigError::Validation(vec![FieldError::missing("SQL_DATABASE")]);
        assert!(err.to_string().starts_with("1 validation error for settings"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FieldError::missing("A").code(), "MISSING_FIELD");
        assert_eq!(FieldError::invalid("A", "x").code(), "INVALID_VALUE");
        assert_eq!(FieldError::file_not_found("A", "p").code(), "FILE_NOT_FOUND");
        assert_eq!(FieldError::invalid("SQL_PORT", "x").field(), "SQL_PORT");
    }
}
