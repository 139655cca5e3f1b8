//! Typed field coercion over an [`EnvSource`].
//!
//! Each accessor resolves one key, falls back to its default when the
//! key is unset, and records a [`FieldError`] when the raw value does not
//! coerce. Call [`FieldReader::finish`] before using any value read from
//! the reader: values returned alongside a recorded error are
//! placeholders.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult, FieldError};
use crate::source::EnvSource;

/// Values accepted as `true` for boolean fields (case-insensitive)
pub const TRUE_VALUES: &[&str] = &["1", "on", "t", "true", "y", "yes"];

/// Values accepted as `false` for boolean fields (case-insensitive)
pub const FALSE_VALUES: &[&str] = &["0", "off", "f", "false", "n", "no"];

/// Collects typed values and field errors from a source.
pub struct FieldReader<'a> {
    source: &'a EnvSource,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(source: &'a EnvSource) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    fn raw(&self, key: &str) -> Option<&'a str> {
        self.source.get(key)
    }

    fn non_empty(&self, key: &str) -> Option<&'a str> {
        self.raw(key).filter(|v| !v.is_empty())
    }

    /// Required string; unset or empty is an error.
    pub fn required(&mut self, key: &'static str) -> String {
        match self.non_empty(key) {
            Some(value) => value.to_string(),
            None => {
                self.errors.push(FieldError::missing(key));
                String::new()
            }
        }
    }

    /// String with a default. An explicitly empty value is kept.
    pub fn string(&mut self, key: &'static str, default: &str) -> String {
        self.raw(key).unwrap_or(default).to_string()
    }

    /// Optional string; unset or empty resolves to `None`.
    pub fn optional(&mut self, key: &'static str) -> Option<String> {
        self.non_empty(key).map(str::to_string)
    }

    /// Value parsed with `FromStr`, or `default` when unset.
    pub fn parse<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse_with(key, default, |raw| raw.parse::<T>().map_err(|e| e.to_string()))
    }

    /// Optional value parsed with `FromStr`; unset or empty is `None`.
    pub fn parse_optional<T>(&mut self, key: &'static str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.non_empty(key)?;
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(FieldError::invalid(key, e.to_string()));
                None
            }
        }
    }

    /// Value parsed with a custom parser, or `default` when unset.
    pub fn parse_with<T, F>(&mut self, key: &'static str, default: T, parse: F) -> T
    where
        F: FnOnce(&str) -> Result<T, String>,
    {
        let Some(raw) = self.raw(key) else {
            return default;
        };
        match parse(raw.trim()) {
            Ok(value) => value,
            Err(reason) => {
                self.errors.push(FieldError::invalid(key, reason));
                default
            }
        }
    }

    /// Boolean flag.
    pub fn flag(&mut self, key: &'static str, default: bool) -> bool {
        self.parse_with(key, default, parse_bool)
    }

    /// List of strings, given as a JSON array or comma-separated.
    pub fn list(&mut self, key: &'static str, default: &[&str]) -> Vec<String> {
        let default = default.iter().map(|s| s.to_string()).collect();
        self.parse_with(key, default, parse_list)
    }

    /// Path that must name an existing file when set explicitly.
    ///
    /// The default is returned unchecked.
    pub fn existing_file(&mut self, key: &'static str, default: PathBuf) -> PathBuf {
        let Some(raw) = self.non_empty(key) else {
            return default;
        };
        let path = PathBuf::from(raw);
        if !path.is_file() {
            self.errors.push(FieldError::file_not_found(key, &path));
        }
        path
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Fail with every recorded error, if any.
    pub fn finish(self) -> ConfigResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self.errors))
        }
    }
}

/// Parse a boolean from the accepted spellings.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    let value = raw.to_ascii_lowercase();
    if TRUE_VALUES.contains(&value.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err("value could not be parsed to a boolean".to_string())
    }
}

/// Parse a JSON array of strings, or a comma-separated list.
pub fn parse_list(raw: &str) -> Result<Vec<String>, String> {
    if raw.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(raw)
            .map_err(|e| format!("value is not a valid list: {}", e));
    }
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> EnvSource {
        EnvSource::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_required_missing_and_empty() {
        let src = source(&[("SQL_DATABASE", "")]);
        let mut reader = FieldReader::new(&src);

        reader.required("SQL_USERNAME");
        reader.required("SQL_DATABASE");

        let err = reader.finish().unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[
                FieldError::missing("SQL_USERNAME"),
                FieldError::missing("SQL_DATABASE"),
            ]
        );
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let src = source(&[]);
        let mut reader = FieldReader::new(&src);

        assert_eq!(reader.string("JWT_ALGORITHM", "HS256"), "HS256");
        assert_eq!(reader.parse("SQL_PORT", 3306u16), 3306);
        assert!(reader.flag("RELOAD", true));
        assert_eq!(reader.optional("SQL_PASSWORD"), None);
        assert_eq!(reader.parse_optional::<u16>("MONGODB_PORT"), None);
        assert_eq!(reader.list("BACKEND_CORS_ORIGINS", &["*"]), vec!["*"]);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_parse_failure_is_recorded() {
        let src = source(&[("SQL_PORT", "not-a-port"), ("MONGODB_PORT", "70000")]);
        let mut reader = FieldReader::new(&src);

        reader.parse("SQL_PORT", 3306u16);
        reader.parse_optional::<u16>("MONGODB_PORT");

        let fields: Vec<_> = reader.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields, vec!["SQL_PORT", "MONGODB_PORT"]);
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "on", "T", "true", "Y", "YES"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["0", "off", "f", "False", "n", "no"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_list_formats() {
        assert_eq!(
            parse_list(r#"["http://a.test", "http://b.test"]"#).unwrap(),
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(
            parse_list("http://a.test, http://b.test,").unwrap(),
            vec!["http://a.test", "http://b.test"]
        );
        assert!(parse_list("[not json").is_err());
        assert!(parse_list("").unwrap().is_empty());
    }

    #[test]
    fn test_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let present = file.path().to_str().unwrap().to_string();
        let src = source(&[("LOGGING_CONFIG_FILE", present.as_str())]);
        let mut reader = FieldReader::new(&src);

        let path = reader.existing_file("LOGGING_CONFIG_FILE", PathBuf::from("unused"));
        assert_eq!(path, file.path());
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_missing_file_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("logging.conf");
        let raw = missing.to_str().unwrap().to_string();
        let src = source(&[("LOGGING_CONFIG_FILE", raw.as_str())]);
        let mut reader = FieldReader::new(&src);

        reader.existing_file("LOGGING_CONFIG_FILE", PathBuf::from("unused"));

        assert_eq!(
            reader.errors(),
            &[FieldError::file_not_found("LOGGING_CONFIG_FILE", missing)]
        );
    }

    #[test]
    fn test_unset_file_default_is_unchecked() {
        let src = source(&[]);
        let mut reader = FieldReader::new(&src);

        let path = reader.existing_file("LOGGING_CONFIG_FILE", PathBuf::from("/does/not/exist"));

        assert_eq!(path, PathBuf::from("/does/not/exist"));
        assert!(reader.finish().is_ok());
    }
}
