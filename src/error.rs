//! All error types for the langtree crate.
//!
//! Mutating a [`crate::TranslationTree`] never fails. These are returned from the
//! fallible edges around it: parsing format names and locales, strict building,
//! and flattening nested values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("invalid key `{0}`")]
    InvalidKey(String),

    #[error("key `{descendant}` conflicts with its ancestor `{ancestor}`")]
    KeyConflict { ancestor: String, descendant: String },

    #[error("invalid value at `{key}`: {message}")]
    InvalidValue { key: String, message: String },

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_error() {
        let error = Error::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "unknown format `yaml`");
    }

    #[test]
    fn test_key_conflict_error() {
        let error = Error::KeyConflict {
            ancestor: "menu".to_string(),
            descendant: "menu.file".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "key `menu.file` conflicts with its ancestor `menu`"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let error = Error::InvalidValue {
            key: "a.b".to_string(),
            message: "expected a string".to_string(),
        };
        assert_eq!(error.to_string(), "invalid value at `a.b`: expected a string");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("empty value");
        assert_eq!(error.to_string(), "validation error: empty value");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidLocale("en_@@".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidLocale"));
        assert!(debug.contains("en_@@"));
    }
}
