//! Error types for envsettings

use crate::value::SettingKind;
use thiserror::Error;

/// Result type alias for envsettings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for envsettings
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Default value for setting '{name}' has type {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: SettingKind,
        actual: SettingKind,
    },

    #[error("Setting '{0}' registered more than once")]
    DuplicateSetting(String),

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("Failed to decode environment value {value:?} for setting '{name}' as {expected}: {reason}")]
    DecodeFailure {
        name: String,
        value: String,
        expected: SettingKind,
        reason: String,
        /// The setting has no default, so it holds no valid value
        mandatory: bool,
    },

    #[error("Mandatory setting is missing or invalid: {0}")]
    MissingMandatory(String),

    // -------------------------------------------------------------------------
    // Registry Errors
    // -------------------------------------------------------------------------
    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    #[error("Setting '{name}' is declared as {declared}, requested as {requested}")]
    WrongType {
        name: String,
        declared: SettingKind,
        requested: SettingKind,
    },

    #[error("{} setting(s) failed to load: {}", .0.len(), join_errors(.0))]
    Startup(Vec<Error>),
}

impl Error {
    /// Name of the setting this error refers to, if any
    #[must_use]
    pub fn setting_name(&self) -> Option<&str> {
        match self {
            Error::TypeMismatch { name, .. }
            | Error::DecodeFailure { name, .. }
            | Error::WrongType { name, .. }
            | Error::MissingMandatory(name)
            | Error::SettingNotFound(name)
            | Error::DuplicateSetting(name) => Some(name.as_str()),
            Error::Startup(_) => None,
        }
    }

    /// Check if this error (or any error it aggregates) leaves a mandatory
    /// setting without a valid value, whether unset or undecodable
    #[must_use]
    pub fn is_missing_mandatory(&self) -> bool {
        match self {
            Error::MissingMandatory(_) | Error::DecodeFailure { mandatory: true, .. } => true,
            Error::Startup(errors) => errors.iter().any(Error::is_missing_mandatory),
            _ => false,
        }
    }
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
