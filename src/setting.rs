//! A single named, typed, environment-backed setting

use crate::env::{EnvSource, SystemEnv};
use crate::error::{Error, Result};
use crate::sync::RwLockExt;
use crate::value::{SettingKind, SettingPrimitive, SettingValue};
use log::{debug, warn};
use std::env::VarError;
use std::sync::RwLock;

/// A named setting whose value comes from the environment variable of the same name.
///
/// A setting built with a default is *optional* and falls back to that default
/// when the variable is unset or empty. A setting built without one is
/// *mandatory*: parsing it with the variable unset or empty fails with
/// [`Error::MissingMandatory`], and with a value that does not decode fails
/// with [`Error::DecodeFailure`]. [`Error::is_missing_mandatory`] covers both.
///
/// Reads and parses are guarded by a per-setting read/write lock, so a setting
/// can live in a `static` or an `Arc` and be read from any thread.
///
/// # Example
///
/// ```
/// use envsettings::{InMemoryEnv, Setting, SettingKind, SettingValue};
///
/// let env = InMemoryEnv::new();
/// env.set("LISTEN_PORT", "9000");
///
/// let port = Setting::optional("LISTEN_PORT", 8080u16);
/// let token = Setting::mandatory("API_TOKEN", SettingKind::String);
///
/// port.parse_from(&env)?;
/// assert_eq!(port.get(), Some(SettingValue::Uint16(9000)));
///
/// assert!(token.parse_from(&env).is_err());
/// # Ok::<(), envsettings::Error>(())
/// ```
#[derive(Debug)]
pub struct Setting {
    name: String,
    kind: SettingKind,
    default: Option<SettingValue>,
    value: RwLock<Option<SettingValue>>,
}

impl Setting {
    /// Create a setting, mandatory when `default` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the default's kind differs from `kind`.
    pub fn new(
        name: impl Into<String>,
        kind: SettingKind,
        default: Option<SettingValue>,
    ) -> Result<Self> {
        let name = name.into();

        if let Some(default) = &default {
            if default.kind() != kind {
                return Err(Error::TypeMismatch {
                    name,
                    expected: kind,
                    actual: default.kind(),
                });
            }
        }

        Ok(Self {
            value: RwLock::new(default.clone()),
            name,
            kind,
            default,
        })
    }

    /// Create an optional setting whose kind is inferred from the default
    pub fn optional<T: SettingPrimitive>(name: impl Into<String>, default: T) -> Self {
        let default = default.into_value();
        Self {
            name: name.into(),
            kind: T::KIND,
            value: RwLock::new(Some(default.clone())),
            default: Some(default),
        }
    }

    /// Create a mandatory setting (no default)
    pub fn mandatory(name: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            value: RwLock::new(None),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Name of the setting, also the environment variable it reads
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&SettingValue> {
        self.default.as_ref()
    }

    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.default.is_none()
    }

    /// Current value, or `None` if the setting is empty.
    ///
    /// Before any parse this is the default.
    #[must_use]
    pub fn get(&self) -> Option<SettingValue> {
        self.value.read_recovered().clone()
    }

    /// Current value as a primitive, `None` if empty or of another type
    #[must_use]
    pub fn get_as<T: SettingPrimitive>(&self) -> Option<T> {
        self.get().and_then(SettingValue::into_primitive)
    }

    /// Whether the current value is present and of the declared kind
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.holds_valid(&self.value.read_recovered())
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Re-read the process environment and update the stored value.
    ///
    /// # Errors
    ///
    /// See [`Setting::parse_from`].
    pub fn parse(&self) -> Result<()> {
        self.parse_from(&SystemEnv)
    }

    /// Re-read `env` and update the stored value.
    ///
    /// An unset or empty variable restores the default. String settings take
    /// the raw text; other kinds decode it as a JSON literal. The write lock is
    /// held from the environment lookup until the value is stored, so
    /// concurrent parses apply in lock order.
    ///
    /// # Errors
    ///
    /// - [`Error::DecodeFailure`] if the variable does not decode as the
    ///   declared kind. The stored value is left unchanged.
    /// - [`Error::MissingMandatory`] if the variable is unset or empty and the
    ///   setting has no default.
    ///
    /// Both leave a mandatory setting without a valid value;
    /// [`Error::is_missing_mandatory`] is true for either.
    pub fn parse_from<E: EnvSource + ?Sized>(&self, env: &E) -> Result<()> {
        let mut guard = self.value.write_recovered();

        let value = match env.var(&self.name) {
            Ok(raw) if !raw.is_empty() => {
                let value = self
                    .kind
                    .decode(&raw)
                    .map_err(|e| self.decode_failure(raw, e.to_string()))?;
                debug!("Setting '{}' loaded from environment", self.name);
                Some(value)
            }
            Ok(_) | Err(VarError::NotPresent) => {
                debug!("Setting '{}' not set in environment, using default", self.name);
                self.default.clone()
            }
            Err(VarError::NotUnicode(raw)) => {
                return Err(self.decode_failure(
                    raw.to_string_lossy().into_owned(),
                    "value is not valid unicode".to_string(),
                ));
            }
        };

        *guard = value;
        if self.holds_valid(&guard) {
            Ok(())
        } else {
            Err(Error::MissingMandatory(self.name.clone()))
        }
    }

    fn holds_valid(&self, value: &Option<SettingValue>) -> bool {
        value.as_ref().is_some_and(|v| v.kind() == self.kind)
    }

    fn decode_failure(&self, value: String, reason: String) -> Error {
        warn!(
            "Invalid value for setting '{}' (expected {}): {}",
            self.name, self.kind, reason
        );
        Error::DecodeFailure {
            name: self.name.clone(),
            value,
            expected: self.kind,
            reason,
            mandatory: self.is_mandatory(),
        }
    }
}
