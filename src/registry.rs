//! Host-side collection of settings
//!
//! [`SettingsRegistry`] holds many independent [`Setting`]s by name and parses
//! them together at startup, reporting every failure at once.

use crate::env::{EnvSource, SystemEnv};
use crate::error::{Error, Result};
use crate::setting::Setting;
use crate::value::{SettingPrimitive, SettingValue};
use log::{error, info};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Named collection of settings with process-wide lifetime.
///
/// # Example
///
/// ```
/// use envsettings::{InMemoryEnv, Setting, SettingKind, SettingsRegistry};
///
/// let registry = SettingsRegistry::builder()
///     .setting(Setting::optional("LOG_JSON", false))
///     .setting(Setting::mandatory("DATABASE_URL", SettingKind::String))
///     .build()?;
///
/// let env = InMemoryEnv::new();
/// env.set("DATABASE_URL", "postgres://localhost/app");
///
/// registry.parse_all_from(&env)?;
/// assert_eq!(registry.value_as::<bool>("LOG_JSON")?, false);
/// # Ok::<(), envsettings::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SettingsRegistry {
    settings: BTreeMap<String, Arc<Setting>>,
}

impl SettingsRegistry {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> SettingsRegistryBuilder {
        SettingsRegistryBuilder::default()
    }

    /// Look up a setting by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Setting>> {
        self.settings.get(name).cloned()
    }

    /// Current value of a setting.
    ///
    /// # Errors
    ///
    /// [`Error::SettingNotFound`] for unknown names, [`Error::MissingMandatory`]
    /// if the setting is empty.
    pub fn value(&self, name: &str) -> Result<SettingValue> {
        self.lookup(name)?
            .get()
            .ok_or_else(|| Error::MissingMandatory(name.to_string()))
    }

    /// Current value of a setting as a primitive.
    ///
    /// # Errors
    ///
    /// As [`SettingsRegistry::value`], plus [`Error::WrongType`] if `T`
    /// is not the declared type.
    pub fn value_as<T: SettingPrimitive>(&self, name: &str) -> Result<T> {
        let setting = self.lookup(name)?;
        if setting.kind() != T::KIND {
            return Err(Error::WrongType {
                name: name.to_string(),
                declared: setting.kind(),
                requested: T::KIND,
            });
        }

        setting
            .get_as::<T>()
            .ok_or_else(|| Error::MissingMandatory(name.to_string()))
    }

    /// Names of all registered settings, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    /// Iterate over settings in name order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Setting>> {
        self.settings.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Parse every setting from the process environment.
    ///
    /// # Errors
    ///
    /// See [`SettingsRegistry::parse_all_from`].
    pub fn parse_all(&self) -> Result<()> {
        self.parse_all_from(&SystemEnv)
    }

    /// Parse every setting from `env`.
    ///
    /// All settings are parsed even when some fail, so a host sees every
    /// misconfigured variable in one run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Startup`] holding each setting's error.
    pub fn parse_all_from<E: EnvSource + ?Sized>(&self, env: &E) -> Result<()> {
        let failures: Vec<Error> = self
            .settings
            .values()
            .filter_map(|setting| setting.parse_from(env).err())
            .inspect(|e| error!("{e}"))
            .collect();

        if failures.is_empty() {
            info!("Loaded {} setting(s) from environment", self.settings.len());
            Ok(())
        } else {
            Err(Error::Startup(failures))
        }
    }

    /// JSON view of all current values, `null` for empty settings
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, serde_json::Value> {
        self.settings
            .iter()
            .map(|(name, setting)| {
                let value = setting
                    .get()
                    .map_or(serde_json::Value::Null, |v| v.to_json());
                (name.clone(), value)
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&Arc<Setting>> {
        self.settings
            .get(name)
            .ok_or_else(|| Error::SettingNotFound(name.to_string()))
    }
}

/// Builder for [`SettingsRegistry`]
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct SettingsRegistryBuilder {
    settings: Vec<Arc<Setting>>,
}

impl SettingsRegistryBuilder {
    /// Register a setting. Pass an `Arc` to keep a handle to it.
    pub fn setting(mut self, setting: impl Into<Arc<Setting>>) -> Self {
        self.settings.push(setting.into());
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSetting`] if two settings share a name.
    pub fn build(self) -> Result<SettingsRegistry> {
        let mut settings = BTreeMap::new();

        for setting in self.settings {
            match settings.entry(setting.name().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateSetting(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(setting);
                }
            }
        }

        Ok(SettingsRegistry { settings })
    }
}
