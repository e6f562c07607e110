//! Environment variable sources
//!
//! Settings read their raw text through [`EnvSource`], so hosts and tests can
//! swap the process environment for an in-memory map.

use crate::sync::RwLockExt;
use std::collections::HashMap;
use std::env::VarError;
use std::sync::RwLock;

/// Source of environment variables
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    /// Look up a variable by its exact name
    fn var(&self, name: &str) -> Result<String, VarError>;
}

/// Reads the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        std::env::var(name)
    }
}

/// Map-backed environment, mutable through a shared reference
///
/// # Example
///
/// ```
/// use envsettings::{InMemoryEnv, Setting};
///
/// let env = InMemoryEnv::new();
/// env.set("WORKERS", "8");
///
/// let workers = Setting::optional("WORKERS", 1u16);
/// workers.parse_from(&env)?;
/// assert_eq!(workers.get_as::<u16>(), Some(8));
/// # Ok::<(), envsettings::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.write_recovered().insert(name.into(), value.into());
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&self, name: &str) -> Option<String> {
        self.vars.write_recovered().remove(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RwLock::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvSource for InMemoryEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        self.vars
            .read_recovered()
            .get(name)
            .cloned()
            .ok_or(VarError::NotPresent)
    }
}
