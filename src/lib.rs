//! # envsettings
//!
//! Typed configuration values backed by environment variables.
//!
//! Each [`Setting`] has a name (the environment variable it reads), a declared
//! [`SettingKind`] and an optional default. A setting with a default is
//! optional; one without is mandatory, and parsing it without a usable
//! variable is an error the host should treat as fatal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envsettings::{Setting, SettingKind};
//!
//! # fn main() -> envsettings::Result<()> {
//! let port = Setting::optional("PORT", 8080u16);
//! let database_url = Setting::mandatory("DATABASE_URL", SettingKind::String);
//!
//! port.parse()?;
//! database_url.parse()?;
//!
//! let port: u16 = port.get_as().unwrap_or(8080);
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding
//!
//! String settings take the variable verbatim. All other kinds decode the
//! variable as a JSON literal of the exact type: `true`/`false` for booleans,
//! a bare integer that fits the width for integers, any number for floats.
//! An unset or empty variable restores the default.
//!
//! A value that fails to decode is reported as [`Error::DecodeFailure`] and the
//! setting keeps whatever it held before.
//!
//! ## Many Settings
//!
//! ```rust,no_run
//! use envsettings::{Setting, SettingKind, SettingsRegistry};
//!
//! let registry = SettingsRegistry::builder()
//!     .setting(Setting::optional("WORKERS", 4u8))
//!     .setting(Setting::mandatory("API_TOKEN", SettingKind::String))
//!     .build()
//!     .unwrap();
//!
//! if let Err(e) = registry.parse_all() {
//!     eprintln!("invalid configuration: {e}");
//!     std::process::exit(1);
//! }
//! ```

mod docs;
mod env;
mod error;
mod registry;
mod setting;
mod sync;
mod value;

pub use docs::{DocsConfig, generate_docs};
pub use env::{EnvSource, InMemoryEnv, SystemEnv};
pub use error::{Error, Result};
pub use registry::{SettingsRegistry, SettingsRegistryBuilder};
pub use setting::Setting;
pub use value::{SettingKind, SettingPrimitive, SettingValue};
