//! Common test utilities for envsettings integration tests

#![allow(dead_code)]

use envsettings::{Setting, SettingKind, SettingsRegistry};

/// Install a test logger once per binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Set a process environment variable for the current test.
///
/// Callers must be `#[serial]` tests.
pub fn set_env(name: &str, value: &str) {
    // SAFETY: only called from `#[serial]` tests, so no other test thread
    // reads or writes the environment at the same time.
    unsafe { std::env::set_var(name, value) };
}

/// Remove a process environment variable. Callers must be `#[serial]` tests.
pub fn remove_env(name: &str) {
    // SAFETY: see `set_env`.
    unsafe { std::env::remove_var(name) };
}

/// A service-like registry with one setting of each flavour
pub fn service_registry(prefix: &str) -> SettingsRegistry {
    SettingsRegistry::builder()
        .setting(Setting::optional(format!("{prefix}_PORT"), 8080u16))
        .setting(Setting::optional(format!("{prefix}_DEBUG"), false))
        .setting(Setting::optional(format!("{prefix}_RATIO"), 0.5f64))
        .setting(Setting::mandatory(
            format!("{prefix}_DATABASE_URL"),
            SettingKind::String,
        ))
        .setting(Setting::mandatory(
            format!("{prefix}_WORKERS"),
            SettingKind::Uint8,
        ))
        .build()
        .expect("registry names are unique")
}
