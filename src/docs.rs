//! Documentation generator for registered settings
//!
//! Renders a markdown reference of the environment variables a
//! [`SettingsRegistry`] reads.

use crate::registry::SettingsRegistry;
use crate::setting::Setting;
use std::fmt::Write;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// Whether to list optional settings
    pub show_optional: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_optional: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn hide_optional(mut self) -> Self {
        self.show_optional = false;
        self
    }
}

/// Generate markdown documentation for every setting in the registry.
///
/// Mandatory settings come first, each group in name order.
#[must_use]
pub fn generate_docs(registry: &SettingsRegistry, config: DocsConfig) -> String {
    let mut output = String::new();

    let title = config
        .title
        .unwrap_or_else(|| "Environment Reference".to_string());
    let _ = writeln!(output, "# {title}\n");

    if let Some(desc) = config.description {
        let _ = writeln!(output, "{desc}\n");
    }

    let (mandatory, optional): (Vec<_>, Vec<_>) =
        registry.iter().partition(|s| s.is_mandatory());

    if !mandatory.is_empty() {
        output.push_str("## Required\n\n");
        for setting in mandatory {
            format_setting(&mut output, setting);
        }
    }

    if config.show_optional && !optional.is_empty() {
        output.push_str("## Optional\n\n");
        for setting in optional {
            format_setting(&mut output, setting);
        }
    }

    output
}

fn format_setting(out: &mut String, setting: &Setting) {
    let _ = writeln!(out, "### `{}`\n", setting.name());
    let _ = writeln!(out, "- **Type**: `{}`", setting.kind());

    match setting.default_value() {
        Some(default) => {
            let _ = writeln!(out, "- **Default**: `{default}`");
        }
        None => out.push_str("- **Required**\n"),
    }

    out.push('\n');
}
