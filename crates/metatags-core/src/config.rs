//! Builder configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    error::{CoreError, Result},
};

/// Indentation used when none is configured.
pub const DEFAULT_INDENTATION: &str = "    ";

/// Main configuration structure for metatags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Render settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Indentation unit placed before every rendered line but the first.
    #[serde(default = "default_indentation")]
    pub indentation: String,

    /// Whether to emit fragments without any separator.
    #[serde(default)]
    pub minimize: bool,

    /// Category order used when `render` is called without one.
    #[serde(default = "default_order")]
    pub order: Vec<Category>,
}

fn default_indentation() -> String {
    DEFAULT_INDENTATION.to_string()
}

fn default_order() -> Vec<Category> {
    Category::DEFAULT_ORDER.to_vec()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indentation: default_indentation(),
            minimize: false,
            order: default_order(),
        }
    }
}

impl RenderConfig {
    /// Resolve empty settings to their defaults.
    pub fn normalize(&mut self) {
        if self.indentation.is_empty() {
            self.indentation = default_indentation();
        }

        if self.order.is_empty() {
            self.order = default_order();
        }

        if !self.indentation.chars().all(char::is_whitespace) {
            tracing::warn!(
                indentation = %self.indentation,
                "render.indentation contains non-whitespace characters"
            );
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.render.normalize();
        Ok(config)
    }

    /// Load configuration using the config crate, with `METATAGS__` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("METATAGS").separator("__"))
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.render.normalize();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.render.normalize();
        Ok(config)
    }
}
