//! Configuration management for regform
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `REGFORM_` prefix, `__` for nesting)
//! 2. `./regform.toml` (working directory)
//! 3. `~/.config/regform/config.toml` (user config)
//! 4. `/etc/regform/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [form]
//! variant = "schema"
//! engine = "rule-table"
//! action = "/register"
//! method = "POST"
//!
//! [logging]
//! filter = "regform=debug"
//! format = "json"
//!
//! [sink]
//! kind = "json-lines"
//! path = "./submissions.jsonl"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::RegformError;
use crate::registration::FormVariant;
use crate::validation::ValidationEngine;

/// Which form is shown and how it is validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Form variant
    pub variant: FormVariant,

    /// Engine override; the variant's default engine when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<ValidationEngine>,

    /// Form action URL
    pub action: String,

    /// HTTP method
    pub method: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            engine: None,
            action: "/register".to_string(),
            method: "POST".to_string(),
        }
    }
}

impl FormSettings {
    /// The engine in effect after applying the override
    #[must_use]
    pub fn effective_engine(&self) -> ValidationEngine {
        self.engine.unwrap_or_else(|| self.variant.default_engine())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    Pretty,
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: if cfg!(debug_assertions) {
                "info,regform=debug".to_string()
            } else {
                "info".to_string()
            },
            format: LogFormat::default(),
        }
    }
}

/// Where accepted records go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SinkKind {
    /// Log each record
    #[default]
    Tracing,
    /// Append JSON lines to a file or stdout
    JsonLines,
}

/// Submission sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkSettings {
    /// Sink implementation
    pub kind: SinkKind,

    /// Output file for `json-lines`; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Complete regform configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegformConfig {
    /// Form settings
    #[serde(default)]
    pub form: FormSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Sink settings
    #[serde(default)]
    pub sink: SinkSettings,
}

impl RegformConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be parsed
    /// - A value has the wrong type or an unknown variant name
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use regform::config::RegformConfig;
    ///
    /// # fn example() -> Result<(), regform::error::RegformError> {
    /// let config = RegformConfig::load()?;
    /// println!("{}", config.form.variant);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self, RegformError> {
        let mut figment = Self::defaults()?;

        // 4. System config
        let system_config = PathBuf::from("/etc/regform/config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./regform.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables
        let config = figment.merge(Self::env()).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then the environment
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, RegformError> {
        let config = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Get the per-user config path
    ///
    /// ```rust
    /// use regform::config::RegformConfig;
    ///
    /// let path = RegformConfig::recommended_path();
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./regform.toml"),
            |config_dir| config_dir.join("regform").join("config.toml"),
        )
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns [`RegformError::ConfigEncode`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, RegformError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn defaults() -> Result<Figment, RegformError> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed("REGFORM_").split("__").lowercase(true)
    }
}
