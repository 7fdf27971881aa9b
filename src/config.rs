//! Config file handling
//!
//! An optional `config.toml` can list default options that are injected
//! right after the program name, before the real arguments:
//!
//! ```toml
//! [defaults]
//! options = ["-u", "guest"]
//! ```

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::errors::{ParseroptError, Result};
use crate::table::is_flag;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PARSEROPT_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// parseropt configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default config directory
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_dir())
    }

    /// Load configuration from `config_dir/config.toml`
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config_file = config_dir.join(CONFIG_FILE);

        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file");
            return Ok(Self {
                config_dir,
                default_options: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ParseroptError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir;
        debug!(
            path = %config_file.display(),
            default_options = config.default_options.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse config TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ParseroptError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            config_dir: Self::default_config_dir(),
            default_options,
        })
    }

    /// Insert the default options after the program name
    ///
    /// Default options are placed before the real arguments, so a flag given
    /// on the command line overrides the same flag from the config. Entries
    /// that are positional and not the value of a preceding default flag are
    /// dropped with a warning.
    pub fn merge_into(&self, args: Vec<String>) -> Vec<String> {
        if self.default_options.is_empty() {
            return args;
        }

        let mut defaults = Vec::with_capacity(self.default_options.len());
        let mut ignored = Vec::new();
        let mut prev_is_flag = false;
        for opt in &self.default_options {
            if is_flag(opt) || prev_is_flag {
                prev_is_flag = is_flag(opt);
                defaults.push(opt.clone());
            } else {
                ignored.push(opt.as_str());
            }
        }

        if !ignored.is_empty() {
            warn!(?ignored, "Positional entries in default options are ignored");
        }

        let mut args = args.into_iter();
        let mut merged = Vec::with_capacity(defaults.len() + args.len());
        if let Some(program) = args.next() {
            merged.push(program);
        }
        merged.extend(defaults);
        merged.extend(args);
        merged
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("parseropt"))
            .unwrap_or_else(|| PathBuf::from(".parseropt"))
    }

    /// Path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }
}
