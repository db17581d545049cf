//! Configuration management for the storefront catalog tools.
//!
//! Parses `storefront.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `catalog.snapshot`
//! - `sidebar.header_color`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override category snapshot path.
    pub catalog: Option<PathBuf>,
    /// Override overflow control width.
    pub overflow_control_width: Option<f64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "storefront.toml";

/// Default category snapshot file name.
const DEFAULT_SNAPSHOT: &str = "catalog.json";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration (paths are relative strings from TOML).
    catalog: CatalogConfigRaw,
    /// Category bar layout configuration.
    pub layout: LayoutConfig,
    /// Category sidebar configuration.
    pub sidebar: SidebarConfig,

    /// Resolved catalog configuration (set after loading).
    #[serde(skip)]
    pub catalog_resolved: CatalogConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw catalog configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogConfigRaw {
    snapshot: Option<String>,
}

/// Resolved catalog configuration with absolute paths.
#[derive(Debug, Default)]
pub struct CatalogConfig {
    /// Category snapshot file (JSON or YAML).
    pub snapshot: PathBuf,
}

/// Category bar layout configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width reserved for the "View All" control, in pixels.
    pub overflow_control_width: f64,
    /// Quiet period before a resize burst is applied, in milliseconds.
    pub resize_debounce_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            overflow_control_width: 120.0,
            resize_debounce_ms: 50,
        }
    }
}

impl LayoutConfig {
    /// Resize debounce duration.
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Category sidebar configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Header color when the drilled category has no accent color.
    pub header_color: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            header_color: "white".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`catalog.snapshot`").
        field: String,
        /// Error message (e.g., "${`CATALOG_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `storefront.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(catalog) = &settings.catalog {
            self.catalog_resolved.snapshot.clone_from(catalog);
        }
        if let Some(width) = settings.overflow_control_width {
            self.layout.overflow_control_width = width;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            catalog: CatalogConfigRaw::default(),
            layout: LayoutConfig::default(),
            sidebar: SidebarConfig::default(),
            catalog_resolved: CatalogConfig {
                snapshot: base.join(DEFAULT_SNAPSHOT),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_layout()?;
        require_non_empty(&self.sidebar.header_color, "sidebar.header_color")?;
        Ok(())
    }

    /// Validate layout configuration.
    fn validate_layout(&self) -> Result<(), ConfigError> {
        const MAX_DEBOUNCE_MS: u64 = 10_000;

        let width = self.layout.overflow_control_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::Validation(
                "layout.overflow_control_width must be a non-negative number".to_owned(),
            ));
        }

        if self.layout.resize_debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Validation(format!(
                "layout.resize_debounce_ms cannot exceed {MAX_DEBOUNCE_MS}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref snapshot) = self.catalog.snapshot {
            self.catalog.snapshot = Some(expand::expand_env(snapshot, "catalog.snapshot")?);
        }
        self.sidebar.header_color =
            expand::expand_env(&self.sidebar.header_color, "sidebar.header_color")?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let snapshot = self.catalog.snapshot.as_deref().unwrap_or(DEFAULT_SNAPSHOT);
        self.catalog_resolved = CatalogConfig {
            snapshot: config_dir.join(snapshot),
        };
    }
}
