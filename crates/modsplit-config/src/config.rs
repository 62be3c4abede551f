//! Configuration management for modsplit

use crate::defaults::{
    default_import_table, default_plan, CONFIG_PATHS, DEFAULT_ANCHOR, DEFAULT_BACKUP_SUFFIX,
    DEFAULT_SOURCE_PATH, ENV_PREFIX,
};
use modsplit_foundation::{ImportTable, ModulePlan, SplitError, SplitResult};
use modsplit_lang_rust::is_identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source file configuration
    #[serde(default)]
    pub source: SourceConfig,
    /// Import lines written into generated modules
    #[serde(default = "default_import_table")]
    pub imports: ImportTable,
    /// Ordered module plan
    #[serde(default = "default_plan")]
    pub modules: Vec<ModulePlan>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source file and rewrite settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File to split
    pub path: PathBuf,
    /// Declarations are inserted after the line containing this text
    pub anchor: String,
    /// Appended to `path` to name the backup copy
    pub backup_suffix: String,
    /// Directory for generated modules; defaults to the source's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// Structured JSON format
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            imports: default_import_table(),
            modules: default_plan(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE_PATH),
            anchor: DEFAULT_ANCHOR.to_string(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            output_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl SourceConfig {
    /// Path of the file generated for `module`
    pub fn module_path(&self, module: &str) -> PathBuf {
        let dir = match &self.output_dir {
            Some(dir) => dir.as_path(),
            None => self.path.parent().unwrap_or(Path::new("")),
        };
        dir.join(format!("{module}.rs"))
    }
}

impl AppConfig {
    /// Render the configuration as TOML
    pub fn to_toml(&self) -> SplitResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SplitError::config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Save configuration to a specified file path
    pub fn save(&self, path: &Path) -> SplitResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SplitError::io(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| SplitError::io(path, e))?;

        Ok(())
    }

    /// Load configuration
    ///
    /// Configuration is loaded in the following priority order (highest to lowest):
    /// 1. Environment variables (MODSPLIT__*, `__` separates nesting levels)
    /// 2. `explicit` file if given, otherwise modsplit.toml or .modsplit/config.toml
    /// 3. Default values
    ///
    /// A TOML `modules` array replaces the default plan; `imports.modules`
    /// entries are merged key by key with the defaults.
    pub fn load_from(explicit: Option<&Path>) -> SplitResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(SplitError::config(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                tracing::info!(path = %path.display(), "Loading TOML configuration");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = CONFIG_PATHS.iter().copied().map(Path::new).find(|p| p.exists()) {
                    tracing::info!(path = %path.display(), "Loading TOML configuration");
                    figment = figment.merge(Toml::file(path));
                } else {
                    tracing::debug!("No configuration file found, using defaults");
                }
            }
        }

        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| SplitError::config(format!("Failed to load configuration: {}", e)))?;

        app_config.validate()?;

        tracing::debug!(
            source = %app_config.source.path.display(),
            modules = app_config.modules.len(),
            "Configuration loaded successfully"
        );

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SplitResult<()> {
        if self.source.path.as_os_str().is_empty() {
            return Err(SplitError::config("Source path cannot be empty"));
        }

        if self.source.backup_suffix.is_empty() {
            return Err(SplitError::config(
                "Backup suffix cannot be empty, the backup would overwrite the source",
            ));
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            if !is_identifier(&module.name) {
                return Err(SplitError::config(format!(
                    "Module name '{}' is not a valid identifier",
                    module.name
                )));
            }
            if self.source.module_path(&module.name) == self.source.path {
                return Err(SplitError::config(format!(
                    "Module '{}' would be written over the source file {}",
                    module.name,
                    self.source.path.display()
                )));
            }
            if !seen.insert(module.name.as_str()) {
                return Err(SplitError::config(format!(
                    "Module '{}' is listed more than once",
                    module.name
                )));
            }
            if let Some(bad) = module
                .functions
                .iter()
                .chain(&module.structs)
                .find(|name| !is_identifier(name))
            {
                return Err(SplitError::config(format!(
                    "Definition name '{}' in module '{}' is not a valid identifier",
                    bad, module.name
                )));
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(SplitError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }
}
