//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `HELIX_` prefix, `__` between sections,
//!    e.g. `HELIX_TEMPLATES__OVERRIDE_DIR=/tmp/tpl`
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use helix_adapters::default_override_root;
use helix_core::domain::Driver;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template lookup and generation settings.
    pub templates: TemplateConfig,
    /// Values baked into generated projects.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Local override root; `~/.helix/templates` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_dir: Option<PathBuf>,
    /// Render plan entries on the rayon pool.
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Go module prefix for `helix init`; the project name is appended.
    pub module_prefix: String,
    /// `ent` or `pgx`.
    pub default_driver: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            templates: TemplateConfig {
                override_dir: None,
                parallel: true,
            },
            project: ProjectConfig {
                module_prefix: "github.com/godamri".into(),
                default_driver: Driver::default().to_string(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        let file = match config_file {
            Some(path) => file_source(path).required(true),
            None => file_source(&Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("HELIX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        let loaded: Self = config.try_deserialize().map_err(config_error)?;
        // fail at startup rather than on the first generate
        loaded.default_driver()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.helix.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "godamri", "helix")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".helix.toml"))
    }

    /// The override root, resolved once per process.
    pub fn override_root(&self) -> CliResult<PathBuf> {
        self.templates
            .override_dir
            .clone()
            .or_else(default_override_root)
            .ok_or_else(|| CliError::ConfigError {
                message: "Cannot determine the home directory for template overrides; \
                          set templates.override_dir"
                    .into(),
                source: None,
            })
    }

    pub fn default_driver(&self) -> CliResult<Driver> {
        self.project
            .default_driver
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("project.default_driver: {e}"),
                source: None,
            })
    }

    /// Pretty TOML, as written by `helix config init`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn file_source(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
