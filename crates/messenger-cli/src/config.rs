//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MESSENGER_<SECTION>__<KEY>`, e.g.
//!    `MESSENGER_FORMAT__COMMAND=elm-format-0.19`
//! 3. Config file (`--config FILE`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Repository cloned by `messenger init` when `-t` is not given.
pub const DEFAULT_TEMPLATE_REPOSITORY: &str = "https://github.com/linsyking/messenger-templates";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Template settings.
    pub templates: TemplateConfig,
    /// Code formatter settings.
    pub format: FormatConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub repository: String,
    /// Template directory, relative to the project root.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    pub enabled: bool,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            templates: TemplateConfig {
                repository: DEFAULT_TEMPLATE_REPOSITORY.into(),
                dir: PathBuf::from(".messenger"),
            },
            format: FormatConfig {
                enabled: true,
                command: "elm-format".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("MESSENGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.messenger.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "linsyking", "messenger")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".messenger.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_upstream_templates() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.templates.repository, DEFAULT_TEMPLATE_REPOSITORY);
        assert_eq!(cfg.templates.dir, PathBuf::from(".messenger"));
        assert_eq!(cfg.format.command, "elm-format");
        assert!(cfg.format.enabled);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn file_overrides_only_the_keys_it_sets() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[format]\nenabled = false").unwrap();

        let cfg = AppConfig::load_from(file.path(), true).unwrap();
        assert!(!cfg.format.enabled);
        assert_eq!(cfg.format.command, "elm-format");
        assert_eq!(cfg.templates.repository, DEFAULT_TEMPLATE_REPOSITORY);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[format\nenabled = ").unwrap();
        assert!(AppConfig::load_from(file.path(), true).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
