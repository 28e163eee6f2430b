//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `LLM_SETUP__<SECTION>__<KEY>`
//! 3. Config file (`--config <FILE>`, or [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use llm_setup_core::domain::MIGRATION_REPORT_FILE;

const ENV_PREFIX: &str = "LLM_SETUP";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Answers pre-filled by `init`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Migration settings.
    pub migration: MigrationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub project_type: String,
    pub technologies: Vec<String>,
    pub base_structure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// File name of the report written at the migration target.
    pub report_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                project_type: "api".into(),
                technologies: vec!["python".into()],
                base_structure: "standard".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            migration: MigrationConfig {
                report_file: MIGRATION_REPORT_FILE.into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. With
    /// `None` the default location is used when a file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("defaults.technologies")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.llm-setup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "llm-setup", "llm-setup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".llm-setup.toml"))
    }

    /// Look up a dotted key such as `defaults.project_type`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for segment in key.split('.') {
            value = value.get_mut(segment)?.take();
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_toml(contents: &str) -> AppConfig {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        AppConfig::load(Some(&file.path().to_path_buf())).unwrap()
    }

    #[test]
    fn default_project_type_is_api() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_type, "api");
        assert_eq!(cfg.defaults.technologies, vec!["python"]);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_report_file_matches_core() {
        assert_eq!(
            AppConfig::default().migration.report_file,
            "migration_report.json"
        );
    }

    #[test]
    fn file_overrides_only_what_it_sets() {
        let cfg = load_toml("[defaults]\nproject_type = \"cli\"\n\n[output]\nno_color = true\n");
        assert_eq!(cfg.defaults.project_type, "cli");
        assert_eq!(cfg.defaults.base_structure, "standard");
        assert!(cfg.output.no_color);
        assert_eq!(cfg.migration.report_file, "migration_report.json");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn get_walks_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.get("defaults.project_type"),
            Some(serde_json::json!("api"))
        );
        assert_eq!(cfg.get("output.no_color"), Some(serde_json::json!(false)));
        assert!(cfg.get("defaults").is_some());
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
