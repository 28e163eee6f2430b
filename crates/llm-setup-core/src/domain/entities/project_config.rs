//! Project configuration: the parsed input document and the immutable
//! configuration value the scaffold services consume.
//!
//! ```text
//! project_config.json ──► ConfigDocument::from_json ──► ConfigDocument
//!                                                          │ into_config(root)
//!                                                          ▼
//!                                                     ProjectConfig
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{
    error::DomainError,
    value_objects::{BaseStructure, ProjectType},
};

/// Keys every configuration document must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "type", "technologies", "base_structure"];

// ── ProjectConfig ────────────────────────────────────────────────────────────

/// Immutable project configuration.
///
/// Invariant: `name` is non-empty. Nothing else is validated here; `type`
/// and `base_structure` tolerate arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    project_type: ProjectType,
    technologies: Vec<String>,
    base_structure: BaseStructure,
    documentation_path: PathBuf,
}

impl ProjectConfig {
    /// Construct a configuration.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidConfiguration` when `name` is empty or blank.
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        technologies: Vec<String>,
        base_structure: BaseStructure,
        documentation_path: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "project name cannot be empty".into(),
            ));
        }

        Ok(Self {
            name,
            project_type,
            technologies,
            base_structure,
            documentation_path: documentation_path.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_type(&self) -> &ProjectType {
        &self.project_type
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn base_structure(&self) -> &BaseStructure {
        &self.base_structure
    }

    /// Root under which every artifact is written.
    pub fn documentation_path(&self) -> &Path {
        &self.documentation_path
    }

    /// Technologies joined for display, e.g. `python, fastapi`.
    pub fn technologies_display(&self) -> String {
        self.technologies.join(", ")
    }
}

// ── ConfigDocument ───────────────────────────────────────────────────────────

/// The on-disk configuration document (`project_config.json`).
///
/// Unknown keys are ignored when parsing. Serialisation emits the four
/// required keys only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub technologies: Vec<String>,
    pub base_structure: BaseStructure,
}

impl ConfigDocument {
    /// Parse and shape-check a JSON configuration document.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` if the text is not JSON or not a JSON object.
    /// - `MissingFields` naming every absent required key at once.
    /// - `InvalidConfiguration` if a present key has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DomainError::MalformedInput(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(DomainError::MalformedInput(
                "expected a JSON object at the top level".into(),
            ));
        };

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::MissingFields { fields: missing });
        }

        Ok(Self {
            name: string_field(&map, "name")?,
            project_type: string_field(&map, "type")?.into(),
            technologies: technologies_field(&map)?,
            base_structure: string_field(&map, "base_structure")?.into(),
        })
    }

    /// Build the immutable configuration rooted at `documentation_path`.
    pub fn into_config(
        self,
        documentation_path: impl Into<PathBuf>,
    ) -> Result<ProjectConfig, DomainError> {
        ProjectConfig::new(
            self.name,
            self.project_type,
            self.technologies,
            self.base_structure,
            documentation_path,
        )
    }

    /// Pretty JSON with two-space indentation, as written by `init`.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::EncodingFailed {
            artifact: "project configuration",
            reason: e.to_string(),
        })
    }

    /// Split a comma-separated technology list, trimming blanks.
    pub fn parse_technologies(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Result<String, DomainError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(DomainError::InvalidConfiguration(format!(
            "Field '{key}' must be a string"
        ))),
    }
}

fn technologies_field(map: &Map<String, Value>) -> Result<Vec<String>, DomainError> {
    let not_a_list =
        || DomainError::InvalidConfiguration("Field 'technologies' must be a list".into());

    let Some(Value::Array(items)) = map.get("technologies") else {
        return Err(not_a_list());
    };

    items
        .iter()
        .map(|item| item.as_str().map(String::from).ok_or_else(not_a_list))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"{
        "name": "demo",
        "type": "api",
        "technologies": ["python", "fastapi"],
        "base_structure": "standard"
    }"#;

    #[test]
    fn parses_complete_document() {
        let doc = ConfigDocument::from_json(DEMO).unwrap();
        assert_eq!(doc.name, "demo");
        assert_eq!(doc.project_type, ProjectType::Api);
        assert_eq!(doc.technologies, vec!["python", "fastapi"]);
        assert_eq!(doc.base_structure, BaseStructure::Standard);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let raw = r#"{"name":"x","type":"cli","technologies":[],"base_structure":"minimal","owner":"ops"}"#;
        assert!(ConfigDocument::from_json(raw).is_ok());
    }

    #[test]
    fn reports_all_missing_fields_together() {
        let err = ConfigDocument::from_json(r#"{"name": "test-project"}"#).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingFields {
                fields: vec!["type", "technologies", "base_structure"]
            }
        );
    }

    #[test]
    fn non_list_technologies_is_rejected() {
        let raw = r#"{"name":"x","type":"api","technologies":"python","base_structure":"standard"}"#;
        let err = ConfigDocument::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("must be a list"));
    }

    #[test]
    fn garbage_is_malformed_input() {
        assert!(matches!(
            ConfigDocument::from_json("{not json"),
            Err(DomainError::MalformedInput(_))
        ));
        assert!(matches!(
            ConfigDocument::from_json("[1, 2]"),
            Err(DomainError::MalformedInput(_))
        ));
    }

    #[test]
    fn empty_name_fails_construction() {
        let err = ProjectConfig::new(
            "",
            ProjectType::Api,
            vec!["python".into()],
            BaseStructure::Standard,
            "test",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
    }

    #[test]
    fn lenient_type_and_structure_are_accepted() {
        let cfg = ProjectConfig::new(
            "x",
            "pipeline".parse().unwrap(),
            vec![],
            "exotic".parse().unwrap(),
            "out",
        )
        .unwrap();
        assert_eq!(cfg.project_type().as_str(), "pipeline");
        assert_eq!(cfg.base_structure().as_str(), "exotic");
    }

    #[test]
    fn document_serialises_with_type_key() {
        let doc = ConfigDocument::from_json(DEMO).unwrap();
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"api\""));
        assert_eq!(ConfigDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn type_and_structure_spelling_survive_a_rewrite() {
        let raw = r#"{"name":"x","type":"lib","technologies":[],"base_structure":"Standard"}"#;
        let json = ConfigDocument::from_json(raw).unwrap().to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"lib\""));
        assert!(json.contains("\"base_structure\": \"Standard\""));
    }

    #[test]
    fn technologies_are_split_and_trimmed() {
        assert_eq!(
            ConfigDocument::parse_technologies("python, fastapi,,"),
            vec!["python", "fastapi"]
        );
    }
}
