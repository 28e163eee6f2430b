//! Outcome records: the validator's checklist and the migration report.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Validation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Directories,
    Documentation,
    ToolsConfiguration,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [
        Self::Directories,
        Self::Documentation,
        Self::ToolsConfiguration,
    ];

    /// Checklist line shown when the check passes.
    pub const fn success_label(&self) -> &'static str {
        match self {
            Self::Directories => "Directory structure valid",
            Self::Documentation => "Documentation valid",
            Self::ToolsConfiguration => "Configuration valid",
        }
    }

    /// Checklist heading shown above the missing items.
    pub const fn failure_label(&self) -> &'static str {
        match self {
            Self::Directories => "Missing required directories",
            Self::Documentation => "Missing required documentation",
            Self::ToolsConfiguration => "Missing tools_config.json",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Directories => "directories",
            Self::Documentation => "documentation",
            Self::ToolsConfiguration => "tools configuration",
        })
    }
}

/// Outcome of one independent check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub kind: CheckKind,
    /// Root-relative paths that were not found.
    pub missing: Vec<String>,
    /// Set when the artifact exists but is unusable.
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            missing: Vec::new(),
            detail: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.detail.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(CheckResult::passed)
    }

    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed())
    }
}

// ── Migration ────────────────────────────────────────────────────────────────

/// File name of the report, written at the target root.
pub const MIGRATION_REPORT_FILE: &str = "migration_report.json";

/// Produced once per migration run and always written, success or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationReport {
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub source: PathBuf,
    pub target: PathBuf,
    /// RFC 3339, UTC.
    pub timestamp: String,
    #[serde(default)]
    pub completed_steps: Vec<String>,
}

impl MigrationReport {
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::EncodingFailed {
            artifact: MIGRATION_REPORT_FILE,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_with_detail_fails() {
        let mut check = CheckResult::new(CheckKind::ToolsConfiguration);
        assert!(check.passed());
        check.detail = Some("Invalid tools_config.json format".into());
        assert!(!check.passed());
    }

    #[test]
    fn report_passes_only_when_all_checks_pass() {
        let mut report = ValidationReport {
            root: PathBuf::from("."),
            checks: CheckKind::ALL.into_iter().map(CheckResult::new).collect(),
        };
        assert!(report.all_passed());

        report.checks[0].missing.push("src".into());
        assert!(!report.all_passed());
        assert_eq!(report.failed().count(), 1);
        assert_eq!(
            report.check(CheckKind::Directories).unwrap().missing,
            vec!["src"]
        );
    }

    #[test]
    fn migration_report_json_has_expected_keys() {
        let report = MigrationReport {
            success: false,
            errors: vec!["boom".into()],
            warnings: vec![],
            source: "src-proj".into(),
            target: "dst-proj".into(),
            timestamp: "2026-01-01T00:00:00+00:00".into(),
            completed_steps: vec![],
        };
        let v: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["errors"][0], "boom");
        assert_eq!(v["source"], "src-proj");
        assert!(v.get("timestamp").is_some());
    }
}
