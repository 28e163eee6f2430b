//! Read-only checks of a scaffolded root.
//!
//! Three independent checks, always all three. Absence is a finding, never an
//! error: [`ValidationService::validate`] has no failure path.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        CheckKind, CheckResult, REQUIRED_DIRECTORIES, REQUIRED_DOCUMENTS, ValidationReport,
        entities::layout::TOOLS_CONFIG_FILE,
    },
};

pub struct ValidationService {
    filesystem: Box<dyn Filesystem>,
}

impl ValidationService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn validate(&self, root: &Path) -> ValidationReport {
        let checks = CheckKind::ALL
            .into_iter()
            .map(|kind| {
                let result = self.check(root, kind);
                debug!(check = %kind, passed = result.passed(), "Check finished");
                result
            })
            .collect();

        ValidationReport {
            root: root.to_path_buf(),
            checks,
        }
    }

    fn check(&self, root: &Path, kind: CheckKind) -> CheckResult {
        let mut result = CheckResult::new(kind);
        match kind {
            CheckKind::Directories => {
                result.missing = missing(&REQUIRED_DIRECTORIES, |p| {
                    self.filesystem.is_dir(&root.join(p))
                });
            }
            CheckKind::Documentation => {
                result.missing = missing(&REQUIRED_DOCUMENTS, |p| {
                    self.filesystem.is_file(&root.join(p))
                });
            }
            CheckKind::ToolsConfiguration => {
                let path = root.join(TOOLS_CONFIG_FILE);
                if !self.filesystem.is_file(&path) {
                    result.missing.push(TOOLS_CONFIG_FILE.to_string());
                } else {
                    match self.filesystem.read_to_string(&path) {
                        Ok(raw) => {
                            if serde_json::from_str::<serde_json::Value>(&raw).is_err() {
                                result.detail = Some(format!("Invalid {TOOLS_CONFIG_FILE} format"));
                            }
                        }
                        Err(e) => result.detail = Some(e.to_string()),
                    }
                }
            }
        }
        result
    }
}

fn missing(required: &[&str], present: impl Fn(&str) -> bool) -> Vec<String> {
    required
        .iter()
        .copied()
        .filter(|&p| !present(p))
        .map(String::from)
        .collect()
}
