//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use llm_setup_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldResult, SetupError},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "read file"),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ScaffoldResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> ScaffoldResult<usize> {
        // The walk would pick up the files it is writing.
        if resolve(to).starts_with(resolve(from)) {
            return Err(SetupError::filesystem(
                to,
                format!("Cannot copy {} into itself", from.display()),
            ));
        }

        let mut copied = 0;

        for entry in WalkDir::new(from) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                SetupError::filesystem(path, format!("Failed to walk directory: {e}"))
            })?;

            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| SetupError::Internal {
                    message: format!("walked outside {}: {e}", from.display()),
                })?;
            let dest = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    self.create_dir_all(parent)?;
                }
                self.copy_file(entry.path(), &dest)?;
                trace!(from = %entry.path().display(), to = %dest.display(), "Copied");
                copied += 1;
            }
        }

        Ok(copied)
    }
}

/// Canonical form of `path`, which may not exist yet: the nearest existing
/// ancestor is canonicalised and the remaining components are appended.
fn resolve(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return rest.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SetupError {
    SetupError::filesystem(path, format!("Failed to {operation}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_dir_all_merges_into_existing_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("from");
        let to = tmp.path().join("to");
        std::fs::create_dir_all(from.join("nested")).unwrap();
        std::fs::write(from.join("a.md"), "new a").unwrap();
        std::fs::write(from.join("nested/b.md"), "b").unwrap();
        std::fs::create_dir_all(&to).unwrap();
        std::fs::write(to.join("a.md"), "old a").unwrap();
        std::fs::write(to.join("keep.md"), "keep").unwrap();

        let fs = LocalFilesystem::new();
        let copied = fs.copy_dir_all(&from, &to).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(std::fs::read_to_string(to.join("a.md")).unwrap(), "new a");
        assert_eq!(std::fs::read_to_string(to.join("nested/b.md")).unwrap(), "b");
        assert_eq!(std::fs::read_to_string(to.join("keep.md")).unwrap(), "keep");
    }

    #[test]
    fn copy_dir_all_refuses_target_inside_source() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("project");
        std::fs::create_dir_all(from.join("src")).unwrap();
        std::fs::write(from.join("src/main.py"), "print()").unwrap();

        let fs = LocalFilesystem::new();
        for to in [from.join("src/out"), from.join("src/../out"), from.clone()] {
            let err = fs.copy_dir_all(&from, &to).unwrap_err();
            assert!(err.to_string().contains("into itself"), "{err}");
        }
        assert!(!from.join("src/out").exists());
        assert!(!from.join("out").exists());
    }

    #[test]
    fn copy_dir_all_allows_sibling_with_shared_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("src");
        std::fs::create_dir_all(&from).unwrap();
        std::fs::write(from.join("a.py"), "a").unwrap();

        let copied = LocalFilesystem::new()
            .copy_dir_all(&from, &tmp.path().join("src-copy"))
            .unwrap();
        assert_eq!(copied, 1);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&tmp.path().join("absent.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            SetupError::Application(ApplicationError::NotFound { .. })
        ));
    }

    #[test]
    fn write_into_missing_parent_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&tmp.path().join("no/such/dir/file.txt"), "x")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("docs/adr");
        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.is_dir(&dir));
    }
}
