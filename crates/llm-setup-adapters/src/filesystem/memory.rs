//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use llm_setup_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldResult, SetupError},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Writes under these paths fail, to exercise error paths.
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_writable(&self, path: &Path) -> ScaffoldResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(SetupError::filesystem(path, "Permission denied"));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> ScaffoldResult<()> {
        match path.parent() {
            Some(parent)
                if !parent.as_os_str().is_empty() && !self.directories.contains(parent) =>
            {
                Err(SetupError::filesystem(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file, creating its parent directories.
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Make every write at or below `path` fail.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.read_only.clear();
        }
    }

    fn read(&self) -> ScaffoldResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> ScaffoldResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        inner.add_dir_chain(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        inner.check_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::NotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ScaffoldResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> ScaffoldResult<usize> {
        let mut inner = self.write()?;
        if !inner.directories.contains(from) {
            return Err(ApplicationError::NotFound {
                path: from.to_path_buf(),
            }
            .into());
        }
        if to.starts_with(from) {
            return Err(SetupError::filesystem(
                to,
                format!("Cannot copy {} into itself", from.display()),
            ));
        }
        inner.check_writable(to)?;

        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        for dir in directories {
            inner.add_dir_chain(&dir);
        }
        let copied = files.len();
        for (path, content) in files {
            inner.files.insert(path, content);
        }
        Ok(copied)
    }
}

fn lock_poisoned() -> SetupError {
    SetupError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a.txt")).as_deref(), Some("x"));
        assert!(fs.is_dir(Path::new("/")));
    }

    #[test]
    fn copy_dir_all_merges_and_counts_files() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("/src/docs/adr/001.md", "adr");
        fs.insert_file("/src/docs/adr/sub/002.md", "adr2");
        fs.insert_file("/dst/docs/adr/000.md", "existing");

        let copied = fs
            .copy_dir_all(Path::new("/src/docs/adr"), Path::new("/dst/docs/adr"))
            .unwrap();

        assert_eq!(copied, 2);
        assert!(fs.is_file(Path::new("/dst/docs/adr/sub/002.md")));
        assert!(fs.is_dir(Path::new("/dst/docs/adr/sub")));
        assert_eq!(
            fs.read_file(Path::new("/dst/docs/adr/000.md")).as_deref(),
            Some("existing")
        );
    }

    #[test]
    fn copy_dir_all_refuses_target_inside_source() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("/p/src/main.py", "x");

        let err = fs
            .copy_dir_all(Path::new("/p"), Path::new("/p/src/out"))
            .unwrap_err();
        assert!(err.to_string().contains("into itself"));
        assert!(!fs.exists(Path::new("/p/src/out")));
    }

    #[test]
    fn denied_paths_fail_writes() {
        let fs = MemoryFilesystem::new();
        fs.deny_writes("/locked");
        assert!(fs.create_dir_all(Path::new("/locked/docs")).is_err());
        assert!(fs.create_dir_all(Path::new("/open/docs")).is_ok());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.insert_file("/a/b.txt", "b");
        assert!(view.exists(Path::new("/a/b.txt")));
        assert_eq!(view.list_files(), vec![PathBuf::from("/a/b.txt")]);
    }
}
