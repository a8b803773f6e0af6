//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use messenger_core::{
    application::{ApplicationError, ports::Filesystem},
    error::MessengerResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parents and write a file in one step (test setup helper).
    pub fn seed(&self, path: impl AsRef<Path>, content: &str) -> MessengerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories in path order.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Make writes to `path` fail, to exercise rollback.
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
    }
}

fn missing(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> MessengerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> MessengerResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| missing(path, "File does not exist").into())
    }

    fn write_file(&self, path: &Path, content: &str) -> MessengerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only.contains(path) {
            return Err(missing(path, "Permission denied").into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(missing(path, "Parent directory does not exist").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> MessengerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| missing(path, "File does not exist").into())
    }

    fn remove_dir_all(&self, path: &Path) -> MessengerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> MessengerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(from) {
            return Err(missing(from, "Directory does not exist").into());
        }

        let directories: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|p| p.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        let mut current = PathBuf::new();
        for component in to.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.directories.extend(directories);
        inner.files.extend(files);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("src/Main.elm"), "x").is_err());

        fs.create_dir_all(Path::new("src")).unwrap();
        fs.write_file(Path::new("src/Main.elm"), "x").unwrap();
        assert_eq!(fs.read_file("src/Main.elm").as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_nested_entries() {
        let fs = MemoryFilesystem::new();
        fs.seed("src/Scenes/Home/Export.elm", "e").unwrap();
        fs.seed("src/Scenes/Home/Bg/Model.elm", "m").unwrap();
        fs.seed("src/Scenes/AllScenes.elm", "a").unwrap();

        fs.remove_dir_all(Path::new("src/Scenes/Home")).unwrap();

        assert_eq!(fs.list_files(), vec![PathBuf::from("src/Scenes/AllScenes.elm")]);
        assert!(!fs.exists(Path::new("src/Scenes/Home/Bg")));
        assert!(fs.exists(Path::new("src/Scenes")));
    }

    #[test]
    fn copy_dir_all_rebases_paths() {
        let fs = MemoryFilesystem::new();
        fs.seed(".messenger/core/Lib/Scene/Base.elm", "base").unwrap();

        fs.copy_dir_all(Path::new(".messenger/core"), Path::new("src"))
            .unwrap();

        assert_eq!(fs.read_file("src/Lib/Scene/Base.elm").as_deref(), Some("base"));
        assert!(fs.exists(Path::new("src/Lib")));
        assert!(fs.exists(Path::new(".messenger/core/Lib/Scene/Base.elm")));
    }

    #[test]
    fn denied_writes_fail() {
        let fs = MemoryFilesystem::new();
        fs.seed("src/Scenes/AllScenes.elm", "old").unwrap();
        fs.deny_writes("src/Scenes/AllScenes.elm");

        assert!(fs.write_file(Path::new("src/Scenes/AllScenes.elm"), "new").is_err());
        assert_eq!(fs.read_file("src/Scenes/AllScenes.elm").as_deref(), Some("old"));
    }
}
