//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use messenger_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MessengerError, MessengerResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
///
/// Every path handed to the port is resolved against `root`, the project
/// directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a filesystem adapter rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir_all(&self, path: &Path) -> MessengerResult<()> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> MessengerResult<String> {
        std::fs::read_to_string(self.resolve(path)).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MessengerResult<()> {
        std::fs::write(self.resolve(path), content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_file(&self, path: &Path) -> MessengerResult<()> {
        std::fs::remove_file(self.resolve(path)).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> MessengerResult<()> {
        std::fs::remove_dir_all(self.resolve(path))
            .map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> MessengerResult<()> {
        let source = self.resolve(from);
        let target = self.resolve(to);

        for entry in WalkDir::new(&source) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source.as_path()).to_path_buf();
                map_io_error(&path, io::Error::other(e), "walk directory")
            })?;

            let relative = entry
                .path()
                .strip_prefix(&source)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "copy"))?;
            let destination = target.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&destination)
                    .map_err(|e| map_io_error(&destination, e, "create directory"))?;
            } else {
                std::fs::copy(entry.path(), &destination)
                    .map_err(|e| map_io_error(&destination, e, "copy file"))?;
            }
        }

        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> MessengerResult<()> {
        std::fs::copy(self.resolve(from), self.resolve(to))
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "copy file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MessengerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
