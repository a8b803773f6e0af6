//! Undo journal for applying a change set.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ChangeSet, FsEntry},
    error::MessengerResult,
};

/// Paths touched by one operation, returned to the caller for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    pub created: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
}

impl ChangeReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.written.is_empty()
    }
}

#[derive(Debug)]
enum Undo {
    RemoveDir(PathBuf),
    RemoveFile(PathBuf),
    Restore { path: PathBuf, content: String },
}

/// Records every effect so a failed operation can be reverted.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    undo: Vec<Undo>,
}

impl Journal {
    /// Apply `changes` in order, recording how to revert each step.
    pub(crate) fn apply(
        &mut self,
        fs: &dyn Filesystem,
        changes: &ChangeSet,
    ) -> MessengerResult<ChangeReport> {
        let mut report = ChangeReport::default();

        for entry in changes.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = dir.path.as_path();
                    self.create_dirs(fs, path)?;
                    report.created.push(path.to_path_buf());
                }
                FsEntry::File(file) => {
                    let path = file.path.as_path();
                    let previous = if fs.exists(path) {
                        Some(fs.read_to_string(path)?)
                    } else {
                        None
                    };
                    if previous.is_some() && !file.overwrites {
                        return Err(ApplicationError::FilesystemConflict {
                            path: path.to_path_buf(),
                        }
                        .into());
                    }

                    if let Some(parent) = path.parent() {
                        self.create_dirs(fs, parent)?;
                    }

                    fs.write_file(path, &file.content)?;
                    debug!(path = %path.display(), overwrite = previous.is_some(), "Wrote file");

                    self.undo.push(match previous {
                        Some(content) => Undo::Restore {
                            path: path.to_path_buf(),
                            content,
                        },
                        None => Undo::RemoveFile(path.to_path_buf()),
                    });
                    report.written.push(path.to_path_buf());
                }
            }
        }

        Ok(report)
    }

    /// Create `path` with its parents, journaling each directory that did
    /// not exist before, outermost first.
    fn create_dirs(&mut self, fs: &dyn Filesystem, path: &Path) -> MessengerResult<()> {
        let mut missing: Vec<PathBuf> = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .take_while(|p| !fs.exists(p))
            .map(Path::to_path_buf)
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        fs.create_dir_all(path)?;
        missing.reverse();
        self.undo.extend(missing.into_iter().map(Undo::RemoveDir));
        Ok(())
    }

    /// Best-effort revert, newest effect first. Every step is attempted;
    /// the first failure is returned.
    pub(crate) fn rollback(self, fs: &dyn Filesystem) -> Result<(), ApplicationError> {
        let mut first_failure = None;

        for step in self.undo.into_iter().rev() {
            let (path, result) = match &step {
                Undo::RemoveDir(path) => (path, fs.remove_dir_all(path)),
                Undo::RemoveFile(path) => (path, remove_if_present(fs, path)),
                Undo::Restore { path, content } => (path, fs.write_file(path, content)),
            };

            if let Err(e) = result {
                warn!(error = %e, path = %path.display(), "Rollback step failed");
                first_failure.get_or_insert(ApplicationError::RollbackFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Files inside a directory created by the same operation are already gone
/// once that directory has been removed.
fn remove_if_present(fs: &dyn Filesystem, path: &Path) -> MessengerResult<()> {
    if fs.exists(path) {
        fs.remove_file(path)
    } else {
        Ok(())
    }
}
