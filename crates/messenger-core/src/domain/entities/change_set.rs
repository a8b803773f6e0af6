use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Fully rendered filesystem effects of one graph operation.
///
/// Built entirely in memory before anything touches the disk. It contains
/// no business logic, only data, and is applied in entry order.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub(crate) entries: Vec<FsEntry>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    /// Queue a file write. `overwrites` marks files expected to exist
    /// already (aggregators, patched files).
    pub fn add_file(&mut self, path: RelativePath, content: String, overwrites: bool) {
        self.entries.push(FsEntry::File(FileToWrite {
            path,
            content,
            overwrites,
        }));
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content, false);
        self
    }

    pub fn extend(&mut self, other: ChangeSet) {
        self.entries.extend(other.entries);
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
    pub overwrites: bool,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_set_builds_in_order() {
        let set = ChangeSet::new()
            .with_directory("src/Scenes/Home".into())
            .with_file("src/Scenes/Home/Export.elm".into(), "module".into());

        assert_eq!(set.entry_count(), 2);
        assert_eq!(set.files().count(), 1);
        assert_eq!(set.directories().count(), 1);
        assert!(matches!(set.entries()[0], FsEntry::Directory(_)));
    }

    #[test]
    fn change_set_rejects_duplicate_paths() {
        let set = ChangeSet::new()
            .with_file("a.elm".into(), String::new())
            .with_file("a.elm".into(), String::new());

        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }
}
