//! Template store backed by the cloned template repository.

use std::path::{Path, PathBuf};

use messenger_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::MessengerResult,
};
use tracing::trace;

/// Reads templates from a directory, normally `<project>/.messenger`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn fetch(&self, id: &TemplateId) -> MessengerResult<String> {
        let path = self.root.join(id.as_str());
        trace!(path = %path.display(), "Reading template");

        if !path.is_file() {
            return Err(ApplicationError::TemplateNotFound {
                id: id.to_string(),
            }
            .into());
        }

        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template: {}", e),
            }
            .into()
        })
    }
}
