//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not graph
//! rules. Graph rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No manifest at the project root.
    #[error("{path} not found. Are you inside a project initialised by messenger?")]
    ManifestMissing { path: PathBuf },

    /// The manifest exists but cannot be parsed.
    #[error("Manifest {path} is invalid: {reason}")]
    ManifestCorrupt { path: PathBuf, reason: String },

    /// A node's destination directory is already on disk.
    #[error("Destination already exists: {path}")]
    FilesystemConflict { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template store has no template with this id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// `init` found an existing project.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// An external tool (git, elm, elm-format) failed or is missing.
    #[error("{tool} failed: {reason}")]
    ExternalToolFailed { tool: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestMissing { .. } => vec![
                "Run this command from the project root".into(),
                "Or create a project first: messenger init <your-project-name>".into(),
            ],
            Self::ManifestCorrupt { path, .. } => vec![
                format!("Fix the JSON in {}", path.display()),
                "Names must start with an uppercase letter".into(),
            ],
            Self::FilesystemConflict { path } => vec![
                format!("'{}' exists but is not recorded in messenger.json", path.display()),
                "Remove or rename the directory, or pick another name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateNotFound { id } => vec![
                format!("'.messenger/{}' is missing", id),
                "Re-run `messenger init` to fetch the templates again".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("A messenger.json already exists in {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::ExternalToolFailed { tool, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", tool),
                "Check the command output above for details".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Inspect {} and remove partial output by hand", path.display()),
                "Then run `messenger sync` to regenerate aggregator files".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestMissing { .. } => ErrorCategory::NotFound,
            Self::ManifestCorrupt { .. } => ErrorCategory::Validation,
            Self::FilesystemConflict { .. } | Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::TemplateNotFound { .. } => ErrorCategory::Template,
            Self::ExternalToolFailed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
