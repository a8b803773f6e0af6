//! Application layer for Messenger.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, InitService, TemplateEngine)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! graph rules itself. All of those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{Batch, ChangeReport, InitService, ProjectService, RenderedFile, TemplateEngine};

// Re-export port traits (for adapter implementation)
pub use ports::{CodeFormatter, Filesystem, ManifestStore, TemplateFetcher, TemplateStore};

pub use error::ApplicationError;
