//! Infrastructure adapters for Messenger.
//!
//! This crate implements the ports defined in `messenger-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod external;
pub mod filesystem;
pub mod manifest_store;
pub mod template_store;

// Re-export commonly used adapters
pub use external::{ElmToolchain, GitTemplateFetcher};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest_store::{InMemoryManifestStore, JsonManifestStore};
pub use template_store::{DirectoryTemplateStore, InMemoryTemplateStore};
