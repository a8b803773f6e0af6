//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `messenger-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Manifest, TemplateId};
use crate::error::MessengerResult;

/// Port for the persisted project graph.
///
/// Implemented by:
/// - `messenger_adapters::manifest_store::JsonManifestStore` (production)
/// - `messenger_adapters::manifest_store::InMemoryManifestStore` (testing)
pub trait ManifestStore: Send + Sync {
    /// Whether a manifest exists at all.
    fn exists(&self) -> bool;

    /// Read the manifest. Fails with `ManifestMissing` when absent.
    fn load(&self) -> MessengerResult<Manifest>;

    /// Replace the manifest. A failed save must not leave partial content.
    fn save(&self, manifest: &Manifest) -> MessengerResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `messenger_adapters::template_store::DirectoryTemplateStore` (`.messenger/`)
/// - `messenger_adapters::template_store::InMemoryTemplateStore` (testing)
pub trait TemplateStore: Send + Sync {
    /// Fetch the raw text of a template. Never mutates the source.
    fn fetch(&self, id: &TemplateId) -> MessengerResult<String>;
}

/// Port for filesystem operations on the project tree.
///
/// All paths are relative to the project root; adapters resolve them.
///
/// Implemented by:
/// - `messenger_adapters::filesystem::LocalFilesystem` (production)
/// - `messenger_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MessengerResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> MessengerResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> MessengerResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> MessengerResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MessengerResult<()>;

    /// Recursively copy a directory tree, merging into `to`.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> MessengerResult<()>;

    /// Copy a single file.
    fn copy_file(&self, from: &Path, to: &Path) -> MessengerResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }
}

/// Port for obtaining the template repository.
///
/// Implemented by `messenger_adapters::external::GitTemplateFetcher`.
pub trait TemplateFetcher: Send + Sync {
    /// Materialise `repository` into `destination` (relative to the project root).
    fn fetch(&self, repository: &str, destination: &Path) -> MessengerResult<()>;
}

/// Port for the source formatter.
///
/// Implemented by `messenger_adapters::external::ElmToolchain`.
pub trait CodeFormatter: Send + Sync {
    /// Format every source file under `dir` (relative to the project root).
    fn format(&self, dir: &Path) -> MessengerResult<()>;
}
