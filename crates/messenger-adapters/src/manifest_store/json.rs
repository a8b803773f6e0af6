//! `messenger.json` on disk.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use messenger_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::{Manifest, layout::MANIFEST_FILE},
    error::{Context, MessengerResult},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::debug;

/// JSON manifest store with atomic replacement.
///
/// Saves go to a temporary file in the same directory which is then renamed
/// over the manifest, so an interrupted save leaves the old manifest intact.
#[derive(Debug, Clone)]
pub struct JsonManifestStore {
    root: PathBuf,
}

impl JsonManifestStore {
    /// Store for the manifest of the project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

/// Serialise with the 4-space indentation the project has always used.
pub(crate) fn to_json(manifest: &Manifest) -> MessengerResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    manifest
        .serialize(&mut ser)
        .context("serialising manifest")?;
    String::from_utf8(buf).context("serialising manifest")
}

impl ManifestStore for JsonManifestStore {
    fn exists(&self) -> bool {
        self.path().is_file()
    }

    fn load(&self) -> MessengerResult<Manifest> {
        let path = self.path();
        if !path.is_file() {
            return Err(ApplicationError::ManifestMissing {
                path: PathBuf::from(MANIFEST_FILE),
            }
            .into());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| ApplicationError::FilesystemError {
            path: path.clone(),
            reason: format!("Failed to read manifest: {}", e),
        })?;

        serde_json::from_str(&text).map_err(|e| {
            ApplicationError::ManifestCorrupt {
                path: PathBuf::from(MANIFEST_FILE),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, manifest: &Manifest) -> MessengerResult<()> {
        let path = self.path();
        let json = to_json(manifest)?;
        let dir = path.parent().unwrap_or(Path::new("."));

        let io_error = |e: std::io::Error| ApplicationError::FilesystemError {
            path: path.clone(),
            reason: format!("Failed to save manifest: {}", e),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(json.as_bytes()).map_err(io_error)?;
        file.persist(&path).map_err(|e| io_error(e.error))?;

        debug!(path = %path.display(), "Manifest saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use messenger_core::domain::NodeName;
    use tempfile::TempDir;

    fn n(s: &str) -> NodeName {
        NodeName::parse(s).unwrap()
    }

    #[test]
    fn empty_manifest_layout() {
        assert_eq!(
            to_json(&Manifest::new()).unwrap(),
            "{\n    \"scenes\": {},\n    \"sceneprotos\": {}\n}"
        );
    }

    #[test]
    fn save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let store = JsonManifestStore::new(temp.path());

        let mut manifest = Manifest::new();
        manifest.add_scene(n("Zeta")).unwrap();
        manifest.add_scene(n("Alpha")).unwrap();
        manifest.add_sceneproto(n("Boss")).unwrap();
        manifest.add_level(&n("Boss"), n("Boss1")).unwrap();
        store.save(&manifest).unwrap();

        assert!(store.exists());
        let loaded = store.load().unwrap();
        let names: Vec<_> = loaded.scenes().map(|(s, _)| s.to_string()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn missing_manifest() {
        let temp = TempDir::new().unwrap();
        let store = JsonManifestStore::new(temp.path());

        assert!(!store.exists());
        assert!(matches!(
            store.load().unwrap_err().as_application(),
            Some(ApplicationError::ManifestMissing { .. })
        ));
    }

    #[test]
    fn corrupt_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "{\"scenes\": {\"lower\": []}}").unwrap();
        let store = JsonManifestStore::new(temp.path());

        assert!(matches!(
            store.load().unwrap_err().as_application(),
            Some(ApplicationError::ManifestCorrupt { .. })
        ));
    }

    #[test]
    fn manifest_breaking_graph_invariants_is_corrupt() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"scenes": {"Boss": []}, "sceneprotos": {"Boss": {"levels": [], "layers": []}}}"#,
        )
        .unwrap();
        let store = JsonManifestStore::new(temp.path());

        match store.load().unwrap_err().as_application() {
            Some(ApplicationError::ManifestCorrupt { reason, .. }) => {
                assert!(reason.contains("'Boss' already exists"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
