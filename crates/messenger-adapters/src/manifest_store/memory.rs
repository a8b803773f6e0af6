//! In-memory manifest store for testing.

use std::{
    path::PathBuf,
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use messenger_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::{Manifest, layout::MANIFEST_FILE},
    error::MessengerResult,
};

/// Manifest held in memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryManifestStore {
    manifest: Arc<RwLock<Option<Manifest>>>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryManifestStore {
    /// A store with no manifest (an uninitialised project).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `manifest`.
    pub fn with_manifest(manifest: Manifest) -> Self {
        let store = Self::new();
        if let Ok(mut slot) = store.manifest.write() {
            *slot = Some(manifest);
        }
        store
    }

    /// Current content, if any (testing helper).
    pub fn snapshot(&self) -> Option<Manifest> {
        self.manifest.read().ok().and_then(|m| m.clone())
    }

    /// Make every following save fail, to exercise rollback.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl ManifestStore for InMemoryManifestStore {
    fn exists(&self) -> bool {
        self.snapshot().is_some()
    }

    fn load(&self) -> MessengerResult<Manifest> {
        let slot = self
            .manifest
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        slot.clone().ok_or_else(|| {
            ApplicationError::ManifestMissing {
                path: PathBuf::from(MANIFEST_FILE),
            }
            .into()
        })
    }

    fn save(&self, manifest: &Manifest) -> MessengerResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ApplicationError::FilesystemError {
                path: PathBuf::from(MANIFEST_FILE),
                reason: "save disabled".into(),
            }
            .into());
        }

        let mut slot = self
            .manifest
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *slot = Some(manifest.clone());
        Ok(())
    }
}
