//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use messenger_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::MessengerResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<TemplateId, String>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, id: &str, text: &str) -> Self {
        self.insert(id, text);
        self
    }

    /// Add or replace a template.
    pub fn insert(&self, id: &str, text: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(TemplateId::new(id), text.to_string());
        }
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn fetch(&self, id: &TemplateId) -> MessengerResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_inserted_text() {
        let store = InMemoryTemplateStore::new().with("layer/Model.elm", "$0 $0");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.fetch(&TemplateId::new("layer/Model.elm")).unwrap(),
            "$0 $0"
        );
    }

    #[test]
    fn fetch_unknown_id_fails() {
        let store = InMemoryTemplateStore::new();
        assert!(store.is_empty());
        assert!(store.fetch(&TemplateId::new("layer/Model.elm")).is_err());
    }
}
