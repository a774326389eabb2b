//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use factory_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, TemplateBundle, TemplateName},
    error::FactoryResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<TemplateName, TemplateBundle>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> FactoryResult<Self> {
        let store = Self::new();
        for bundle in builtin_templates::all_bundles() {
            store.insert(bundle)?;
        }
        Ok(store)
    }

    /// Register a bundle, replacing any bundle of the same name.
    pub fn insert(&self, bundle: TemplateBundle) -> FactoryResult<()> {
        validator::validate_bundle(&bundle)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(bundle.name.clone(), bundle);
        Ok(())
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

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, name: &TemplateName) -> FactoryResult<TemplateBundle> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::UnknownTemplate {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn contains(&self, name: &TemplateName) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(name))
            .unwrap_or(false)
    }

    fn list(&self) -> FactoryResult<Vec<TemplateName>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_core::{domain::DomainError, error::FactoryError};

    #[test]
    fn builtin_templates_are_listed_sorted() {
        let store = InMemoryStore::with_builtin().unwrap();
        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            names,
            [
                "ts-component-button",
                "ts-component-card",
                "ts-lib-local-storage",
                "ts-lib-memory-storage",
                "ts-package",
                "ts-project",
            ]
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get(&TemplateName::lib("missing")).unwrap_err();

        assert!(matches!(
            err,
            FactoryError::Application(ApplicationError::UnknownTemplate { ref name }) if name == "ts-lib-missing"
        ));
        assert!(!store.contains(&TemplateName::lib("missing")));
    }

    #[test]
    fn insert_rejects_escaping_paths() {
        let store = InMemoryStore::new();
        let err = store
            .insert(TemplateBundle::new("ts-lib-bad").with_file("../evil.ts", ""))
            .unwrap_err();

        assert!(matches!(
            err,
            FactoryError::Domain(DomainError::AbsolutePathNotAllowed { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_by_name() {
        let store = InMemoryStore::new();
        store
            .insert(TemplateBundle::new("ts-lib-a").with_file("a.ts", "1"))
            .unwrap();
        store
            .insert(TemplateBundle::new("ts-lib-a").with_file("a.ts", "2"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&TemplateName::lib("a")).unwrap().file_count(), 1);
    }
}
