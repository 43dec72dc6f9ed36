// src/i18n/store.rs
use super::Catalog;
use std::sync::Arc;

/// Durable slot for the selected language code on the client side.
pub trait LanguageStorage {
    fn read(&self) -> Option<String>;
    fn write(&mut self, code: &str);
}

/// Storage kept in memory, mostly useful to simulate a reload in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    value: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl LanguageStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, code: &str) {
        self.value = Some(code.to_string());
    }
}

/// Current language plus the catalog it resolves against.
///
/// Every `set` writes through to the storage so that the selection survives a
/// reload. Unknown codes are accepted and simply resolve through the fallback
/// chain of [`Catalog::translate`].
pub struct LanguageStore<S: LanguageStorage> {
    catalog: Arc<Catalog>,
    storage: S,
    current: String,
}

impl<S: LanguageStorage> LanguageStore<S> {
    pub fn load(catalog: Arc<Catalog>, storage: S, initial: &str) -> Self {
        let current = storage
            .read()
            .map(|code| code.trim().to_lowercase())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| initial.to_lowercase());

        Self {
            catalog,
            storage,
            current,
        }
    }

    pub fn get(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, code: &str) {
        let code = code.trim().to_lowercase();
        log::debug!("Language changed: {} -> {}", self.current, code);
        self.storage.write(&code);
        self.current = code;
    }

    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(&self.current, key)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::embedded().unwrap())
    }

    #[test]
    fn test_initial_language_used_without_persisted_value() {
        let store = LanguageStore::load(catalog(), MemoryStorage::new(), "fr");
        assert_eq!(store.get(), "fr");
        assert_eq!(store.translate("home"), "Accueil");
    }

    #[test]
    fn test_set_writes_through_and_survives_reload() {
        let catalog = catalog();
        let mut store = LanguageStore::load(Arc::clone(&catalog), MemoryStorage::new(), "fr");
        store.set("en");
        assert_eq!(store.translate("home"), "Home");
        assert_eq!(store.storage().read().as_deref(), Some("en"));

        let storage = store.into_storage();
        let reloaded = LanguageStore::load(catalog, storage, "fr");
        assert_eq!(reloaded.get(), "en");
        assert_eq!(reloaded.translate("welcome"), "Welcome to Club2Stream");
    }

    #[test]
    fn test_language_without_dictionary_uses_default() {
        let mut store = LanguageStore::load(catalog(), MemoryStorage::with_value("en"), "fr");
        store.set("es");
        assert_eq!(store.get(), "es");
        assert_eq!(store.translate("map"), "Carte");
        assert_eq!(store.translate("unknownKey"), "unknownKey");
    }
}
