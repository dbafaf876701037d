use std::{cell::RefCell, collections::HashMap};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Synchronous string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Process-local store. Backs server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stands in for a store that could not be opened. Every call returns the
/// error it was built with.
#[derive(Debug, Clone)]
pub struct UnavailableStore(StoreError);

impl UnavailableStore {
    pub fn new(err: StoreError) -> Self {
        Self(err)
    }
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(self.0.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(self.0.clone())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct BrowserStore(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl BrowserStore {
    pub fn open() -> Result<Self, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .map(Self)
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            message: format!("{err:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            message: format!("{err:?}"),
        })
    }
}

#[cfg(feature = "hydrate")]
pub type PageStore = BrowserStore;

#[cfg(not(feature = "hydrate"))]
pub type PageStore = MemoryStore;

/// Store used by the running page: `localStorage` once hydrated, an empty
/// in-memory map everywhere else.
pub fn page_store() -> Result<PageStore, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        BrowserStore::open()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("places").unwrap(), None);

        store.set("places", "[]").unwrap();
        assert_eq!(store.get("places").unwrap().as_deref(), Some("[]"));

        store.set("places", "[1]").unwrap();
        assert_eq!(store.get("places").unwrap().as_deref(), Some("[1]"));

        store.clear();
        assert_eq!(store.get("places").unwrap(), None);
    }

    #[test]
    fn store_works_through_a_reference() {
        fn read(store: impl KeyValueStore) -> Option<String> {
            store.get("k").unwrap()
        }

        let store = MemoryStore::with_entry("k", "v");
        assert_eq!(read(&store).as_deref(), Some("v"));
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let store = UnavailableStore::new(StoreError::Unavailable);
        assert_eq!(store.get("places"), Err(StoreError::Unavailable));
        assert_eq!(store.set("places", "[]"), Err(StoreError::Unavailable));
    }
}
