use leptos::logging::{log, warn};
use shared_types::{seed_places, Place};
use thiserror::Error;

use crate::store::{KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("saved places are not a valid place list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// `Ok(None)` when nothing usable is saved under `key`.
pub fn read_places(store: &impl KeyValueStore, key: &str) -> Result<Option<Vec<Place>>, LoadError> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// Saved places, or the seed list when the store is empty or unreadable.
pub fn load_places(store: &impl KeyValueStore, key: &str) -> Vec<Place> {
    match read_places(store, key) {
        Ok(Some(places)) => {
            log!("Loaded {} saved places", places.len());
            places
        }
        Ok(None) => seed_places(),
        Err(err) => {
            warn!("Ignoring saved places ({err}); using the built-in list");
            seed_places()
        }
    }
}

pub fn write_places<'a>(
    store: &impl KeyValueStore,
    key: &str,
    places: impl IntoIterator<Item = &'a Place>,
) -> Result<(), PersistError> {
    let places: Vec<&Place> = places.into_iter().collect();
    let json = serde_json::to_string(&places).map_err(|err| PersistError::Encode(err.to_string()))?;
    store.set(key, &json)?;
    Ok(())
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PersistError {
    #[error("could not encode places: {0}")]
    Encode(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
