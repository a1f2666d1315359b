//! JSON collection adapter over a `KeyValueStore`.
//!
//! Two read paths sit on top of the same strict decode. Display reads are
//! fail-soft: a missing key, an unreadable backend or an undecodable blob
//! all come back as an empty value, with anything other than "missing"
//! logged. Mutations load strictly and refuse to rewrite a blob they could
//! not decode. Inside a decodable collection, elements that do not match the
//! record shape are skipped on read and written back verbatim.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::storage::envelope::{decode, encode};
use crate::storage::traits::KeyValueStore;

/// Degrade a strict load result to its default, logging failures.
pub trait OrDefaultLogged<T> {
    fn or_default_logged(self, key: &str) -> T;
}

impl<T: Default> OrDefaultLogged<T> for Result<Option<T>> {
    fn or_default_logged(self, key: &str) -> T {
        match self {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "Unreadable stored value, using empty default");
                T::default()
            }
        }
    }
}

/// A decoded collection plus the stored elements that did not decode.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    pub items: Vec<T>,
    /// Kept as stored and appended on rewrite
    pub unreadable: Vec<Value>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unreadable: Vec::new(),
        }
    }
}

/// Whole-blob JSON persistence for record collections.
#[derive(Clone)]
pub struct Adapter {
    store: Arc<dyn KeyValueStore>,
}

impl Adapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Strict load: `Ok(None)` when absent, `Err` when unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Strict collection load for read-modify-write.
    ///
    /// A missing key is an empty collection. A blob that is not an array
    /// (corrupt, newer layout, wrong shape) is an error so callers never
    /// overwrite it.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Collection<T>> {
        let Some(values) = self.load::<Vec<Value>>(key)? else {
            return Ok(Collection::default());
        };

        let mut collection = Collection::default();
        for value in values {
            match serde_json::from_value::<T>(value.clone()) {
                Ok(item) => collection.items.push(item),
                Err(err) => {
                    tracing::warn!(key, error = %err, "Skipping unreadable stored element");
                    collection.unreadable.push(value);
                }
            }
        }
        Ok(collection)
    }

    /// Read a collection, never failing.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_collection::<T>(key)
            .map(|collection| Some(collection.items))
            .or_default_logged(key)
    }

    /// Overwrite a collection.
    pub fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let encoded = encode(items)?;
        self.store.set(key, &encoded)?;
        tracing::debug!(key, count = items.len(), "Wrote collection");
        Ok(())
    }

    /// Overwrite a collection loaded with `load_collection`, keeping its
    /// unreadable elements after the decoded ones.
    pub fn store_collection<T: Serialize>(
        &self,
        key: &str,
        collection: &Collection<T>,
    ) -> Result<()> {
        if collection.unreadable.is_empty() {
            return self.write_collection(key, &collection.items);
        }

        let mut values = collection
            .items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        values.extend(collection.unreadable.iter().cloned());
        self.write_collection(key, &values)
    }

    /// Read a single record, never failing.
    pub fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.load::<T>(key).map(|v| v.map(Some)).or_default_logged(key)
    }

    /// Overwrite a single record.
    pub fn write_record<T: Serialize>(&self, key: &str, record: &T) -> Result<()> {
        let encoded = encode(record)?;
        self.store.set(key, &encoded)
    }

    /// Drop whatever is stored under `key`.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }
}
