//! Record stores: templates, workouts and movement sessions.
//!
//! Each store owns one collection under one fixed key and rewrites the whole
//! collection on every mutation. Lookups for ids that do not exist come back
//! as `None` / `false`; they are never errors. Mutations load the collection
//! strictly: a blob that cannot be decoded is reported and left untouched.

mod id;
pub mod sessions;
pub mod templates;
pub mod workouts;

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::storage::{Adapter, Collection};

pub use id::generate_id;
pub use sessions::{NewSession, SessionStore, DEFAULT_RECENT_SESSIONS};
pub use templates::{TemplatePatch, TemplateStore};
pub use workouts::{NewWorkout, WorkoutPatch, WorkoutStore, DEFAULT_RECENT_WORKOUTS};

/// A persisted record with a stable string id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection holding this record type.
    const KEY: &'static str;

    fn id(&self) -> &str;
}

/// A record that can be ordered by when it happened.
pub trait Dated: Record {
    fn date(&self) -> DateTime<Utc>;
}

/// A record that supports partial-field updates.
pub trait Patchable: Record {
    type Patch;

    /// Merge `patch` into `self`. The id is never touched.
    fn apply(&mut self, patch: Self::Patch) -> Result<()>;
}

/// Generic whole-collection store.
pub struct RecordStore<R> {
    adapter: Adapter,
    _record: PhantomData<R>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            adapter: self.adapter.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            adapter,
            _record: PhantomData,
        }
    }

    /// Append a record built around a freshly generated, collection-unique id.
    pub fn insert_with(&self, build: impl FnOnce(String) -> R) -> Result<R> {
        let mut collection = self.load_for_write()?;
        let id = loop {
            let candidate = generate_id(Utc::now());
            if !collection.items.iter().any(|item| item.id() == candidate) {
                break candidate;
            }
        };
        let record = build(id);
        collection.items.push(record.clone());
        self.adapter.store_collection(R::KEY, &collection)?;
        Ok(record)
    }

    pub fn get_by_id(&self, id: &str) -> Option<R> {
        self.get_all().into_iter().find(|item| item.id() == id)
    }

    /// All records in stored (insertion) order.
    pub fn get_all(&self) -> Vec<R> {
        self.adapter.read_collection(R::KEY)
    }

    /// Remove the record with `id`. Returns `false` without writing if absent.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut collection = self.load_for_write()?;
        let before = collection.items.len();
        collection.items.retain(|item| item.id() != id);

        if collection.items.len() == before {
            return Ok(false);
        }

        self.adapter.store_collection(R::KEY, &collection)?;
        Ok(true)
    }

    fn load_for_write(&self) -> Result<Collection<R>> {
        self.adapter.load_collection(R::KEY).map_err(|err| {
            tracing::warn!(key = R::KEY, error = %err, "Refusing to rewrite unreadable collection");
            err
        })
    }
}

impl<R: Dated> RecordStore<R> {
    /// Newest first, at most `limit` records. Equal dates keep stored order.
    pub fn get_recent(&self, limit: usize) -> Vec<R> {
        let mut items = self.get_all();
        items.sort_by(|a, b| b.date().cmp(&a.date()));
        items.truncate(limit);
        items
    }
}

impl<R: Patchable> RecordStore<R> {
    /// Apply `patch` to the record with `id`. Returns `Ok(None)` without
    /// writing if absent.
    pub fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>> {
        let mut collection = self.load_for_write()?;
        let Some(index) = collection.items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        collection.items[index].apply(patch)?;
        self.adapter.store_collection(R::KEY, &collection)?;
        Ok(Some(collection.items[index].clone()))
    }
}
