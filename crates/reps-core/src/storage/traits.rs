//! Key/value store trait definition.
//!
//! The `KeyValueStore` trait is the only seam between Reps and the device's
//! storage. Values are opaque strings (JSON in practice); the store knows
//! nothing about collections or schemas.

use crate::error::Result;

/// String-keyed, string-valued store.
///
/// Implementations must ensure:
/// - `set` replaces the whole value for a key (no merge semantics)
/// - a value written by `set` is either fully visible to a later `get` or not at all
///
/// There is no cross-key transactionality and no locking across a
/// read-modify-write cycle; callers that read, mutate and write back can lose
/// an update if two such cycles interleave on the same key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `RepsError::Storage` if the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
