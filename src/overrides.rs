//! Persisted category overrides for remote purchases.
//!
//! When the user re-categorizes a purchase, the choice is stored as a
//! `purchase id -> category label` mapping keyed by the immutable external
//! id, independently of the ledger. The reconciler consults it on every
//! pass so overrides survive refreshes; semantics are last-write-wins.

#[cfg(feature = "store-file")]
mod file;
mod memory;

#[cfg(feature = "store-file")]
pub use file::FileOverrides;
pub use memory::InMemoryOverrides;

use std::collections::HashMap;

use crate::error::Result;
use crate::models::PurchaseId;

/// Storage backend for user-chosen category labels.
///
/// All methods take `&self` — implementations use interior mutability
/// (e.g. `Mutex`) for thread-safe mutation.
pub trait CategoryOverrides: core::fmt::Debug + Send + Sync {
    /// Returns the stored category for a purchase, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn get(&self, id: &PurchaseId) -> Result<Option<String>>;

    /// Stores (or replaces) the category for a purchase.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn set(&self, id: &PurchaseId, category: &str) -> Result<()>;

    /// Removes the stored category for a purchase, reverting it to the
    /// reconciler's default.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn remove(&self, id: &PurchaseId) -> Result<()>;

    /// Returns all stored overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn all(&self) -> Result<HashMap<PurchaseId, String>>;

    /// Removes every stored override.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn clear(&self) -> Result<()>;
}
