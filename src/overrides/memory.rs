//! In-memory override store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{FinLedgerError, Result};
use crate::models::PurchaseId;

use super::CategoryOverrides;

/// Thread-safe in-memory override store.
///
/// Zero-setup backend for tests and for callers that do not need overrides
/// to survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryOverrides {
    /// The mapping behind a mutex for thread-safe interior mutability.
    inner: Mutex<HashMap<PurchaseId, String>>,
}

impl InMemoryOverrides {
    /// Creates a new empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut HashMap<PurchaseId, String>) -> R) -> Result<R> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|err| FinLedgerError::Store(err.to_string().into()))?;
        Ok(f(&mut inner))
    }
}

impl CategoryOverrides for InMemoryOverrides {
    #[inline]
    fn get(&self, id: &PurchaseId) -> Result<Option<String>> {
        self.with_lock(|map| map.get(id).cloned())
    }

    #[inline]
    fn set(&self, id: &PurchaseId, category: &str) -> Result<()> {
        self.with_lock(|map| {
            let _prev = map.insert(id.clone(), category.to_owned());
        })
    }

    #[inline]
    fn remove(&self, id: &PurchaseId) -> Result<()> {
        self.with_lock(|map| {
            let _prev = map.remove(id);
        })
    }

    #[inline]
    fn all(&self) -> Result<HashMap<PurchaseId, String>> {
        self.with_lock(|map| map.clone())
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(HashMap::clear)
    }
}
