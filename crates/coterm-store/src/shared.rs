//! Shared handle to the current store, swapped whole on reload.

use crate::CoTermStore;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Cloneable handle to the store currently being served
///
/// Readers take a [`snapshot`](Self::snapshot) and query it without further
/// locking. [`replace`](Self::replace) swaps in a fully built store; a reader
/// holds either the old store or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct SharedCoTermStore {
    current: Arc<RwLock<Arc<CoTermStore>>>,
}

impl SharedCoTermStore {
    /// Wrap an initial store
    pub fn new(store: CoTermStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// The store being served right now
    pub fn snapshot(&self) -> Arc<CoTermStore> {
        // The lock only guards a pointer swap, so a poisoned lock still holds a complete store
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Publish a new store, returning the one it replaced
    pub fn replace(&self, store: CoTermStore) -> Arc<CoTermStore> {
        let next = Arc::new(store);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, next);
        info!("Co-occurring term store replaced");
        previous
    }
}

impl Default for SharedCoTermStore {
    fn default() -> Self {
        Self::new(CoTermStore::empty())
    }
}
