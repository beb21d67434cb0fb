//! Mutex Registry
//!
//! One lock per collection, created on first use.
//!
//! ## Concurrency:
//! - `locks`: the map itself is guarded by its own mutex, held only while
//!   looking up or inserting an entry
//! - The returned per-collection lock is locked by callers directly; the
//!   registry mutex never covers their critical sections

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Handle to a collection's lock
pub type CollectionLock = Arc<Mutex<()>>;

/// Lazily-populated map from collection name to its lock
#[derive(Debug, Default)]
pub struct MutexRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl MutexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the lock for `name`, creating it if this is the first access
    ///
    /// Concurrent first callers all receive the same `Arc`.
    pub fn get_or_create(&self, name: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(name) {
            return Arc::clone(lock);
        }

        tracing::trace!("Registering lock for collection {}", name);
        let lock = Arc::new(Mutex::new(()));
        locks.insert(name.to_string(), Arc::clone(&lock));
        lock
    }

    /// Whether a lock has been registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.locks.lock().contains_key(name)
    }

    /// Number of registered collection locks
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
