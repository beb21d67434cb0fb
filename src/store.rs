//! Store Module
//!
//! Top-level handle owning a root directory and the collection locks.
//!
//! ## Responsibilities
//! - Create the store root on open
//! - Hand out collection handles, creating their directories
//! - Own the per-collection mutex registry
//! - Hold the pluggable logger for embedding applications

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::collection::Collection;
use crate::config::Config;
use crate::error::{JsonDbError, Result};
use crate::logger::{ConsoleLogger, Logger};
use crate::registry::{CollectionLock, MutexRegistry};
use crate::storage::validate_segment;

/// A named document store rooted at `{base_path}/{name}`
///
/// ## Concurrency Model
///
/// - **Collection acquisition**: serialized store-wide by `dir_lock`, so the
///   exists-then-create check on a collection directory never races
/// - **Writes/Deletes**: serialized per collection by a lock from `registry`;
///   different collections never contend
/// - **Reads**: take no lock; the atomic write protocol keeps them consistent
///
/// `Store` is `Send + Sync`; share it between threads with `Arc<Store>` or
/// scoped threads.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Store name (last component of `root`)
    name: String,

    /// `{base_path}/{name}`
    root: PathBuf,

    /// Per-collection locks for the write/delete path
    registry: MutexRegistry,

    /// Serializes collection directory creation across all collections
    dir_lock: Mutex<()>,

    /// Diagnostic sink; not used by the data path
    logger: Arc<dyn Logger>,
}

impl Store {
    /// Name used when `open` is given an empty name
    pub const DEFAULT_NAME: &'static str = "test";

    /// Open or create a store
    ///
    /// On open:
    /// 1. Fall back to `DEFAULT_NAME` for an empty name
    /// 2. Compute `root = base_path / name`
    /// 3. Leave an existing root untouched, otherwise create it recursively
    pub fn open(name: &str, config: Config) -> Result<Self> {
        let name = if name.is_empty() {
            Self::DEFAULT_NAME
        } else {
            name
        };
        validate_segment("store", name)?;

        if config.base_path.as_os_str().is_empty() {
            return Err(JsonDbError::Config("base path must not be empty".to_string()));
        }

        let root = config.base_path.join(name);

        if root.exists() {
            tracing::debug!("Opened existing store at {}", root.display());
        } else {
            fs::create_dir_all(&root)?;
            tracing::debug!("Created store at {}", root.display());
        }

        let logger: Arc<dyn Logger> = match &config.logger {
            Some(logger) => Arc::clone(logger),
            None => Arc::new(ConsoleLogger::default()),
        };

        Ok(Self {
            config,
            name: name.to_string(),
            root,
            registry: MutexRegistry::new(),
            dir_lock: Mutex::new(()),
            logger,
        })
    }

    /// Open with the default config
    pub fn open_default(name: &str) -> Result<Self> {
        Self::open(name, Config::default())
    }

    /// Get a handle to the collection `name`, creating its directory
    ///
    /// Handles are cheap and interchangeable; asking twice for the same name
    /// yields two handles sharing one lock.
    pub fn collection(&self, name: &str) -> Result<Collection<'_>> {
        if name.is_empty() {
            return Err(JsonDbError::MissingCollection);
        }
        validate_segment("collection", name)?;

        let _dir_guard = self.dir_lock.lock();

        let path = self.root.join(name);
        if !path.exists() {
            fs::create_dir_all(&path)?;
            tracing::debug!("Created collection {} in store {}", name, self.name);
        }

        Ok(Collection::new(self, name))
    }

    /// Lock shared by every write/delete on the collection `name`
    pub(crate) fn collection_lock(&self, name: &str) -> CollectionLock {
        self.registry.get_or_create(name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the store name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the diagnostic logger
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Get the mutex registry (for testing and debugging)
    pub fn registry(&self) -> &MutexRegistry {
        &self.registry
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
