//! Configuration for jsondb
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::logger::Logger;

/// Default directory under which store roots are created
pub const DEFAULT_BASE_PATH: &str = "./.data/";

/// Main configuration for a store instance
#[derive(Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding store roots
    /// Internal structure:
    ///   {base_path}/
    ///     └── {store}/
    ///         └── {collection}/
    ///             ├── {key}.json
    ///             └── {key}.json.tmp   (transient, during writes)
    pub base_path: PathBuf,

    /// fsync the temp file before renaming it over the final path
    pub sync_writes: bool,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Pluggable logger; `None` selects the console logger
    pub logger: Option<Arc<dyn Logger>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            sync_writes: true,
            logger: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_path", &self.base_path)
            .field("sync_writes", &self.sync_writes)
            .field("logger", &self.logger.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base directory under which the store root is created
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_path = path.into();
        self
    }

    /// Enable or disable fsync before the rename step of a write
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Set a custom logger
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = Some(logger);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
