//! # jsondb
//!
//! An embeddable, file-backed JSON document store with:
//! - One file per document, one directory per collection
//! - Atomic writes (temp file + rename): readers never see a torn document
//! - Per-collection write locks, lock-free reads
//! - Typed decode helpers on top of raw document text
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Store                               │
//! │            (root dir, mutex registry, logger)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ collection(name)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Collection                             │
//! │          write / read / read_all / delete                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Registry   │          │   Storage   │
//!   │ (per-coll   │          │ (resolve,   │
//!   │   Mutex)    │          │ atomic,scan)│
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use jsondb::{Config, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let store = Store::open("app", Config::default())?;
//! let users = store.collection("users")?;
//!
//! users.write("john", &User { name: "John".into(), age: 30 })?;
//! let john: User = users.read_as("john")?;
//! let everyone: Vec<User> = users.read_all_as()?;
//! # Ok::<(), jsondb::JsonDbError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;

pub mod storage;
pub mod registry;
pub mod store;
pub mod collection;
pub mod decode;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JsonDbError, Result};
pub use config::Config;
pub use logger::{ConsoleLogger, LogLevel, Logger};
pub use store::Store;
pub use collection::Collection;
pub use decode::{parse_many, parse_one};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jsondb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
