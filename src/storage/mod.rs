//! Storage Module
//!
//! Filesystem primitives underneath collections.
//!
//! ## Responsibilities
//! - Map keys to document paths and resolve suffix-less lookups
//! - Validate names before they become path segments
//! - Write documents atomically (temp sibling + rename)
//! - Enumerate and load every document in a collection directory
//!
//! ## On-disk Layout
//! ```text
//! {base_path}/
//! └── {store}/
//!     └── {collection}/
//!         ├── john.json        ← committed document
//!         ├── mary.json
//!         └── mary.json.tmp    ← only while a write is in flight
//! ```
//!
//! ## Write Protocol
//! ```text
//!   encode ──► key.json.tmp ──► (fsync) ──► rename ──► key.json
//! ```
//! Readers only ever open `key.json`, so they see the previous version or
//! the new one, never a mix.

mod atomic;
mod resolve;
mod scan;

pub use atomic::{encode_document, write_atomic};
pub use resolve::{
    document_path, resolve, temp_path, validate_segment, with_suffix, Resolved, DOC_SUFFIX,
    TMP_SUFFIX,
};
pub use scan::{list_documents, load_documents, DocumentEntry};
