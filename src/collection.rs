//! Collection Module
//!
//! Read/write access to the documents of one collection.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::decode::{parse_many, parse_one};
use crate::error::{JsonDbError, Result};
use crate::storage::{
    document_path, encode_document, list_documents, load_documents, resolve, validate_segment,
    write_atomic,
};
use crate::store::Store;

/// Handle to a named collection within a store
///
/// Carries no state of its own beyond the name: all locking goes through
/// the store's registry, so every handle for the same name behaves alike.
#[derive(Debug, Clone)]
pub struct Collection<'a> {
    store: &'a Store,
    name: String,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(store: &'a Store, name: &str) -> Self {
        Self {
            store,
            name: name.to_string(),
        }
    }

    /// Get the collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the store this collection belongs to
    pub fn store(&self) -> &'a Store {
        self.store
    }

    /// Directory holding this collection's documents
    pub fn path(&self) -> PathBuf {
        self.store.root().join(&self.name)
    }

    /// Store `value` under `key`, replacing any previous document
    ///
    /// Steps:
    /// 1. Acquire the collection lock (held until return)
    /// 2. Ensure the collection directory exists
    /// 3. Encode as tab-indented JSON plus trailing newline
    /// 4. Write `key.json.tmp`, then rename it over `key.json`
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        check_key(key)?;

        let lock = self.store.collection_lock(&self.name);
        let _write_guard = lock.lock();

        let dir = self.path();
        fs::create_dir_all(&dir)?;

        let content = encode_document(value).map_err(JsonDbError::Serialization)?;

        write_atomic(
            &document_path(&dir, key),
            &content,
            self.store.config().sync_writes,
        )?;

        tracing::debug!("Wrote {}/{} ({} bytes)", self.name, key, content.len());
        Ok(())
    }

    /// Store pre-serialized JSON text under `key`
    ///
    /// The text must parse as JSON; it is re-encoded in the canonical
    /// indented layout before being written.
    pub fn write_raw(&self, key: &str, text: &str) -> Result<()> {
        check_key(key)?;

        let value: serde_json::Value =
            serde_json::from_str(text).map_err(JsonDbError::InvalidDocument)?;
        self.write(key, &value)
    }

    /// Load the raw text of the document stored under `key`
    ///
    /// Takes no lock. A concurrent write may make this return either the
    /// old or the new version, always complete.
    pub fn read(&self, key: &str) -> Result<String> {
        check_key(key)?;

        let dir = self.path();
        let base = dir.join(key);
        if let Err(e) = resolve(&base) {
            return Err(not_found_or_io(base, e));
        }

        let path = document_path(&dir, key);
        fs::read_to_string(&path).map_err(|e| not_found_or_io(path, e))
    }

    /// Read `key` and decode it into `T`
    pub fn read_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        parse_one(&self.read(key)?)
    }

    /// Load the raw text of every document, ordered by key
    ///
    /// Not a snapshot: writes that commit during the scan may or may not be
    /// included. The first failed read aborts the whole call.
    pub fn read_all(&self) -> Result<Vec<String>> {
        let dir = self.path();
        if let Err(e) = fs::metadata(&dir) {
            return Err(not_found_or_io(dir, e));
        }

        Ok(load_documents(&dir)?)
    }

    /// Read every document and decode each into `T`
    pub fn read_all_as<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        parse_many(&self.read_all()?)
    }

    /// Keys of every committed document, in `read_all` order
    pub fn keys(&self) -> Result<Vec<String>> {
        let dir = self.path();
        if let Err(e) = fs::metadata(&dir) {
            return Err(not_found_or_io(dir, e));
        }

        Ok(list_documents(&dir)?
            .into_iter()
            .map(|entry| entry.key)
            .collect())
    }

    /// Remove the document stored under `key`
    ///
    /// Shares the collection lock with `write`. Only `key.json` itself is
    /// ever removed: a suffix fallback hit (`key.json.json`) belongs to the
    /// resource `key.json` and counts as not found. If the entry is not a
    /// regular file (a directory, say) nothing is removed and the call still
    /// succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        check_key(key)?;

        let lock = self.store.collection_lock(&self.name);
        let _write_guard = lock.lock();

        let path = document_path(&self.path(), key);
        let resolved = match resolve(&path) {
            Ok(resolved) if resolved.path == path => resolved,
            _ => return Err(JsonDbError::ResourceNotFound(key.to_string())),
        };

        if resolved.is_file() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}/{}", self.name, key);
        } else {
            tracing::debug!(
                "Skipped delete of {}/{}: not a regular file",
                self.name,
                key
            );
        }

        Ok(())
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(JsonDbError::MissingResource);
    }
    validate_segment("resource", key)
}

fn not_found_or_io(path: PathBuf, e: io::Error) -> JsonDbError {
    if e.kind() == io::ErrorKind::NotFound {
        JsonDbError::NotFound { path, source: e }
    } else {
        JsonDbError::Io(e)
    }
}
