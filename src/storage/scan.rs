//! Collection Scanner
//!
//! Lists committed documents in a collection directory and loads them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::resolve::DOC_SUFFIX;

/// A committed document found in a collection directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Resource key (file name without `.json`)
    pub key: String,
    pub path: PathBuf,
}

/// List every `*.json` entry in `dir`, sorted by file name
///
/// Temp files (`*.json.tmp`), foreign files and names that are not valid
/// UTF-8 are skipped. The listing is not a snapshot: entries may be
/// created or removed while it runs.
pub fn list_documents(dir: &Path) -> io::Result<Vec<DocumentEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            continue;
        };

        if let Some(key) = name.strip_suffix(DOC_SUFFIX) {
            if key.is_empty() {
                continue;
            }
            entries.push(DocumentEntry {
                key: key.to_string(),
                path: entry.path(),
            });
        }
    }

    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

/// Load the content of every document in `dir`, in listing order
///
/// The first read failure aborts the scan and the partial result is
/// dropped.
pub fn load_documents(dir: &Path) -> io::Result<Vec<String>> {
    let entries = list_documents(dir)?;

    let mut documents = Vec::with_capacity(entries.len());
    for entry in &entries {
        documents.push(fs::read_to_string(&entry.path)?);
    }

    tracing::trace!("Loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}
