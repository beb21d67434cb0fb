//! Path & Suffix Resolution
//!
//! Keys are stored as `{key}.json`. Lookups accept the bare key and fall back
//! to the suffixed name when the exact path does not exist.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{JsonDbError, Result};

/// Suffix of every committed document
pub const DOC_SUFFIX: &str = ".json";

/// Suffix appended to a document path while it is being written
pub const TMP_SUFFIX: &str = ".tmp";

/// Outcome of a suffix-aware stat
#[derive(Debug)]
pub struct Resolved {
    /// The path that actually exists (exact or suffixed)
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Resolved {
    pub fn is_file(&self) -> bool {
        self.metadata.is_file()
    }
}

/// Stat `base`; if it does not exist, stat `base + ".json"` instead
///
/// Only a `NotFound` on the exact path triggers the fallback. Any other
/// stat error (permissions, bad component) is returned as is.
pub fn resolve(base: &Path) -> io::Result<Resolved> {
    match fs::metadata(base) {
        Ok(metadata) => Ok(Resolved {
            path: base.to_path_buf(),
            metadata,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let suffixed = with_suffix(base, DOC_SUFFIX);
            let metadata = fs::metadata(&suffixed)?;
            Ok(Resolved {
                path: suffixed,
                metadata,
            })
        }
        Err(e) => Err(e),
    }
}

/// Append `suffix` to the final component without touching any existing
/// extension ("a.json" + ".tmp" → "a.json.tmp")
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// `{dir}/{key}.json`
pub fn document_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}{}", key, DOC_SUFFIX))
}

/// `{document}.tmp`
pub fn temp_path(document: &Path) -> PathBuf {
    with_suffix(document, TMP_SUFFIX)
}

/// Reject names that would escape their parent directory
///
/// A valid segment is non-empty, is not `.` or `..`, and contains no path
/// separator or NUL byte.
pub fn validate_segment(kind: &'static str, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(|c| matches!(c, '/' | '\\' | '\0'));

    if invalid {
        return Err(JsonDbError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }

    Ok(())
}
