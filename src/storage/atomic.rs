//! Atomic Document Writer
//!
//! Encodes values as tab-indented JSON and commits them with
//! write-to-temp-then-rename.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::resolve::temp_path;

/// Encode `value` as tab-indented JSON followed by a single newline
pub fn encode_document<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);

    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    buf.push(b'\n');
    Ok(buf)
}

/// Replace `path` with `contents` so no reader ever observes a partial file
///
/// Steps:
/// 1. Create/truncate `{path}.tmp` and write the full contents
/// 2. fsync the temp file (when `sync` is set)
/// 3. Rename the temp file over `path`
///
/// The caller must hold the collection lock; two writers sharing a temp
/// path would otherwise clobber each other. A failure at any step is
/// returned unchanged and a leftover temp file is left in place.
pub fn write_atomic(path: &Path, contents: &[u8], sync: bool) -> io::Result<()> {
    let tmp = temp_path(path);

    {
        let mut file = File::create(&tmp)?;
        file.write_all(contents)?;

        if sync {
            file.sync_all()?;
        }
    }

    std::fs::rename(&tmp, path)?;

    tracing::trace!("Committed {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
