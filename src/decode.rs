//! Decode Helpers
//!
//! Turn document text returned by `read`/`read_all` into typed values.
//! Pure JSON decoding; nothing here touches the filesystem.

use serde::de::DeserializeOwned;

use crate::error::{JsonDbError, Result};

/// Decode a single document
pub fn parse_one<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(JsonDbError::Decode)
}

/// Decode a sequence of documents, failing on the first malformed one
pub fn parse_many<T, S>(texts: &[S]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: AsRef<str>,
{
    texts.iter().map(|text| parse_one(text.as_ref())).collect()
}
