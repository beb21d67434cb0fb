//! Tests for storage primitives
//!
//! These tests verify:
//! - Suffix resolution (exact path first, then `.json`)
//! - Name validation
//! - Atomic writer and document encoding
//! - Directory scanning

use std::fs;
use std::io::ErrorKind;

use jsondb::storage::{
    document_path, encode_document, list_documents, load_documents, resolve, temp_path,
    validate_segment, with_suffix, write_atomic,
};
use jsondb::JsonDbError;
use tempfile::TempDir;

// =============================================================================
// Resolve Tests
// =============================================================================

#[test]
fn test_resolve_exact_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("john");
    fs::write(&path, "x").unwrap();

    let resolved = resolve(&path).unwrap();

    assert_eq!(resolved.path, path);
    assert!(resolved.is_file());
}

#[test]
fn test_resolve_falls_back_to_suffix() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("john.json"), "{}").unwrap();

    let resolved = resolve(&temp.path().join("john")).unwrap();

    assert_eq!(resolved.path, temp.path().join("john.json"));
    assert!(resolved.is_file());
}

#[test]
fn test_resolve_prefers_exact_path() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("john")).unwrap();
    fs::write(temp.path().join("john.json"), "{}").unwrap();

    let resolved = resolve(&temp.path().join("john")).unwrap();

    assert_eq!(resolved.path, temp.path().join("john"));
    assert!(!resolved.is_file());
}

#[test]
fn test_resolve_missing_both() {
    let temp = TempDir::new().unwrap();

    let err = resolve(&temp.path().join("ghost")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_resolve_ignores_temp_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("john.json.tmp"), "{}").unwrap();

    assert!(resolve(&temp.path().join("john")).is_err());
}

// =============================================================================
// Path Helper Tests
// =============================================================================

#[test]
fn test_path_helpers() {
    let temp = TempDir::new().unwrap();
    let doc = document_path(temp.path(), "john");

    assert_eq!(doc, temp.path().join("john.json"));
    assert_eq!(temp_path(&doc), temp.path().join("john.json.tmp"));
    assert_eq!(
        with_suffix(&temp.path().join("a.b"), ".json"),
        temp.path().join("a.b.json")
    );
}

#[test]
fn test_validate_segment() {
    for ok in ["john", "John Smith", "a.b", "...", "ü"] {
        assert!(validate_segment("resource", ok).is_ok(), "{:?}", ok);
    }

    for bad in ["", ".", "..", "a/b", "/abs", "a\\b", "a\0b"] {
        let err = validate_segment("resource", bad).unwrap_err();
        assert!(matches!(err, JsonDbError::InvalidName { kind: "resource", .. }));
        assert!(err.is_validation());
    }
}

// =============================================================================
// Atomic Writer Tests
// =============================================================================

#[test]
fn test_encode_document_layout() {
    let encoded = encode_document(&serde_json::json!({"a": [1, 2]})).unwrap();

    assert_eq!(
        String::from_utf8(encoded).unwrap(),
        "{\n\t\"a\": [\n\t\t1,\n\t\t2\n\t]\n}\n"
    );
}

#[test]
fn test_write_atomic_replaces_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.json");

    write_atomic(&path, b"first\n", false).unwrap();
    write_atomic(&path, b"second\n", true).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    assert!(!temp_path(&path).exists());
}

#[test]
fn test_write_atomic_overwrites_stale_temp() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.json");
    fs::write(temp_path(&path), "stale and much longer than the new content").unwrap();

    write_atomic(&path, b"new\n", false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn test_write_atomic_missing_dir_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope").join("doc.json");

    let err = write_atomic(&path, b"x", false).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_list_documents_filters_and_sorts() {
    let temp = TempDir::new().unwrap();
    for name in ["b.json", "a.json", "c.json.tmp", "readme.md", ".json"] {
        fs::write(temp.path().join(name), "1").unwrap();
    }

    let keys: Vec<String> = list_documents(temp.path())
        .unwrap()
        .into_iter()
        .map(|e| e.key)
        .collect();

    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_load_documents_in_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.json"), "2\n").unwrap();
    fs::write(temp.path().join("a.json"), "1\n").unwrap();

    assert_eq!(load_documents(temp.path()).unwrap(), vec!["1\n", "2\n"]);
}

#[test]
fn test_load_documents_missing_dir() {
    let temp = TempDir::new().unwrap();

    let err = load_documents(&temp.path().join("nope")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}
