use std::fs;

use mmsearch_core::loader::load_documents;
use mmsearch_core::types::{snippet, SNIPPET_CHARS};
use tempfile::TempDir;

#[test]
fn load_documents_preserves_file_order() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("docs.json");
    fs::write(
        &path,
        r#"[
            {"id": "m1", "title": "Paddington", "description": "A bear in London"},
            {"id": "m2", "title": "Jaws", "description": "A shark off Amity Island"}
        ]"#,
    )
    .expect("write corpus");

    let docs = load_documents(&path).expect("load");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "m1");
    assert_eq!(docs[1].id, "m2");
    assert_eq!(docs[0].title, "Paddington");
}

#[test]
fn load_documents_rejects_non_array_json() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("docs.json");
    fs::write(&path, r#"{"id": "m1"}"#).expect("write corpus");

    assert!(load_documents(&path).is_err());
}

#[test]
fn load_documents_missing_file_errors() {
    let tmp = TempDir::new().expect("tempdir");
    assert!(load_documents(&tmp.path().join("nope.json")).is_err());
}

#[test]
fn snippet_truncates_long_text_to_limit() {
    let long = "x".repeat(250);
    let s = snippet(&long, SNIPPET_CHARS);
    assert_eq!(s.chars().count(), 100);
}

#[test]
fn snippet_keeps_short_text_whole() {
    let s = snippet("short description", SNIPPET_CHARS);
    assert_eq!(s, "short description");
}

#[test]
fn snippet_length_is_min_of_limit_and_input() {
    for len in [0usize, 1, 99, 100, 101, 300] {
        let text: String = "a".repeat(len);
        let s = snippet(&text, SNIPPET_CHARS);
        assert_eq!(s.chars().count(), len.min(SNIPPET_CHARS));
    }
}

#[test]
fn snippet_never_splits_multibyte_characters() {
    // 120 two-byte characters: byte slicing at 100 would panic or
    // produce invalid UTF-8; character truncation must not.
    let text: String = "é".repeat(120);
    let s = snippet(&text, SNIPPET_CHARS);
    assert_eq!(s.chars().count(), 100);
    assert!(s.chars().all(|c| c == 'é'));
}
