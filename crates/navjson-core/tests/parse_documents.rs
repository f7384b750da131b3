//! Integration test: parse the nav.json fixtures under `tests/testdata/`.
//!
//! The fixtures mirror documents found in real documentation repositories,
//! including a monorepo with per-package nesting.

use std::path::PathBuf;

use navjson_core::{is_valid, parse, NavDocument, NavEntry, NavJsonError};
use proptest::prelude::*;

fn testdata(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()))
}

#[test]
fn full_valid_document() {
    let doc = parse(&testdata("simple-valid.json")).unwrap();
    assert_eq!(doc.root, "guide/attest/2.7-experiment/");
    assert_eq!(doc.asset_root, "assets/images/attest/2.7-experiment/");
    assert!(doc.skip_menu_ordering);
    assert_eq!(doc.files.len(), 2);
    assert_eq!(doc.package_path("attest-java"), Some("packages/attest-java"));
}

#[test]
fn document_without_packages() {
    let doc = parse(&testdata("no-packages.json")).unwrap();
    assert!(doc.packages.is_none());
}

#[test]
fn document_with_packages() {
    let doc = parse(&testdata("with-packages.json")).unwrap();
    assert!(doc.packages.is_some());
    assert_eq!(doc.package_path("attest-js"), Some("path"));
}

#[test]
fn files_with_names() {
    let doc = parse(&testdata("files-with-names.json")).unwrap();
    assert_eq!(doc.files.len(), 1);
    assert_eq!(doc.files[0].name, "hello");
}

#[test]
fn missing_required_keys() {
    for (fixture, key) in [
        ("missing-root.json", "root"),
        ("missing-assetRoot.json", "assetRoot"),
        ("missing-files.json", "files"),
    ] {
        match parse(&testdata(fixture)) {
            Err(NavJsonError::MissingField(field)) => assert_eq!(field, key, "{fixture}"),
            other => panic!("{fixture}: expected MissingField({key}), got: {other:?}"),
        }
    }
}

#[test]
fn skip_menu_ordering_as_string_rejected() {
    let err = parse(&testdata("invalid-skipMenuOrdering.json")).unwrap_err();
    assert!(matches!(err, NavJsonError::TypeMismatch(_)), "got: {err}");
}

#[test]
fn real_world_examples_parse() {
    for fixture in ["attest-docs.json", "attest-node-suite.json"] {
        let text = testdata(fixture);
        assert!(is_valid(&text), "{fixture} should be valid");
    }
}

#[test]
fn monorepo_nesting_shape() {
    let doc = parse(&testdata("attest-node-suite.json")).unwrap();
    let packages = &doc.files[1];
    assert!(packages.is_group());
    assert_eq!(packages.path, "packages");
    assert_eq!(packages.children.len(), 3);
    assert!(packages.children.iter().all(NavEntry::is_group));
    assert_eq!(doc.entry_count(), 8);
}

#[test]
fn fixtures_round_trip() {
    for fixture in [
        "simple-valid.json",
        "no-packages.json",
        "with-packages.json",
        "attest-docs.json",
        "attest-node-suite.json",
    ] {
        let doc = parse(&testdata(fixture)).unwrap();
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(parse(&text).unwrap(), doc, "{fixture}");
    }
}

fn entry_strategy() -> impl Strategy<Value = NavEntry> {
    let leaf = ("[a-z]{0,6}(\\.md)?", "[a-z/]{0,8}").prop_map(|(n, p)| NavEntry::file(n, p));
    leaf.prop_recursive(3, 24, 4, |inner| {
        ("[a-z]{0,6}", "[a-z]{1,6}", prop::collection::vec(inner, 0..4))
            .prop_map(|(n, p, children)| NavEntry::file(n, p).with_children(children))
    })
}

fn document_strategy() -> impl Strategy<Value = NavDocument> {
    (
        "[a-z/]{1,12}",
        "[a-z/]{1,12}",
        any::<bool>(),
        prop::option::of(prop::collection::btree_map("[a-z-]{1,8}", "[a-z/]{0,8}", 0..3)),
        prop::collection::vec(entry_strategy(), 1..4),
    )
        .prop_map(|(root, asset_root, skip, packages, files)| NavDocument {
            root,
            asset_root,
            skip_menu_ordering: skip,
            packages,
            files,
        })
}

/// How a required key appears in a generated document.
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyState {
    Present,
    Absent,
    Null,
    Empty,
}

fn key_state() -> impl Strategy<Value = KeyState> {
    prop_oneof![
        2 => Just(KeyState::Present),
        1 => Just(KeyState::Absent),
        1 => Just(KeyState::Null),
        1 => Just(KeyState::Empty),
    ]
}

fn insert_key(
    obj: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    state: KeyState,
    present: serde_json::Value,
    empty: serde_json::Value,
) {
    match state {
        KeyState::Present => {
            obj.insert(key.into(), present);
        }
        KeyState::Absent => {}
        KeyState::Null => {
            obj.insert(key.into(), serde_json::Value::Null);
        }
        KeyState::Empty => {
            obj.insert(key.into(), empty);
        }
    }
}

proptest! {
    /// The first required key that is absent, null or empty is the one
    /// reported, in `root`, `assetRoot`, `files` order.
    #[test]
    fn first_unset_required_key_is_reported(
        root in key_state(),
        asset_root in key_state(),
        files in key_state(),
        skip in prop::option::of(prop::option::of(any::<bool>())),
    ) {
        let mut obj = serde_json::Map::new();
        insert_key(&mut obj, "root", root, "guide/".into(), "".into());
        insert_key(&mut obj, "assetRoot", asset_root, "assets/".into(), "".into());
        insert_key(
            &mut obj,
            "files",
            files,
            serde_json::json!([{ "path": "p" }]),
            serde_json::json!([]),
        );
        if let Some(skip) = skip {
            obj.insert("skipMenuOrdering".into(), skip.into());
        }
        let text = serde_json::Value::Object(obj).to_string();

        let expected = [("root", root), ("assetRoot", asset_root), ("files", files)]
            .into_iter()
            .find(|(_, state)| *state != KeyState::Present)
            .map(|(key, _)| key);

        match (parse(&text), expected) {
            (Ok(_), None) => {}
            (Err(NavJsonError::MissingField(field)), Some(key)) => prop_assert_eq!(field, key),
            (other, expected) => {
                prop_assert!(false, "expected {:?}, got {:?} for {}", expected, other, text)
            }
        }
        prop_assert_eq!(is_valid(&text), expected.is_none());
    }

    /// Serializing a valid document and parsing it back is lossless.
    #[test]
    fn serialize_then_parse_is_identity(doc in document_strategy()) {
        let text = serde_json::to_string(&doc).unwrap();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, doc);
    }
}
