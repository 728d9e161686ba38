//! Tests for the config document store.

use crate::config_store::{CONFIG_FILENAME, ConfigStore};
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn read_missing_file_returns_default_without_creating_it() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  let default = json!({ "EmbeddingTags": {} });
  assert_eq!(store.read(CONFIG_FILENAME, default.clone()), default);
  assert!(!store.path_for(CONFIG_FILENAME).exists());
}

#[test]
fn read_invalid_json_returns_default() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  std::fs::write(store.path_for(CONFIG_FILENAME), b"{not json").unwrap();
  assert_eq!(store.read(CONFIG_FILENAME, json!({})), json!({}));
}

#[test]
fn write_then_read_round_trips_nested_unicode_document() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  let document = json!({
    "EmbeddingTags": { "标签": ["甲", "乙"], "état": [] },
    "nested": { "list": [1, 2, { "deep": null }] }
  });
  store.write(CONFIG_FILENAME, &document).unwrap();
  assert_eq!(store.read(CONFIG_FILENAME, Value::Null), document);
}

#[test]
fn write_creates_missing_parent_directories() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path().join("nested").join("ext"));
  store.write(CONFIG_FILENAME, &json!({ "a": 1 })).unwrap();
  assert!(store.path_for(CONFIG_FILENAME).exists());
}

#[test]
fn write_overwrites_previous_document() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  store.write(CONFIG_FILENAME, &json!({ "v": 1 })).unwrap();
  store.write(CONFIG_FILENAME, &json!({ "v": 2 })).unwrap();
  assert_eq!(store.read(CONFIG_FILENAME, Value::Null), json!({ "v": 2 }));
}

#[test]
fn written_file_is_two_space_indented_with_unescaped_unicode() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  store
    .write(CONFIG_FILENAME, &json!({ "EmbeddingTags": { "标签": ["甲"] } }))
    .unwrap();
  let raw = std::fs::read_to_string(store.path_for(CONFIG_FILENAME)).unwrap();
  assert!(raw.starts_with("{\n  \"EmbeddingTags\""));
  assert!(raw.contains("标签"));
  assert!(!raw.contains("\\u"));
}

#[test]
fn concurrent_writers_all_succeed_and_readers_see_only_whole_documents() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  // Documents big enough to keep the staging write window open while the
  // other writer renames.
  let doc_a = json!({ "EmbeddingTags": { "a": ["x".repeat(256 * 1024)] } });
  let doc_b = json!({ "EmbeddingTags": { "b": ["y".repeat(256 * 1024)] } });

  let writer = |store: ConfigStore, document: Value| {
    std::thread::spawn(move || {
      for _ in 0..200 {
        store.write(CONFIG_FILENAME, &document).expect("concurrent write");
      }
    })
  };
  let a = writer(store.clone(), doc_a.clone());
  let b = writer(store.clone(), doc_b.clone());

  let reader = {
    let store = store.clone();
    let (doc_a, doc_b) = (doc_a.clone(), doc_b.clone());
    std::thread::spawn(move || {
      while !store.path_for(CONFIG_FILENAME).exists() {
        std::thread::yield_now();
      }
      for _ in 0..400 {
        let seen = store.read(CONFIG_FILENAME, Value::Null);
        assert!(
          seen == doc_a || seen == doc_b,
          "read returned a mixed or partial document"
        );
      }
    })
  };

  a.join().unwrap();
  b.join().unwrap();
  reader.join().unwrap();

  let last = store.read(CONFIG_FILENAME, Value::Null);
  assert!(last == doc_a || last == doc_b);
}

#[test]
fn write_leaves_no_temp_file_behind() {
  let dir = tempfile::tempdir().unwrap();
  let store = ConfigStore::new(dir.path());
  store.write(CONFIG_FILENAME, &json!({})).unwrap();
  let names: Vec<String> = std::fs::read_dir(dir.path())
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  assert_eq!(names, vec![CONFIG_FILENAME.to_string()]);
}

#[test]
fn path_for_joins_under_store_directory() {
  let store = ConfigStore::new("/ext");
  assert_eq!(
    store.path_for(CONFIG_FILENAME),
    std::path::Path::new("/ext/config.json")
  );
}

fn arb_json_value() -> impl Strategy<Value = Value> {
  let leaf = prop_oneof![
    Just(Value::Null),
    any::<bool>().prop_map(Value::Bool),
    any::<i64>().prop_map(Value::from),
    ".*".prop_map(Value::String),
  ];
  leaf.prop_recursive(4, 64, 6, |inner| {
    prop_oneof![
      prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
      prop::collection::btree_map(".*", inner, 0..6)
        .prop_map(|map| Value::Object(map.into_iter().collect())),
    ]
  })
}

proptest! {
  #[test]
  fn write_then_read_round_trips_any_document(
    fields in prop::collection::btree_map(".*", arb_json_value(), 0..6)
  ) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    let document = Value::Object(fields.into_iter().collect());
    store.write(CONFIG_FILENAME, &document).unwrap();
    prop_assert_eq!(store.read(CONFIG_FILENAME, Value::Null), document);
  }
}
