use crate::{FileKeyStore, KeyValueStore, MemoryKeyStore, SessionError};

use std::fs;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use tempfile::TempDir;

#[test]
fn test_memory_store_set_get_remove() {
    let store = MemoryKeyStore::new();

    store.set("userToken", "abc").unwrap();
    assert_that!(store.get("userToken").unwrap(), some(eq("abc")));

    store.remove("userToken").unwrap();
    assert_that!(store.get("userToken").unwrap(), none());
}

#[test]
fn test_memory_store_remove_missing_key_is_ok() {
    let store = MemoryKeyStore::new();

    assert_that!(store.remove("missing"), ok(anything()));
}

#[test]
fn given_missing_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileKeyStore::new(temp.path().join("session.json"));

    assert_that!(store.get("userToken").unwrap(), none());
    assert!(!store.path().exists());
}

#[test]
fn given_value_written_when_reopened_then_value_survives() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.json");

    FileKeyStore::new(&path).set("userEmail", "janet.weaver@reqres.in").unwrap();
    let reopened = FileKeyStore::new(&path);

    assert_that!(
        reopened.get("userEmail").unwrap(),
        some(eq("janet.weaver@reqres.in"))
    );
}

#[test]
fn given_several_keys_when_one_removed_then_others_kept() {
    let temp = TempDir::new().unwrap();
    let store = FileKeyStore::new(temp.path().join("session.json"));
    store.set("userToken", "abc").unwrap();
    store.set("userEmail", "janet.weaver@reqres.in").unwrap();

    store.remove("userToken").unwrap();

    assert_that!(store.get("userToken").unwrap(), none());
    assert_that!(store.get("userEmail").unwrap(), some(eq("janet.weaver@reqres.in")));
}

#[test]
fn given_successful_write_then_no_temp_file_left_behind() {
    let temp = TempDir::new().unwrap();
    let store = FileKeyStore::new(temp.path().join("session.json"));

    store.set("userToken", "abc").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_that!(entries.len(), eq(1));
}

#[cfg(unix)]
#[test]
fn given_written_file_then_permissions_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let store = FileKeyStore::new(temp.path().join("session.json"));
    store.set("userToken", "abc").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_that!(mode & 0o777, eq(0o600));
}

#[test]
fn given_corrupted_file_when_get_then_corrupted_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    fs::write(&path, "{ not json").unwrap();
    let store = FileKeyStore::new(&path);

    let result = store.get("userToken");

    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(SessionError::Corrupted { .. })));
}

#[test]
fn given_empty_file_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    fs::write(&path, "").unwrap();

    assert_that!(FileKeyStore::new(&path).get("userToken").unwrap(), none());
}
