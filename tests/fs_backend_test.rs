use mailz::model::EmailRecord;
use mailz::store::backend::StorageBackend;
use mailz::store::fs_backend::FsBackend;
use mailz::store::{RecordStore, RECORDS_SLOT};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    backend.write("greeting", "[]").unwrap();
    assert_eq!(backend.read("greeting").unwrap(), Some("[]".to_string()));

    backend.remove("greeting").unwrap();
    assert_eq!(backend.read("greeting").unwrap(), None);
}

#[test]
fn test_fs_backend_missing_slot_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read("nothing-here").unwrap(), None);
    // Removing an absent slot is fine
    backend.remove("nothing-here").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write(RECORDS_SLOT, "Atomic").unwrap();
    backend.write(RECORDS_SLOT, "Atomic again").unwrap();

    let expected_path = dir.path().join("randomEmails.json");
    assert_eq!(backend.slot_path(RECORDS_SLOT), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "Atomic again");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("mailz");
    let backend = FsBackend::new(root.clone());

    backend.write("slot", "x").unwrap();
    assert!(root.join("slot.json").exists());
}

#[test]
fn test_record_store_survives_reopen() {
    let (dir, backend) = setup();
    let mut store = RecordStore::open(backend);
    let mut stamps = 0;
    let mut next = || -> mailz::error::Result<EmailRecord> {
        stamps += 1;
        Ok(EmailRecord::new(format!("cool{:05}", stamps), 1_700_000_000_000 + stamps))
    };
    store.create(&mut next).unwrap();
    store.create(&mut next).unwrap();

    let reopened = RecordStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.records(), store.records());
    assert_eq!(reopened.records()[0].email, "cool00002");
}

#[test]
fn test_record_store_discards_corrupt_file() {
    let (dir, backend) = setup();
    let path = dir.path().join("randomEmails.json");
    fs::write(&path, "{not json").unwrap();

    let store = RecordStore::open(backend);
    assert!(store.records().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_record_store_discards_non_utf8_file() {
    let (dir, backend) = setup();
    let path = dir.path().join("randomEmails.json");
    fs::write(&path, [0xff, 0xfe, b'[', b']']).unwrap();

    let mut store = RecordStore::open(backend);
    assert!(store.records().is_empty());
    assert!(!path.exists());

    assert!(store.load().is_empty());
    assert!(!path.exists());
}
