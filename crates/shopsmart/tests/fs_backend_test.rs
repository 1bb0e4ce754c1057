use shopsmart::store::backend::PreferenceBackend;
use shopsmart::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Nothing written yet
    assert_eq!(backend.read("items").unwrap(), None);

    // 2. Write + read
    backend.write("items", "[]").unwrap();
    assert_eq!(backend.read("items").unwrap(), Some("[]".to_string()));

    // 3. Remove, twice
    backend.remove("items").unwrap();
    backend.remove("items").unwrap();
    assert_eq!(backend.read("items").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("items", "first").unwrap();
    backend.write("items", "second").unwrap();

    let expected_path = dir.path().join("items.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "second");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_keys_are_independent() {
    let (_dir, backend) = setup();
    backend.write("items", "a").unwrap();
    backend.write("orders", "b").unwrap();

    assert_eq!(backend.read("items").unwrap().as_deref(), Some("a"));
    assert_eq!(backend.read("orders").unwrap().as_deref(), Some("b"));
}

#[cfg(unix)]
#[test]
fn test_fs_backend_write_failure_is_persistence_error() {
    use shopsmart::error::ShopError;
    use std::os::unix::fs::PermissionsExt;

    let (dir, backend) = setup();
    backend.write("items", "kept").unwrap();

    let mut perms = fs::metadata(dir.path()).unwrap().permissions();
    perms.set_mode(0o555);
    fs::set_permissions(dir.path(), perms.clone()).unwrap();

    let result = backend.write("items", "lost");

    perms.set_mode(0o755);
    fs::set_permissions(dir.path(), perms).unwrap();

    // Root ignores directory permissions; only check when the write was refused.
    if let Err(err) = result {
        assert!(matches!(err, ShopError::Persistence(_)));
        assert_eq!(backend.read("items").unwrap().as_deref(), Some("kept"));
    }
}
