use gshop_storage::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_invalid_keys_rejected() {
    let storage = Storage::builder().in_memory().connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();

    assert!(matches!(ns.resolve("../etc/passwd"), Err(StorageError::InvalidKey { .. })));
    assert!(matches!(ns.write("a/b.json", b"x").await, Err(StorageError::InvalidKey { .. })));
    assert!(storage.namespace("Bad Name").is_err());
    assert!(storage.namespace("").is_err());
}

#[tokio::test]
async fn test_write_read_roundtrip_on_disk() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();

    ns.write("users.json", b"[{\"id\":1}]").await.unwrap();

    let path = ns.resolve("users.json").unwrap().unwrap();
    assert!(path.ends_with("gameshop/users.json"));
    assert_eq!(std::fs::read(&path).unwrap(), b"[{\"id\":1}]");
    assert_eq!(ns.read("users.json").await.unwrap(), b"[{\"id\":1}]");
}

#[tokio::test]
async fn test_compressed_values_are_transparent() {
    let temp = TempDir::new().unwrap();
    let storage =
        Storage::builder().root(temp.path()).compression(Compression::Lz4).connect().await.unwrap();

    let payload = b"[]".repeat(2048);
    storage.write("cart.json", &payload).await.unwrap();

    let on_disk = std::fs::read(temp.path().join("cart.json")).unwrap();
    assert!(on_disk.len() < payload.len());
    assert_eq!(storage.read("cart.json").await.unwrap(), payload);
}

#[tokio::test]
async fn test_overwrite_replaces_value() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();

    ns.write("cart.json", b"[1]").await.unwrap();
    ns.write("cart.json", b"[1,2]").await.unwrap();

    assert_eq!(ns.read("cart.json").await.unwrap(), b"[1,2]");
    let leftovers = std::fs::read_dir(temp.path().join("gameshop")).unwrap().count();
    assert_eq!(leftovers, 1, "no temp files may remain after a write");
}

#[tokio::test]
async fn test_namespace_isolation() {
    let storage = Storage::builder().in_memory().connect().await.unwrap();
    let a = storage.namespace("shop_a").unwrap();
    let b = storage.namespace("SHOP_B").unwrap();

    a.write("users.json", b"a").await.unwrap();
    b.write("users.json", b"b").await.unwrap();

    assert_eq!(b.name(), "shop_b");
    assert_eq!(a.read("users.json").await.unwrap(), b"a");
    assert_eq!(b.read("users.json").await.unwrap(), b"b");
    assert!(!storage.exists("users.json").unwrap());
}

#[tokio::test]
async fn test_missing_key_semantics() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();

    assert!(matches!(ns.read("donations.json").await, Err(StorageError::KeyNotFound { .. })));
    assert_eq!(ns.get("donations.json").await.unwrap(), None);
    assert!(!ns.delete("donations.json").await.unwrap());
    assert!(!ns.exists("donations.json").unwrap());
}

#[tokio::test]
async fn test_delete_and_exists_in_memory() {
    let storage = Storage::builder().in_memory().connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();

    ns.write("currentSession.json", b"{}").await.unwrap();
    assert!(ns.exists("currentSession.json").unwrap());
    assert_eq!(ns.resolve("currentSession.json").unwrap(), None);

    assert!(ns.delete("currentSession.json").await.unwrap());
    assert!(!ns.exists("currentSession.json").unwrap());
    assert!(!storage.is_persistent());
}

#[tokio::test]
async fn test_missing_root_without_create() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let result = Storage::builder().root(&missing).create(false).connect().await;

    assert!(matches!(result, Err(StorageError::DirectoryNotFound { .. })));
}

#[tokio::test]
async fn test_values_survive_reconnect() {
    let temp = TempDir::new().unwrap();

    {
        let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
        storage.namespace("gameshop").unwrap().write("accounts.json", b"[]").await.unwrap();
    }

    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    assert!(storage.is_persistent());
    assert_eq!(
        storage.namespace("gameshop").unwrap().read("accounts.json").await.unwrap(),
        b"[]"
    );
}

#[tokio::test]
async fn test_corrupt_compressed_value_reports_decompress() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("users.json"), b"\x10\x00\x00\x00\xff").unwrap();

    let storage =
        Storage::builder().root(temp.path()).compression(Compression::Lz4).connect().await.unwrap();

    assert!(matches!(storage.read("users.json").await, Err(StorageError::Decompress { .. })));
}

#[tokio::test]
async fn test_fresh_leftover_temp_file_does_not_block_writes() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("gameshop");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("users.json.gshoptmp.1"), b"[").unwrap();

    let storage = Storage::builder().root(temp.path()).connect().await.unwrap();
    let ns = storage.namespace("gameshop").unwrap();
    ns.write("users.json", b"[]").await.unwrap();

    assert_eq!(ns.read("users.json").await.unwrap(), b"[]");
}
