use gshop_domain::config::{LogFormat, ShopConfig};
use gshop_kernel::config::load_config;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn loads_toml_file_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shop.toml");
    fs::write(
        &path,
        r#"
[storage]
url = "mem://"
namespace = "staging"

[logging]
format = "pretty"
"#,
    )
    .unwrap();

    let cfg: ShopConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.storage.url, "mem://");
    assert_eq!(cfg.storage.namespace, "staging");
    assert_eq!(cfg.logging.format, LogFormat::Pretty);
    assert!(cfg.seed.enabled);
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config::<ShopConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}
