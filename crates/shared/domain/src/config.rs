use crate::constants::ADMIN_USERNAME;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level shop configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopConfigInner {
    pub storage: StorageConfig,
    pub seed: SeedConfig,
    pub logging: LogConfig,
    pub activity: ActivityConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ShopConfig {
    #[serde(flatten, default)]
    inner: Arc<ShopConfigInner>,
}

impl Deref for ShopConfig {
    type Target = ShopConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShopConfig {
    fn deref_mut(&mut self) -> &mut ShopConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the slots live.
///
/// `url` is either `file://<directory>` or `mem://` (volatile, used by tests and dry runs).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub url: String,
    pub namespace: String,
    pub compression: bool,
}

/// First-run bootstrap data.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
    /// Also seed the sample accounts and approved donations.
    pub sample_data: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`trace`..`error`, or `off`).
    pub level: String,
    /// Extra directives, e.g. `gshop_database=debug`. `RUST_LOG` still wins when set.
    pub filter: Option<String>,
    pub console: bool,
    pub format: LogFormat,
    /// Enables rolling log files in this directory.
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    pub max_files: usize,
}

/// Background activity journal.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub enabled: bool,
    pub capacity: usize,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { url: "file://data".to_owned(), namespace: "gameshop".to_owned(), compression: false }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_username: ADMIN_USERNAME.to_owned(),
            admin_email: "admin@gameshop.com".to_owned(),
            admin_password: "admin123".to_owned(),
            sample_data: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            format: LogFormat::Compact,
            directory: None,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self { enabled: true, capacity: 128 }
    }
}
