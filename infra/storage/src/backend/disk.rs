use crate::error::{StorageError, StorageErrorExt};
use crate::key::{self, StorageKey};
use crate::maintenance::TMP_MARKER;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Fresh temp names to try before giving up on a write.
const TMP_ATTEMPTS: usize = 8;

/// One file per key under a canonical root, replaced with an atomic swap on every write.
#[derive(Debug)]
pub(crate) struct DiskBackend {
    pub(crate) root: PathBuf,
    tmp_counter: AtomicU64,
}

impl DiskBackend {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root, tmp_counter: AtomicU64::new(tmp_seed()) }
    }

    pub(crate) fn resolve(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<PathBuf, StorageError> {
        key::resolve(&self.root, namespace, key)
    }

    pub(crate) async fn read(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<Vec<u8>, StorageError> {
        let resolved = self.resolve(namespace, key)?;

        match fs::read(&resolved).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::KeyNotFound {
                    message: key::entry_name(namespace, key).into(),
                    context: None,
                })
            },
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }

    /// Writes to `<key>.gshoptmp.<n>`, syncs it, then renames it over the target.
    pub(crate) async fn write(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
        data: &[u8],
    ) -> Result<(), StorageError> {
        let resolved = self.resolve(namespace, key)?;

        if let Some(parent) = resolved.parent() {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create namespace directory for {}", resolved.display()))?;
        }

        let (temp, mut file) = self.create_tmp(&resolved).await?;
        let written = match file.write_all(data).await {
            Ok(()) => file.sync_all().await.context("Hardware sync failed"),
            Err(err) => Err(err).context("Write failed"),
        };
        drop(file);
        if let Err(err) = written {
            let _ = fs::remove_file(&temp).await;
            return Err(err);
        }

        if let Err(err) = fs::rename(&temp, &resolved).await {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(&resolved)
                    .await
                    .context(format!("Failed to replace existing file: {}", resolved.display()))?;
                fs::rename(&temp, &resolved).await.context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    resolved.display()
                ))?;
            } else {
                let _ = fs::remove_file(&temp).await;
                return Err(StorageError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), resolved.display())
                            .into(),
                    ),
                });
            }
        }

        if let Some(parent) = resolved.parent() {
            sync_dir(parent).await;
        }

        debug!(path = %resolved.display(), bytes = data.len(), "Slot saved atomically");
        Ok(())
    }

    pub(crate) async fn delete(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<bool, StorageError> {
        let resolved = self.resolve(namespace, key)?;

        match fs::remove_file(&resolved).await {
            Ok(()) => {
                debug!(path = %resolved.display(), "Slot deleted");
                Ok(true)
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Failed to delete: {}", resolved.display()).into()),
            }),
        }
    }

    /// Opens a temp file next to `target`, skipping names left behind by earlier processes.
    async fn create_tmp(&self, target: &Path) -> Result<(PathBuf, fs::File), StorageError> {
        let mut attempt = 1;
        loop {
            let temp = self.unique_tmp_path(target);
            match fs::OpenOptions::new().create_new(true).write(true).open(&temp).await {
                Ok(file) => return Ok((temp, file)),
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists && attempt < TMP_ATTEMPTS => {
                    debug!(path = %temp.display(), "Temp file already exists, trying the next name");
                    attempt += 1;
                },
                Err(err) => {
                    return Err(err).context(format!("Temp creation failed: {}", temp.display()));
                },
            }
        }
    }

    fn unique_tmp_path(&self, target: &Path) -> PathBuf {
        let counter = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("slot");
        target.with_file_name(format!("{file_name}{TMP_MARKER}{counter}"))
    }
}

/// Counter start that differs between processes, so a crashed run's temp files never collide.
fn tmp_seed() -> u64 {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.subsec_nanos());
    (u64::from(std::process::id()) << 32) | u64::from(nanos)
}

async fn sync_dir(path: &Path) {
    match fs::File::open(path).await {
        Ok(dir) => {
            if let Err(err) = dir.sync_all().await {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}
