use crate::backend::{Backend, DiskBackend, MemoryBackend};
use crate::engine::{Compression, Storage, StorageInner};
use crate::error::{StorageError, StorageErrorExt};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone)]
struct StorageConfig {
    compression: Compression,
    create: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { compression: Compression::None, create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoBackend;
#[derive(Debug)]
pub struct WithRoot(PathBuf);
#[derive(Debug)]
pub struct InMemory;

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoBackend {}
impl Sealed for WithRoot {}
impl Sealed for InMemory {}

/// Typestate builder: pick a backend with [`root`](StorageBuilder::root) or
/// [`in_memory`](StorageBuilder::in_memory), then `connect()`.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StorageBuilder<S: Sealed = NoBackend> {
    state: S,
    config: StorageConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StorageBuilder<S> {
    #[must_use = "Sets compression for the storage engine"]
    pub const fn compression(mut self, compression: Compression) -> Self {
        self.config.compression = compression;
        self
    }

    #[must_use = "Sets whether the storage root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> StorageBuilder<N> {
        StorageBuilder { state, config: self.config }
    }

    fn finish(self, backend: Backend) -> Storage {
        Storage {
            inner: Arc::new(StorageInner { backend, compression: self.config.compression }),
        }
    }
}

impl StorageBuilder<NoBackend> {
    #[must_use = "Creates a new storage builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory path for the storage engine"]
    pub fn root(self, path: impl Into<PathBuf>) -> StorageBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }

    #[must_use = "Selects the volatile in-memory backend"]
    pub fn in_memory(self) -> StorageBuilder<InMemory> {
        self.transition(InMemory)
    }
}

impl StorageBuilder<WithRoot> {
    /// Consumes the configuration and initializes the disk-backed engine.
    ///
    /// 1. **Bootstrapping**: Creates the root directory if `create(true)` was set.
    /// 2. **Canonicalization**: Resolves the root to an absolute physical path.
    /// 3. **Self-Healing**: Removes stale temporary files left behind by interrupted writes.
    ///
    /// Cleanup failures are logged and never fail the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DirectoryNotFound`] if the root is missing and `create` is false.
    /// Returns [`StorageError::Io`] if the root cannot be created or resolved.
    pub async fn connect(self) -> Result<Storage, StorageError> {
        let root = self.state.0.clone();

        if self.config.create {
            fs::create_dir_all(&root)
                .await
                .context(format!("Failed to bootstrap storage root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped storage root directory");
        } else if !fs::try_exists(&root).await.unwrap_or(false) {
            return Err(StorageError::DirectoryNotFound {
                message: root.display().to_string().into(),
                context: Some("Storage root does not exist and create is disabled".into()),
            });
        }

        let canonical = fs::canonicalize(&root)
            .await
            .context(format!("Failed to resolve storage root: {}", root.display()))?;

        let storage = self.finish(Backend::Disk(DiskBackend::new(canonical)));
        storage.purge_tmp().await;

        Ok(storage)
    }
}

impl StorageBuilder<InMemory> {
    /// Initializes the in-memory engine.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the disk variant.
    #[allow(clippy::unused_async)]
    pub async fn connect(self) -> Result<Storage, StorageError> {
        info!("Using volatile in-memory storage");
        Ok(self.finish(Backend::Memory(MemoryBackend::default())))
    }
}
