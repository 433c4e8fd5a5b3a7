//! Core storage engine: one handle over a disk or in-memory backend, with transparent
//! compression and namespaced access.

use crate::backend::Backend;
use crate::builder::StorageBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::key::StorageKey;
use crate::maintenance;
use crate::namespace::{NamespaceName, NamespacedStorage};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Compression {
    #[default]
    None,
    Lz4,
}

impl Compression {
    #[must_use]
    pub(crate) fn compress(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::None => data.to_vec(),
            Self::Lz4 => lz4_flex::compress_prepend_size(data),
        }
    }

    pub(crate) fn decompress(self, data: Vec<u8>) -> Result<Vec<u8>, StorageError> {
        match self {
            Self::None => Ok(data),
            Self::Lz4 => {
                lz4_flex::decompress_size_prepended(&data).context("Lz4 decompression failed")
            },
        }
    }
}

/// The internal shared state of a [`Storage`] instance.
#[derive(Debug)]
pub struct StorageInner {
    pub(crate) backend: Backend,
    /// Whether transparent LZ4 compression is enabled for this instance.
    pub(crate) compression: Compression,
}

/// A thread-safe handle to the storage engine.
///
/// `Storage` maps validated keys to byte values. The disk backend keeps every value in its own
/// file under a canonical root and replaces it atomically; the memory backend keeps values in
/// a hash map and is gone when the last handle drops.
///
/// This handle is internally reference-counted (`Arc`) and can be cheaply cloned
/// across threads or tasks.
///
/// # Example
///
/// ```rust
/// use gshop_storage::{Storage, Compression, StorageError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), StorageError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # let root = tmp.path().join("data");
///     let storage = Storage::builder()
///         .root(&root)
///         .create(true)
///         .compression(Compression::Lz4)
///         .connect()
///         .await?;
///
///     let shop = storage.namespace("gameshop")?;
///     shop.write("users.json", b"[]").await?;
///     assert_eq!(shop.read("users.json").await?, b"[]");
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) inner: Arc<StorageInner>,
}

impl Deref for Storage {
    type Target = StorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Storage {
    #[must_use = "The storage engine is not initialized until you call .connect()"]
    pub fn builder() -> StorageBuilder {
        StorageBuilder::new()
    }

    /// Returns a namespaced view of the storage engine.
    ///
    /// # Constraints
    /// - Names must be **alphanumeric** (a-z, 0-9) or use **underscores** (`_`).
    /// - Names are automatically converted to **lowercase**.
    /// - Empty names are prohibited.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] if the name is empty or contains illegal
    /// characters.
    pub fn namespace<N>(&self, name: N) -> Result<NamespacedStorage, StorageError>
    where
        N: TryInto<NamespaceName, Error = StorageError>,
    {
        let ns = name.try_into()?;
        Ok(NamespacedStorage::new(self.clone(), ns.0))
    }

    /// The canonical root directory, or `None` for the in-memory backend.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        match &self.backend {
            Backend::Disk(disk) => Some(&disk.root),
            Backend::Memory(_) => None,
        }
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.inner.backend, Backend::Disk(_))
    }

    /// Reads the value stored under `key` at the root level.
    ///
    /// If transparent compression is enabled the value is decompressed before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KeyNotFound`] if nothing is stored under `key`.
    /// Returns [`StorageError::Decompress`] if the data is corrupted or compression is misconfigured.
    pub async fn read<K>(&self, key: K) -> Result<Vec<u8>, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.read_internal(None, &key.try_into()?).await
    }

    pub(crate) fn resolve_internal(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<Option<PathBuf>, StorageError> {
        match &self.backend {
            Backend::Disk(disk) => disk.resolve(namespace, key).map(Some),
            Backend::Memory(_) => Ok(None),
        }
    }

    pub(crate) async fn read_internal(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<Vec<u8>, StorageError> {
        let data = match &self.backend {
            Backend::Disk(disk) => disk.read(namespace, key).await?,
            Backend::Memory(memory) => memory.read(namespace, key)?,
        };

        self.compression.decompress(data)
    }

    /// Stores `data` under `key` at the root level.
    ///
    /// On disk the value is written to a unique temporary file, synced, and renamed over the
    /// target, so a crash never leaves a half-written value behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if the key fails validation.
    /// Returns [`StorageError::Io`] if disk space is full or hardware failure occurs.
    pub async fn write<K>(&self, key: K, data: &[u8]) -> Result<(), StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.write_internal(None, &key.try_into()?, data).await
    }

    pub(crate) async fn write_internal(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
        data: &[u8],
    ) -> Result<(), StorageError> {
        let payload = self.compression.compress(data);

        match &self.backend {
            Backend::Disk(disk) => disk.write(namespace, key, &payload).await,
            Backend::Memory(memory) => {
                memory.write(namespace, key, payload);
                Ok(())
            },
        }
    }

    /// Removes `key` from the root level. Returns whether something was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be removed.
    pub async fn delete<K>(&self, key: K) -> Result<bool, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.delete_internal(None, &key.try_into()?).await
    }

    pub(crate) async fn delete_internal(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<bool, StorageError> {
        match &self.backend {
            Backend::Disk(disk) => disk.delete(namespace, key).await,
            Backend::Memory(memory) => Ok(memory.delete(namespace, key)),
        }
    }

    /// Checks whether a value is stored under `key` at the root level.
    ///
    /// # Errors
    ///
    /// Returns an `Err` only if the key fails validation.
    pub fn exists<K>(&self, key: K) -> Result<bool, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.exists_internal(None, &key.try_into()?)
    }

    pub(crate) fn exists_internal(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<bool, StorageError> {
        match &self.backend {
            Backend::Disk(disk) => Ok(disk.resolve(namespace, key)?.exists()),
            Backend::Memory(memory) => Ok(memory.contains(namespace, key)),
        }
    }

    /// Removes temporary files orphaned by interrupted writes. No-op in memory.
    pub async fn purge_tmp(&self) {
        if let Backend::Disk(disk) = &self.backend {
            maintenance::purge_tmp(&disk.root).await;
        }
    }
}
