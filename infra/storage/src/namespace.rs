use crate::engine::Storage;
use crate::error::StorageError;
use crate::key::StorageKey;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName(pub String);

impl TryFrom<String> for NamespaceName {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for NamespaceName {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        let name = value.to_lowercase();

        if name.is_empty() {
            return Err(StorageError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Namespace cannot be empty".into()),
            });
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidKey {
                message: name.into(),
                context: Some("Namespace contains illegal characters".into()),
            });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for NamespaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lightweight, namespaced view of the storage engine.
///
/// Every key is stored under the namespace, on disk as `<root>/<namespace>/<key>`.
/// Compression and backend are inherited from the parent [`Storage`]. Cloning only bumps a
/// reference count.
#[derive(Debug, Clone)]
pub struct NamespacedStorage {
    storage: Storage,
    namespace: Arc<Cow<'static, str>>,
}

impl NamespacedStorage {
    pub(crate) fn new(storage: Storage, namespace: impl Into<Cow<'static, str>>) -> Self {
        Self { storage, namespace: Arc::new(namespace.into()) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.namespace
    }

    /// Physical path of `key`, or `None` for the in-memory backend.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] if `key` fails validation.
    pub fn resolve<K>(&self, key: K) -> Result<Option<PathBuf>, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.storage.resolve_internal(Some(&self.namespace), &key.try_into()?)
    }

    /// Reads and decompresses the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::KeyNotFound`] if nothing is stored under `key`.
    pub async fn read<K>(&self, key: K) -> Result<Vec<u8>, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.storage.read_internal(Some(&self.namespace), &key.try_into()?).await
    }

    /// Like [`read`](Self::read), but an absent key is `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error on invalid keys, I/O failures or corrupt compressed data.
    pub async fn get<K>(&self, key: K) -> Result<Option<Vec<u8>>, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        match self.read(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StorageError::KeyNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Stores `data` under `key`, replacing any previous value atomically.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] or [`StorageError::Io`].
    pub async fn write<K>(&self, key: K, data: &[u8]) -> Result<(), StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.storage.write_internal(Some(&self.namespace), &key.try_into()?, data).await
    }

    /// Removes `key`. Returns whether something was removed.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] or [`StorageError::Io`].
    pub async fn delete<K>(&self, key: K) -> Result<bool, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.storage.delete_internal(Some(&self.namespace), &key.try_into()?).await
    }

    /// # Errors
    /// Returns [`StorageError::InvalidKey`] if `key` fails validation.
    pub fn exists<K>(&self, key: K) -> Result<bool, StorageError>
    where
        K: TryInto<StorageKey, Error = StorageError>,
    {
        self.storage.exists_internal(Some(&self.namespace), &key.try_into()?)
    }
}
