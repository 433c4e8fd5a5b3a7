use crate::error::StorageError;
use crate::key::{StorageKey, entry_name};
use fxhash::FxHashMap;
use parking_lot::RwLock;

/// Process-local backend. Nothing survives the last [`Storage`](crate::Storage) handle.
#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    entries: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub(crate) fn read(
        &self,
        namespace: Option<&str>,
        key: &StorageKey,
    ) -> Result<Vec<u8>, StorageError> {
        let name = entry_name(namespace, key);
        self.entries
            .read()
            .get(&name)
            .cloned()
            .ok_or_else(|| StorageError::KeyNotFound { message: name.into(), context: None })
    }

    pub(crate) fn write(&self, namespace: Option<&str>, key: &StorageKey, data: Vec<u8>) {
        self.entries.write().insert(entry_name(namespace, key), data);
    }

    pub(crate) fn delete(&self, namespace: Option<&str>, key: &StorageKey) -> bool {
        self.entries.write().remove(&entry_name(namespace, key)).is_some()
    }

    pub(crate) fn contains(&self, namespace: Option<&str>, key: &StorageKey) -> bool {
        self.entries.read().contains_key(&entry_name(namespace, key))
    }
}
