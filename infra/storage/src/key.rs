use crate::error::StorageError;
use std::fmt;
use std::path::{Path, PathBuf};

const MAX_KEY_LEN: usize = 128;

/// A validated storage key.
///
/// Keys are flat file names: ASCII alphanumerics plus `_`, `-` and `.`, never starting with a
/// dot and never containing `..`. That keeps every key inside its namespace directory without
/// any path normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        if value.is_empty() || value.len() > MAX_KEY_LEN {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some(format!("Key length must be 1..={MAX_KEY_LEN}").into()),
            });
        }

        if value.starts_with('.') || value.contains("..") {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some("Key cannot start with '.' or contain '..'".into()),
            });
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some("Key contains illegal characters".into()),
            });
        }

        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for StorageKey {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for StorageKey {
    type Error = StorageError;

    fn try_from(value: &String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical address of an entry: `<namespace>/<key>` or just `<key>`.
pub(crate) fn entry_name(namespace: Option<&str>, key: &StorageKey) -> String {
    namespace.map_or_else(|| key.0.clone(), |ns| format!("{ns}/{}", key.0))
}

/// Physical location of an entry under the storage root.
pub(crate) fn resolve(
    root: &Path,
    namespace: Option<&str>,
    key: &StorageKey,
) -> Result<PathBuf, StorageError> {
    let mut path = root.to_path_buf();
    if let Some(ns) = namespace {
        path.push(ns);
    }
    path.push(&key.0);

    if path.starts_with(root) {
        Ok(path)
    } else {
        Err(StorageError::InvalidKey {
            message: path.display().to_string().into(),
            context: Some("Resolved path escapes the storage root".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slot_file_names() {
        assert!(StorageKey::try_from("users.json").is_ok());
        assert!(StorageKey::try_from("currentSession.json").is_ok());
        assert!(StorageKey::try_from("cart-v2_backup").is_ok());
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for bad in ["", "../etc/passwd", "a/b", ".hidden", "a..b", "a\\b", "spaced key"] {
            assert!(StorageKey::try_from(bad).is_err(), "{bad:?} must be rejected");
        }
    }
}
