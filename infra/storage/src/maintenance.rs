use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{error, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Infix of in-flight write files: `<key>.gshoptmp.<n>`.
pub(crate) const TMP_MARKER: &str = ".gshoptmp.";

const STALE_AFTER: Duration = Duration::from_secs(300);

pub(crate) async fn purge_tmp(root: &Path) {
    let root = root.to_path_buf();
    let now = SystemTime::now();

    match tokio::task::spawn_blocking(move || remove_stale(&root, now, STALE_AFTER)).await {
        Ok((removed, failed)) if removed > 0 || failed > 0 => {
            info!(removed, failed, "Cleaned up temporary files");
        },
        Err(e) => {
            error!(error = %e, "Temp file cleanup task panicked");
        },
        _ => {},
    }
}

fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .into_iter()
        .flatten()
        .filter(|entry| is_tmp(entry) && is_stale(entry, now, threshold))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "Failed to remove temp file");
                failed += 1;
            },
        });

    (removed, failed)
}

fn is_tmp(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name().to_str().is_some_and(|name| name.contains(TMP_MARKER))
}

fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stale_temp_files_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        let ns = dir.path().join("gameshop");
        std::fs::create_dir_all(&ns).unwrap();
        std::fs::write(ns.join("users.json"), b"[]").unwrap();
        std::fs::write(ns.join("users.json.gshoptmp.7"), b"[").unwrap();

        let later = SystemTime::now() + Duration::from_secs(3600);
        let (removed, failed) = remove_stale(dir.path(), later, STALE_AFTER);

        assert_eq!((removed, failed), (1, 0));
        assert!(ns.join("users.json").exists());
        assert!(!ns.join("users.json.gshoptmp.7").exists());
    }

    #[test]
    fn fresh_temp_files_survive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.json.gshoptmp.1"), b"").unwrap();

        let (removed, _) = remove_stale(dir.path(), SystemTime::now(), STALE_AFTER);

        assert_eq!(removed, 0);
    }
}
