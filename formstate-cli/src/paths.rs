//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formstate";
const APPLICATION: &str = "formstate";

/// Number of archived logs kept next to `latest.log`.
pub const KEPT_LOGS: usize = 25;

/// Prefix of archived log names, followed by a sortable timestamp.
const ARCHIVE_PREFIX: &str = "run_";

/// Get the cache directory, or None if the home directory cannot be determined.
///
/// - Linux: `$XDG_CACHE_HOME/formstate` or `~/.cache/formstate`
/// - macOS: `~/Library/Caches/dev.formstate.formstate`
/// - Windows: `C:\Users\<User>\AppData\Local\formstate\formstate\cache`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Archives the previous run's log and prunes the archive to `keep` files.
///
/// Returns where the previous log went, if there was one. Failures are
/// ignored: a missing archive never stops a run.
pub fn rotate_logs(latest: &Path, keep: usize) -> Option<PathBuf> {
    let dir = latest.parent()?;

    let archived = if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%3f");
        let to = dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log"));
        fs::rename(latest, &to).ok().map(|()| to)
    } else {
        None
    };

    prune_archive(dir, keep);
    archived
}

/// Deletes the oldest archived logs beyond `keep`.
fn prune_archive(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_archived_log(path))
        .collect();
    // Timestamped names sort oldest first.
    archived.sort();

    let excess = archived.len().saturating_sub(keep);
    for path in &archived[..excess] {
        let _ = fs::remove_file(path);
    }
}

fn is_archived_log(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "log")
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archived(dir: &Path) -> Vec<PathBuf> {
        let mut logs: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| is_archived_log(path))
            .collect();
        logs.sort();
        logs
    }

    #[test]
    fn test_rotate_archives_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        let latest = dir.path().join("latest.log");
        fs::write(&latest, "previous run").unwrap();

        let moved = rotate_logs(&latest, KEPT_LOGS).unwrap();
        assert!(!latest.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "previous run");
        assert_eq!(archived(dir.path()), vec![moved]);
    }

    #[test]
    fn test_rotate_without_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        let latest = dir.path().join("latest.log");
        assert_eq!(rotate_logs(&latest, KEPT_LOGS), None);
        assert!(archived(dir.path()).is_empty());
    }

    #[test]
    fn test_prune_keeps_newest_archives() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["20000101_000000000", "20000102_000000000", "20000103_000000000"] {
            fs::write(dir.path().join(format!("{ARCHIVE_PREFIX}{stamp}.log")), "").unwrap();
        }
        fs::write(dir.path().join("notes.log"), "").unwrap();
        let latest = dir.path().join("latest.log");
        fs::write(&latest, "").unwrap();

        rotate_logs(&latest, 2);

        let kept = archived(dir.path());
        assert_eq!(kept.len(), 2);
        assert!(kept[0].ends_with(format!("{ARCHIVE_PREFIX}20000103_000000000.log")));
        assert!(dir.path().join("notes.log").exists());
    }
}
