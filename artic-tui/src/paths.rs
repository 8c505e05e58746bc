//! Where the frontend keeps its settings file and logs.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Archived logs kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("edu", "artic", "artic-tui")
}

/// `settings.json` in the platform config directory.
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
}

/// `latest.log` in the platform cache directory.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LATEST_LOG))
}

/// Archives the previous run's log under a timestamp and prunes old ones.
/// Must run before the new log file is created.
pub fn rotate_logs() {
    if let Some(dirs) = project_dirs() {
        rotate_logs_in(dirs.cache_dir());
    }
}

fn rotate_logs_in(log_dir: &Path) {
    let latest = log_dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, log_dir.join(format!("{stamp}.log")));
    }
    cleanup_old_logs(log_dir, MAX_OLD_LOGS);
}

/// Deletes archived logs beyond the newest `keep`, by modification time.
fn cleanup_old_logs(log_dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(log_dir) else { return };

    let mut archived: Vec<(Option<std::time::SystemTime>, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
        .collect();

    archived.sort();
    let excess = archived.len().saturating_sub(keep);
    for (_, path) in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
