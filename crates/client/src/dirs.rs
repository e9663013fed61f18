//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache directories.

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/c14l/logs`
/// - Linux: `~/.cache/c14l/logs` (or `$XDG_CACHE_HOME/c14l/logs`)
/// - Windows: `%LOCALAPPDATA%\c14l\logs`
/// - Fallback: `/tmp/c14l/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "c14l")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/c14l"));

    base_dir.join("logs")
}
