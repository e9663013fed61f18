//! Client configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;

use crate::dirs;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Root directory for session logs. Platform cache dir when unset.
    pub log_dir: Option<PathBuf>,
    /// Session name used for the log subdirectory.
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            log_dir: read_env_nonempty("C14L_LOG_DIR").map(PathBuf::from),
            session_id: read_env_nonempty("C14L_SESSION_ID"),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(dirs::log_dir)
    }
}

fn read_env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
