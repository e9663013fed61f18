//! Logging to stderr and to a per-session file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

pub const LOG_FILE: &str = "client.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the lifetime of the process.
pub fn setup_logging(config: &ClientConfig, verbose: bool) -> Result<WorkerGuard> {
    let session_log_dir = session_log_dir(config);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());
    Ok(guard)
}

/// `<log dir>/<session id>`, with a timestamped session id when none is set.
pub fn session_log_dir(config: &ClientConfig) -> PathBuf {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });
    config.log_dir().join(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_dir_uses_configured_names() {
        let config = ClientConfig {
            log_dir: Some(PathBuf::from("/var/log/c14l")),
            session_id: Some("demo".into()),
        };
        assert_eq!(
            session_log_dir(&config),
            PathBuf::from("/var/log/c14l/demo")
        );
    }

    #[test]
    fn generated_session_ids_are_prefixed() {
        let config = ClientConfig {
            log_dir: Some(PathBuf::from("/tmp/logs")),
            session_id: None,
        };
        let dir = session_log_dir(&config);
        let name = dir
            .file_name()
            .and_then(|name| name.to_str())
            .expect("session dir name");
        assert!(name.starts_with("session_"));
    }
}
