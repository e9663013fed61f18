//! User-visible messages.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Shows a blocking message to the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn alert(&self, message: &str);
}

/// Keeps alerts in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn alert(&self, message: &str) {
        self.messages.lock().await.push(message.to_string());
    }
}
