use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::collaborators::EmailSender;
use crate::error::EmailError;

/// Email sender that writes each message to the trace log.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailSender {
    sent: Arc<AtomicUsize>,
}

impl LoggingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for LoggingEmailSender {
    #[instrument(name = "send_email", skip(self, body))]
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, EmailError> {
        if to.is_empty() {
            return Err(EmailError::Unavailable("no recipient address".to_string()));
        }
        info!(body, "Email dispatched");
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}
