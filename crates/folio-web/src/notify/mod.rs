//! Forwarding accepted contact submissions somewhere a human will see them.

pub mod discord;

use async_trait::async_trait;
use folio_core::Submission;

/// Metadata recorded alongside a submission.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub id: String,
    pub ip: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, submission: &Submission, envelope: &Envelope) -> anyhow::Result<()>;
}
