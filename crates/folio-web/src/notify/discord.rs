use async_trait::async_trait;
use folio_core::Submission;

use super::{Envelope, Notifier};

/// Discord caps webhook message content at 2000 characters.
const DISCORD_CONTENT_LIMIT: usize = 2000;

pub struct DiscordWebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl DiscordWebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

fn format_message(submission: &Submission, envelope: &Envelope) -> String {
    let text = format!(
        "New contact form submission `{}`\n**From:** {} <{}>\n**Subject:** {}\n**Received:** {} from {}\n\n{}",
        envelope.id,
        submission.name,
        submission.email,
        submission.subject,
        envelope.received_at.to_rfc3339(),
        envelope.ip,
        submission.message,
    );
    if text.chars().count() <= DISCORD_CONTENT_LIMIT {
        return text;
    }
    let mut truncated: String = text.chars().take(DISCORD_CONTENT_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}

#[async_trait]
impl Notifier for DiscordWebhookNotifier {
    async fn deliver(&self, submission: &Submission, envelope: &Envelope) -> anyhow::Result<()> {
        let body = serde_json::json!({ "content": format_message(submission, envelope) });

        let response = self.client.post(&self.webhook_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Discord webhook failed: {}",
                response.status()
            ));
        }

        Ok(())
    }
}
