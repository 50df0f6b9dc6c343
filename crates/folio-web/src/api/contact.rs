use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use folio_core::{parse_submission, FormError, ValidationError};

use crate::client_ip::ClientIp;
use crate::dto::ContactResponse;
use crate::error::AppError;
use crate::notify::Envelope;
use crate::state::AppState;

const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

/// Accepts a contact form submission.
///
/// The rate limit is charged before the body is even parsed, so malformed
/// and rejected posts count against the sender too.
pub async fn submit(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    if !state.contact_limiter.check(&ip) {
        tracing::warn!("Contact rate limit exceeded for {ip}");
        return Err(AppError::TooManyRequests);
    }

    let submission = match parse_submission(&body) {
        Ok(submission) => submission,
        Err(FormError::Malformed(e)) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Malformed contact body from {ip}"))
                .into());
        }
        Err(FormError::Invalid(ValidationError::Honeypot)) => {
            tracing::warn!("Honeypot field filled, dropping submission from {ip}");
            return Err(ValidationError::Honeypot.into());
        }
        Err(FormError::Invalid(e)) => {
            tracing::debug!("Rejected contact submission from {ip}: {e}");
            return Err(e.into());
        }
    };

    let envelope = Envelope {
        id: uuid::Uuid::new_v4().to_string(),
        ip,
        received_at: chrono::Utc::now(),
    };

    tracing::info!(
        id = %envelope.id,
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        body = %submission.message,
        ip = %envelope.ip,
        timestamp = %envelope.received_at.to_rfc3339(),
        "Contact form submission"
    );

    // Forwarding is best effort; the submission is already logged above.
    if let Some(notifier) = &state.notifier {
        if let Err(e) = notifier.deliver(&submission, &envelope).await {
            tracing::error!("Failed to forward contact submission {}: {e:#}", envelope.id);
        }
    }

    Ok(Json(ContactResponse {
        success: true,
        message: THANK_YOU.to_string(),
    }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
