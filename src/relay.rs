//! Contact-form delivery through an EmailJS-compatible relay.
//!
//! The relay is an opaque collaborator: one HTTPS POST, two terminal
//! outcomes. No retries here; resubmission is a user decision.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Relay coordinates, loaded from `conf/config.toml`.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelaySettings {
    /// A relay with empty credentials is treated as absent, matching a
    /// page whose mail widget never finished loading.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
            && !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

/// What the visitor typed. `phone` is the one optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
struct Envelope<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// The relay template names the message body `details`.
#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    details: &'a str,
}

fn envelope_json(settings: &RelaySettings, payload: &ContactPayload) -> Result<String> {
    let envelope = Envelope {
        service_id: &settings.service_id,
        template_id: &settings.template_id,
        user_id: &settings.public_key,
        template_params: TemplateParams {
            name: &payload.name,
            email: &payload.email,
            phone: payload.phone.as_deref().unwrap_or(""),
            details: &payload.message,
        },
    };
    serde_json::to_string(&envelope).context("Failed to encode relay envelope")
}

/// Deliver one message. Runs on the background executor, never on the
/// UI loop.
pub async fn send(settings: &RelaySettings, payload: &ContactPayload) -> Result<()> {
    if !settings.is_configured() {
        return Err(anyhow!("Email relay is not configured"));
    }

    let body = envelope_json(settings, payload)?;
    debug!(endpoint = %settings.endpoint, bytes = body.len(), "Posting contact message to relay");

    let client = reqwest::Client::builder()
        .timeout(SEND_TIMEOUT)
        .build()
        .context("Failed to build relay HTTP client")?;
    let response = client
        .post(&settings.endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .context("Relay request failed")?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(anyhow!("Relay rejected the message: {status} {detail}"));
    }

    info!(from = %payload.email, "Contact message delivered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    fn settings() -> RelaySettings {
        RelaySettings {
            endpoint: "https://relay.example/api/v1.0/email/send".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "key_test".to_string(),
        }
    }

    #[test]
    fn envelope_uses_details_for_the_message_body() {
        let payload = ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            message: "Hello there".to_string(),
        };
        let json = envelope_json(&settings(), &payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["service_id"], "service_test");
        assert_eq!(value["user_id"], "key_test");
        assert_eq!(value["template_params"]["details"], "Hello there");
        assert_eq!(value["template_params"]["phone"], "");
    }

    #[test]
    fn blank_credentials_mean_unconfigured() {
        let mut s = settings();
        assert!(s.is_configured());
        s.public_key = "  ".to_string();
        assert!(!s.is_configured());
    }

    #[test]
    fn unconfigured_relay_fails_before_any_network_io() {
        let payload = ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            message: "Hi".to_string(),
        };
        let mut s = settings();
        s.service_id = String::new();

        // The credential check runs before the first await, so one
        // poll must already resolve the error.
        let mut future = Box::pin(send(&s, &payload));
        let mut context = std::task::Context::from_waker(std::task::Waker::noop());
        match future.as_mut().poll(&mut context) {
            std::task::Poll::Ready(result) => {
                let err = result.unwrap_err();
                assert!(err.to_string().contains("not configured"));
            }
            std::task::Poll::Pending => panic!("credential check should not suspend"),
        }
    }
}
