use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<Vec<&'a str>>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Mail dispatcher backed by the Resend HTTP API.
///
/// Dispatch is fire-and-forget: `send` never returns an error, it reports
/// success as a boolean and logs every failure.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    pub async fn send(&self, to: &str, subject: &str, html: &str, cc: Option<&str>) -> bool {
        if self.api_key.is_empty() {
            tracing::warn!(%to, "Mail dispatch skipped: no API key configured");
            return false;
        }

        let request = SendEmailRequest {
            from: &self.from,
            to: vec![to],
            subject,
            html,
            cc: cc.map(|address| vec![address]),
        };

        let result = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<SendEmailResponse>().await {
                    Ok(sent) => {
                        tracing::info!(email_id = %sent.id, %to, "Email dispatched");
                    }
                    Err(e) => {
                        tracing::warn!(%to, "Email accepted but response unreadable: {}", e);
                    }
                }
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::error!(%to, %status, %body, "Mail API rejected the dispatch");
                false
            }
            Err(e) => {
                tracing::error!(%to, "Mail request failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_reports_failure_without_a_request() {
        let mailer = ResendMailer::new("", "eventos@example.com");

        assert!(!mailer.send("a@b.com", "hi", "<p>hi</p>", None).await);
    }

    #[tokio::test]
    #[ignore] // Only run with a live Resend API key
    async fn live_send_round_trip() {
        let api_key = std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY not set");
        let to = std::env::var("RESEND_TEST_TO").expect("RESEND_TEST_TO not set");
        let mailer = ResendMailer::new(api_key, "onboarding@resend.dev");

        assert!(
            mailer
                .send(&to, "Prueba de configuración", "<p>ok</p>", None)
                .await
        );
    }
}
