use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::WebError;

#[derive(Debug, Clone, Serialize)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_base64: String,
}

#[derive(Debug, Clone, Serialize)]
struct EmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<&'a EmailAttachment>,
}

/// Client for the outbound email-dispatch endpoint.
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Mailer {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Send an email with an optional attachment.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        attachment: Option<&EmailAttachment>,
    ) -> Result<(), WebError> {
        let request = EmailRequest {
            to,
            subject,
            text,
            attachment,
        };

        let mut builder = self.client.post(&self.base_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| WebError::Mail(format!("Mail request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(WebError::Mail(format!(
                "Mail endpoint error ({}): {}",
                status, error_text
            )));
        }

        tracing::info!("Email dispatched to {} (subject: {})", to, subject);

        Ok(())
    }
}
