use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::RelayPayload;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The request never produced a readable JSON answer.
    #[error("relay transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The relay answered but did not accept the submission.
    #[error("relay rejected submission (status: {status:?}, message: {message:?})")]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },
}

impl From<reqwest::Error> for RelayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(Box::new(value))
    }
}

#[async_trait]
pub trait Relay: Send + Sync {
    /// Delivers one submission. Implementations must not retry.
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}

/// Relay client for FormSubmit-style AJAX endpoints.
#[derive(Clone, Debug)]
pub struct FormSubmitRelay {
    client: reqwest::Client,
    url: String,
}

impl FormSubmitRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Relay for FormSubmitRelay {
    #[tracing::instrument(skip_all, fields(url = %self.url))]
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(relay_message);

            return Err(RelayError::Rejected {
                status: Some(status.as_u16()),
                message,
            });
        }

        let body = response.json::<Value>().await?;
        if !is_accepted(&body) {
            return Err(RelayError::Rejected {
                status: Some(status.as_u16()),
                message: relay_message(&body),
            });
        }

        tracing::debug!(status = status.as_u16(), "relay accepted submission");

        Ok(())
    }
}

// FormSubmit answers `"success": "true"` as a string, so both shapes count.
fn is_accepted(body: &Value) -> bool {
    match body.get("success") {
        Some(Value::Bool(success)) => *success,
        Some(Value::String(success)) => success == "true",
        _ => false,
    }
}

fn relay_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}
