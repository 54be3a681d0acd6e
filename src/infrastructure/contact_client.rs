use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    entities::contact_me::{ContactReply, ContactSubmission},
    errors::ContactError,
};

const DEFAULT_FAILURE: &str = "Failed to send message";

/// Delivers a contact submission somewhere. One attempt per call.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Posts submissions as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpContactTransport {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        HttpContactTransport {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let response = self.client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let reply: ContactReply = serde_json::from_str(&body)
            .map_err(|e| ContactError::InvalidResponse(e.to_string()))?;

        if !status.is_success() || reply.error.is_some() {
            let message = reply.error.unwrap_or_else(|| DEFAULT_FAILURE.to_string());
            warn!(%status, "Contact endpoint rejected submission: {}", message);
            return Err(ContactError::Rejected(message));
        }

        debug!(%status, "Contact submission delivered");
        Ok(())
    }
}
