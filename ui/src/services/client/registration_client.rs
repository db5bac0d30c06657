use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::registration::{RegisterResponse, RegistrationInput};
use crate::services::errors::{ClientResult, RegistrationError};

/// Transport used by the registration flow
#[async_trait(?Send)]
pub trait RegistrationApi {
    /// Sends one registration request and decodes the JSON reply
    async fn register(&self, input: &RegistrationInput) -> ClientResult<RegisterResponse>;
}

/// Client for the registration endpoint backed by reqwest (browser fetch on wasm)
#[derive(Clone)]
pub struct RegistrationClient {
    pub(crate) http_client: Client,
    pub(crate) endpoint: String,
}

impl RegistrationClient {
    /// Create a client posting to an absolute endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl RegistrationApi for RegistrationClient {
    #[instrument(skip(self, input), err)]
    async fn register(&self, input: &RegistrationInput) -> ClientResult<RegisterResponse> {
        info!("Submitting registration to {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await
            .map_err(|e| RegistrationError::network(format!("Failed to call register: {}", e)))?;

        // Rejections come back as 4xx/5xx with a JSON body, so the body decides
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RegistrationError::network(format!("Failed to read response: {}", e)))?;

        let body: RegisterResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Unreadable registration response (status {}): {}", status, text);
            RegistrationError::from(e)
        })?;

        info!(
            "Registration response: status={} success={}",
            status, body.success
        );
        Ok(body)
    }
}
