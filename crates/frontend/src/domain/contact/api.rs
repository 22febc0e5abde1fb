use async_trait::async_trait;
use contracts::domain::contact::{check_status, ContactError, ContactMessage, ContactTransport};
use gloo_net::http::Request;

/// Posts contact messages as JSON to the external form relay.
#[derive(Debug, Clone)]
pub struct FormRelayTransport {
    endpoint: String,
}

impl FormRelayTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContactTransport for FormRelayTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(message)
            .map_err(|e| ContactError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ContactError::Transport(format!("Failed to send request: {}", e)))?;

        check_status(response.status())
    }
}
