use async_trait::async_trait;
use reqwest::Client;

use super::wire::ChatRequest;

/// Raw status and body of one completion round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a chat request; one call is exactly one network attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<TransportResponse, reqwest::Error>;
}

/// reqwest-backed transport. No timeout beyond the client default, no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<TransportResponse, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
