use std::time::Duration;

use campusboard_core::{RequestPayload, ServiceClient, ServiceResult};
use reqwest::Client;
use serde_json::Value;

/// Backend client over `reqwest`. One request per `send`, no retries.
#[derive(Debug, Clone)]
pub struct ReqwestServiceClient {
    http_client: Client,
}

impl ReqwestServiceClient {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(http_client))
    }
}

#[async_trait::async_trait]
impl ServiceClient for ReqwestServiceClient {
    #[tracing::instrument(
        name = "Sending service request",
        skip_all,
        fields(method = %request.method(), url = %request.url())
    )]
    async fn send(&self, request: RequestPayload) -> ServiceResult {
        let mut builder = self
            .http_client
            .request(request.method().clone(), request.url());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.body().is_null() {
            builder = builder.json(request.body());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Service request failed");
                return ServiceResult::internal(e.to_string());
            }
        };

        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => {
                tracing::debug!(%status, "Service responded");
                ServiceResult::from_envelope(body)
            }
            Err(e) => {
                tracing::warn!(%status, error = %e, "Service response is not JSON");
                ServiceResult::internal(e.to_string())
            }
        }
    }
}
