pub mod credits_client;
pub mod image_client;
pub mod traits;

use crate::{
    config::PixelDojoConfig,
    error::{DojoError, Result},
    models::{CreditBalance, GenerationRequest, GenerationResult},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Response, StatusCode,
};
use serde::de::DeserializeOwned;

pub use credits_client::CreditsClient;
pub use image_client::ImageClient;
pub use traits::PixelDojoApi;

#[derive(Clone)]
pub struct PixelDojoClient {
    image_client: ImageClient,
    credits_client: CreditsClient,
}

impl PixelDojoClient {
    pub fn new(config: PixelDojoConfig) -> Result<Self> {
        // No idle pool: every call opens its own connection.
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| DojoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            image_client: ImageClient::new(client.clone(), config.clone()),
            credits_client: CreditsClient::new(client, config),
        })
    }
}

#[async_trait]
impl PixelDojoApi for PixelDojoClient {
    async fn submit_generation(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        self.image_client.generate(request).await
    }

    async fn fetch_credits(&self) -> Result<CreditBalance> {
        self.credits_client.fetch().await
    }
}

pub(crate) fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|e| DojoError::Config(format!("API key is not a valid header value: {}", e)))?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Anything but 200 becomes `DojoError::Remote` with the body text untouched.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await?;
        log::error!("Error from PixelDojo API: {} - {}", status.as_u16(), body);
        return Err(DojoError::Remote {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        log::error!("Unexpected response from PixelDojo API: {}", e);
        DojoError::Response(format!("invalid response body: {}", e))
    })
}
