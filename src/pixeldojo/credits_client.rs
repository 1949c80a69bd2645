use super::{build_headers, read_json};
use crate::{
    config::PixelDojoConfig,
    error::{DojoError, Result},
    models::CreditBalance,
};
use reqwest::Client;

const CREDITS_PATH: &str = "credits";

#[derive(Clone)]
pub struct CreditsClient {
    client: Client,
    config: PixelDojoConfig,
}

impl CreditsClient {
    pub fn new(client: Client, config: PixelDojoConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch(&self) -> Result<CreditBalance> {
        let headers = build_headers(self.config.api_key()?)?;

        log::info!("Fetching credit balance");
        let response = self
            .client
            .get(self.config.endpoint(CREDITS_PATH))
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                log::error!("Error calling PixelDojo API: {}", e);
                DojoError::from(e)
            })?;

        read_json(response).await
    }
}
