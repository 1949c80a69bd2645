use super::{build_headers, read_json};
use crate::{
    config::PixelDojoConfig,
    error::{DojoError, Result},
    logger,
    models::{GenerationRequest, GenerationResult},
};
use reqwest::Client;

const GENERATE_PATH: &str = "flux";

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: PixelDojoConfig,
}

impl ImageClient {
    pub fn new(client: Client, config: PixelDojoConfig) -> Self {
        Self { client, config }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let api_key = self.config.api_key()?;
        let headers = build_headers(api_key)?;

        log::info!(
            "Using API key: {}",
            self.config.masked_api_key().unwrap_or_default()
        );
        log::info!("Generating image with prompt: {}", request.prompt_preview());
        log::debug!(
            "Generation settings: model={} aspect_ratio={} num_outputs={} seed={:?}",
            request.model,
            request.aspect_ratio,
            request.num_outputs,
            request.seed
        );

        let _timer = logger::timer("Image generation");
        let response = self
            .client
            .post(self.config.endpoint(GENERATE_PATH))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Error calling PixelDojo API: {}", e);
                DojoError::from(e)
            })?;

        let result: GenerationResult = read_json(response).await?;
        log::info!(
            "Received {} image(s), {} credits remaining",
            result.images.len(),
            result.credits_remaining
        );
        Ok(result)
    }
}
