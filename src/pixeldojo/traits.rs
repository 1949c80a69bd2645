use crate::{
    error::Result,
    models::{CreditBalance, GenerationRequest, GenerationResult},
};
use async_trait::async_trait;

/// The two calls the PixelDojo service offers. One attempt each, no retry.
#[async_trait]
pub trait PixelDojoApi: Send + Sync {
    async fn submit_generation(&self, request: &GenerationRequest) -> Result<GenerationResult>;

    async fn fetch_credits(&self) -> Result<CreditBalance>;
}
