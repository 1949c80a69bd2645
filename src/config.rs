use crate::error::{DojoError, Result};
use std::env;

pub const API_KEY_VAR: &str = "PIXELDOJO_API_KEY";
pub const API_URL_VAR: &str = "PIXELDOJO_API_URL";
pub const DEFAULT_BASE_URL: &str = "https://pixeldojo.ai/api/v1";

const KEY_PREFIXES: [&str; 2] = ["pd_", "pdl_"];

#[derive(Debug, Clone)]
pub struct PixelDojoConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for PixelDojoConfig {
    fn default() -> Self {
        PixelDojoConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PixelDojoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the credential and API root from the process environment.
    /// An empty `PIXELDOJO_API_KEY` counts as unset.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());
        let base_url = env::var(API_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        PixelDojoConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(DojoError::MissingApiKey)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Warning text when the key does not look like a PixelDojo key.
    pub fn key_format_warning(&self) -> Option<String> {
        let key = self.api_key.as_deref()?;
        if KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
            return None;
        }
        let head: String = key.chars().take(3).collect();
        Some(format!(
            "API key format may be incorrect. PixelDojo API keys usually start with 'pd_' or 'pdl_'. Your key starts with '{}'",
            head
        ))
    }

    /// The key as it may appear in logs.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_key)
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(5).collect();
    let tail: String = if chars.len() > 8 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        "****".to_string()
    };
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let config = PixelDojoConfig::new();
        assert!(matches!(config.api_key(), Err(DojoError::MissingApiKey)));
        assert!(config.key_format_warning().is_none());
    }

    #[test]
    fn test_key_prefix_check() {
        let good = PixelDojoConfig::new().with_api_key("pd_abcdef123");
        assert!(good.key_format_warning().is_none());

        let legacy = PixelDojoConfig::new().with_api_key("pdl_abcdef123");
        assert!(legacy.key_format_warning().is_none());

        let odd = PixelDojoConfig::new().with_api_key("sk-live-123");
        let warning = odd.key_format_warning().unwrap();
        assert!(warning.contains("'sk-'"));
    }

    #[test]
    fn test_masked_key() {
        let config = PixelDojoConfig::new().with_api_key("pd_1234567890abcd");
        assert_eq!(config.masked_api_key().unwrap(), "pd_12...abcd");

        let short = PixelDojoConfig::new().with_api_key("pd_1234");
        assert_eq!(short.masked_api_key().unwrap(), "pd_12...****");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = PixelDojoConfig::new();
        assert_eq!(config.endpoint("flux"), "https://pixeldojo.ai/api/v1/flux");

        let local = PixelDojoConfig::new().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(local.endpoint("credits"), "http://127.0.0.1:9000/credits");
    }
}
