use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

pub const DEFAULT_MODEL: &str = "flux-pro";
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";
pub const DEFAULT_NUM_OUTPUTS: i64 = 1;
pub const DEFAULT_OUTPUT_FORMAT: &str = "png";
pub const DEFAULT_OUTPUT_QUALITY: i64 = 80;

/// Body of `POST /flux`. `seed` is left out of the JSON entirely when unset.
/// Numeric settings are kept as JSON numbers and forwarded as the caller gave
/// them, so a 64-bit unsigned seed or `2.0` reaches the service unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: String,
    pub num_outputs: Number,
    pub output_format: String,
    pub output_quality: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Number>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            num_outputs: Number::from(DEFAULT_NUM_OUTPUTS),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            output_quality: Number::from(DEFAULT_OUTPUT_QUALITY),
            seed: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn with_num_outputs(mut self, num_outputs: impl Into<Number>) -> Self {
        self.num_outputs = num_outputs.into();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<Number>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    pub fn with_output_quality(mut self, output_quality: impl Into<Number>) -> Self {
        self.output_quality = output_quality.into();
        self
    }

    /// First 50 characters of the prompt, for log lines.
    pub fn prompt_preview(&self) -> String {
        let mut preview: String = self.prompt.chars().take(50).collect();
        if self.prompt.chars().count() > 50 {
            preview.push_str("...");
        }
        preview
    }
}

/// One entry of the `images` array: `{ "url": ... }`, a bare URL string,
/// or anything else the service might send.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Object { url: String },
    Bare(String),
    Other(Value),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Object { url } => write!(f, "{}", url),
            ImageRef::Bare(url) => write!(f, "{}", url),
            ImageRef::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default = "zero_credits")]
    pub credits_used: Number,
    #[serde(default = "zero_credits")]
    pub credits_remaining: Number,
}

pub(crate) fn zero_credits() -> Number {
    Number::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_omitted_when_unset() {
        let body = serde_json::to_value(GenerationRequest::new("a red fox")).unwrap();
        assert!(body.get("seed").is_none());
        assert_eq!(body["model"], "flux-pro");
        assert_eq!(body["aspect_ratio"], "1:1");
        assert_eq!(body["num_outputs"], 1);
        assert_eq!(body["output_format"], "png");
        assert_eq!(body["output_quality"], 80);
    }

    #[test]
    fn test_zero_seed_is_sent() {
        let body = serde_json::to_value(GenerationRequest::new("a red fox").with_seed(0)).unwrap();
        assert_eq!(body["seed"], 0);
    }

    #[test]
    fn test_large_seed_is_sent_unchanged() {
        let body = serde_json::to_value(GenerationRequest::new("x").with_seed(u64::MAX)).unwrap();
        assert_eq!(body["seed"], json!(18446744073709551615u64));
    }

    #[test]
    fn test_prompt_preview_truncates_on_chars() {
        let short = GenerationRequest::new("castle at dusk");
        assert_eq!(short.prompt_preview(), "castle at dusk");

        let long = GenerationRequest::new("é".repeat(60));
        let preview = long.prompt_preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn test_result_parses_mixed_image_entries() {
        let result: GenerationResult = serde_json::from_value(json!({
            "images": [{"url": "http://x/1.png"}, "http://x/2.png", {"id": 3}],
            "credits_used": 1.5,
            "credits_remaining": 98
        }))
        .unwrap();

        let rendered: Vec<String> = result.images.iter().map(|i| i.to_string()).collect();
        assert_eq!(rendered, vec!["http://x/1.png", "http://x/2.png", r#"{"id":3}"#]);
        assert_eq!(result.credits_used.to_string(), "1.5");
        assert_eq!(result.credits_remaining.to_string(), "98");
    }

    #[test]
    fn test_result_defaults_missing_fields() {
        let result: GenerationResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.images.is_empty());
        assert_eq!(result.credits_used.to_string(), "0");
        assert_eq!(result.credits_remaining.to_string(), "0");
    }
}
