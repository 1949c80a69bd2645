use crate::models::{DEFAULT_ASPECT_RATIO, DEFAULT_MODEL};
use serde_json::{Map, Value};

pub const GENERATE_IMAGE_PROMPT: &str = "pixeldojo_generate_image";

/// Renders a prompt template. Unknown names produce a plain message, never an error.
pub fn render_prompt(name: &str, arguments: &Map<String, Value>) -> String {
    if name != GENERATE_IMAGE_PROMPT {
        return format!("Unknown prompt: {}", name);
    }

    let prompt = text_argument(arguments, "prompt").unwrap_or_default();
    let model = text_argument(arguments, "model").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let aspect_ratio =
        text_argument(arguments, "aspect_ratio").unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string());

    format!(
        "Generate an image of {} using the {} model with {} aspect ratio.",
        prompt, model, aspect_ratio
    )
}

fn text_argument(arguments: &Map<String, Value>, key: &str) -> Option<String> {
    match arguments.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
