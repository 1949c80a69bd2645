//! Tool and prompt declarations, in MCP wire shape.

use crate::catalog;
use serde::Serialize;
use serde_json::{json, Value};

pub const ASPECT_RATIOS: [&str; 7] = ["1:1", "16:9", "9:16", "4:3", "3:4", "3:2", "2:3"];
pub const OUTPUT_FORMATS: [&str; 3] = ["png", "jpg", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GenerateImage,
    DescribeModels,
    GetCredits,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::GenerateImage,
        ToolName::DescribeModels,
        ToolName::GetCredits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GenerateImage => "pixeldojo_generate_image",
            ToolName::DescribeModels => "pixeldojo_describe_models",
            ToolName::GetCredits => "pixeldojo_get_credits",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::GenerateImage => {
                "Generate images using PixelDojo AI with various models and settings"
            }
            ToolName::DescribeModels => "Get information about available PixelDojo AI models",
            ToolName::GetCredits => {
                "Get current credit balance information for the PixelDojo account"
            }
        }
    }

    /// Wording used in "Error {action}: {status} - {body}".
    pub fn remote_action(&self) -> &'static str {
        match self {
            ToolName::GetCredits => "retrieving credit information",
            ToolName::GenerateImage | ToolName::DescribeModels => "generating image",
        }
    }

    fn input_schema(&self) -> Value {
        match self {
            ToolName::GenerateImage => json!({
                "type": "object",
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "The text prompt for image generation"
                    },
                    "model": {
                        "type": "string",
                        "description": "The model to use.",
                        "enum": catalog::model_ids()
                    },
                    "aspect_ratio": {
                        "type": "string",
                        "description": "The aspect ratio of the generated image.",
                        "enum": ASPECT_RATIOS
                    },
                    "num_outputs": {
                        "type": "integer",
                        "description": "Number of images to generate",
                        "minimum": 1,
                        "maximum": 4
                    },
                    "seed": {
                        "type": "integer",
                        "description": "Random seed for reproducible results"
                    },
                    "output_format": {
                        "type": "string",
                        "description": "Output format",
                        "enum": OUTPUT_FORMATS
                    },
                    "output_quality": {
                        "type": "integer",
                        "description": "Output quality (1-100)",
                        "minimum": 1,
                        "maximum": 100
                    }
                },
                "required": ["prompt"]
            }),
            ToolName::DescribeModels => json!({
                "type": "object",
                "properties": {
                    "model_id": {
                        "type": "string",
                        "description": "Specific model ID to get details for (optional)"
                    }
                },
                "required": []
            }),
            ToolName::GetCredits => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptArgumentDescriptor {
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgumentDescriptor>,
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    ToolName::ALL
        .iter()
        .map(|tool| ToolDescriptor {
            name: tool.as_str().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.input_schema(),
        })
        .collect()
}

pub fn prompt_descriptors() -> Vec<PromptDescriptor> {
    vec![PromptDescriptor {
        name: super::prompts::GENERATE_IMAGE_PROMPT.to_string(),
        description: ToolName::GenerateImage.description().to_string(),
        arguments: vec![
            prompt_argument("prompt", "The text prompt for image generation".to_string(), true),
            prompt_argument(
                "model",
                format!("The model to use. Options: {}", quoted(&catalog::model_ids())),
                false,
            ),
            prompt_argument(
                "aspect_ratio",
                format!(
                    "The aspect ratio of the generated image. Options: {}",
                    quoted(&ASPECT_RATIOS[..])
                ),
                false,
            ),
        ],
    }]
}

fn prompt_argument(name: &str, description: String, required: bool) -> PromptArgumentDescriptor {
    PromptArgumentDescriptor {
        name: name.to_string(),
        description,
        required,
    }
}

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| format!("'{}'", value))
        .collect::<Vec<_>>()
        .join(", ")
}
