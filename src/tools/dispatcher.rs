use super::{
    descriptors::{prompt_descriptors, tool_descriptors, PromptDescriptor, ToolDescriptor, ToolName},
    prompts::render_prompt,
};
use crate::{
    error::{DojoError, Result},
    format::{format_credits, format_generation, format_model_catalog},
    models::GenerationRequest,
    pixeldojo::PixelDojoApi,
};
use serde_json::{Map, Number, Value};
use std::sync::Arc;

pub type Arguments = Map<String, Value>;

/// Text handed back to the transport. `is_error` marks a failure that was
/// turned into text instead of being raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// Routes tool calls to the catalog or the remote API. Holds no per-call
/// state, so one instance serves concurrent calls.
#[derive(Clone)]
pub struct ToolDispatcher {
    api: Arc<dyn PixelDojoApi>,
}

impl ToolDispatcher {
    pub fn new(api: Arc<dyn PixelDojoApi>) -> Self {
        Self { api }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        tool_descriptors()
    }

    pub fn list_prompts(&self) -> Vec<PromptDescriptor> {
        prompt_descriptors()
    }

    pub fn get_prompt(&self, name: &str, arguments: &Arguments) -> String {
        render_prompt(name, arguments)
    }

    pub async fn dispatch(&self, name: &str, arguments: &Arguments) -> Result<String> {
        let tool = ToolName::parse(name).ok_or_else(|| DojoError::UnknownTool(name.to_string()))?;
        log::debug!("Dispatching {}", tool.as_str());

        match tool {
            ToolName::GenerateImage => {
                let request = generation_request(arguments)?;
                let result = self.api.submit_generation(&request).await?;
                Ok(format_generation(&request.model, &result))
            }
            ToolName::DescribeModels => {
                let model_id = optional_str(arguments, "model_id")?;
                Ok(format_model_catalog(model_id))
            }
            ToolName::GetCredits => {
                let balance = self.api.fetch_credits().await?;
                Ok(format_credits(&balance))
            }
        }
    }

    /// Like `dispatch`, but every failure comes back as text.
    pub async fn call_tool(&self, name: &str, arguments: &Arguments) -> ToolOutput {
        match self.dispatch(name, arguments).await {
            Ok(text) => ToolOutput::success(text),
            Err(err) => {
                log::warn!("Tool {} failed: {}", name, err);
                ToolOutput::error(error_text(name, &err))
            }
        }
    }
}

fn error_text(name: &str, err: &DojoError) -> String {
    match err {
        DojoError::Remote { status, body } => {
            let action = ToolName::parse(name)
                .map(|tool| tool.remote_action())
                .unwrap_or("calling PixelDojo API");
            format!("Error {}: {} - {}", action, status, body)
        }
        DojoError::Transport(cause) | DojoError::Response(cause) => {
            format!("Error calling PixelDojo API: {}", cause)
        }
        DojoError::Validation(reason) => format!("Invalid arguments for {}: {}", name, reason),
        DojoError::MissingApiKey | DojoError::Config(_) | DojoError::UnknownTool(_) => {
            err.to_string()
        }
    }
}

/// Builds the request from a tool argument bag. `model`, `aspect_ratio` and
/// the numeric settings are passed through for the service to validate. A
/// prompt of only whitespace is forwarded; only the empty string is refused.
pub fn generation_request(arguments: &Arguments) -> Result<GenerationRequest> {
    let prompt = optional_str(arguments, "prompt")?
        .ok_or_else(|| DojoError::Validation("prompt is required".to_string()))?;
    if prompt.is_empty() {
        return Err(DojoError::Validation("prompt must not be empty".to_string()));
    }

    let mut request = GenerationRequest::new(prompt);
    if let Some(model) = optional_str(arguments, "model")? {
        request = request.with_model(model);
    }
    if let Some(aspect_ratio) = optional_str(arguments, "aspect_ratio")? {
        request = request.with_aspect_ratio(aspect_ratio);
    }
    if let Some(num_outputs) = optional_number(arguments, "num_outputs")? {
        request = request.with_num_outputs(num_outputs);
    }
    if let Some(seed) = optional_number(arguments, "seed")? {
        request = request.with_seed(seed);
    }
    if let Some(output_format) = optional_str(arguments, "output_format")? {
        request = request.with_output_format(output_format);
    }
    if let Some(output_quality) = optional_number(arguments, "output_quality")? {
        request = request.with_output_quality(output_quality);
    }
    Ok(request)
}

// Null counts as absent.
fn optional_str<'a>(arguments: &'a Arguments, key: &str) -> Result<Option<&'a str>> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(DojoError::Validation(format!("{} must be a string", key))),
    }
}

fn optional_number(arguments: &Arguments, key: &str) -> Result<Option<Number>> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.clone())),
        Some(_) => Err(DojoError::Validation(format!("{} must be a number", key))),
    }
}
