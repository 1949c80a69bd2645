pub mod descriptors;
pub mod dispatcher;
pub mod prompts;

pub use descriptors::{
    prompt_descriptors, tool_descriptors, PromptArgumentDescriptor, PromptDescriptor,
    ToolDescriptor, ToolName,
};
pub use dispatcher::{generation_request, Arguments, ToolDispatcher, ToolOutput};
pub use prompts::{render_prompt, GENERATE_IMAGE_PROMPT};
