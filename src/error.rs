use thiserror::Error;

#[derive(Debug, Error)]
pub enum DojoError {
    #[error("Error: PIXELDOJO_API_KEY environment variable not set. Please configure your API key.")]
    MissingApiKey,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("{status} - {body}")]
    Remote { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Response(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl From<reqwest::Error> for DojoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DojoError::Response(err.to_string())
        } else {
            DojoError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DojoError>;
