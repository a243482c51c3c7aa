use thiserror::Error;

/// Failures of a single text optimization call.
///
/// Every variant is recoverable at the caller; none is retried automatically.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Text to optimize is empty")]
    BlankInput,

    #[error("API key is not configured")]
    ConfigMissing,

    #[error("API key was rejected by the completion service")]
    Unauthorized,

    #[error("Too many requests, retry after a short delay")]
    RateLimited,

    #[error("Completion service returned an unusable response: {0}")]
    MalformedResponse(String),

    #[error("Completion request failed: {status} - {message}")]
    Transport { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl OptimizeError {
    /// True when the caller should surface the configuration entry again.
    pub fn requires_reconfiguration(&self) -> bool {
        matches!(self, OptimizeError::Unauthorized | OptimizeError::ConfigMissing)
    }

    /// Short stable label, used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OptimizeError::BlankInput => "blank_input",
            OptimizeError::ConfigMissing => "config_missing",
            OptimizeError::Unauthorized => "unauthorized",
            OptimizeError::RateLimited => "rate_limited",
            OptimizeError::MalformedResponse(_) => "malformed_response",
            OptimizeError::Transport { .. } => "transport",
            OptimizeError::Network(_) => "network",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Optimization error: {0}")]
    Optimize(#[from] OptimizeError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("{}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
