use thiserror::Error;

/// Maximum number of characters of an upstream error body kept in
/// [`ProviderError::Upstream`].
pub const UPSTREAM_BODY_LIMIT: usize = 500;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Yahoo Finance error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Builds an upstream error, keeping at most [`UPSTREAM_BODY_LIMIT`]
    /// characters of the response body.
    pub fn upstream(status: u16, body: &str) -> Self {
        ProviderError::Upstream {
            status,
            body: body.chars().take(UPSTREAM_BODY_LIMIT).collect(),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::Transport(_) => "transport_error",
            ProviderError::Upstream { .. } => "upstream_error",
            ProviderError::Parse(_) => "parse_error",
            ProviderError::Validation(_) => "validation_error",
            ProviderError::Config(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Transport(
                "Request timeout. Please check your internet connection.".to_string(),
            )
        } else if err.is_connect() {
            ProviderError::Transport(format!(
                "Failed to connect to Yahoo Finance API: {}",
                err
            ))
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(feature = "mcp_server")]
impl From<ProviderError> for rmcp::model::ErrorData {
    fn from(err: ProviderError) -> Self {
        use serde_json::json;

        let data = match &err {
            ProviderError::Upstream { status, .. } => {
                json!({ "type": err.error_type(), "status": status })
            }
            _ => json!({ "type": err.error_type() }),
        };

        match err {
            ProviderError::Validation(_) => {
                rmcp::model::ErrorData::invalid_params(err.to_string(), Some(data))
            }
            _ => rmcp::model::ErrorData::internal_error(err.to_string(), Some(data)),
        }
    }
}
