use crate::platform::Platform;
use thiserror::Error;

/// Errors that can occur while turning a source URL into a recipe
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Request did not include a usable source URL
    #[error("Missing \"sourceUrl\" field in request body")]
    MissingUrl,

    /// The platform cannot be scraped or analyzed
    #[error("Unsupported platform: {0} restricts direct media access, so recipes cannot be extracted from it")]
    UnsupportedPlatform(Platform),

    /// Missing or invalid service configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to load configuration from file or environment
    #[error("Configuration error: {0}")]
    ConfigFile(#[from] config::ConfigError),

    /// The model call itself failed (network, quota, service error)
    #[error("Model request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The model answered but returned no text
    #[error("Empty AI response")]
    EmptyResponse,

    /// The model's text did not parse as JSON matching the schema
    #[error("Model returned invalid JSON: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}

impl ExtractError {
    /// HTTP status this error maps to: client mistakes are 400,
    /// everything else is on the server.
    pub fn status_code(&self) -> u16 {
        match self {
            ExtractError::MissingUrl | ExtractError::UnsupportedPlatform(_) => 400,
            ExtractError::Config(_)
            | ExtractError::ConfigFile(_)
            | ExtractError::Upstream(_)
            | ExtractError::EmptyResponse
            | ExtractError::InvalidFormat(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(ExtractError::MissingUrl.status_code(), 400);
        assert_eq!(
            ExtractError::UnsupportedPlatform(Platform::Instagram).status_code(),
            400
        );
    }

    #[test]
    fn test_server_errors_map_to_500() {
        assert_eq!(ExtractError::EmptyResponse.status_code(), 500);
        assert_eq!(
            ExtractError::Config("GOOGLE_API_KEY not set".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_unsupported_platform_message_names_the_platform() {
        let err = ExtractError::UnsupportedPlatform(Platform::Instagram);
        assert!(err.to_string().contains("Unsupported platform"));
        assert!(err.to_string().contains("Instagram"));
    }
}
