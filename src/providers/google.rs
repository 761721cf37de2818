use crate::config::AppConfig;
use crate::error::ExtractError;
use crate::prompt::PromptRequest;
use crate::providers::LlmProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const GOOGLE_API_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration.
    ///
    /// The API key comes from config or the GOOGLE_API_KEY environment
    /// variable; its absence is a hard configuration error raised before
    /// any network call is made.
    pub fn new(config: &AppConfig) -> Result<Self, ExtractError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                ExtractError::Config("GOOGLE_API_KEY not found in config or environment".to_string())
            })?;

        Ok(GoogleProvider {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout))
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: GOOGLE_API_URL.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.2,
            max_tokens: 4096,
        }
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String, ExtractError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "systemInstruction": {
                    "parts": [{ "text": request.system_instruction }]
                },
                "contents": [{
                    "parts": [{ "text": request.user_prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens,
                    "responseMimeType": "application/json",
                    "responseSchema": request.schema.to_value()
                }
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await.map_err(ExtractError::Upstream)?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("");
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::prompt::build_prompt;
    use mockito::Server;

    fn test_request() -> PromptRequest {
        build_prompt("https://example.com/recipe", Platform::Website, None).unwrap()
    }

    fn gemini_path(model: &str) -> String {
        format!("/v1beta/models/{}:generateContent", model)
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", gemini_path("gemini-2.0-flash").as_str())
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "fake_api_key".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [{
                                "text": "{\"name\": \"Carbonara\", \"description\": \"Roman pasta\", \"ingredients\": [\"eggs\"], \"instructions\": [\"mix\"]}"
                            }]
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gemini-2.0-flash".to_string(),
        );

        let text = provider.generate(&test_request()).await.unwrap();
        assert!(text.contains("Carbonara"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", gemini_path("gemini-2.0-flash").as_str())
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": "quota exceeded"}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gemini-2.0-flash".to_string(),
        );

        let result = provider.generate(&test_request()).await;
        match result {
            Err(ExtractError::Upstream(_)) => {}
            other => panic!("Expected Upstream error, got {:?}", other.map(|_| ())),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_empty_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", gemini_path("gemini-2.0-flash").as_str())
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gemini-2.0-flash".to_string(),
        );

        let result = provider.generate(&test_request()).await;
        assert!(matches!(result, Err(ExtractError::EmptyResponse)));
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        // Make sure the environment fallback cannot kick in
        std::env::remove_var("GOOGLE_API_KEY");
        let config = AppConfig::default();
        let result = GoogleProvider::new(&config);
        match result {
            Err(ExtractError::Config(message)) => {
                assert!(message.contains("GOOGLE_API_KEY"))
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = GoogleProvider::with_base_url(
            "fake_api_key".to_string(),
            "http://localhost".to_string(),
            "gemini-2.0-flash".to_string(),
        );
        assert_eq!(provider.provider_name(), "google");
    }
}
