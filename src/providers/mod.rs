mod google;

pub use google::GoogleProvider;

use crate::error::ExtractError;
use crate::prompt::PromptRequest;
use async_trait::async_trait;

/// Unified trait for schema-constrained LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send the composed prompt and schema to the model, returning the raw
    /// text payload (expected to be JSON conforming to the schema).
    async fn generate(&self, request: &PromptRequest) -> Result<String, ExtractError>;
}
