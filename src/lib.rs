pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod oembed;
pub mod platform;
pub mod prompt;
pub mod providers;
pub mod render;
pub mod schema;
pub mod server;

use log::{debug, info};
use std::time::Duration;

pub use crate::config::AppConfig;
pub use crate::error::ExtractError;
pub use crate::model::{RecipeResult, VideoMetadata};
pub use crate::platform::{classify, Platform};

use crate::oembed::OembedClient;
use crate::providers::{GoogleProvider, LlmProvider};

/// The whole extraction pipeline: classify, enrich, prompt, invoke,
/// normalize. Holds only clients; no state survives a call.
pub struct RecipePipeline {
    oembed: OembedClient,
    provider: Box<dyn LlmProvider>,
}

impl RecipePipeline {
    /// Build the pipeline from configuration. Fails fast when the model
    /// credential is missing, before any request is accepted.
    pub fn from_config(config: &AppConfig) -> Result<Self, ExtractError> {
        Ok(RecipePipeline {
            oembed: OembedClient::new(Duration::from_secs(config.timeout)),
            provider: Box::new(GoogleProvider::new(config)?),
        })
    }

    /// Assemble a pipeline from explicit parts
    pub fn new(oembed: OembedClient, provider: Box<dyn LlmProvider>) -> Self {
        RecipePipeline { oembed, provider }
    }

    /// Run one URL through the pipeline.
    ///
    /// The two outbound calls are sequential: the prompt depends on the
    /// (optional) oEmbed metadata. Enrichment failure never aborts the run.
    pub async fn run(&self, url: &str) -> Result<RecipeResult, ExtractError> {
        let platform = classify(url);
        info!("Extracting recipe from {} ({})", url, platform.tag());

        let metadata = if platform.is_video() {
            self.oembed.fetch_metadata(url, platform).await
        } else {
            None
        };

        let request = prompt::build_prompt(url, platform, metadata.as_ref())?;
        debug!("Prompt for {}: {}", self.provider.provider_name(), request.user_prompt);

        let raw = self.provider.generate(&request).await?;
        normalize::normalize(&raw, url)
    }
}

/// One-shot convenience: load configuration from file/environment and
/// extract a single recipe.
pub async fn extract_recipe(url: &str) -> Result<RecipeResult, ExtractError> {
    let config = AppConfig::load()?;
    let pipeline = RecipePipeline::from_config(&config)?;
    pipeline.run(url).await
}
