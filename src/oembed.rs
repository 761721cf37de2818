use crate::model::VideoMetadata;
use crate::platform::Platform;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

const YOUTUBE_OEMBED_URL: &str = "https://www.youtube.com/oembed";
const TIKTOK_OEMBED_URL: &str = "https://www.tiktok.com/oembed";

/// Best-effort title/author lookup against a video platform's oEmbed
/// endpoint. Every failure mode degrades to `None`; this client never
/// returns an error.
pub struct OembedClient {
    client: Client,
    youtube_url: String,
    tiktok_url: String,
}

impl OembedClient {
    pub fn new(timeout: Duration) -> Self {
        OembedClient {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            youtube_url: YOUTUBE_OEMBED_URL.to_string(),
            tiktok_url: TIKTOK_OEMBED_URL.to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_urls(timeout: Duration, youtube_url: String, tiktok_url: String) -> Self {
        OembedClient {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            youtube_url,
            tiktok_url,
        }
    }

    /// Fetch title and author for a video URL. Single attempt, no retries.
    pub async fn fetch_metadata(&self, url: &str, platform: Platform) -> Option<VideoMetadata> {
        let endpoint = match platform {
            Platform::Youtube => &self.youtube_url,
            Platform::Tiktok => &self.tiktok_url,
            _ => return None,
        };

        let response = match self
            .client
            .get(endpoint)
            .query(&[("url", url), ("format", "json")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("oEmbed request to {} failed: {}", platform, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "oEmbed endpoint for {} returned status {}",
                platform,
                response.status()
            );
            return None;
        }

        let metadata: VideoMetadata = match response.json().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Failed to parse oEmbed response from {}: {}", platform, e);
                return None;
            }
        };

        if metadata.title.is_empty() || metadata.author.is_empty() {
            debug!("oEmbed response from {} missing title or author", platform);
            return None;
        }

        debug!(
            "oEmbed metadata for {}: \"{}\" by {}",
            platform, metadata.title, metadata.author
        );
        Some(metadata)
    }
}
