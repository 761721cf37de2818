use serde::Serialize;
use std::fmt;

/// Source platform derived from the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    #[serde(rename = "video-tiktok")]
    Tiktok,
    #[serde(rename = "video-youtube")]
    Youtube,
    #[serde(rename = "image-platform-unsupported")]
    Instagram,
    #[serde(rename = "generic-website")]
    Website,
}

impl Platform {
    /// True for platforms whose content is a video we ask the model to watch
    pub fn is_video(&self) -> bool {
        matches!(self, Platform::Tiktok | Platform::Youtube)
    }

    /// Wire tag used in API responses
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Tiktok => "video-tiktok",
            Platform::Youtube => "video-youtube",
            Platform::Instagram => "image-platform-unsupported",
            Platform::Website => "generic-website",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Website => "website",
        };
        write!(f, "{}", name)
    }
}

/// Classify a source URL by substring match, first match wins.
///
/// Total over arbitrary strings; anything that is not a known platform
/// falls through to `Website`.
pub fn classify(url: &str) -> Platform {
    if url.contains("tiktok.com") {
        Platform::Tiktok
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        Platform::Youtube
    } else if url.contains("instagram.com") {
        Platform::Instagram
    } else {
        Platform::Website
    }
}
