use serde::{Deserialize, Serialize};

/// Title and author returned by a platform's oEmbed endpoint.
/// Only constructed when both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    #[serde(rename = "author_name")]
    pub author: String,
}

/// Image category as declared in the response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Main,
    Step,
    Additional,
}

/// Recipe exactly as the model emitted it, before normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<ImageCategory>,
}

/// An image with its URL already resolved to an absolute form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeImage {
    pub url: String,
    pub description: String,
    pub category: Option<ImageCategory>,
}

/// Normalized recipe: model output plus derived numeric fields,
/// resolved image URLs and the chosen main image.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeResult {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    pub total_minutes: u32,
    pub servings_count: u32,
    pub images: Vec<RecipeImage>,
    pub main_image: Option<RecipeImage>,
}
