use crate::error::ExtractError;
use crate::model::VideoMetadata;
use crate::platform::Platform;
use crate::schema::RecipeSchema;

/// System instruction for video sources
const VIDEO_INSTRUCTION: &str = "You are a recipe extraction assistant. \
Analyze the cooking video at the given URL and extract the complete recipe \
shown or described in it. Transcribe quantities exactly as presented. \
If an amount is only shown visually, estimate it and say so in the ingredient text.";

/// System instruction for generic webpages
const WEBSITE_INSTRUCTION: &str = "You are a recipe extraction assistant. \
Read the webpage at the given URL and extract only the recipe content. \
Ignore navigation menus, advertisements, comment sections and related-content \
sections. Do not invent ingredients or steps that are not on the page.";

/// A fully composed model request: instruction, prompt and output schema
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    pub schema: RecipeSchema,
}

/// Compose the instruction, user prompt and schema for a classified URL.
///
/// Unsupported platforms are refused here, before any network activity.
pub fn build_prompt(
    url: &str,
    platform: Platform,
    metadata: Option<&VideoMetadata>,
) -> Result<PromptRequest, ExtractError> {
    let schema = RecipeSchema::for_platform(platform)
        .ok_or(ExtractError::UnsupportedPlatform(platform))?;

    let request = match schema {
        RecipeSchema::Video => {
            let mut prompt = format!("Extract the recipe from this {} video", platform);
            if let Some(metadata) = metadata {
                prompt.push_str(&format!(
                    ", titled \"{}\" by author \"{}\"",
                    metadata.title, metadata.author
                ));
            }
            prompt.push_str(&format!(
                ": {}\n\nReturn the dish name, a short description, the full \
                 ingredient list with quantities, and the preparation steps in \
                 order. Include prep time, cook time, total time and servings \
                 when the video mentions them.",
                url
            ));
            PromptRequest {
                system_instruction: VIDEO_INSTRUCTION.to_string(),
                user_prompt: prompt,
                schema,
            }
        }
        RecipeSchema::Website => PromptRequest {
            system_instruction: WEBSITE_INSTRUCTION.to_string(),
            user_prompt: format!(
                "Extract the recipe from this webpage: {}\n\nReturn the dish \
                 name, a short description, the full ingredient list with \
                 quantities, and the preparation steps in order. Include prep \
                 time, cook time, total time and servings when the page states \
                 them. Also list the recipe images on the page with their full \
                 URLs, categorized as main (finished dish), step (a preparation \
                 step) or additional.",
                url
            ),
            schema,
        },
    };

    Ok(request)
}
