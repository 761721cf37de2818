use crate::error::ExtractError;
use crate::model::{ImageCategory, RawRecipe, RecipeImage, RecipeResult};
use log::{debug, warn};
use url::Url;

/// Parse the model's raw JSON text into a normalized recipe.
///
/// Relative image URLs are resolved against the original source URL; an
/// image whose URL cannot be resolved is dropped rather than failing the
/// whole result.
pub fn normalize(raw_text: &str, source_url: &str) -> Result<RecipeResult, ExtractError> {
    let raw: RawRecipe = serde_json::from_str(raw_text).map_err(|e| {
        debug!("Unparseable model output: {}", raw_text);
        ExtractError::InvalidFormat(e)
    })?;

    let base = Url::parse(source_url).ok();
    let mut images = Vec::with_capacity(raw.images.len());
    for image in raw.images {
        match resolve_image_url(base.as_ref(), &image.url) {
            Some(url) => images.push(RecipeImage {
                url,
                description: image.description,
                category: image.category,
            }),
            None => warn!("Dropping image with unresolvable URL: {}", image.url),
        }
    }

    // First image tagged main, else the first image at all, else none
    let main_image = images
        .iter()
        .find(|i| i.category == Some(ImageCategory::Main))
        .or_else(|| images.first())
        .cloned();

    Ok(RecipeResult {
        prep_minutes: parse_number(raw.prep_time.as_deref()),
        cook_minutes: parse_number(raw.cook_time.as_deref()),
        total_minutes: parse_number(raw.total_time.as_deref()),
        servings_count: parse_number(raw.servings.as_deref()),
        name: raw.name,
        description: raw.description,
        ingredients: raw.ingredients,
        instructions: raw.instructions,
        prep_time: raw.prep_time,
        cook_time: raw.cook_time,
        total_time: raw.total_time,
        servings: raw.servings,
        images,
        main_image,
    })
}

/// Resolve a possibly-relative image URL against the source page.
/// Absolute URLs pass through; anything unresolvable is `None`.
fn resolve_image_url(base: Option<&Url>, image_url: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(image_url) {
        return Some(absolute.to_string());
    }
    base?.join(image_url).ok().map(|u| u.to_string())
}

/// Extract the first contiguous run of digits from a free-text field
/// like "15 minutes" or "4 servings". No digits, or no field, means 0.
pub fn parse_number(text: Option<&str>) -> u32 {
    let text = match text {
        Some(text) => text,
        None => return 0,
    };
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_URL: &str = "https://example.com/recipe";

    fn recipe_json(images: &str) -> String {
        format!(
            r#"{{
                "name": "Carbonara",
                "description": "Roman pasta",
                "ingredients": ["200g spaghetti", "2 eggs"],
                "instructions": ["Boil pasta", "Mix eggs"],
                "prep_time": "15 minutes",
                "cook_time": "20 min",
                "total_time": "35 minutes",
                "servings": "4 servings",
                "images": {}
            }}"#,
            images
        )
    }

    #[test]
    fn test_normalize_full_recipe() {
        let result = normalize(&recipe_json("[]"), SOURCE_URL).unwrap();
        assert_eq!(result.name, "Carbonara");
        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.prep_minutes, 15);
        assert_eq!(result.cook_minutes, 20);
        assert_eq!(result.total_minutes, 35);
        assert_eq!(result.servings_count, 4);
        assert!(result.main_image.is_none());
    }

    #[test]
    fn test_relative_image_url_resolved_against_source() {
        let result = normalize(
            &recipe_json(r#"[{"url": "/img/x.jpg", "category": "main"}]"#),
            SOURCE_URL,
        )
        .unwrap();
        assert_eq!(result.images[0].url, "https://example.com/img/x.jpg");
    }

    #[test]
    fn test_absolute_image_url_passes_through() {
        let result = normalize(
            &recipe_json(r#"[{"url": "https://cdn.example.net/a.jpg"}]"#),
            SOURCE_URL,
        )
        .unwrap();
        assert_eq!(result.images[0].url, "https://cdn.example.net/a.jpg");
    }

    #[test]
    fn test_unresolvable_image_is_dropped_silently() {
        // Source URL is garbage, image is relative: no base to resolve against
        let result = normalize(
            &recipe_json(r#"[{"url": "/img/x.jpg"}, {"url": "https://cdn.example.net/a.jpg"}]"#),
            "not a url",
        )
        .unwrap();
        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].url, "https://cdn.example.net/a.jpg");
    }

    #[test]
    fn test_main_image_prefers_main_category() {
        let result = normalize(
            &recipe_json(
                r#"[
                    {"url": "https://e.com/step.jpg", "category": "step"},
                    {"url": "https://e.com/dish.jpg", "category": "main"}
                ]"#,
            ),
            SOURCE_URL,
        )
        .unwrap();
        assert_eq!(result.main_image.unwrap().url, "https://e.com/dish.jpg");
    }

    #[test]
    fn test_main_image_falls_back_to_first() {
        let result = normalize(
            &recipe_json(
                r#"[
                    {"url": "https://e.com/one.jpg", "category": "step"},
                    {"url": "https://e.com/two.jpg", "category": "additional"}
                ]"#,
            ),
            SOURCE_URL,
        )
        .unwrap();
        assert_eq!(result.main_image.unwrap().url, "https://e.com/one.jpg");
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let result = normalize("I could not find a recipe, sorry!", SOURCE_URL);
        assert!(matches!(result, Err(ExtractError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_optional_fields() {
        let result = normalize(
            r#"{"name": "Toast", "description": "", "ingredients": ["bread"], "instructions": ["toast it"]}"#,
            SOURCE_URL,
        )
        .unwrap();
        assert_eq!(result.prep_minutes, 0);
        assert_eq!(result.servings_count, 0);
        assert!(result.prep_time.is_none());
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(Some("15 minutes")), 15);
        assert_eq!(parse_number(Some("about 40 min")), 40);
        assert_eq!(parse_number(Some("4 servings")), 4);
        assert_eq!(parse_number(Some("serves four")), 0);
        assert_eq!(parse_number(Some("")), 0);
        assert_eq!(parse_number(None), 0);
    }
}
