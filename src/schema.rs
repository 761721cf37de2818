use crate::platform::Platform;
use serde_json::{json, Value};

/// Shape of the structured output we ask the model for.
///
/// The two variants differ only in which optional fields they declare:
/// the website path additionally requests a categorized image list, since
/// a webpage is the only source we can pull image URLs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSchema {
    Video,
    Website,
}

impl RecipeSchema {
    /// Pick the schema variant for a platform. Unsupported platforms have
    /// no schema; the prompt builder refuses them before getting here.
    pub fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::Tiktok | Platform::Youtube => Some(RecipeSchema::Video),
            Platform::Website => Some(RecipeSchema::Website),
            Platform::Instagram => None,
        }
    }

    /// Render as a Gemini `responseSchema` value.
    pub fn to_value(&self) -> Value {
        let mut properties = json!({
            "name": {
                "type": "STRING",
                "description": "Name of the dish"
            },
            "description": {
                "type": "STRING",
                "description": "One or two sentence summary of the dish"
            },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Each ingredient with quantity, one per entry"
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Preparation steps in order, one per entry"
            },
            "prep_time": { "type": "STRING", "description": "Preparation time as text, e.g. \"15 minutes\"" },
            "cook_time": { "type": "STRING", "description": "Cooking time as text" },
            "total_time": { "type": "STRING", "description": "Total time as text" },
            "servings": { "type": "STRING", "description": "Number of servings as text, e.g. \"4 servings\"" }
        });

        if let RecipeSchema::Website = self {
            properties["images"] = json!({
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "url": { "type": "STRING", "description": "Full URL of the image as found on the page" },
                        "description": { "type": "STRING", "description": "What the image shows" },
                        "category": {
                            "type": "STRING",
                            "enum": ["main", "step", "additional"],
                            "description": "main = finished dish, step = preparation step, additional = anything else"
                        }
                    },
                    "required": ["url"]
                },
                "description": "Images of the recipe found on the page"
            });
        }

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": ["name", "description", "ingredients", "instructions"]
        })
    }
}
