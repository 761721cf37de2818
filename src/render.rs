use crate::model::RecipeResult;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Format a minute count for the summary list: under an hour as
/// "45 min", whole hours as "2h", otherwise "1h 15m". Zero or negative
/// durations have no display value and are omitted.
pub fn format_time(minutes: i64) -> Option<String> {
    if minutes <= 0 {
        return None;
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    Some(match (hours, rest) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    })
}

/// Render a recipe as a self-contained HTML fragment.
///
/// Fixed element structure: main-image figure, title, description,
/// other-images grid, summary list, then a two-column
/// ingredients/instructions block. All interpolated text is escaped.
pub fn render_html(recipe: &RecipeResult) -> String {
    let mut html = String::from("<article class=\"recipe-card\">\n");

    if let Some(main) = &recipe.main_image {
        html.push_str(&format!(
            "  <figure class=\"recipe-main-image\"><img src=\"{}\" alt=\"{}\"></figure>\n",
            encode_double_quoted_attribute(&main.url),
            encode_double_quoted_attribute(&main.description),
        ));
    }

    html.push_str(&format!(
        "  <h1 class=\"recipe-title\">{}</h1>\n",
        encode_text(&recipe.name)
    ));
    if !recipe.description.is_empty() {
        html.push_str(&format!(
            "  <p class=\"recipe-description\">{}</p>\n",
            encode_text(&recipe.description)
        ));
    }

    // Everything that is not the main image goes into the gallery
    let other_images: Vec<_> = recipe
        .images
        .iter()
        .filter(|image| Some(*image) != recipe.main_image.as_ref())
        .collect();
    if !other_images.is_empty() {
        html.push_str("  <div class=\"recipe-gallery\">\n");
        for image in other_images {
            html.push_str(&format!(
                "    <img src=\"{}\" alt=\"{}\">\n",
                encode_double_quoted_attribute(&image.url),
                encode_double_quoted_attribute(&image.description),
            ));
        }
        html.push_str("  </div>\n");
    }

    let mut summary = Vec::new();
    if let Some(prep) = format_time(recipe.prep_minutes as i64) {
        summary.push(("Prep", prep));
    }
    if let Some(cook) = format_time(recipe.cook_minutes as i64) {
        summary.push(("Cook", cook));
    }
    if recipe.servings_count > 0 {
        summary.push(("Servings", recipe.servings_count.to_string()));
    }
    if !summary.is_empty() {
        html.push_str("  <ul class=\"recipe-summary\">\n");
        for (label, value) in summary {
            html.push_str(&format!(
                "    <li><span class=\"recipe-summary-label\">{}</span> {}</li>\n",
                label,
                encode_text(&value)
            ));
        }
        html.push_str("  </ul>\n");
    }

    html.push_str("  <div class=\"recipe-columns\">\n");
    html.push_str("    <section class=\"recipe-ingredients\">\n      <h2>Ingredients</h2>\n      <ul>\n");
    for ingredient in &recipe.ingredients {
        html.push_str(&format!("        <li>{}</li>\n", encode_text(ingredient)));
    }
    html.push_str("      </ul>\n    </section>\n");
    html.push_str("    <section class=\"recipe-instructions\">\n      <h2>Instructions</h2>\n      <ol>\n");
    for step in &recipe.instructions {
        html.push_str(&format!("        <li>{}</li>\n", encode_text(step)));
    }
    html.push_str("      </ol>\n    </section>\n  </div>\n</article>\n");

    html
}
