use matkon_core::vocab::{CATEGORIES, DIFFICULTIES, RECIPE_UNITS, TAGS};
use matkon_core::{IngredientCatalog, PLACEHOLDER_IMAGE};

/// Build the full-recipe generation prompt.
///
/// A hint is embedded verbatim twice, once as a strict user-request block and
/// once as a trailing inspiration line; the model follows it far more
/// reliably that way. Without a hint both slots collapse to nothing and the
/// model free-styles within the vocabulary rules.
pub fn recipe_prompt(hint: Option<&str>, catalog: &IngredientCatalog) -> String {
    let allowed =
        serde_json::to_string(catalog.names()).unwrap_or_else(|_| "[]".to_string());
    let units = RECIPE_UNITS.join(", ");
    let difficulties = either_list(DIFFICULTIES);
    let categories = quoted_list(CATEGORIES);
    let tags = quoted_list(TAGS);

    let request_block = match hint {
        Some(text) => format!("\n### USER REQUEST (follow strictly):\n{text}\n"),
        None => String::new(),
    };
    let inspiration = match hint {
        Some(text) => format!("Use this inspiration: \"{text}\""),
        None => String::new(),
    };

    format!(
        r#"
You are a creative recipe generator. Generate ONE complete recipe strictly in JSON format using this structure:

{{
  "title": "string",
  "photoUrl": "string",
  "tags": ["string"],
  "category":"string",
  "difficulty":"string",
  "prepTime":"string",
  "steps": ["string"],
  "ingredients": [
    {{
      "name": "string",
      "qty": number,
      "unit": "ליטר|מ"ל|ק"ג|גרם|יחידה"
    }}
  ]
}}

VALIDATION:
{request_block}
- You may ONLY use ingredients from the following list: {allowed}.
- DO NOT invent or use any ingredient outside of this list.
- You MUST GENERATE RECIPE with one or more of the following units: {units}.
- Do NOT use any other unit outside this list.
- The prepTime has to be in minutes (eg. 30 דק).
- There is only 3 difficulties: ({difficulties}).
- Choose a category from the given list:{categories}.
- All text must be entirely in Hebrew.
- Include 1–3 relevant tags from the predefined list: {tags}
- Provide 3–6 realistic preparation steps.
- Include at least one dietary tag.
- Provide a realistic photo URL from spoonacular only, if you dont find a proper photo use this url: {placeholder} .
{inspiration}
"#,
        placeholder = PLACEHOLDER_IMAGE,
    )
}

/// `'א', 'ב', 'ג'`
fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `א, ב או ג` — the last element joined with "or".
fn either_list(values: &[&str]) -> String {
    match values.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("{} או {}", rest.join(", "), last)
        }
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}
