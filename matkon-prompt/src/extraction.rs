use matkon_core::vocab::EXTRACTION_UNITS;

/// Build the ingredients-only extraction prompt.
pub fn extraction_prompt(recipe_text: &str) -> String {
    let units = EXTRACTION_UNITS.join(", ");
    format!(
        r#"
You are an ingredient extractor. Given a recipe description (title, photoURL, tags, steps, ingredients), return ONLY the ingredients in strict JSON format:

[
  {{ "name": "string", "qty": number, "unit": "ליטר|מ"ל|ק"ג|גרם|כף|כפית|יחידה" }}
]

Validation:
- Use ONLY these units: {units}.
- Do NOT return any other fields besides the array.
- All text must be in Hebrew.
- If qty is not clear, estimate a reasonable numeric value.
- Always output valid JSON.

Recipe to analyze:
"{recipe_text}"
"#
    )
}
