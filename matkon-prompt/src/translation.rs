/// Build the Hebrew-to-English title translation prompt used for photo
/// lookups. The search provider indexes English names only.
pub fn translation_prompt(title: &str) -> String {
    format!(
        "Translate the following Hebrew recipe title into natural English, only output the translated text:\n\"{title}\""
    )
}
