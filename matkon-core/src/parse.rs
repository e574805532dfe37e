use serde::de::DeserializeOwned;

use crate::{repair_json, DraftError, Ingredient, RecipeDraft};

/// Parse repaired text as a full recipe draft.
///
/// When the text does not parse directly, slices the outermost `{ … }` block,
/// repairs it again and retries once. That recovers drafts wrapped in prose or
/// fence remnants. If both attempts fail the raw text travels with the error.
pub fn parse_draft(text: &str) -> Result<RecipeDraft, DraftError> {
    parse_with_slice(text, '{', '}')
}

/// Parse repaired text as a bare ingredient array (extraction mode).
pub fn parse_ingredients(text: &str) -> Result<Vec<Ingredient>, DraftError> {
    parse_with_slice(text, '[', ']')
}

fn parse_with_slice<T: DeserializeOwned>(
    text: &str,
    open: char,
    close: char,
) -> Result<T, DraftError> {
    let mut reason = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(error) => error.to_string(),
    };

    if let (Some(start), Some(end)) = (text.find(open), text.rfind(close)) {
        if start < end {
            let slice = repair_json(&text[start..=end]);
            match serde_json::from_str(&slice) {
                Ok(value) => return Ok(value),
                Err(error) => reason = error.to_string(),
            }
        }
    }

    Err(DraftError::Malformed {
        raw: text.to_string(),
        reason,
    })
}
