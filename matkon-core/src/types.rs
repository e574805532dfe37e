use serde::{Deserialize, Serialize};

/// Fallback photo used when no real image can be found.
pub const PLACEHOLDER_IMAGE: &str =
    "https://redthread.uoregon.edu/files/original/affd16fd5264cab9197da4cd1a996f820e601ee4.png";

/// Marker the model is told to emit when it has no real photo to offer.
/// Matched as a substring because the model sometimes pads it with text.
pub const PLACEHOLDER_SENTINEL: &str = "PLACEHOLDER_IMAGE";

/// A generated recipe before persistence.
///
/// Field names follow the wire format of the generation prompt, so a repaired
/// model response deserializes into this directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    /// May arrive empty or as a placeholder marker; see [`RecipeDraft::needs_photo`].
    #[serde(default)]
    pub photo_url: String,
    pub tags: Vec<String>,
    pub category: String,
    pub difficulty: String,
    pub prep_time: String,
    pub steps: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDraft {
    /// True when the draft still needs a real photo: the model left the field
    /// empty or pointed it at the placeholder marker.
    pub fn needs_photo(&self) -> bool {
        self.photo_url.is_empty() || self.photo_url.contains(PLACEHOLDER_SENTINEL)
    }
}

/// One ingredient line of a draft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub qty: f64,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_photo(photo_url: &str) -> RecipeDraft {
        RecipeDraft {
            title: "מרק עוף".to_string(),
            photo_url: photo_url.to_string(),
            tags: vec!["כשר".to_string()],
            category: "מרק".to_string(),
            difficulty: "קל".to_string(),
            prep_time: "30 דק".to_string(),
            steps: vec!["לבשל".to_string()],
            ingredients: vec![],
        }
    }

    #[test]
    fn empty_photo_needs_resolution() {
        assert!(draft_with_photo("").needs_photo());
    }

    #[test]
    fn placeholder_marker_needs_resolution() {
        assert!(draft_with_photo("PLACEHOLDER_IMAGE").needs_photo());
        assert!(draft_with_photo("https://example.com/PLACEHOLDER_IMAGE.png").needs_photo());
    }

    #[test]
    fn real_url_is_kept() {
        assert!(!draft_with_photo("https://img.spoonacular.com/recipes/1-312x231.jpg").needs_photo());
    }

    #[test]
    fn missing_photo_field_defaults_to_empty() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{
                "title": "סלט",
                "tags": ["טבעוני"],
                "category": "סלט",
                "difficulty": "קל",
                "prepTime": "10 דק",
                "steps": ["לקצוץ"],
                "ingredients": [{"name": "מלפפון", "qty": 2, "unit": "יחידה"}]
            }"#,
        )
        .unwrap();
        assert_eq!(draft.photo_url, "");
        assert!(draft.needs_photo());
    }
}
