use crate::vocab::{EXTRACTION_UNITS, RECIPE_UNITS};
use crate::{DraftError, Ingredient, RecipeDraft};

/// Check every ingredient unit against the full-recipe vocabulary.
///
/// This is the pipeline's only hard acceptance gate. Ingredient-name
/// membership in the catalog is steered by the prompt, not enforced here:
/// rejecting a whole draft over one loose name threw away too many otherwise
/// good recipes.
pub fn validate_draft(draft: &RecipeDraft) -> Result<(), DraftError> {
    validate_units(&draft.ingredients, RECIPE_UNITS)
}

/// Check extracted ingredients against the extraction-mode vocabulary.
pub fn validate_extracted(ingredients: &[Ingredient]) -> Result<(), DraftError> {
    validate_units(ingredients, EXTRACTION_UNITS)
}

fn validate_units(ingredients: &[Ingredient], allowed: &[&str]) -> Result<(), DraftError> {
    for ingredient in ingredients {
        if !allowed.contains(&ingredient.unit.as_str()) {
            return Err(DraftError::InvalidUnit {
                unit: ingredient.unit.clone(),
                ingredient: ingredient.name.clone(),
            });
        }
    }
    Ok(())
}
