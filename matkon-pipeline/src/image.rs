use std::sync::Arc;

use matkon_core::{GenerateError, TextGenerator, PLACEHOLDER_IMAGE};
use matkon_prompt::translation_prompt;
use matkon_spoonacular::SpoonacularClient;

/// Finds a representative photo for a draft title.
///
/// Photo lookup is cosmetic, so this never fails the pipeline: a failed
/// translation falls back to searching with the Hebrew title, and any search
/// problem falls back to [`PLACEHOLDER_IMAGE`].
pub struct ImageResolver {
    backend: Arc<dyn TextGenerator>,
    search: SpoonacularClient,
}

impl ImageResolver {
    pub fn new(backend: Arc<dyn TextGenerator>, search: SpoonacularClient) -> Self {
        Self { backend, search }
    }

    pub async fn resolve(&self, title: &str) -> String {
        let query = match self.translate(title).await {
            Ok(translated) => translated,
            Err(error) => {
                tracing::warn!(error = %error, title, "title translation failed, searching with the original");
                title.to_string()
            }
        };

        match self.search.search_image(&query).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::warn!(title, query = %query, "no image found, using placeholder");
                PLACEHOLDER_IMAGE.to_string()
            }
            Err(error) => {
                tracing::warn!(error = %error, title, "image search failed, using placeholder");
                PLACEHOLDER_IMAGE.to_string()
            }
        }
    }

    /// Translate the Hebrew title through the bare backend. No retry layer:
    /// an overloaded backend here just means searching in Hebrew.
    async fn translate(&self, title: &str) -> Result<String, GenerateError> {
        let translated = self.backend.generate(&translation_prompt(title)).await?;
        Ok(translated.trim().to_string())
    }
}
