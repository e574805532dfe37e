use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use matkon_audit::{AuditEvent, AuditOutcome, AuditSink};
use matkon_core::{
    parse_draft, repair_json, validate_draft, IngredientCatalog, RecipeDraft, Retrying,
    TextGenerator,
};
use matkon_prompt::recipe_prompt;

use crate::{AttemptError, ImageResolver, PipelineConfig, PipelineError};

const RECIPE_KIND: &str = "createRecipe";

/// Drives prompt, generation, repair, parse, validation and photo enrichment
/// end to end, with the outer attempt loop and one audit record per attempt.
pub struct RecipeGenerator {
    backend: Retrying,
    images: ImageResolver,
    audit: Arc<dyn AuditSink>,
    catalog: IngredientCatalog,
    config: PipelineConfig,
    model: String,
}

impl RecipeGenerator {
    pub fn new(
        backend: Arc<dyn TextGenerator>,
        images: ImageResolver,
        audit: Arc<dyn AuditSink>,
        catalog: IngredientCatalog,
        config: PipelineConfig,
    ) -> Self {
        let model = backend.model_name().to_string();
        Self {
            backend: Retrying::new(backend, config.retry),
            images,
            audit,
            catalog,
            config,
            model,
        }
    }

    /// Generate one validated draft from an optional free-text hint.
    ///
    /// Failed attempts are retried with the identical prompt after a fixed
    /// pause; only [`PipelineError::Exhausted`] ever crosses this boundary.
    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn generate(&self, hint: Option<&str>) -> Result<RecipeDraft, PipelineError> {
        let attempts = self.config.attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let prompt = recipe_prompt(hint, &self.catalog);
            let started = Instant::now();

            match self.run_attempt(&prompt).await {
                Ok(draft) => {
                    tracing::info!(attempt, title = %draft.title, "recipe draft accepted");
                    let output = AuditOutcome::success(
                        serde_json::to_value(&draft).unwrap_or(serde_json::Value::Null),
                    );
                    self.record(AuditEvent::new(
                        RECIPE_KIND,
                        prompt,
                        output,
                        &self.model,
                        elapsed_ms(started),
                    ))
                    .await;
                    return Ok(draft);
                }
                Err(error) => {
                    tracing::warn!(attempt, error = %error, "generation attempt failed");
                    self.record(AuditEvent::new(
                        RECIPE_KIND,
                        prompt,
                        AuditOutcome::failure(error.to_string()),
                        &self.model,
                        elapsed_ms(started),
                    ))
                    .await;

                    if attempt >= attempts {
                        return Err(PipelineError::Exhausted {
                            attempts,
                            source: error,
                        });
                    }
                    tokio::time::sleep(self.config.attempt_delay).await;
                }
            }
        }
    }

    async fn run_attempt(&self, prompt: &str) -> Result<RecipeDraft, AttemptError> {
        let raw = self.backend.generate(prompt).await?;
        let repaired = repair_json(&raw);
        let mut draft = parse_draft(&repaired)?;
        validate_draft(&draft)?;

        if draft.needs_photo() {
            draft.photo_url = self.images.resolve(&draft.title).await;
        }
        Ok(draft)
    }

    async fn record(&self, event: AuditEvent) {
        if let Err(error) = self.audit.record(&event).await {
            tracing::warn!(error = %error, kind = %event.kind, "failed to record audit event");
        }
    }
}

pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
