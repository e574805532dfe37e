use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use matkon_audit::{AuditEvent, AuditOutcome, AuditSink};
use matkon_core::{
    parse_ingredients, repair_json, validate_extracted, Ingredient, TextGenerator,
};
use matkon_prompt::extraction_prompt;

use crate::generator::elapsed_ms;
use crate::{AttemptError, PipelineError};

const EXTRACT_KIND: &str = "extractIngredients";

/// Pulls a structured ingredient list out of a free-text recipe description.
///
/// Single shot: no retry loop, failures are recorded and propagate directly.
/// Audit events log the recipe text itself, not the assembled prompt.
pub struct IngredientExtractor {
    backend: Arc<dyn TextGenerator>,
    audit: Arc<dyn AuditSink>,
}

impl IngredientExtractor {
    pub fn new(backend: Arc<dyn TextGenerator>, audit: Arc<dyn AuditSink>) -> Self {
        Self { backend, audit }
    }

    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn extract(&self, recipe_text: &str) -> Result<Vec<Ingredient>, PipelineError> {
        let prompt = extraction_prompt(recipe_text);
        let started = Instant::now();

        let raw = match self.backend.generate(&prompt).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(error = %error, "ingredient extraction call failed");
                self.record(recipe_text, AuditOutcome::failure(error.to_string()), started)
                    .await;
                return Err(AttemptError::from(error).into());
            }
        };

        let repaired = repair_json(&raw);
        let outcome = parse_ingredients(&repaired)
            .and_then(|ingredients| validate_extracted(&ingredients).map(|_| ingredients));

        match outcome {
            Ok(ingredients) => {
                tracing::info!(count = ingredients.len(), "ingredients extracted");
                let value =
                    serde_json::to_value(&ingredients).unwrap_or(serde_json::Value::Null);
                self.record(recipe_text, AuditOutcome::success(value), started).await;
                Ok(ingredients)
            }
            Err(error) => {
                tracing::warn!(error = %error, "ingredient extraction rejected");
                self.record(
                    recipe_text,
                    AuditOutcome::failure_with_raw(error.to_string(), raw),
                    started,
                )
                .await;
                Err(AttemptError::from(error).into())
            }
        }
    }

    async fn record(&self, input: &str, outcome: AuditOutcome, started: Instant) {
        let event = AuditEvent::new(
            EXTRACT_KIND,
            input,
            outcome,
            self.backend.model_name(),
            elapsed_ms(started),
        );
        if let Err(error) = self.audit.record(&event).await {
            tracing::warn!(error = %error, kind = EXTRACT_KIND, "failed to record audit event");
        }
    }
}
