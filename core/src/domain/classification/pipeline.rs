use crate::domain::{
    classification::{
        ai::classify_with_ai,
        entities::{Classification, ClassificationVerdict, VerdictSource},
        heuristic::classify_heuristically,
        metadata::classify_from_metadata,
        ports::LLMClient,
        translation::translate_ingredients,
    },
    product::entities::{ClassifiedProduct, RawProductRecord},
};

pub const HEURISTIC_FALLBACK_EXPLANATION: &str = "Ni la base de datos de productos ni el análisis de IA fueron concluyentes; este resultado se basa solo en palabras clave de la lista de ingredientes.";
pub const NO_INGREDIENTS_EXPLANATION: &str =
    "La base de datos de productos no tiene información sobre la dieta y no hay lista de ingredientes disponible.";

/// Ordered classification stages: structured metadata, then translation and
/// AI analysis, then the keyword heuristic.
///
/// Each `classify` call is an independent flow; the pipeline holds no mutable
/// state, so concurrent calls for different products do not wait on each other.
/// Dropping the returned future abandons the flow at its next await point,
/// but a request already sent to the model is not recalled.
#[derive(Debug, Clone)]
pub struct ClassificationPipeline<L> {
    llm: L,
    preferred_locale: String,
}

impl<L: LLMClient> ClassificationPipeline<L> {
    pub fn new(llm: L, preferred_locale: impl Into<String>) -> Self {
        Self {
            llm,
            preferred_locale: preferred_locale.into(),
        }
    }

    pub async fn classify(&self, record: RawProductRecord) -> ClassifiedProduct {
        let ingredients = record.ingredients.preferred(&self.preferred_locale);
        let metadata = classify_from_metadata(&record.diet_signals);

        let (verdict, ingredients_text) = match metadata.into_verdict() {
            Some(verdict) => {
                // The verdict is final; translation only normalizes what is displayed.
                let display_text = if ingredients.trim().is_empty() {
                    ingredients
                } else {
                    translate_ingredients(&self.llm, &ingredients)
                        .await
                        .into_text(&ingredients)
                };
                (verdict, display_text)
            }
            None if ingredients.trim().is_empty() => (
                ClassificationVerdict {
                    classification: Classification::Unknown,
                    confidence: 0,
                    source: VerdictSource::Heuristic,
                    reasoning: None,
                    confidence_explanation: Some(NO_INGREDIENTS_EXPLANATION.to_string()),
                },
                ingredients,
            ),
            None => self.classify_ingredients(&ingredients).await,
        };

        tracing::info!(
            barcode = %record.barcode,
            classification = %verdict.classification,
            confidence = verdict.confidence,
            source = ?verdict.source,
            "product classified"
        );

        ClassifiedProduct::new(record, ingredients_text, verdict)
    }

    /// Translate → AI → heuristic. Returns the verdict together with the text
    /// that produced it.
    async fn classify_ingredients(&self, ingredients: &str) -> (ClassificationVerdict, String) {
        let text = translate_ingredients(&self.llm, ingredients)
            .await
            .into_text(ingredients);

        let analysis = classify_with_ai(&self.llm, &text).await;
        if analysis.classification != Classification::Unknown {
            let verdict = ClassificationVerdict {
                classification: analysis.classification,
                confidence: analysis.confidence,
                source: VerdictSource::Ai,
                reasoning: Some(analysis.reasoning),
                confidence_explanation: analysis.confidence_explanation,
            };
            return (verdict, text);
        }

        tracing::warn!(
            reason = %analysis.reasoning,
            "AI analysis inconclusive, falling back to keyword matching"
        );

        let heuristic = classify_heuristically(&text);
        let reasoning = match heuristic.matched_term {
            Some(term) => format!("La lista de ingredientes menciona \"{term}\""),
            None => "No se encontraron ingredientes de origen animal".to_string(),
        };
        let verdict = ClassificationVerdict {
            classification: heuristic.classification,
            confidence: heuristic.confidence,
            source: VerdictSource::Heuristic,
            reasoning: Some(reasoning),
            confidence_explanation: Some(HEURISTIC_FALLBACK_EXPLANATION.to_string()),
        };
        (verdict, text)
    }
}
