use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    classification::{
        entities::{Classification, IngredientAnalysis},
        ports::LLMClient,
        prompts::{build_analysis_prompt, get_ingredient_analysis_schema},
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiFailure {
    #[error("Límite de solicitudes de IA excedido. Intenta más tarde.")]
    RateLimited,

    #[error("Configuración de API de IA requerida")]
    NotConfigured,

    #[error("{0}")]
    Request(String),

    #[error("La respuesta de la IA no contiene un objeto JSON")]
    MissingJson,

    #[error("La respuesta de la IA no es un JSON válido: {0}")]
    InvalidJson(String),

    #[error("Clasificación no válida de la IA: {0}")]
    InvalidClassification(String),
}

impl From<CoreError> for AiFailure {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::RateLimitExceeded => AiFailure::RateLimited,
            CoreError::LlmNotConfigured => AiFailure::NotConfigured,
            other => AiFailure::Request(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    classification: Option<String>,
    confidence: Option<serde_json::Value>,
    reasoning: Option<String>,
    confidence_explanation: Option<String>,
}

/// Classifies ingredient text with the language model. Never fails: any
/// request or parsing problem becomes an `Unknown`/0 analysis whose
/// `reasoning` names the cause.
pub async fn classify_with_ai<L: LLMClient>(llm: &L, ingredients: &str) -> IngredientAnalysis {
    if ingredients.trim().is_empty() {
        return IngredientAnalysis::unknown(
            "No hay ingredientes para analizar",
            "No se proporcionaron ingredientes para el análisis",
        );
    }

    match request_analysis(llm, ingredients).await {
        Ok(analysis) => {
            tracing::debug!(
                classification = %analysis.classification,
                confidence = analysis.confidence,
                "AI ingredient analysis completed"
            );
            analysis
        }
        Err(failure) => {
            tracing::error!("AI ingredient analysis failed: {}", failure);
            IngredientAnalysis::unknown(
                format!("Error en análisis IA: {}", failure),
                "No se pudo completar el análisis debido a un error técnico",
            )
        }
    }
}

async fn request_analysis<L: LLMClient>(
    llm: &L,
    ingredients: &str,
) -> Result<IngredientAnalysis, AiFailure> {
    let response_text = llm
        .generate_with_text(
            build_analysis_prompt(ingredients),
            Some(get_ingredient_analysis_schema()),
        )
        .await?;

    parse_analysis_response(&response_text)
}

/// Extracts and validates the analysis object from free-form model output.
///
/// The model sometimes wraps the object in prose or a code fence, so parsing
/// starts at the first `{` and stops where that object ends.
pub fn parse_analysis_response(response_text: &str) -> Result<IngredientAnalysis, AiFailure> {
    let start = response_text.find('{').ok_or(AiFailure::MissingJson)?;

    let raw: RawAnalysis = serde_json::Deserializer::from_str(&response_text[start..])
        .into_iter::<RawAnalysis>()
        .next()
        .ok_or(AiFailure::MissingJson)?
        .map_err(|e| AiFailure::InvalidJson(e.to_string()))?;

    let label = raw.classification.unwrap_or_default();
    let classification = Classification::from_label(&label)
        .ok_or_else(|| AiFailure::InvalidClassification(label.clone()))?;

    Ok(IngredientAnalysis {
        classification,
        confidence: clamp_confidence(raw.confidence.as_ref()),
        reasoning: raw
            .reasoning
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| "Análisis completado".to_string()),
        confidence_explanation: raw.confidence_explanation.filter(|e| !e.trim().is_empty()),
    })
}

/// Missing or non-numeric confidence counts as 0; numbers are rounded and
/// clamped to 0..=100.
fn clamp_confidence(value: Option<&serde_json::Value>) -> u8 {
    let number = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => n.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedLLMClient, llm_replying_once, silent_llm};

    #[test]
    fn test_parse_ignores_surrounding_prose() {
        let text = "Claro, aquí está el análisis:\n```json\n{\"classification\": \"vegetarian\", \"confidence\": 92, \"reasoning\": \"Contiene leche\"}\n```\nEspero que ayude.";
        let analysis = parse_analysis_response(text).unwrap();
        assert_eq!(analysis.classification, Classification::Vegetarian);
        assert_eq!(analysis.confidence, 92);
        assert_eq!(analysis.reasoning, "Contiene leche");
        assert_eq!(analysis.confidence_explanation, None);
    }

    #[test]
    fn test_parse_stops_after_first_object() {
        let text = "Aquí está:\n{\"classification\": \"vegan\", \"confidence\": 90, \"reasoning\": \"r\"}\nNota: los aditivos {E330} son vegetales.";
        let analysis = parse_analysis_response(text).unwrap();
        assert_eq!(analysis.classification, Classification::Vegan);
        assert_eq!(analysis.confidence, 90);
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = parse_analysis_response(
            r#"{"classification": "fish", "confidence": 80, "reasoning": "x"}"#,
        )
        .unwrap_err();
        assert_eq!(err, AiFailure::InvalidClassification("fish".to_string()));
    }

    #[test]
    fn test_parse_without_json_fails() {
        assert_eq!(
            parse_analysis_response("I cannot help with that").unwrap_err(),
            AiFailure::MissingJson
        );
        assert!(matches!(
            parse_analysis_response("{not json}").unwrap_err(),
            AiFailure::InvalidJson(_)
        ));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let high = parse_analysis_response(
            r#"{"classification": "vegan", "confidence": 250, "reasoning": "r"}"#,
        )
        .unwrap();
        assert_eq!(high.confidence, 100);

        let low = parse_analysis_response(
            r#"{"classification": "vegan", "confidence": -4, "reasoning": "r"}"#,
        )
        .unwrap();
        assert_eq!(low.confidence, 0);

        let missing =
            parse_analysis_response(r#"{"classification": "omnivore", "reasoning": "r"}"#)
                .unwrap();
        assert_eq!(missing.confidence, 0);

        let text = parse_analysis_response(
            r#"{"classification": "omnivore", "confidence": "85%", "reasoning": "r"}"#,
        )
        .unwrap();
        assert_eq!(text.confidence, 85);
    }

    #[test]
    fn test_confidence_explanation_is_kept() {
        let analysis = parse_analysis_response(
            r#"{"classification": "vegan", "confidence": 75, "reasoning": "r", "confidenceExplanation": "Aromas de origen no especificado"}"#,
        )
        .unwrap();
        assert_eq!(
            analysis.confidence_explanation.as_deref(),
            Some("Aromas de origen no especificado")
        );
    }

    #[tokio::test]
    async fn test_empty_ingredients_skip_the_model() {
        let analysis = classify_with_ai(&silent_llm(), "  ").await;
        assert_eq!(analysis.classification, Classification::Unknown);
        assert_eq!(analysis.confidence, 0);
    }

    #[tokio::test]
    async fn test_invalid_label_becomes_unknown_verdict() {
        let llm = llm_replying_once(Ok(
            r#"{"classification": "fish", "confidence": 99, "reasoning": "r"}"#.to_string(),
        ));
        let analysis = classify_with_ai(&llm, "atún, aceite, sal").await;
        assert_eq!(analysis.classification, Classification::Unknown);
        assert_eq!(analysis.confidence, 0);
        assert!(analysis.reasoning.contains("Clasificación no válida"));
        assert!(analysis.confidence_explanation.is_some());
    }

    #[tokio::test]
    async fn test_rate_limit_is_reported_in_reasoning() {
        let llm = llm_replying_once(Err(CoreError::RateLimitExceeded));
        let analysis = classify_with_ai(&llm, "agua, azúcar").await;
        assert_eq!(analysis.classification, Classification::Unknown);
        assert!(analysis.reasoning.contains("Límite de solicitudes"));
    }

    #[tokio::test]
    async fn test_prompt_carries_ingredients_and_schema() {
        let llm = ScriptedLLMClient::new(vec![Ok(
            r#"{"classification": "vegan", "confidence": 100, "reasoning": "r"}"#.to_string(),
        )]);
        let analysis = classify_with_ai(&llm, "agua, azúcar").await;
        assert_eq!(analysis.classification, Classification::Vegan);
        assert_eq!(analysis.confidence, 100);

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.ends_with("agua, azúcar"));
        assert!(calls[0].with_schema);
    }
}
