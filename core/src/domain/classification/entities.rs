use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Vegan,
    Vegetarian,
    Omnivore,
    Unknown,
}

impl Classification {
    /// Parses the lowercase wire name used by the language model and the API.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "vegan" => Some(Classification::Vegan),
            "vegetarian" => Some(Classification::Vegetarian),
            "omnivore" => Some(Classification::Omnivore),
            "unknown" => Some(Classification::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Vegan => "vegan",
            Classification::Vegetarian => "vegetarian",
            Classification::Omnivore => "omnivore",
            Classification::Unknown => "unknown",
        }
    }

    /// Name used in user-facing reasoning text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::Vegan => "vegano",
            Classification::Vegetarian => "vegetariano",
            Classification::Omnivore => "omnívoro",
            Classification::Unknown => "desconocido",
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        matches!(self, Classification::Vegan | Classification::Vegetarian)
    }

    pub fn is_vegan(&self) -> bool {
        matches!(self, Classification::Vegan)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    StructuredMetadata,
    Ai,
    Heuristic,
}

/// Final decision attached to a classified product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationVerdict {
    pub classification: Classification,
    pub confidence: u8,
    pub source: VerdictSource,
    pub reasoning: Option<String>,
    pub confidence_explanation: Option<String>,
}

/// Output of the structured-metadata stage. `source` is `None` when the
/// metadata did not settle the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataVerdict {
    pub classification: Classification,
    pub confidence: u8,
    pub source: Option<VerdictSource>,
    pub reasoning: String,
}

impl MetadataVerdict {
    pub fn conclusive(classification: Classification, reasoning: impl Into<String>) -> Self {
        Self {
            classification,
            confidence: 100,
            source: Some(VerdictSource::StructuredMetadata),
            reasoning: reasoning.into(),
        }
    }

    pub fn inconclusive(reasoning: impl Into<String>) -> Self {
        Self {
            classification: Classification::Unknown,
            confidence: 0,
            source: None,
            reasoning: reasoning.into(),
        }
    }

    pub fn is_conclusive(&self) -> bool {
        self.source.is_some()
    }

    pub fn into_verdict(self) -> Option<ClassificationVerdict> {
        let source = self.source?;
        Some(ClassificationVerdict {
            classification: self.classification,
            confidence: self.confidence,
            source,
            reasoning: Some(self.reasoning),
            confidence_explanation: None,
        })
    }
}

/// Result of asking the language model to classify an ingredient list.
/// A failed call is represented as `Unknown`/0 with the failure in `reasoning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    pub classification: Classification,
    pub confidence: u8,
    pub reasoning: String,
    pub confidence_explanation: Option<String>,
}

impl IngredientAnalysis {
    pub fn unknown(reasoning: impl Into<String>, confidence_explanation: impl Into<String>) -> Self {
        Self {
            classification: Classification::Unknown,
            confidence: 0,
            reasoning: reasoning.into(),
            confidence_explanation: Some(confidence_explanation.into()),
        }
    }
}

/// Keyword classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicVerdict {
    pub classification: Classification,
    pub confidence: u8,
    pub matched_term: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    NotNeeded,
    Translated(String),
    Failed { reason: String },
}

impl TranslationOutcome {
    /// Text to use downstream: the translation when there is one, the original otherwise.
    pub fn into_text(self, original: &str) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::NotNeeded | TranslationOutcome::Failed { .. } => {
                original.to_string()
            }
        }
    }
}
