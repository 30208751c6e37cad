use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    classification::entities::{Classification, ClassificationVerdict, VerdictSource},
    common::generate_timestamp,
};

pub const UNNAMED_PRODUCT: &str = "Producto sin nombre";

/// Product data as returned by the external food database. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawProductRecord {
    pub id: String,
    pub barcode: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub categories: Option<String>,
    pub allergens: Option<String>,
    pub nutrition_grade: Option<String>,
    pub image_url: Option<String>,
    pub image_front_url: Option<String>,
    pub ingredients: IngredientTexts,
    pub diet_signals: DietSignals,
}

/// Ingredient lists keyed by locale, plus the locale-less default list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientTexts {
    pub default: Option<String>,
    pub by_locale: BTreeMap<String, String>,
}

impl IngredientTexts {
    /// Text for `locale` when present and non-blank, else the default text, else empty.
    pub fn preferred(&self, locale: &str) -> String {
        self.by_locale
            .get(locale)
            .filter(|text| !text.trim().is_empty())
            .or(self.default.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// Vegan/vegetarian signals published by the product database. The three
/// shapes encode the same facts and are consulted in a fixed priority order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DietSignals {
    /// Namespaced tokens such as `en:vegan` or `en:non-vegetarian`.
    pub tags: Option<Vec<String>>,
    pub vegan: Option<ScalarFlag>,
    pub vegetarian: Option<ScalarFlag>,
    /// Token → list of `yes` / `no` / `unknown`.
    pub status_map: Option<BTreeMap<String, Vec<String>>>,
}

/// A boolean-like field value: `"1"`, `"yes"`, `1`, `true` and their negations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarFlag {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl ScalarFlag {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarFlag::Text(text) => match text.trim().to_lowercase().as_str() {
                "1" | "yes" | "true" => Some(true),
                "0" | "no" | "false" => Some(false),
                _ => None,
            },
            ScalarFlag::Number(1) => Some(true),
            ScalarFlag::Number(0) => Some(false),
            ScalarFlag::Number(_) => None,
            ScalarFlag::Bool(value) => Some(*value),
        }
    }
}

/// A product with its final verdict, as stored in the scan history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedProduct {
    pub id: Uuid,
    pub product_id: String,
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub categories: String,
    /// The text actually used for classification, after any translation.
    pub ingredients_text: String,
    pub allergens: String,
    pub nutrition_grade: String,
    pub image_url: String,
    pub image_front_url: String,
    pub classification: Classification,
    pub confidence: u8,
    pub source: VerdictSource,
    pub reasoning: Option<String>,
    pub confidence_explanation: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub scanned_at: DateTime<Utc>,
}

impl ClassifiedProduct {
    pub fn new(
        record: RawProductRecord,
        ingredients_text: String,
        verdict: ClassificationVerdict,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            product_id: record.id,
            barcode: record.barcode,
            name: record
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
            brand: record.brand.unwrap_or_default(),
            categories: record.categories.unwrap_or_default(),
            ingredients_text,
            allergens: record.allergens.unwrap_or_default(),
            nutrition_grade: record.nutrition_grade.unwrap_or_default(),
            image_url: record.image_url.unwrap_or_default(),
            image_front_url: record.image_front_url.unwrap_or_default(),
            classification: verdict.classification,
            confidence: verdict.confidence,
            source: verdict.source,
            reasoning: verdict.reasoning,
            confidence_explanation: verdict.confidence_explanation,
            is_vegetarian: verdict.classification.is_vegetarian(),
            is_vegan: verdict.classification.is_vegan(),
            scanned_at: now,
        }
    }

    pub fn verdict(&self) -> ClassificationVerdict {
        ClassificationVerdict {
            classification: self.classification,
            confidence: self.confidence,
            source: self.source,
            reasoning: self.reasoning.clone(),
            confidence_explanation: self.confidence_explanation.clone(),
        }
    }
}
