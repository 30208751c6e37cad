use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::product::entities::{DietSignals, IngredientTexts, RawProductRecord, ScalarFlag};

const LOCALIZED_INGREDIENTS_PREFIX: &str = "ingredients_text_";

/// Envelope of `GET /api/v0/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
pub struct OpenFoodFactsResponse {
    #[serde(default)]
    pub status: i64,
    pub product: Option<Map<String, Value>>,
}

impl OpenFoodFactsResponse {
    /// `None` when the database reports the barcode as unknown.
    pub fn into_record(self, barcode: &str) -> Option<RawProductRecord> {
        if self.status != 1 {
            return None;
        }
        self.product.map(|product| map_product(&product, barcode))
    }
}

fn text(product: &Map<String, Value>, key: &str) -> Option<String> {
    product
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn scalar_flag(product: &Map<String, Value>, key: &str) -> Option<ScalarFlag> {
    match product.get(key)? {
        Value::String(s) => Some(ScalarFlag::Text(s.clone())),
        Value::Number(n) => n.as_i64().map(ScalarFlag::Number),
        Value::Bool(b) => Some(ScalarFlag::Bool(*b)),
        _ => None,
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

fn ingredient_texts(product: &Map<String, Value>) -> IngredientTexts {
    let by_locale = product
        .iter()
        .filter_map(|(key, value)| {
            let locale = key.strip_prefix(LOCALIZED_INGREDIENTS_PREFIX)?;
            // Skip sibling fields such as `ingredients_text_with_allergens`.
            if locale.is_empty() || locale.len() > 3 || !locale.chars().all(|c| c.is_ascii_lowercase()) {
                return None;
            }
            let text = value.as_str()?.trim();
            (!text.is_empty()).then(|| (locale.to_string(), text.to_string()))
        })
        .collect();

    IngredientTexts {
        default: text(product, "ingredients_text"),
        by_locale,
    }
}

fn diet_signals(product: &Map<String, Value>) -> DietSignals {
    let tags = product
        .get("ingredients_analysis_tags")
        .and_then(string_list);

    let status_map = product
        .get("ingredients_analysis")
        .and_then(Value::as_object)
        .map(|analysis| {
            analysis
                .iter()
                .filter_map(|(key, value)| Some((key.clone(), string_list(value)?)))
                .collect::<BTreeMap<_, _>>()
        });

    DietSignals {
        tags,
        vegan: scalar_flag(product, "vegan"),
        vegetarian: scalar_flag(product, "vegetarian"),
        status_map,
    }
}

pub fn map_product(product: &Map<String, Value>, barcode: &str) -> RawProductRecord {
    let code = text(product, "code").unwrap_or_else(|| barcode.to_string());

    RawProductRecord {
        id: text(product, "_id").unwrap_or_else(|| code.clone()),
        barcode: code,
        name: text(product, "product_name"),
        brand: text(product, "brands"),
        categories: text(product, "categories"),
        allergens: text(product, "allergens"),
        nutrition_grade: text(product, "nutrition_grades"),
        image_url: text(product, "image_url"),
        image_front_url: text(product, "image_front_url"),
        ingredients: ingredient_texts(product),
        diet_signals: diet_signals(product),
    }
}
