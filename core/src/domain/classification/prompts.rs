use serde_json::json;

/// Instruction prefix for ingredient analysis; the ingredient list is appended.
pub const ANALYSIS_PROMPT: &str = r#"Eres un experto en análisis de ingredientes alimentarios. Determina si un producto es vegano, vegetariano u omnívoro a partir de su lista de ingredientes.

Responde SIEMPRE en español, sea cual sea el idioma de los ingredientes.

Definiciones:
- vegan: ningún ingrediente de origen animal (carne, pescado, lácteos, huevos, miel, gelatina, etc.)
- vegetarian: sin carne ni pescado, pero puede contener lácteos, huevos o miel
- omnivore: contiene carne, pescado o derivados de estos

Si tu confianza es menor que 100, rellena "confidenceExplanation" con el motivo concreto de la duda: ingredientes ambiguos, origen no especificado o términos técnicos con varias interpretaciones.

Responde ÚNICAMENTE con un objeto JSON con esta estructura:
{
  "classification": "vegan|vegetarian|omnivore|unknown",
  "confidence": número entre 0 y 100,
  "reasoning": "explicación breve en español",
  "confidenceExplanation": "por qué la confianza no es 100, si aplica"
}

Ingredientes:
"#;

/// Instruction prefix for translating an ingredient list into Spanish.
pub const TRANSLATION_PROMPT: &str = r#"Eres un traductor especializado en ingredientes alimentarios. Traduce al español la siguiente lista de ingredientes.

Instrucciones:
- Traduce TODO al español; no dejes ningún término en otro idioma
- Conserva la puntuación y la estructura originales (comas, paréntesis, puntos, códigos E)
- Usa el nombre español más común para los ingredientes técnicos

Ejemplos:
- "Water, sugar, wheat flour" → "Agua, azúcar, harina de trigo"
- "E330 (citric acid)" → "E330 (ácido cítrico)"

Responde ÚNICAMENTE con la traducción, sin explicaciones.

Lista de ingredientes:
"#;

pub fn build_analysis_prompt(ingredients: &str) -> String {
    format!("{ANALYSIS_PROMPT}{ingredients}")
}

pub fn build_translation_prompt(ingredients: &str) -> String {
    format!("{TRANSLATION_PROMPT}{ingredients}")
}

/// Returns the JSON schema for ingredient analysis LLM responses
pub fn get_ingredient_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "classification": {
                "type": "string",
                "enum": ["vegan", "vegetarian", "omnivore", "unknown"]
            },
            "confidence": { "type": "integer" },
            "reasoning": { "type": "string" },
            "confidenceExplanation": { "type": "string" }
        },
        "required": ["classification", "confidence", "reasoning"]
    })
}
