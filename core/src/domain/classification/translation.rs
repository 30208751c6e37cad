use crate::domain::classification::{
    entities::TranslationOutcome, language::needs_translation, ports::LLMClient,
    prompts::build_translation_prompt,
};

/// Translates ingredient text into Spanish when the language detector asks for it.
///
/// Never fails: a failed or useless translation is reported as
/// [`TranslationOutcome::Failed`] and callers keep the original text.
pub async fn translate_ingredients<L: LLMClient>(llm: &L, ingredients: &str) -> TranslationOutcome {
    if !needs_translation(ingredients) {
        tracing::debug!("ingredient text needs no translation");
        return TranslationOutcome::NotNeeded;
    }

    tracing::debug!("translating ingredient text");

    let translated = match llm
        .generate_with_text(build_translation_prompt(ingredients), None)
        .await
    {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            tracing::warn!("ingredient translation failed, keeping original text: {}", e);
            return TranslationOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    if translated.is_empty() || translated == ingredients.trim() {
        tracing::warn!("translation came back empty or unchanged, keeping original text");
        return TranslationOutcome::Failed {
            reason: "translation was empty or identical to the original".to_string(),
        };
    }

    TranslationOutcome::Translated(translated)
}
