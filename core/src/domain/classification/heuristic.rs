use crate::domain::classification::{
    entities::{Classification, HeuristicVerdict},
    lexicon::{NON_VEGETARIAN_TERMS, non_vegan_terms},
};

pub const OMNIVORE_CONFIDENCE: u8 = 90;
pub const VEGETARIAN_CONFIDENCE: u8 = 85;
/// No marker found is weak evidence, so this stays well below certainty.
pub const VEGAN_CONFIDENCE: u8 = 70;

/// Keyword classifier of last resort. Needs no collaborator and cannot fail.
pub fn classify_heuristically(text: &str) -> HeuristicVerdict {
    if text.trim().is_empty() {
        return HeuristicVerdict {
            classification: Classification::Unknown,
            confidence: 0,
            matched_term: None,
        };
    }

    let lower = text.to_lowercase();

    // Flesh markers are the strongest signal and end the search.
    if let Some(term) = find_term(&lower, NON_VEGETARIAN_TERMS.iter().copied()) {
        return HeuristicVerdict {
            classification: Classification::Omnivore,
            confidence: OMNIVORE_CONFIDENCE,
            matched_term: Some(term),
        };
    }

    if let Some(term) = find_term(&lower, non_vegan_terms()) {
        return HeuristicVerdict {
            classification: Classification::Vegetarian,
            confidence: VEGETARIAN_CONFIDENCE,
            matched_term: Some(term),
        };
    }

    HeuristicVerdict {
        classification: Classification::Vegan,
        confidence: VEGAN_CONFIDENCE,
        matched_term: None,
    }
}

fn find_term(
    haystack: &str,
    mut terms: impl Iterator<Item = &'static str>,
) -> Option<&'static str> {
    terms.find(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_unknown() {
        let verdict = classify_heuristically("");
        assert_eq!(verdict.classification, Classification::Unknown);
        assert_eq!(verdict.confidence, 0);

        let verdict = classify_heuristically("   ");
        assert_eq!(verdict.classification, Classification::Unknown);
    }

    #[test]
    fn test_non_vegetarian_term_wins_over_everything_else() {
        for text in [
            "agua, azúcar, gelatina",
            "Milk, honey, CHICKEN stock",
            "queso, huevo, atún, leche",
            "Water, sugar, beef extract",
        ] {
            let verdict = classify_heuristically(text);
            assert_eq!(verdict.classification, Classification::Omnivore, "{text}");
            assert_eq!(verdict.confidence, 90);
        }
    }

    #[test]
    fn test_dairy_egg_or_honey_is_vegetarian() {
        let verdict = classify_heuristically("Harina de trigo, LECHE en polvo, sal");
        assert_eq!(verdict.classification, Classification::Vegetarian);
        assert_eq!(verdict.confidence, 85);
        assert_eq!(verdict.matched_term, Some("leche"));
    }

    #[test]
    fn test_no_marker_is_low_confidence_vegan() {
        let verdict = classify_heuristically("agua, azúcar, harina de trigo, sal");
        assert_eq!(verdict.classification, Classification::Vegan);
        assert_eq!(verdict.confidence, 70);
        assert_eq!(verdict.matched_term, None);
    }

    #[test]
    fn test_confidence_never_exceeds_ninety() {
        for text in ["", "pollo", "miel", "arroz"] {
            assert!(classify_heuristically(text).confidence <= 90);
        }
    }
}
