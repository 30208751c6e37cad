use crate::domain::classification::lexicon::TRANSLATION_MARKERS;

/// Number of marker words found in `text` after case folding.
pub fn count_translation_markers(text: &str) -> usize {
    let lower = text.to_lowercase();
    TRANSLATION_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count()
}

/// Whether the ingredient text should be translated before analysis.
///
/// One marker is enough: mixed-language lists are translated rather than
/// risking a misread foreign ingredient.
pub fn needs_translation(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    count_translation_markers(text) >= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_needs_no_translation() {
        assert!(!needs_translation(""));
        assert!(!needs_translation("  \n\t"));
    }

    #[test]
    fn test_english_list_needs_translation() {
        assert!(needs_translation("Water, milk, sugar"));
        assert!(needs_translation("E330 (CITRIC ACID), Natural Flavour"));
    }

    #[test]
    fn test_single_marker_in_spanish_list_triggers() {
        assert!(needs_translation("agua, azúcar, cacao, vanilla"));
    }

    #[test]
    fn test_spanish_list_without_markers() {
        assert!(!needs_translation("agua, azúcar, cacao, sal"));
    }

    #[test]
    fn test_marker_count() {
        assert_eq!(count_translation_markers("agua, sal"), 0);
        assert!(count_translation_markers("Water, milk powder, sugar") >= 4);
    }
}
