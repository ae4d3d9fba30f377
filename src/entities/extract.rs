//! Entity extraction over visible page text.

use std::collections::HashSet;

use crate::config::{ENTITY_TEXT_LIMIT_CHARS, MAX_ENTITIES};

use super::model::EntityModel;

/// Extracts up to three unique entity names from page text using a model.
///
/// Operates on the first [`ENTITY_TEXT_LIMIT_CHARS`] characters only. The
/// text is tokenized on whitespace (with surrounding punctuation stripped)
/// and word n-grams up to the model's longest term are matched against the
/// lexicon, longest first. Matches are deduplicated case-insensitively and
/// truncated to [`MAX_ENTITIES`]; the order of the result is an artifact of
/// the scan and carries no meaning.
pub fn extract_with_model(model: &EntityModel, text: &str) -> Vec<String> {
    let bounded: String = text.chars().take(ENTITY_TEXT_LIMIT_CHARS).collect();
    let tokens: Vec<&str> = bounded
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut entities: Vec<String> = Vec::new();

    // Longest n-grams first so multiword names win over their fragments
    for n in (1..=model.max_term_words()).rev() {
        if n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            let candidate = window.join(" ");
            let key = candidate.to_lowercase();
            if model.lookup(&key).is_none() || !seen.insert(key) {
                continue;
            }
            entities.push(candidate);
            if entities.len() >= MAX_ENTITIES {
                return entities;
            }
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::model::EntityLexicon;

    fn model() -> EntityModel {
        EntityModel::from_lexicon(EntityLexicon {
            organizations: vec!["Acme Corp".to_string(), "Globex".to_string()],
            locations: vec!["Lisbon".to_string(), "New York".to_string()],
            products: vec!["WidgetPro".to_string()],
        })
    }

    #[test]
    fn test_extract_matches_terms_case_insensitively() {
        let entities = extract_with_model(&model(), "We compared GLOBEX against widgetpro.");
        assert_eq!(entities.len(), 2);
        assert!(entities.iter().any(|e| e.eq_ignore_ascii_case("globex")));
        assert!(entities.iter().any(|e| e.eq_ignore_ascii_case("widgetpro")));
    }

    #[test]
    fn test_extract_multiword_terms() {
        let entities = extract_with_model(&model(), "Acme Corp opened an office in New York.");
        assert!(entities.contains(&"Acme Corp".to_string()));
        assert!(entities.contains(&"New York".to_string()));
    }

    #[test]
    fn test_extract_dedupes_and_truncates_to_three() {
        let text = "Globex, Globex, Lisbon, New York, WidgetPro, Acme Corp";
        let entities = extract_with_model(&model(), text);
        assert_eq!(entities.len(), 3);
        let lower: Vec<String> = entities.iter().map(|e| e.to_lowercase()).collect();
        let unique: std::collections::HashSet<_> = lower.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_extract_ignores_text_past_limit() {
        let padding = "filler ".repeat(600); // well past 3000 chars
        let text = format!("{padding}Globex");
        let entities = extract_with_model(&model(), &text);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_extract_strips_punctuation() {
        let entities = extract_with_model(&model(), "Headquartered in Lisbon, since 1999.");
        assert_eq!(entities, vec!["Lisbon".to_string()]);
    }

    #[test]
    fn test_extract_no_matches() {
        let entities = extract_with_model(&model(), "nothing of note here");
        assert!(entities.is_empty());
    }
}
