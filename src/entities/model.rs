//! Entity lexicon model types and loading.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::InitializationError;

/// Semantic category of a lexicon term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    /// Company, institution, or brand name
    Organization,
    /// Geographic name
    Location,
    /// Product or service name
    Product,
}

/// On-disk lexicon format: three lists of labeled terms.
#[derive(Debug, Deserialize)]
pub struct EntityLexicon {
    /// Organization names
    #[serde(default)]
    pub organizations: Vec<String>,
    /// Location names
    #[serde(default)]
    pub locations: Vec<String>,
    /// Product names
    #[serde(default)]
    pub products: Vec<String>,
}

/// In-memory entity model: lexicon terms indexed for matching.
///
/// Loaded once at startup and never mutated afterwards; shared across
/// requests behind an `Arc`.
pub struct EntityModel {
    /// Lowercased term -> label. Multiword terms are stored space-joined.
    terms: HashMap<String, EntityLabel>,
    /// Longest term length in words, bounds the n-gram scan.
    max_term_words: usize,
}

impl EntityModel {
    /// Builds a model from a deserialized lexicon.
    ///
    /// Terms are lowercased and whitespace-normalized for matching; empty
    /// terms are dropped.
    pub fn from_lexicon(lexicon: EntityLexicon) -> Self {
        let mut terms = HashMap::new();
        let mut max_term_words = 1;

        let mut insert_all = |list: &[String], label: EntityLabel| {
            for term in list {
                let normalized = term.split_whitespace().collect::<Vec<_>>().join(" ");
                if normalized.is_empty() {
                    continue;
                }
                max_term_words = max_term_words.max(normalized.split(' ').count());
                terms.insert(normalized.to_lowercase(), label);
            }
        };

        insert_all(&lexicon.organizations, EntityLabel::Organization);
        insert_all(&lexicon.locations, EntityLabel::Location);
        insert_all(&lexicon.products, EntityLabel::Product);

        EntityModel {
            terms,
            max_term_words,
        }
    }

    /// Loads a model from a JSON lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::EntityLexiconError`] if the file cannot
    /// be read or is not valid lexicon JSON.
    pub fn from_path(path: &Path) -> Result<Self, InitializationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::EntityLexiconError(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?;
        let lexicon: EntityLexicon = serde_json::from_str(&raw).map_err(|e| {
            InitializationError::EntityLexiconError(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_lexicon(lexicon))
    }

    /// Looks up a lowercased candidate span.
    pub fn lookup(&self, candidate: &str) -> Option<EntityLabel> {
        self.terms.get(candidate).copied()
    }

    /// Number of terms in the model.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the model holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Longest term length in words.
    pub fn max_term_words(&self) -> usize {
        self.max_term_words
    }
}
