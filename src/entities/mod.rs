//! Named-entity extraction from page text.
//!
//! The "language model" is an optional process-wide capability: a JSON
//! lexicon of organization, location, and product names loaded once at
//! startup. When loading fails (or no lexicon is configured) the capability
//! stays absent for the lifetime of the process and extraction is a no-op.
//! That is a degraded-functionality path, never an error.

mod extract;
mod model;

pub use extract::extract_with_model;
pub use model::{EntityLabel, EntityLexicon, EntityModel};

use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};

use log::{info, warn};

use crate::error_handling::{InfoType, ProcessingStats};

/// Global entity model, populated once at startup and read-only afterwards.
static ENTITY_MODEL: LazyLock<RwLock<Option<Arc<EntityModel>>>> =
    LazyLock::new(|| RwLock::new(None));

/// Initializes the global entity model from an optional lexicon path.
///
/// Best-effort: a missing path leaves the capability disabled, and a load
/// failure is logged as a warning and likewise leaves it disabled. The
/// process never fails to start over the lexicon.
///
/// # Arguments
///
/// * `path` - Optional path to a JSON lexicon file
pub fn init_entity_model(path: Option<&Path>) {
    let Some(path) = path else {
        info!("No entity lexicon configured; entity extraction disabled");
        return;
    };

    match EntityModel::from_path(path) {
        Ok(model) => {
            info!(
                "Loaded entity lexicon from {} ({} terms)",
                path.display(),
                model.len()
            );
            if let Ok(mut slot) = ENTITY_MODEL.write() {
                *slot = Some(Arc::new(model));
            }
        }
        Err(e) => {
            warn!("Failed to load entity lexicon: {e}. Continuing without entity extraction.");
        }
    }
}

/// Returns whether an entity model is loaded.
pub fn is_enabled() -> bool {
    ENTITY_MODEL
        .read()
        .map(|slot| slot.is_some())
        .unwrap_or(false)
}

/// Extracts up to three unique entity names from page text.
///
/// Uses the process-wide model when one is loaded; otherwise returns an
/// empty list (info counted) without touching the text.
///
/// # Arguments
///
/// * `text` - Visible page text (this function applies the length bound)
/// * `stats` - Processing statistics tracker
pub fn extract_entities(text: &str, stats: &ProcessingStats) -> Vec<String> {
    let model = match ENTITY_MODEL.read() {
        Ok(slot) => slot.clone(),
        Err(_) => None,
    };

    match model {
        Some(model) => extract_with_model(&model, text),
        None => {
            stats.increment_info(InfoType::EntityModelUnavailable);
            Vec::new()
        }
    }
}
