//! Entity model lifecycle: absent, failed load, and successful load.
//!
//! The model is process-wide state, so the whole sequence lives in one test
//! function; this file is its own test binary and nothing else touches the
//! global here.

use std::io::Write;
use std::path::Path;

use seo_audit::entities::{extract_entities, init_entity_model, is_enabled, EntityModel};
use seo_audit::error_handling::ProcessingStats;

const LEXICON_JSON: &str = r#"{
    "organizations": ["Globex", "Acme Corp"],
    "locations": ["Lisbon"],
    "products": ["WidgetPro"]
}"#;

#[test]
fn entity_model_lifecycle() {
    let stats = ProcessingStats::new();

    // 1. No model configured: extraction is a no-op, not an error
    init_entity_model(None);
    assert!(!is_enabled());
    assert!(extract_entities("Globex ships WidgetPro", &stats).is_empty());

    // 2. Load failure (missing file): logged and skipped, still disabled
    init_entity_model(Some(Path::new("/nonexistent/lexicon.json")));
    assert!(!is_enabled());

    // 3. Malformed lexicon file: load error surfaces from from_path
    let mut bad = tempfile::NamedTempFile::new().expect("temp file");
    bad.write_all(b"{not json").expect("write");
    assert!(EntityModel::from_path(bad.path()).is_err());
    init_entity_model(Some(bad.path()));
    assert!(!is_enabled());

    // 4. Valid lexicon: capability comes up and extraction works
    let mut good = tempfile::NamedTempFile::new().expect("temp file");
    good.write_all(LEXICON_JSON.as_bytes()).expect("write");
    init_entity_model(Some(good.path()));
    assert!(is_enabled());

    let entities = extract_entities("Globex and Acme Corp are hiring in Lisbon.", &stats);
    assert_eq!(entities.len(), 3);
    assert!(entities.contains(&"Globex".to_string()));
    assert!(entities.contains(&"Acme Corp".to_string()));
    assert!(entities.contains(&"Lisbon".to_string()));
}
