use mintex_core::{first_inline_text, meta_map};
use serde_json::{Map, Value};

/// Name of the document metadata entry holding filter settings.
pub const SETTINGS_KEY: &str = "mintex";

/// Language tag applied when a document carries no filter settings.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Document-level filter settings read from metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Default language for code nodes that do not name one.
    pub language: Option<String>,
}

impl Settings {
    /// Reads settings from document metadata.
    ///
    /// A document without a usable settings mapping falls back to the
    /// plain-text language. A settings mapping whose `language` entry is
    /// missing or not inline text leaves the language unset. Missing or
    /// malformed configuration never fails; partial settings must not block
    /// a conversion.
    pub fn from_meta(meta: &Map<String, Value>) -> Self {
        let Some(settings) = meta_map(meta, SETTINGS_KEY) else {
            return Self {
                language: Some(DEFAULT_LANGUAGE.to_string()),
            };
        };
        let language = settings
            .get("language")
            .and_then(first_inline_text)
            .map(str::to_string);
        Self { language }
    }
}
