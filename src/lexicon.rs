use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ChatError, Result};

const DEFAULT_LEXICON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/scent_keywords.json"
));

/// Scent categories and their trigger keywords, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScentLexicon {
    categories: Vec<(String, Vec<String>)>,
}

impl ScentLexicon {
    pub fn new<C, K>(categories: impl IntoIterator<Item = (C, K)>) -> Result<Self>
    where
        C: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let categories: Vec<(String, Vec<String>)> = categories
            .into_iter()
            .map(|(name, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.into().to_lowercase())
                    .collect();
                (name.into(), keywords)
            })
            .collect();

        for (name, keywords) in &categories {
            if name.trim().is_empty() {
                return Err(ChatError::configuration("scent category with an empty name"));
            }
            if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                return Err(ChatError::configuration(format!(
                    "scent category '{name}' needs non-empty keywords"
                )));
            }
        }
        Ok(Self { categories })
    }

    /// Parses a JSON object of `category -> [keyword, ...]`, keeping key order.
    pub fn from_json(raw: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        let mut categories = Vec::with_capacity(object.len());
        for (name, value) in object {
            let keywords: Vec<String> = serde_json::from_value(value).map_err(|e| {
                ChatError::configuration(format!("scent category '{name}': {e}"))
            })?;
            categories.push((name, keywords));
        }
        Self::new(categories)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let lexicon = Self::from_json(&raw)?;
        log::info!(
            "Loaded {} scent categories from {:?}",
            lexicon.len(),
            path.as_ref()
        );
        Ok(lexicon)
    }

    /// Lexicon bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_LEXICON)
    }

    /// First category, in lexicon order, with a keyword inside `text`.
    pub fn detect(&self, text: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
