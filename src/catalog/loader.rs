//! Dataset loader for the name catalog document.
//!
//! The catalog is a single JSON object mapping each phonetic key (the stem
//! of its audio resource) to the written variants displayed for it. The
//! document is read once at startup and never mutated afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Demo catalog bundled with the binary, used when no dataset path is
/// configured.
const EMBEDDED_DATASET: &str = include_str!("../../assets/names.json");

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("Failed to read dataset file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Dataset contains a blank phonetic key")]
    BlankKey,
}

/// Validated catalog input: phonetic key → written variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawDataset {
    entries: BTreeMap<String, Vec<String>>,
}

impl RawDataset {
    /// Build a dataset directly from key/variant pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate keys with their written variants.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, variants)| (key.as_str(), variants.as_slice()))
    }
}

/// Load and validate a dataset document from disk.
pub fn load_from_path(path: &Path) -> Result<RawDataset, DatasetLoadError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parse the catalog bundled into the binary.
pub fn load_embedded() -> Result<RawDataset, DatasetLoadError> {
    parse(EMBEDDED_DATASET)
}

fn parse(text: &str) -> Result<RawDataset, DatasetLoadError> {
    let dataset: RawDataset = serde_json::from_str(text)?;
    if dataset.entries.keys().any(|key| key.trim().is_empty()) {
        return Err(DatasetLoadError::BlankKey);
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_to_variants_document() {
        let dataset = parse(r#"{"mia": ["mia", "miah"], "noah": ["noah"]}"#).unwrap();
        assert_eq!(dataset.len(), 2);
        let variants: Vec<_> = dataset
            .entries()
            .find(|(key, _)| *key == "mia")
            .map(|(_, variants)| variants.to_vec())
            .unwrap();
        assert_eq!(variants, vec!["mia".to_string(), "miah".to_string()]);
    }

    #[test]
    fn empty_document_is_not_an_error() {
        let dataset = parse("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            parse(r#"{" ": ["x"]}"#),
            Err(DatasetLoadError::BlankKey)
        ));
    }

    #[test]
    fn embedded_dataset_parses() {
        let dataset = load_embedded().unwrap();
        assert!(!dataset.is_empty());
    }
}
