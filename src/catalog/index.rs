//! Immutable lookup structures derived from the raw dataset.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::loader::RawDataset;

/// Total order used everywhere names are sorted: case-insensitive primary
/// comparison with a raw tiebreak, so strings that differ only by case
/// still order deterministically while display strings keep their casing.
pub fn name_order(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Bidirectional index over the catalog, built once at startup.
///
/// A written variant may appear under several phonetic keys; the key that is
/// later in the sorted key order wins. That ambiguity is accepted and kept
/// reproducible by always iterating keys in the same order.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    written_to_phonetic: HashMap<String, String>,
    sorted_written: Vec<String>,
    sorted_phonetics: Vec<String>,
}

impl NameIndex {
    /// Build the index. An empty dataset yields three empty collections.
    pub fn build(raw: &RawDataset) -> Self {
        let mut pairs: Vec<(&str, &[String])> = raw.entries().collect();
        pairs.sort_by(|a, b| name_order(a.0, b.0));

        let mut written_to_phonetic = HashMap::new();
        for (key, variants) in &pairs {
            for variant in *variants {
                written_to_phonetic.insert(variant.clone(), (*key).to_string());
            }
        }

        let mut sorted_written: Vec<String> = written_to_phonetic.keys().cloned().collect();
        sorted_written.sort_by(|a, b| name_order(a, b));
        let sorted_phonetics = pairs.iter().map(|(key, _)| (*key).to_string()).collect();

        Self {
            written_to_phonetic,
            sorted_written,
            sorted_phonetics,
        }
    }

    /// All written variants, deduplicated and sorted for display.
    pub fn sorted_written(&self) -> &[String] {
        &self.sorted_written
    }

    /// All phonetic keys, sorted with the same comparator.
    pub fn sorted_phonetics(&self) -> &[String] {
        &self.sorted_phonetics
    }

    /// Resolve a written variant to its phonetic key.
    pub fn phonetic_for(&self, written: &str) -> Option<&str> {
        self.written_to_phonetic.get(written).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(entries: &[(&str, &[&str])]) -> RawDataset {
        RawDataset::from_entries(entries.iter().map(|(key, variants)| {
            (
                (*key).to_string(),
                variants.iter().map(|v| (*v).to_string()).collect(),
            )
        }))
    }

    #[test]
    fn empty_dataset_builds_empty_index() {
        let index = NameIndex::build(&RawDataset::default());
        assert!(index.sorted_written().is_empty());
        assert!(index.sorted_phonetics().is_empty());
        assert_eq!(index.phonetic_for("anything"), None);
    }

    #[test]
    fn duplicate_variant_resolves_to_later_key() {
        let index = NameIndex::build(&dataset(&[
            ("k2", &["sam", "samuel"]),
            ("k1", &["sam"]),
        ]));
        // Keys iterate sorted, so "k2" overwrites "k1".
        assert_eq!(index.phonetic_for("sam"), Some("k2"));
        // Deduplicated union of variants.
        assert_eq!(index.sorted_written(), ["sam", "samuel"]);
    }

    #[test]
    fn duplicate_resolution_is_stable_across_rebuilds() {
        let data = dataset(&[("k1", &["sam"]), ("k2", &["sam"])]);
        let first = NameIndex::build(&data);
        for _ in 0..5 {
            let rebuilt = NameIndex::build(&data);
            assert_eq!(rebuilt.phonetic_for("sam"), first.phonetic_for("sam"));
        }
    }

    #[test]
    fn sorting_is_case_insensitive_but_preserves_casing() {
        let index = NameIndex::build(&dataset(&[
            ("b", &["Bea"]),
            ("a", &["anna"]),
            ("c", &["carl"]),
        ]));
        assert_eq!(index.sorted_written(), ["anna", "Bea", "carl"]);
    }

    #[test]
    fn name_order_breaks_case_ties_deterministically() {
        assert_eq!(name_order("anna", "anna"), Ordering::Equal);
        assert_ne!(name_order("Anna", "anna"), Ordering::Equal);
        assert_eq!(name_order("anna", "Bea"), Ordering::Less);
    }
}
