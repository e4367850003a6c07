use crate::pair::{PairKey, ScoredPair};
use ahash::AHashMap;
use std::collections::hash_map::Entry;

/// Scored pairs keyed by unordered file pair, kept in insertion order.
#[derive(Debug, Default)]
pub struct PairStore {
    index: AHashMap<PairKey, usize>,
    pairs: Vec<ScoredPair>,
}

impl PairStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &PairKey) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts `pair` unless its unordered pair is already stored. Returns
    /// whether the pair was added; an existing entry is never replaced.
    pub fn insert(&mut self, pair: ScoredPair) -> bool {
        match self.index.entry(pair.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(self.pairs.len());
                self.pairs.push(pair);
                true
            }
        }
    }

    pub fn get(&self, key: &PairKey) -> Option<&ScoredPair> {
        self.index.get(key).map(|&i| &self.pairs[i])
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredPair> {
        self.pairs.iter()
    }

    /// Consumes the store, returning pairs by descending composite score.
    /// Equal composites keep their insertion order.
    pub fn into_ranked(self) -> Vec<ScoredPair> {
        rank(self.pairs)
    }
}

/// Stable sort by descending `jaccard + jaro_winkler`.
pub fn rank(mut pairs: Vec<ScoredPair>) -> Vec<ScoredPair> {
    pairs.sort_by(|a, b| b.composite().total_cmp(&a.composite()));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::Scores;
    use std::path::{Path, PathBuf};

    fn pair(first: &str, second: &str, jaccard: f64, jaro_winkler: f64) -> ScoredPair {
        ScoredPair::new(
            PathBuf::from(first),
            PathBuf::from(second),
            Scores {
                jaccard,
                jaro_winkler,
                lcs_length: 0,
                fuzzy_score: 0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_insert_rejects_mirrored_pair() {
        let mut store = PairStore::new();
        assert!(store.insert(pair("/a", "/b", 0.2, 0.3)));
        assert!(!store.insert(pair("/b", "/a", 0.9, 0.9)));
        assert_eq!(store.len(), 1);

        let kept = store.get(&PairKey::new(Path::new("/b"), Path::new("/a"))).unwrap();
        assert_eq!(kept.first(), Path::new("/a"));
        assert_eq!(kept.scores().jaccard, 0.2);
    }

    #[test]
    fn test_contains_by_unordered_key() {
        let mut store = PairStore::new();
        store.insert(pair("/x", "/y", 0.0, 0.0));
        assert!(store.contains(&PairKey::new(Path::new("/y"), Path::new("/x"))));
        assert!(!store.contains(&PairKey::new(Path::new("/x"), Path::new("/z"))));
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let mut store = PairStore::new();
        store.insert(pair("/a", "/b", 0.4, 0.5));
        store.insert(pair("/a", "/c", 0.2, 0.3));
        store.insert(pair("/b", "/c", 0.5, 0.4));

        let ranked = store.into_ranked();
        let order: Vec<_> = ranked
            .iter()
            .map(|p| (p.first().to_path_buf(), p.second().to_path_buf()))
            .collect();
        assert_eq!(
            order,
            vec![
                (PathBuf::from("/a"), PathBuf::from("/b")),
                (PathBuf::from("/b"), PathBuf::from("/c")),
                (PathBuf::from("/a"), PathBuf::from("/c")),
            ]
        );
    }

    #[test]
    fn test_empty_store() {
        let store = PairStore::new();
        assert!(store.is_empty());
        assert!(store.into_ranked().is_empty());
    }
}
