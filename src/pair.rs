use crate::metrics;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Canonical key for an unordered pair of files: the two paths in
/// lexicographic order, so `{A, B}` and `{B, A}` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: PathBuf,
    high: PathBuf,
}

impl PairKey {
    pub fn new(a: &Path, b: &Path) -> Self {
        if a <= b {
            Self {
                low: a.to_path_buf(),
                high: b.to_path_buf(),
            }
        } else {
            Self {
                low: b.to_path_buf(),
                high: a.to_path_buf(),
            }
        }
    }

    pub fn low(&self) -> &Path {
        &self.low
    }

    pub fn high(&self) -> &Path {
        &self.high
    }
}

/// The four similarity scores of one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub jaccard: f64,
    pub jaro_winkler: f64,
    pub lcs_length: usize,
    pub fuzzy_score: i64,
}

impl Scores {
    /// Scores normalized `source` content against `destination`. The fuzzy
    /// score treats `source` as the term and `destination` as the query.
    pub fn compute(source: &str, destination: &str) -> Self {
        Self {
            jaccard: metrics::jaccard(source, destination),
            jaro_winkler: metrics::jaro_winkler(source, destination),
            lcs_length: metrics::lcs_length(source, destination),
            fuzzy_score: metrics::fuzzy_score(source, destination),
        }
    }

    /// Ranking key: Jaccard plus Jaro-Winkler.
    pub fn composite(&self) -> f64 {
        self.jaccard + self.jaro_winkler
    }
}

/// A fully scored comparison between two distinct files.
///
/// Equality and hashing only look at the unordered file pair.
#[derive(Debug, Clone)]
pub struct ScoredPair {
    first: PathBuf,
    second: PathBuf,
    scores: Scores,
}

impl ScoredPair {
    /// Returns `None` when both paths name the same file.
    pub fn new(first: PathBuf, second: PathBuf, scores: Scores) -> Option<Self> {
        if first == second {
            return None;
        }
        Some(Self {
            first,
            second,
            scores,
        })
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.first, &self.second)
    }

    pub fn first(&self) -> &Path {
        &self.first
    }

    pub fn second(&self) -> &Path {
        &self.second
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn composite(&self) -> f64 {
        self.scores.composite()
    }

    fn ordered_paths(&self) -> (&Path, &Path) {
        if self.first <= self.second {
            (self.first.as_path(), self.second.as_path())
        } else {
            (self.second.as_path(), self.first.as_path())
        }
    }
}

impl PartialEq for ScoredPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered_paths() == other.ordered_paths()
    }
}

impl Eq for ScoredPair {}

impl Hash for ScoredPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_paths().hash(state);
    }
}
