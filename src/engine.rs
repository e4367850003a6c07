use crate::error::Error;
use crate::normalize::Normalizer;
use crate::pair::{PairKey, ScoredPair, Scores};
use crate::progress::ProgressReporter;
use crate::store::PairStore;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Drives the all-pairs comparison over a fixed list of files.
pub struct CompareEngine {
    files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct CompareOutcome {
    pub pairs: PairStore,
    /// Ordered pairs visited, self pairs included. Always equals `total_visits`.
    pub visited: u64,
    pub total_visits: u64,
    pub duration: Duration,
}

impl CompareEngine {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of ordered pairs the sweep visits: `n²`.
    pub fn total_visits(&self) -> u64 {
        let n = self.files.len() as u64;
        n * n
    }

    /// Compare every ordered pair of files:
    /// 1. Advance and report progress for each (source, destination)
    /// 2. Skip self pairs and pairs already scored in the other direction
    /// 3. Normalize both files and score them with all four metrics
    ///
    /// The first read failure aborts the sweep and nothing is returned.
    pub fn compare<N, R>(&self, normalizer: &N, reporter: &R) -> Result<CompareOutcome, Error>
    where
        N: Normalizer + ?Sized,
        R: ProgressReporter + ?Sized,
    {
        let total_visits = self.total_visits();
        info!(
            "Comparing {} files ({} ordered pairs)",
            self.files.len(),
            total_visits
        );

        let start = Instant::now();
        let mut store = PairStore::new();
        let mut visited: u64 = 0;

        reporter.on_compare_start(total_visits);

        for source in &self.files {
            for destination in &self.files {
                visited += 1;
                reporter.on_compare_progress(visited, total_visits);

                if source == destination {
                    continue;
                }

                let key = PairKey::new(source, destination);
                if store.contains(&key) {
                    trace!(
                        "Already scored {} <-> {}",
                        source.display(),
                        destination.display()
                    );
                    continue;
                }

                let scores = score_pair(normalizer, source, destination)?;
                if let Some(pair) = ScoredPair::new(source.clone(), destination.clone(), scores) {
                    store.insert(pair);
                }
            }
        }

        let duration = start.elapsed();
        debug!(
            "Compare completed in {:.2}s: {} scored pairs",
            duration.as_secs_f64(),
            store.len()
        );
        reporter.on_compare_complete(store.len(), duration.as_secs_f64());

        Ok(CompareOutcome {
            pairs: store,
            visited,
            total_visits,
            duration,
        })
    }
}

fn score_pair<N>(normalizer: &N, source: &Path, destination: &Path) -> Result<Scores, Error>
where
    N: Normalizer + ?Sized,
{
    let wrap = |cause: std::io::Error| Error::Compare {
        source_file: source.to_path_buf(),
        destination_file: destination.to_path_buf(),
        cause,
    };

    let source_text = normalizer.normalize(source).map_err(wrap)?;
    let destination_text = normalizer.normalize(destination).map_err(wrap)?;

    Ok(Scores::compute(&source_text, &destination_text))
}
