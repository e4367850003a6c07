pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod pair;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod store;

pub use crate::config::AppConfig;
pub use engine::{CompareEngine, CompareOutcome};
pub use error::Error;
pub use normalize::{FileNormalizer, Normalizer};
pub use pair::{PairKey, ScoredPair, Scores};
pub use progress::{ProgressReporter, SilentReporter};
pub use report::ResultTable;
pub use store::PairStore;
