pub mod domain;
pub mod generator;
pub mod store;

pub use domain::{normalize, normalize_host, normalize_web, DomainKey};
pub use generator::TierClassifier;
pub use store::{FileStore, KeyValueStore, MemoryStore, ScoreEngine};
