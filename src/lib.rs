//! Simulated PageSpeed Insights scoring: domain normalization, tiered score
//! generation with a persistent per-domain cache, and the display datasets
//! derived from a single performance score.

pub mod analyze;
pub mod config;
pub mod derive;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;
pub mod source;
pub mod types;
