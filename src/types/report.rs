use crate::derive::{
    CoreWebVitals, DependencyMatrix, NetworkWaterfall, PerformanceBreakdown, PerformanceOverlay,
};
use crate::source::SourceKind;
use crate::types::scoring::{Score, ScoreBundle, ScoreRating};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub label: &'static str,
    pub score: Score,
    pub rating: ScoreRating,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub domain: Option<String>,
    pub source: SourceKind,
    pub mocked: bool,
    pub generated_at: String,
    pub scores: ScoreBundle,
    pub categories: Vec<CategoryScore>,
    pub vitals: CoreWebVitals,
    pub breakdown: PerformanceBreakdown,
    pub waterfall: NetworkWaterfall,
    pub overlay: PerformanceOverlay,
    pub dependencies: DependencyMatrix,
    pub opportunities: Vec<String>,
    pub diagnostics: Vec<String>,
}
