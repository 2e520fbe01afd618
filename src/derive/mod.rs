pub mod breakdown;
pub mod dependency;
pub mod overlay;
pub mod vitals;
pub mod waterfall;

use rand::Rng;
use serde::Serialize;

pub use breakdown::PerformanceBreakdown;
pub use dependency::DependencyMatrix;
pub use overlay::PerformanceOverlay;
pub use vitals::CoreWebVitals;
pub use waterfall::NetworkWaterfall;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationKind {
    Vitals,
    Breakdown,
    Waterfall,
    Overlay,
    Dependencies,
}

/// Any dataset derived from a single performance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Visualization {
    Vitals(CoreWebVitals),
    Breakdown(PerformanceBreakdown),
    Waterfall(NetworkWaterfall),
    Overlay(PerformanceOverlay),
    Dependencies(DependencyMatrix),
}

impl Visualization {
    /// Only the vitals draw from `rng`; every other kind is a pure function of the score.
    pub fn derive<R: Rng>(kind: VisualizationKind, performance_score: f64, rng: &mut R) -> Self {
        match kind {
            VisualizationKind::Vitals => Self::Vitals(vitals::generate(performance_score, rng)),
            VisualizationKind::Breakdown => Self::Breakdown(breakdown::generate(performance_score)),
            VisualizationKind::Waterfall => Self::Waterfall(waterfall::generate(performance_score)),
            VisualizationKind::Overlay => Self::Overlay(overlay::generate(performance_score)),
            VisualizationKind::Dependencies => {
                Self::Dependencies(dependency::generate(performance_score))
            }
        }
    }

    pub fn kind(&self) -> VisualizationKind {
        match self {
            Self::Vitals(_) => VisualizationKind::Vitals,
            Self::Breakdown(_) => VisualizationKind::Breakdown,
            Self::Waterfall(_) => VisualizationKind::Waterfall,
            Self::Overlay(_) => VisualizationKind::Overlay,
            Self::Dependencies(_) => VisualizationKind::Dependencies,
        }
    }
}
