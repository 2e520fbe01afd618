use crate::types::scoring::clamp_score;
use serde::Serialize;

const MIN_BASE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostResource {
    #[serde(rename = "JS")]
    Js,
    Images,
    #[serde(rename = "CSS")]
    Css,
    Fonts,
    Other,
}

impl CostResource {
    pub const ALL: [CostResource; 5] = [
        CostResource::Js,
        CostResource::Images,
        CostResource::Css,
        CostResource::Fonts,
        CostResource::Other,
    ];

    pub fn weight(self) -> f64 {
        match self {
            CostResource::Js => 0.35,
            CostResource::Images => 0.25,
            CostResource::Css => 0.15,
            CostResource::Fonts => 0.10,
            CostResource::Other => 0.15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CostResource::Js => "JS",
            CostResource::Images => "Images",
            CostResource::Css => "CSS",
            CostResource::Fonts => "Fonts",
            CostResource::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownShare {
    pub resource: CostResource,
    pub raw: f64,
    pub percent: u32,
    /// Width of this share in the stacked bar, relative to the rounded total.
    pub bar_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceBreakdown {
    pub base: f64,
    pub shares: Vec<BreakdownShare>,
}

impl PerformanceBreakdown {
    pub fn total(&self) -> u32 {
        self.shares.iter().map(|share| share.percent).sum()
    }

    pub fn share(&self, resource: CostResource) -> Option<&BreakdownShare> {
        self.shares.iter().find(|share| share.resource == resource)
    }
}

/// Worse scores push more of the cost into JS and images.
pub fn generate(performance_score: f64) -> PerformanceBreakdown {
    let base = (100.0 - clamp_score(performance_score)).max(MIN_BASE);
    let raw_shares = CostResource::ALL.map(|resource| (resource, base * resource.weight()));
    let total: u32 = raw_shares.iter().map(|(_, raw)| raw.round() as u32).sum();

    let shares = raw_shares
        .into_iter()
        .map(|(resource, raw)| {
            let percent = raw.round() as u32;
            let bar_width = if total == 0 {
                0.0
            } else {
                f64::from(percent) / f64::from(total) * 100.0
            };
            BreakdownShare {
                resource,
                raw,
                percent,
                bar_width,
            }
        })
        .collect();

    PerformanceBreakdown { base, shares }
}
