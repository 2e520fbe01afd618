use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

/// The four Lighthouse category scores for one site, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
    pub performance: Score,
    pub accessibility: Score,
    pub best_practices: Score,
    pub seo: Score,
}

impl ScoreBundle {
    pub fn new(performance: Score, accessibility: Score, best_practices: Score, seo: Score) -> Self {
        Self {
            performance,
            accessibility,
            best_practices,
            seo,
        }
    }

    pub fn is_in_range(&self) -> bool {
        self.categories()
            .iter()
            .all(|(_, score)| *score <= MAX_SCORE)
    }

    pub fn categories(&self) -> [(&'static str, Score); 4] {
        [
            ("Performance", self.performance),
            ("Accessibility", self.accessibility),
            ("Best Practices", self.best_practices),
            ("SEO", self.seo),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    TopSite,
    Poor,
    Average,
    Good,
}

/// Inclusive integer ranges for each category of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRanges {
    pub performance: (Score, Score),
    pub accessibility: (Score, Score),
    pub best_practices: (Score, Score),
    pub seo: (Score, Score),
}

impl Tier {
    pub fn ranges(self) -> TierRanges {
        match self {
            Tier::TopSite => TierRanges {
                performance: (83, 100),
                accessibility: (85, 100),
                best_practices: (88, 100),
                seo: (85, 100),
            },
            Tier::Poor => TierRanges {
                performance: (40, 60),
                accessibility: (45, 65),
                best_practices: (45, 65),
                seo: (45, 70),
            },
            Tier::Average => TierRanges {
                performance: (60, 80),
                accessibility: (60, 85),
                best_practices: (60, 85),
                seo: (60, 85),
            },
            Tier::Good => TierRanges {
                performance: (80, 90),
                accessibility: (75, 90),
                best_practices: (75, 90),
                seo: (75, 90),
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::TopSite => "top-site",
            Tier::Poor => "poor",
            Tier::Average => "average",
            Tier::Good => "good",
        };
        write!(f, "{label}")
    }
}

/// Colour band a score gauge is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRating {
    Pass,
    Average,
    Fail,
}

impl ScoreRating {
    pub fn of(score: Score) -> Self {
        if score >= 90 {
            ScoreRating::Pass
        } else if score >= 50 {
            ScoreRating::Average
        } else {
            ScoreRating::Fail
        }
    }
}

/// Clamp an arbitrary performance score into `0.0..=100.0`; NaN maps to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, f64::from(MAX_SCORE))
    }
}
