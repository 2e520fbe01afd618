use crate::types::scoring::clamp_score;
use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VitalMetric {
    Lcp,
    Cls,
    Inp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalStatus {
    Good,
    NeedsImprovement,
    Poor,
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VitalStatus::Good => "Good",
            VitalStatus::NeedsImprovement => "Needs Improvement",
            VitalStatus::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Upper bounds (inclusive) for the good and needs-improvement bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub good: f64,
    pub needs_improvement: f64,
}

/// One value range to draw from, with the decimals it is rounded to.
#[derive(Debug, Clone, Copy)]
struct DrawRange {
    min: f64,
    max: f64,
    decimals: i32,
}

impl VitalMetric {
    pub const ALL: [VitalMetric; 3] = [VitalMetric::Lcp, VitalMetric::Cls, VitalMetric::Inp];

    pub fn thresholds(self) -> Thresholds {
        match self {
            VitalMetric::Lcp => Thresholds {
                good: 2.5,
                needs_improvement: 4.0,
            },
            VitalMetric::Cls => Thresholds {
                good: 0.1,
                needs_improvement: 0.25,
            },
            VitalMetric::Inp => Thresholds {
                good: 200.0,
                needs_improvement: 500.0,
            },
        }
    }

    pub fn status(self, value: f64) -> VitalStatus {
        let thresholds = self.thresholds();
        if value <= thresholds.good {
            VitalStatus::Good
        } else if value <= thresholds.needs_improvement {
            VitalStatus::NeedsImprovement
        } else {
            VitalStatus::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VitalMetric::Lcp => "Largest Contentful Paint (LCP)",
            VitalMetric::Cls => "Cumulative Layout Shift (CLS)",
            VitalMetric::Inp => "Interaction to Next Paint (INP)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalMetric::Lcp => "s",
            VitalMetric::Cls => "",
            VitalMetric::Inp => "ms",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VitalMetric::Lcp => {
                "Measures loading performance. LCP should occur within 2.5 seconds for a good user experience."
            }
            VitalMetric::Cls => {
                "Measures visual stability. Lower values mean fewer unexpected layout shifts."
            }
            VitalMetric::Inp => {
                "Measures responsiveness. Lower INP means faster reaction to user interactions."
            }
        }
    }

    fn draw_range(self, band: VitalStatus) -> DrawRange {
        let (min, max) = match (self, band) {
            (VitalMetric::Lcp, VitalStatus::Good) => (1.8, 2.5),
            (VitalMetric::Lcp, VitalStatus::NeedsImprovement) => (2.6, 4.0),
            (VitalMetric::Lcp, VitalStatus::Poor) => (4.1, 6.0),
            (VitalMetric::Cls, VitalStatus::Good) => (0.01, 0.1),
            (VitalMetric::Cls, VitalStatus::NeedsImprovement) => (0.1, 0.25),
            (VitalMetric::Cls, VitalStatus::Poor) => (0.25, 0.4),
            (VitalMetric::Inp, VitalStatus::Good) => (120.0, 200.0),
            (VitalMetric::Inp, VitalStatus::NeedsImprovement) => (200.0, 500.0),
            (VitalMetric::Inp, VitalStatus::Poor) => (500.0, 900.0),
        };
        let decimals = match self {
            VitalMetric::Lcp => 2,
            VitalMetric::Cls => 3,
            VitalMetric::Inp => 0,
        };
        DrawRange { min, max, decimals }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalReading {
    pub metric: VitalMetric,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub status: VitalStatus,
    pub description: &'static str,
}

impl VitalReading {
    pub fn new(metric: VitalMetric, value: f64) -> Self {
        Self {
            metric,
            label: metric.label(),
            value,
            unit: metric.unit(),
            status: metric.status(value),
            description: metric.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreWebVitals {
    pub lcp: VitalReading,
    pub cls: VitalReading,
    pub inp: VitalReading,
}

impl CoreWebVitals {
    pub fn readings(&self) -> [&VitalReading; 3] {
        [&self.lcp, &self.cls, &self.inp]
    }
}

/// Band the generated values are drawn from for a given performance score.
pub fn generation_band(performance_score: f64) -> VitalStatus {
    let score = clamp_score(performance_score);
    if score >= 83.0 {
        VitalStatus::Good
    } else if score >= 60.0 {
        VitalStatus::NeedsImprovement
    } else {
        VitalStatus::Poor
    }
}

pub fn generate<R: Rng>(performance_score: f64, rng: &mut R) -> CoreWebVitals {
    let band = generation_band(performance_score);
    let mut reading = |metric: VitalMetric| {
        let range = metric.draw_range(band);
        VitalReading::new(metric, round_to(rng.gen_range(range.min..range.max), range.decimals))
    };
    CoreWebVitals {
        lcp: reading(VitalMetric::Lcp),
        cls: reading(VitalMetric::Cls),
        inp: reading(VitalMetric::Inp),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn threshold_edges_classify_inclusively() {
        assert_eq!(VitalMetric::Lcp.status(2.5), VitalStatus::Good);
        assert_eq!(VitalMetric::Lcp.status(2.51), VitalStatus::NeedsImprovement);
        assert_eq!(VitalMetric::Lcp.status(4.0), VitalStatus::NeedsImprovement);
        assert_eq!(VitalMetric::Lcp.status(4.01), VitalStatus::Poor);
        assert_eq!(VitalMetric::Cls.status(0.1), VitalStatus::Good);
        assert_eq!(VitalMetric::Cls.status(0.25), VitalStatus::NeedsImprovement);
        assert_eq!(VitalMetric::Cls.status(0.251), VitalStatus::Poor);
        assert_eq!(VitalMetric::Inp.status(200.0), VitalStatus::Good);
        assert_eq!(VitalMetric::Inp.status(500.0), VitalStatus::NeedsImprovement);
        assert_eq!(VitalMetric::Inp.status(501.0), VitalStatus::Poor);
    }

    #[test]
    fn generation_band_follows_score_brackets() {
        assert_eq!(generation_band(100.0), VitalStatus::Good);
        assert_eq!(generation_band(83.0), VitalStatus::Good);
        assert_eq!(generation_band(82.9), VitalStatus::NeedsImprovement);
        assert_eq!(generation_band(60.0), VitalStatus::NeedsImprovement);
        assert_eq!(generation_band(59.0), VitalStatus::Poor);
        assert_eq!(generation_band(f64::NAN), VitalStatus::Poor);
        assert_eq!(generation_band(250.0), VitalStatus::Good);
    }

    #[test]
    fn high_scores_draw_good_lcp_and_inp() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let vitals = generate(95.0, &mut rng);
            assert!((1.8..=2.5).contains(&vitals.lcp.value));
            assert_eq!(vitals.lcp.status, VitalStatus::Good);
            assert!((120.0..=200.0).contains(&vitals.inp.value));
            assert_eq!(vitals.inp.status, VitalStatus::Good);
            assert_eq!(vitals.cls.status, VitalStatus::Good);
        }
    }

    #[test]
    fn poor_scores_draw_poor_vitals() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let vitals = generate(30.0, &mut rng);
            assert_eq!(vitals.lcp.status, VitalStatus::Poor);
            // CLS 0.25 and INP 500 sit on the needs-improvement bound after rounding.
            assert!(vitals.cls.value >= 0.25);
            assert!(vitals.inp.value >= 500.0);
            assert!(vitals.readings().iter().all(|r| r.status != VitalStatus::Good));
        }
    }

    #[test]
    fn values_are_rounded_to_metric_precision() {
        let mut rng = StdRng::seed_from_u64(8);
        let vitals = generate(70.0, &mut rng);
        assert_eq!(vitals.inp.value, vitals.inp.value.round());
        assert_eq!(vitals.lcp.value, round_to(vitals.lcp.value, 2));
        assert_eq!(vitals.cls.value, round_to(vitals.cls.value, 3));
    }

    #[test]
    fn status_labels_are_human_readable() {
        assert_eq!(VitalStatus::NeedsImprovement.to_string(), "Needs Improvement");
        let json = serde_json::to_string(&VitalStatus::NeedsImprovement).expect("serialize");
        assert_eq!(json, "\"needs-improvement\"");
    }

    proptest! {
        #[test]
        fn lcp_bands_follow_fixed_seconds(value in 0.0f64..12.0) {
            let expected = if value <= 2.5 {
                VitalStatus::Good
            } else if value <= 4.0 {
                VitalStatus::NeedsImprovement
            } else {
                VitalStatus::Poor
            };
            prop_assert_eq!(VitalMetric::Lcp.status(value), expected);
        }

        #[test]
        fn lcp_needs_improvement_between_two_and_a_half_and_four(value in 2.5f64..=4.0) {
            prop_assume!(value > 2.5);
            prop_assert_eq!(VitalMetric::Lcp.status(value), VitalStatus::NeedsImprovement);
        }

        #[test]
        fn cls_bands_follow_fixed_shift_scores(
            good in 0.0f64..=0.10,
            middle in 0.10f64..=0.25,
            poor in 0.25f64..2.0,
        ) {
            prop_assert_eq!(VitalMetric::Cls.status(good), VitalStatus::Good);
            prop_assume!(middle > 0.10 && poor > 0.25);
            prop_assert_eq!(VitalMetric::Cls.status(middle), VitalStatus::NeedsImprovement);
            prop_assert_eq!(VitalMetric::Cls.status(poor), VitalStatus::Poor);
        }

        #[test]
        fn inp_bands_follow_fixed_milliseconds(
            good in 0.0f64..=200.0,
            middle in 200.0f64..=500.0,
            poor in 500.0f64..5_000.0,
        ) {
            prop_assert_eq!(VitalMetric::Inp.status(good), VitalStatus::Good);
            prop_assume!(middle > 200.0 && poor > 500.0);
            prop_assert_eq!(VitalMetric::Inp.status(middle), VitalStatus::NeedsImprovement);
            prop_assert_eq!(VitalMetric::Inp.status(poor), VitalStatus::Poor);
        }

        #[test]
        fn every_reading_status_matches_its_value(score in -20.0f64..140.0, seed in any::<u64>()) {
            let vitals = generate(score, &mut StdRng::seed_from_u64(seed));
            for reading in vitals.readings() {
                prop_assert_eq!(reading.status, reading.metric.status(reading.value));
            }
        }
    }
}
