use crate::types::scoring::clamp_score;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRegion {
    Header,
    Hero,
    Main,
    Footer,
}

impl PageRegion {
    pub const ALL: [PageRegion; 4] = [
        PageRegion::Header,
        PageRegion::Hero,
        PageRegion::Main,
        PageRegion::Footer,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            PageRegion::Header => 1.0,
            PageRegion::Hero => 0.9,
            PageRegion::Main => 0.6,
            PageRegion::Footer => 0.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageRegion::Header => "Header / Navigation (JS-heavy)",
            PageRegion::Hero => "Hero Section (Images & Fonts)",
            PageRegion::Main => "Main Content (Mixed Load)",
            PageRegion::Footer => "Footer (Low Impact)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionIntensity {
    pub region: PageRegion,
    pub label: &'static str,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceOverlay {
    pub base_intensity: f64,
    pub regions: Vec<RegionIntensity>,
}

impl PerformanceOverlay {
    pub fn intensity(&self, region: PageRegion) -> Option<f64> {
        self.regions
            .iter()
            .find(|entry| entry.region == region)
            .map(|entry| entry.intensity)
    }
}

pub fn base_intensity(performance_score: f64) -> f64 {
    let score = clamp_score(performance_score);
    if score >= 85.0 {
        0.25
    } else if score >= 70.0 {
        0.45
    } else if score >= 55.0 {
        0.65
    } else {
        0.85
    }
}

pub fn generate(performance_score: f64) -> PerformanceOverlay {
    let base = base_intensity(performance_score);
    let regions = PageRegion::ALL
        .iter()
        .map(|&region| RegionIntensity {
            region,
            label: region.label(),
            intensity: base * region.multiplier(),
        })
        .collect();
    PerformanceOverlay {
        base_intensity: base,
        regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn score_95_matches_lightest_bracket() {
        let overlay = generate(95.0);
        assert_eq!(overlay.base_intensity, 0.25);
        let hero = overlay.intensity(PageRegion::Hero).expect("hero region");
        assert!(close(hero, 0.225));
        let footer = overlay.intensity(PageRegion::Footer).expect("footer region");
        assert!(close(footer, 0.075));
    }

    #[test]
    fn brackets_step_at_85_70_55() {
        assert_eq!(base_intensity(85.0), 0.25);
        assert_eq!(base_intensity(84.9), 0.45);
        assert_eq!(base_intensity(70.0), 0.45);
        assert_eq!(base_intensity(69.0), 0.65);
        assert_eq!(base_intensity(55.0), 0.65);
        assert_eq!(base_intensity(54.0), 0.85);
        assert_eq!(base_intensity(f64::NAN), 0.85);
    }

    #[test]
    fn intensities_stay_within_unit_interval() {
        for score in (0..=100).map(f64::from) {
            let overlay = generate(score);
            assert!(overlay
                .regions
                .iter()
                .all(|entry| (0.0..=1.0).contains(&entry.intensity)));
            assert_eq!(overlay.intensity(PageRegion::Header), Some(overlay.base_intensity));
        }
    }
}
