use crate::types::scoring::clamp_score;
use serde::Serialize;

const MIN_BASE_DELAY: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestType {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "JS")]
    Js,
    Image,
    Font,
}

/// name, type, start offset (ms), duration added to the base delay (ms)
const REQUESTS: [(&str, RequestType, f64, f64); 5] = [
    ("HTML", RequestType::Html, 0.0, 80.0),
    ("CSS", RequestType::Css, 40.0, 120.0),
    ("JS Bundle", RequestType::Js, 120.0, 200.0),
    ("Image Assets", RequestType::Image, 180.0, 160.0),
    ("Fonts", RequestType::Font, 220.0, 90.0),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallRequest {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub start: f64,
    pub duration: f64,
    /// Bar offset as a percentage of the whole timeline.
    pub left: f64,
    /// Bar length as a percentage of the whole timeline.
    pub width: f64,
}

impl WaterfallRequest {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkWaterfall {
    pub base_delay: f64,
    pub max_time: f64,
    pub requests: Vec<WaterfallRequest>,
}

pub fn generate(performance_score: f64) -> NetworkWaterfall {
    let base_delay = (200.0 - clamp_score(performance_score)).max(MIN_BASE_DELAY);
    let max_time = REQUESTS
        .iter()
        .map(|(_, _, start, extra)| start + base_delay + extra)
        .fold(0.0, f64::max);

    let requests = REQUESTS
        .iter()
        .map(|&(name, kind, start, extra)| {
            let duration = base_delay + extra;
            WaterfallRequest {
                name,
                kind,
                start,
                duration,
                left: start / max_time * 100.0,
                width: duration / max_time * 100.0,
            }
        })
        .collect();

    NetworkWaterfall {
        base_delay,
        max_time,
        requests,
    }
}
