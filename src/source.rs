use crate::error::{PsiError, Result};
use crate::types::scoring::{Score, ScoreBundle, MAX_SCORE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Where the scores in a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Simulated,
    Pagespeed,
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOutcome {
    pub kind: SourceKind,
    pub scores: ScoreBundle,
}

impl SourceOutcome {
    pub fn simulated(scores: ScoreBundle) -> Self {
        Self {
            kind: SourceKind::Simulated,
            scores,
        }
    }

    pub fn mock() -> Self {
        Self {
            kind: SourceKind::Mock,
            scores: mock_scores(),
        }
    }

    pub fn mocked(&self) -> bool {
        matches!(self.kind, SourceKind::Mock)
    }
}

/// Fixed scores served when the PageSpeed API cannot be used.
pub fn mock_scores() -> ScoreBundle {
    ScoreBundle::new(92, 88, 95, 90)
}

#[derive(Debug, Deserialize)]
struct PageSpeedResponse {
    error: Option<PageSpeedError>,
    #[serde(rename = "lighthouseResult")]
    lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Deserialize)]
struct PageSpeedError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LighthouseResult {
    categories: Categories,
}

#[derive(Debug, Deserialize)]
struct Categories {
    performance: Category,
    accessibility: Category,
    #[serde(rename = "best-practices")]
    best_practices: Category,
    seo: Category,
}

#[derive(Debug, Deserialize)]
struct Category {
    score: Option<f64>,
}

impl Category {
    fn percent(&self, name: &str) -> Result<Score> {
        let score = self
            .score
            .ok_or_else(|| PsiError::Upstream(format!("category {name} has no score")))?;
        Ok(to_score(score * 100.0))
    }
}

/// Reads a PageSpeed Insights v5 `runPagespeed` response body.
pub fn from_pagespeed_json(body: &str) -> Result<ScoreBundle> {
    from_pagespeed_response(serde_json::from_str(body)?)
}

fn from_pagespeed_response(response: PageSpeedResponse) -> Result<ScoreBundle> {
    if let Some(error) = response.error {
        return Err(PsiError::Upstream(
            error.message.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    let categories = response
        .lighthouse_result
        .ok_or_else(|| PsiError::Upstream("response has no lighthouseResult".to_string()))?
        .categories;

    Ok(ScoreBundle {
        performance: categories.performance.percent("performance")?,
        accessibility: categories.accessibility.percent("accessibility")?,
        best_practices: categories.best_practices.percent("best-practices")?,
        seo: categories.seo.percent("seo")?,
    })
}

/// Loose boundary normalization: missing, null or non-numeric fields become 0.
pub fn normalize_upstream(value: &Value) -> ScoreBundle {
    let field = |name: &str| value.get(name).and_then(Value::as_f64).map_or(0, to_score);
    ScoreBundle {
        performance: field("performance"),
        accessibility: field("accessibility"),
        best_practices: field("bestPractices"),
        seo: field("seo"),
    }
}

/// Accepts either a raw PageSpeed response or the flattened
/// `{performance, accessibility, bestPractices, seo, mocked}` shape.
pub fn outcome_from_report(body: &str) -> Result<SourceOutcome> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("lighthouseResult").is_some() || value.get("error").is_some() {
        let response: PageSpeedResponse = serde_json::from_value(value)?;
        return Ok(SourceOutcome {
            kind: SourceKind::Pagespeed,
            scores: from_pagespeed_response(response)?,
        });
    }
    if value.get("performance").is_some() {
        let kind = if value.get("mocked").and_then(Value::as_bool) == Some(true) {
            SourceKind::Mock
        } else {
            SourceKind::Pagespeed
        };
        return Ok(SourceOutcome {
            kind,
            scores: normalize_upstream(&value),
        });
    }
    Err(PsiError::Upstream("unrecognized report shape".to_string()))
}

/// Scores from a saved report, or the mock bundle if it cannot be used.
pub fn resolve_report_file(path: &Path) -> SourceOutcome {
    let parsed = std::fs::read_to_string(path)
        .map_err(PsiError::Io)
        .and_then(|body| outcome_from_report(&body));
    match parsed {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(path = %path.display(), %error, "PageSpeed report unusable, using mock fallback");
            SourceOutcome::mock()
        }
    }
}

fn to_score(value: f64) -> Score {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(MAX_SCORE)) as Score
}
