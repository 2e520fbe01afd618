use crate::derive::{breakdown, dependency, overlay, vitals, waterfall};
use crate::engine::DomainKey;
use crate::source::SourceOutcome;
use crate::types::report::{AnalysisReport, CategoryScore};
use crate::types::scoring::ScoreRating;
use chrono::Utc;
use rand::Rng;

const OPPORTUNITIES: [&str; 3] = [
    "Reduce unused JavaScript",
    "Serve images in next-gen formats",
    "Eliminate render-blocking resources",
];

const DIAGNOSTICS: [&str; 3] = [
    "Avoid large layout shifts",
    "Minimize main-thread work",
    "Reduce JavaScript execution time",
];

pub fn build_report<R: Rng>(
    url: &str,
    domain: Option<&DomainKey>,
    outcome: SourceOutcome,
    rng: &mut R,
) -> AnalysisReport {
    let scores = outcome.scores;
    let performance = f64::from(scores.performance);

    let categories = scores
        .categories()
        .into_iter()
        .map(|(label, score)| CategoryScore {
            label,
            score,
            rating: ScoreRating::of(score),
        })
        .collect();

    AnalysisReport {
        url: url.to_string(),
        domain: domain.map(ToString::to_string),
        source: outcome.kind,
        mocked: outcome.mocked(),
        generated_at: Utc::now().to_rfc3339(),
        scores,
        categories,
        vitals: vitals::generate(performance, rng),
        breakdown: breakdown::generate(performance),
        waterfall: waterfall::generate(performance),
        overlay: overlay::generate(performance),
        dependencies: dependency::generate(performance),
        opportunities: OPPORTUNITIES.iter().map(|item| item.to_string()).collect(),
        diagnostics: DIAGNOSTICS.iter().map(|item| item.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize;
    use crate::source::{mock_scores, SourceKind};
    use crate::types::scoring::ScoreBundle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn report_derives_everything_from_performance() {
        let domain = normalize("https://example.org").expect("valid url");
        let outcome = SourceOutcome::simulated(ScoreBundle::new(95, 70, 40, 88));
        let report = build_report(
            "https://example.org",
            Some(&domain),
            outcome,
            &mut StdRng::seed_from_u64(4),
        );

        assert_eq!(report.domain.as_deref(), Some("example.org"));
        assert_eq!(report.source, SourceKind::Simulated);
        assert!(!report.mocked);
        assert_eq!(report.overlay.base_intensity, 0.25);
        assert_eq!(report.breakdown.base, 40.0);
        assert_eq!(report.waterfall.base_delay, 105.0);
        assert_eq!(report.vitals.lcp.status, vitals::VitalStatus::Good);
        let ratings: Vec<ScoreRating> = report.categories.iter().map(|c| c.rating).collect();
        assert_eq!(
            ratings,
            vec![
                ScoreRating::Pass,
                ScoreRating::Average,
                ScoreRating::Fail,
                ScoreRating::Average
            ]
        );
        assert_eq!(report.opportunities.len(), 3);
        assert_eq!(report.diagnostics.len(), 3);
    }

    #[test]
    fn mock_outcome_is_flagged() {
        let outcome = SourceOutcome {
            kind: SourceKind::Mock,
            scores: mock_scores(),
        };
        let report = build_report("https://example.org", None, outcome, &mut StdRng::seed_from_u64(4));
        assert!(report.mocked);
        assert_eq!(report.scores.performance, 92);
        assert!(report.domain.is_none());
    }
}
