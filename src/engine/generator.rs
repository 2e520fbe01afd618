use crate::engine::domain::{normalize_host, DomainKey};
use crate::types::scoring::{Score, ScoreBundle, Tier};
use rand::Rng;
use std::collections::BTreeSet;

pub const TOP_SITES: [&str; 21] = [
    "google",
    "youtube.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "amazon",
    "flipkart",
    "netflix.com",
    "linkedin.com",
    "wikipedia.org",
    "apple.com",
    "microsoft.com",
    "github.com",
    "reddit.com",
    "stackoverflow.com",
    "openai.com",
    "whatsapp.com",
    "spotify.com",
    "zoom.us",
    "paypal.com",
];

const POOR_CUTOFF: f64 = 0.20;
const AVERAGE_CUTOFF: f64 = 0.70;

/// Decides which tier a domain falls into and draws its scores.
#[derive(Debug, Clone)]
pub struct TierClassifier {
    top_sites: BTreeSet<String>,
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self {
            top_sites: TOP_SITES.iter().map(|site| site.to_string()).collect(),
        }
    }
}

impl TierClassifier {
    /// Extra entries go through [`normalize_host`]; blank ones are skipped.
    pub fn with_extra_top_sites<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classifier = Self::default();
        classifier.top_sites.extend(
            extra
                .into_iter()
                .filter_map(|site| normalize_host(site.as_ref()))
                .map(|key| key.as_str().to_string()),
        );
        classifier
    }

    pub fn is_top_site(&self, domain: &DomainKey) -> bool {
        self.top_sites.contains(domain.as_str())
    }

    /// Top sites never consume randomness; everything else costs one roll.
    pub fn classify<R: Rng>(&self, domain: &DomainKey, rng: &mut R) -> Tier {
        if self.is_top_site(domain) {
            return Tier::TopSite;
        }
        tier_for_roll(rng.gen::<f64>())
    }

    pub fn generate<R: Rng>(&self, domain: &DomainKey, rng: &mut R) -> ScoreBundle {
        let tier = self.classify(domain, rng);
        draw_scores(tier, rng)
    }
}

pub fn tier_for_roll(roll: f64) -> Tier {
    if roll < POOR_CUTOFF {
        Tier::Poor
    } else if roll < AVERAGE_CUTOFF {
        Tier::Average
    } else {
        Tier::Good
    }
}

pub fn draw_scores<R: Rng>(tier: Tier, rng: &mut R) -> ScoreBundle {
    let ranges = tier.ranges();
    ScoreBundle {
        performance: draw(ranges.performance, rng),
        accessibility: draw(ranges.accessibility, rng),
        best_practices: draw(ranges.best_practices, rng),
        seo: draw(ranges.seo, rng),
    }
}

fn draw<R: Rng>((low, high): (Score, Score), rng: &mut R) -> Score {
    rng.gen_range(low..=high)
}
