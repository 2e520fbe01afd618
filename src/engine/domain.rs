use serde::Serialize;
use std::fmt;
use url::Url;

/// Brand suffixes collapsed to a single identity, checked in order.
const BRAND_ALIASES: [(&str, &[&str]); 3] = [
    ("amazon", &["amazon.in", "amazon.com"]),
    ("flipkart", &["flipkart.in", "flipkart.com"]),
    ("google", &["google.com", "google.co.in"]),
];

/// Canonical site identity derived from a URL host. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DomainKey(String);

impl DomainKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `None` when `url` does not parse or carries no host.
pub fn normalize(url: &str) -> Option<DomainKey> {
    let parsed = Url::parse(url.trim()).ok()?;
    normalize_host(parsed.host_str()?)
}

/// Like [`normalize`], but only `http` and `https` URLs are accepted.
pub fn normalize_web(url: &str) -> Option<DomainKey> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    normalize_host(parsed.host_str()?)
}

/// Canonicalizes a bare host name the same way [`normalize`] treats URL hosts.
pub fn normalize_host(host: &str) -> Option<DomainKey> {
    let host = host.trim().to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let host = host.strip_prefix("m.").unwrap_or(host);
    if host.is_empty() {
        return None;
    }

    let key = BRAND_ALIASES
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|suffix| host.ends_with(suffix)))
        .map_or_else(|| host.to_string(), |(brand, _)| (*brand).to_string());
    Some(DomainKey(key))
}
