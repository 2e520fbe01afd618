use crate::engine::domain::normalize_host;
use crate::engine::store::DEFAULT_KEY_PREFIX;
use crate::error::PsiError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_STORE_PATH: &str = ".psidash/scores.json";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PsiConfig {
    pub store: Option<StoreConfig>,
    pub engine: Option<EngineConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub key_prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    #[serde(default)]
    pub top_sites: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatConfig {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl PsiConfig {
    pub fn store_path(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|store| store.path.as_deref())
            .unwrap_or(DEFAULT_STORE_PATH)
    }

    pub fn key_prefix(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|store| store.key_prefix.as_deref())
            .unwrap_or(DEFAULT_KEY_PREFIX)
    }

    pub fn seed(&self) -> Option<u64> {
        self.engine.as_ref().and_then(|engine| engine.seed)
    }

    pub fn extra_top_sites(&self) -> &[String] {
        self.engine
            .as_ref()
            .map(|engine| engine.top_sites.as_slice())
            .unwrap_or_default()
    }

    pub fn report_format(&self) -> Option<ReportFormatConfig> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or("warn")
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.json)
    }

    pub fn validate(&self) -> Result<(), PsiError> {
        if self.key_prefix().trim().is_empty() {
            return Err(PsiError::ConfigParse(
                "store.key_prefix must not be empty".to_string(),
            ));
        }
        if self.store_path().trim().is_empty() {
            return Err(PsiError::ConfigParse(
                "store.path must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for site in self.extra_top_sites() {
            let Some(key) = normalize_host(site) else {
                return Err(PsiError::ConfigParse(
                    "engine.top_sites entries must be non-empty domain keys".to_string(),
                ));
            };
            if !seen.insert(key.clone()) {
                return Err(PsiError::ConfigParse(format!(
                    "engine.top_sites contains duplicate domain: {} (as {key})",
                    site.trim()
                )));
            }
        }

        let level = self.log_level();
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(PsiError::ConfigParse(format!(
                "unsupported logging.level: {level}"
            )));
        }

        Ok(())
    }
}
