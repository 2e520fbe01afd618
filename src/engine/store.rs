use crate::engine::domain::{normalize, DomainKey};
use crate::engine::generator::TierClassifier;
use crate::error::{PsiError, Result};
use crate::types::scoring::ScoreBundle;
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_KEY_PREFIX: &str = "psi-score-";

/// String key/value storage the score cache is persisted in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single JSON object on disk; every `set` rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| PsiError::StoreParse(format!("{}: {}", path.display(), e)))?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(PsiError::Io(error)),
        };
        debug!(path = %path.display(), entries = entries.len(), "opened score store");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(PsiError::Io)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(PsiError::Io)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Resolves URLs to cached score bundles, generating on first sight.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    classifier: TierClassifier,
    key_prefix: String,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(TierClassifier::default(), DEFAULT_KEY_PREFIX)
    }
}

impl ScoreEngine {
    pub fn new(classifier: TierClassifier, key_prefix: impl Into<String>) -> Self {
        Self {
            classifier,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn storage_key(&self, domain: &DomainKey) -> String {
        format!("{}{}", self.key_prefix, domain)
    }

    /// `Ok(None)` means the URL has no usable domain.
    pub fn get_or_create<S, R>(
        &self,
        store: &mut S,
        rng: &mut R,
        url: &str,
    ) -> Result<Option<ScoreBundle>>
    where
        S: KeyValueStore + ?Sized,
        R: Rng,
    {
        let Some(domain) = normalize(url) else {
            debug!(url, "url has no usable domain");
            return Ok(None);
        };
        self.get_or_create_for(store, rng, &domain).map(Some)
    }

    pub fn get_or_create_for<S, R>(
        &self,
        store: &mut S,
        rng: &mut R,
        domain: &DomainKey,
    ) -> Result<ScoreBundle>
    where
        S: KeyValueStore + ?Sized,
        R: Rng,
    {
        let key = self.storage_key(domain);
        if let Some(raw) = store.get(&key)? {
            match decode_bundle(&raw) {
                Some(bundle) => {
                    debug!(%domain, "score cache hit");
                    return Ok(bundle);
                }
                None => warn!(%domain, key, "discarding corrupt score cache entry"),
            }
        }

        let bundle = self.classifier.generate(domain, rng);
        store.set(&key, &serde_json::to_string(&bundle)?)?;
        info!(%domain, performance = bundle.performance, "generated scores");
        Ok(bundle)
    }
}

fn decode_bundle(raw: &str) -> Option<ScoreBundle> {
    serde_json::from_str::<ScoreBundle>(raw)
        .ok()
        .filter(ScoreBundle::is_in_range)
}
