use crate::corpus::schema::DEFAULT_CORPUS_FILE;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the corpus artifact.
pub const ENV_CORPUS_PATH: &str = "GLPRINT_CORPUS_PATH";
/// Environment variable fixing the random seed.
pub const ENV_SEED: &str = "GLPRINT_SEED";
/// Environment variable bounding the corpus load, in milliseconds.
pub const ENV_LOAD_TIMEOUT_MS: &str = "GLPRINT_LOAD_TIMEOUT_MS";

/// Corpus location and selection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Path of the SQLite corpus artifact.
    pub path: PathBuf,
    /// Seed for reproducible random selection. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Upper bound for an asynchronous load.
    pub load_timeout: Option<Duration>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_FILE),
            seed: None,
            load_timeout: None,
        }
    }
}

impl CorpusConfig {
    /// Create new builder.
    pub fn builder() -> CorpusConfigBuilder {
        CorpusConfigBuilder::default()
    }

    /// Configuration from environment variables.
    ///
    /// Reads `GLPRINT_CORPUS_PATH`, `GLPRINT_SEED` and
    /// `GLPRINT_LOAD_TIMEOUT_MS`. Unparseable numbers are ignored with a
    /// warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CORPUS_PATH).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }
        config.seed = parse_number(&lookup, ENV_SEED);
        config.load_timeout = parse_number(&lookup, ENV_LOAD_TIMEOUT_MS).map(Duration::from_millis);
        config
    }
}

fn parse_number(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

/// Builder for CorpusConfig.
#[derive(Debug, Clone, Default)]
pub struct CorpusConfigBuilder {
    config: CorpusConfig,
}

impl CorpusConfigBuilder {
    /// Set corpus path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set load timeout.
    pub fn load_timeout(mut self, timeout: Duration) -> Self {
        self.config.load_timeout = Some(timeout);
        self
    }

    /// Build the config.
    pub fn build(self) -> CorpusConfig {
        self.config
    }
}
