use crate::catalog::Pair;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why a corpus artifact could not be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    #[error("file not found")]
    NotFound,
    #[error("I/O error: {0}")]
    Io(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("missing table `{0}`")]
    MissingTable(String),
    #[error("missing column `{0}`")]
    MissingColumn(String),
    #[error("row {row}: weight for `{os}` is not a non-negative integer")]
    InvalidWeight { row: i64, os: String },
    #[error("row {row}: payload is not a JSON object: {reason}")]
    MalformedPayload { row: i64, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    // Corpus Errors
    #[error("Failed to load corpus {}: {reason}", .path.display())]
    CorpusLoad { path: PathBuf, reason: LoadFailure },
    #[error("Corpus load of {} timed out after {timeout:?}", .path.display())]
    LoadTimedOut { path: PathBuf, timeout: Duration },
    #[error("Corpus load of {} was cancelled", .path.display())]
    LoadCancelled { path: PathBuf },
    #[error("Corpus store is closed")]
    StoreClosed,
    #[error("No WebGL data found for OS: {os}")]
    EmptyCorpus { os: String },

    // Caller Errors
    #[error("Invalid OS: {os}. Must be one of: {}", crate::base::targetos::Os::recognized_keys())]
    UnknownOs { os: String },
    #[error(
        "Vendor \"{vendor}\" and renderer \"{renderer}\" combination not valid for {os}. Possible pairs: {}",
        format_pairs(.valid_pairs)
    )]
    UnsupportedCombination {
        os: String,
        vendor: String,
        renderer: String,
        valid_pairs: Vec<Pair>,
    },

    // Collaborator Errors
    #[error("Invalid proxy server: {server}")]
    InvalidProxy { server: String },
    #[error("Invalid IP address: {ip}")]
    InvalidIp { ip: String },
}

fn format_pairs(pairs: &[Pair]) -> String {
    pairs.iter().map(Pair::to_string).collect::<Vec<_>>().join(", ")
}

impl FingerprintError {
    pub fn corpus_load(path: impl Into<PathBuf>, reason: LoadFailure) -> Self {
        FingerprintError::CorpusLoad {
            path: path.into(),
            reason,
        }
    }

    pub fn unknown_os(os: impl Into<String>) -> Self {
        FingerprintError::UnknownOs { os: os.into() }
    }

    pub fn empty_corpus(os: impl Into<String>) -> Self {
        FingerprintError::EmptyCorpus { os: os.into() }
    }

    pub fn invalid_proxy(server: impl Into<String>) -> Self {
        FingerprintError::InvalidProxy {
            server: server.into(),
        }
    }

    pub fn invalid_ip(ip: impl Into<String>) -> Self {
        FingerprintError::InvalidIp { ip: ip.into() }
    }

    /// Load and configuration failures that no caller input can fix.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FingerprintError::CorpusLoad { .. }
                | FingerprintError::LoadTimedOut { .. }
                | FingerprintError::LoadCancelled { .. }
                | FingerprintError::StoreClosed
                | FingerprintError::EmptyCorpus { .. }
        )
    }

    /// Valid alternatives attached to an `UnsupportedCombination`.
    pub fn valid_pairs(&self) -> Option<&[Pair]> {
        match self {
            FingerprintError::UnsupportedCombination { valid_pairs, .. } => Some(valid_pairs),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for LoadFailure {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ffi::ErrorCode::CannotOpen =>
            {
                LoadFailure::NotFound
            }
            _ => LoadFailure::Database(err.to_string()),
        }
    }
}

impl From<std::io::Error> for LoadFailure {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LoadFailure::NotFound,
            _ => LoadFailure::Io(err.to_string()),
        }
    }
}
