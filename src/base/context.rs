//! Ergonomic error context helpers.
//!
//! Attaches the corpus path to low-level SQLite and IO failures, turning them
//! into `FingerprintError::CorpusLoad`.

use crate::base::fperror::{FingerprintError, LoadFailure};
use std::path::Path;

/// Extension trait for adding corpus context to fallible loads.
pub trait LoadResultExt<T> {
    /// Wrap the error as a load failure of the corpus at `path`.
    ///
    /// # Example
    /// ```ignore
    /// use glprint::base::context::LoadResultExt;
    ///
    /// let conn = Connection::open_with_flags(path, flags).corpus_context(path)?;
    /// // Error: "Failed to load corpus webgl_data.db: file not found"
    /// ```
    fn corpus_context(self, path: &Path) -> Result<T, FingerprintError>;
}

impl<T, E> LoadResultExt<T> for Result<T, E>
where
    E: Into<LoadFailure>,
{
    fn corpus_context(self, path: &Path) -> Result<T, FingerprintError> {
        self.map_err(|e| FingerprintError::corpus_load(path, e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Error, ErrorKind};

    #[test]
    fn test_io_not_found_context() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::NotFound, "gone"));
        let err = result.corpus_context(Path::new("missing.db")).unwrap_err();

        match err {
            FingerprintError::CorpusLoad { path, reason } => {
                assert_eq!(path, Path::new("missing.db"));
                assert_eq!(reason, LoadFailure::NotFound);
            }
            _ => panic!("Expected CorpusLoad"),
        }
    }

    #[test]
    fn test_io_other_context() {
        let result: Result<(), io::Error> =
            Err(Error::new(ErrorKind::PermissionDenied, "denied"));
        let err = result.corpus_context(Path::new("locked.db")).unwrap_err();

        assert!(matches!(
            err,
            FingerprintError::CorpusLoad {
                reason: LoadFailure::Io(_),
                ..
            }
        ));
        assert!(err.is_fatal());
    }
}
