//! In-memory corpus store.
//!
//! [`Store::open`] reads the whole `webgl_fingerprints` table into memory and
//! closes the SQLite connection before returning. A `Store` value is always
//! fully loaded; there is no partially-initialized state to observe.

use crate::base::context::LoadResultExt;
use crate::base::fperror::{FingerprintError, LoadFailure};
use crate::base::targetos::Os;
use crate::catalog::{Pair, PairCatalog};
use crate::corpus::record::{FingerprintRecord, Weights};
use crate::corpus::schema;
use crate::fingerprint::Fingerprint;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Immutable fingerprint corpus.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<FingerprintRecord>,
    pairs: [OnceLock<Vec<Pair>>; Os::COUNT],
}

impl Store {
    /// Load the corpus artifact at `path`.
    ///
    /// Fails with [`FingerprintError::CorpusLoad`] if the file is missing or
    /// unreadable, the table or any OS column is absent, a weight is not a
    /// non-negative integer, or a payload is not a JSON object.
    pub fn open(path: impl AsRef<Path>) -> Result<Store, FingerprintError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening fingerprint corpus");

        if !path.exists() {
            return Err(FingerprintError::corpus_load(path, LoadFailure::NotFound));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .corpus_context(path)?;

        check_schema(&conn).corpus_context(path)?;
        let records = read_records(&conn).corpus_context(path)?;
        conn.close().map_err(|(_, e)| e).corpus_context(path)?;

        let store = Self::with_path(path.to_path_buf(), records);
        store.log_summary();
        Ok(store)
    }

    /// Build a store from already-parsed rows, kept in the given order.
    pub fn from_records(records: Vec<FingerprintRecord>) -> Store {
        Self::with_path(PathBuf::new(), records)
    }

    fn with_path(path: PathBuf, records: Vec<FingerprintRecord>) -> Store {
        Store {
            path,
            records,
            pairs: Default::default(),
        }
    }

    /// Artifact this store was loaded from (empty for in-memory stores).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every row in storage order.
    pub fn records(&self) -> &[FingerprintRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows with a positive weight for `os`, in storage order.
    pub fn records_for_os(&self, os: Os) -> Vec<&FingerprintRecord> {
        self.eligible(os).collect()
    }

    pub(crate) fn eligible(&self, os: Os) -> impl Iterator<Item = &FingerprintRecord> + '_ {
        self.records.iter().filter(move |r| r.is_eligible(os))
    }

    /// Number of rows eligible for `os`.
    pub fn eligible_count(&self, os: Os) -> usize {
        self.eligible(os).count()
    }

    /// Exact vendor/renderer match.
    ///
    /// When several rows share the pair, the first one in storage order with
    /// a positive weight for `os` is returned, otherwise the first match.
    pub fn lookup(&self, os: Os, vendor: &str, renderer: &str) -> Option<&FingerprintRecord> {
        let mut matches = self.records.iter().filter(|r| r.matches(vendor, renderer));
        let first = matches.next()?;
        if first.is_eligible(os) {
            return Some(first);
        }
        matches.find(|r| r.is_eligible(os)).or(Some(first))
    }

    /// Valid (vendor, renderer) pairs, most popular first.
    pub fn catalog(&self) -> PairCatalog<'_> {
        PairCatalog::new(self)
    }

    pub(crate) fn pair_cache(&self, os: Os) -> &OnceLock<Vec<Pair>> {
        &self.pairs[os.index()]
    }

    /// Release the table.
    pub fn close(self) {
        tracing::debug!(path = %self.path.display(), records = self.records.len(), "closing fingerprint corpus");
    }

    fn log_summary(&self) {
        for os in Os::ALL {
            let mut seen = HashSet::new();
            let mut eligible = 0usize;
            for record in self.eligible(os) {
                eligible += 1;
                if !seen.insert((record.vendor.as_str(), record.renderer.as_str())) {
                    tracing::warn!(
                        os = %os,
                        vendor = %record.vendor,
                        renderer = %record.renderer,
                        "duplicate vendor/renderer pair in corpus; exact lookups use the first row"
                    );
                }
            }
            tracing::debug!(os = %os, eligible, "corpus partition");
        }
        tracing::info!(
            path = %self.path.display(),
            records = self.records.len(),
            "fingerprint corpus loaded"
        );
    }
}

fn check_schema(conn: &Connection) -> Result<(), LoadFailure> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", schema::TABLE))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<HashSet<_>, _>>()?;

    if columns.is_empty() {
        return Err(LoadFailure::MissingTable(schema::TABLE.to_string()));
    }

    for required in schema::required_columns() {
        if !columns.contains(required) {
            return Err(LoadFailure::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

fn read_records(conn: &Connection) -> Result<Vec<FingerprintRecord>, LoadFailure> {
    let mut stmt = conn.prepare(&schema::select_all_sql())?;
    let mut rows = stmt.query([])?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        let rowid: i64 = row.get(0)?;
        let vendor: String = row.get(1)?;
        let renderer: String = row.get(2)?;
        let data: String = row.get(3)?;

        let mut weights = Weights::default();
        for (offset, os) in Os::ALL.into_iter().enumerate() {
            let weight = match row.get_ref(schema::FIRST_WEIGHT_INDEX + offset)? {
                // NULL never compares greater than zero
                ValueRef::Null => 0,
                ValueRef::Integer(n) => u32::try_from(n).map_err(|_| LoadFailure::InvalidWeight {
                    row: rowid,
                    os: os.key().to_string(),
                })?,
                _ => {
                    return Err(LoadFailure::InvalidWeight {
                        row: rowid,
                        os: os.key().to_string(),
                    })
                }
            };
            weights = weights.with(os, weight);
        }

        let payload = Fingerprint::from_json(&data).map_err(|e| LoadFailure::MalformedPayload {
            row: rowid,
            reason: e.to_string(),
        })?;

        records.push(FingerprintRecord {
            vendor,
            renderer,
            weights,
            payload,
        });
    }

    Ok(records)
}
