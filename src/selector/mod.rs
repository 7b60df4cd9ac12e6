//! Fingerprint selection.
//!
//! Two modes over a shared, immutable [`Store`]:
//!
//! - **Exact**: the caller names a vendor/renderer pair; the pair must be
//!   valid for the OS or the call fails with every valid pair attached.
//! - **Random**: a draw weighted by per-OS popularity.
//!
//! # Example
//!
//! ```rust,no_run
//! use glprint::corpus::store::Store;
//! use glprint::selector::Selector;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let selector = Selector::new(Arc::new(Store::open("webgl_data.db")?));
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let random = selector.select_random("win", &mut rng)?;
//! let exact = selector.select_exact("mac", "Apple", "Apple M1")?;
//! println!("{} / {} attributes", random.len(), exact.len());
//! # Ok::<(), glprint::base::fperror::FingerprintError>(())
//! ```
//!
//! Random generators are always passed in by the caller, so concurrent
//! selections never share generator state.

pub mod sampler;

use crate::base::fperror::FingerprintError;
use crate::base::targetos::Os;
use crate::catalog::{Pair, PairCatalog};
use crate::corpus::record::FingerprintRecord;
use crate::corpus::store::Store;
use crate::fingerprint::Fingerprint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sampler::CumulativeDistribution;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Entry point for fingerprint selection.
#[derive(Debug, Clone)]
pub struct Selector {
    store: Arc<Store>,
}

impl Selector {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn catalog(&self) -> PairCatalog<'_> {
        self.store.catalog()
    }

    /// Payload of the `(vendor, renderer)` row for `os`.
    ///
    /// Fails with `UnknownOs` for an unrecognized key and with
    /// `UnsupportedCombination` when the pair is absent or has zero weight
    /// for `os`.
    pub fn select_exact(
        &self,
        os: &str,
        vendor: &str,
        renderer: &str,
    ) -> Result<Fingerprint, FingerprintError> {
        let os: Os = os.parse()?;
        self.find_exact(os, vendor, renderer)
            .map(|record| record.payload.clone())
    }

    /// Typed counterpart of [`select_exact`](Self::select_exact) returning the row.
    pub fn find_exact(
        &self,
        os: Os,
        vendor: &str,
        renderer: &str,
    ) -> Result<&FingerprintRecord, FingerprintError> {
        match self.store.lookup(os, vendor, renderer) {
            Some(record) if record.is_eligible(os) => {
                tracing::debug!(os = %os, vendor, renderer, "exact fingerprint selected");
                Ok(record)
            }
            _ => Err(FingerprintError::UnsupportedCombination {
                os: os.key().to_string(),
                vendor: vendor.to_string(),
                renderer: renderer.to_string(),
                valid_pairs: self.catalog().pairs_for(os).to_vec(),
            }),
        }
    }

    /// Payload drawn at random for `os`, weighted by popularity.
    ///
    /// Fails with `UnknownOs` for an unrecognized key and with `EmptyCorpus`
    /// when no row applies to `os`.
    pub fn select_random<R: Rng>(
        &self,
        os: &str,
        rng: &mut R,
    ) -> Result<Fingerprint, FingerprintError> {
        let os: Os = os.parse()?;
        self.pick_random(os, rng).map(|record| record.payload.clone())
    }

    /// Typed counterpart of [`select_random`](Self::select_random) returning the row.
    pub fn pick_random<R: Rng>(
        &self,
        os: Os,
        rng: &mut R,
    ) -> Result<&FingerprintRecord, FingerprintError> {
        let candidates = self.store.records_for_os(os);
        let distribution = CumulativeDistribution::new(candidates.iter().map(|r| r.weight(os)))
            .ok_or_else(|| FingerprintError::empty_corpus(os.key()))?;

        let record = candidates[distribution.sample(rng)];
        tracing::debug!(
            os = %os,
            vendor = %record.vendor,
            renderer = %record.renderer,
            candidates = candidates.len(),
            "random fingerprint selected"
        );
        Ok(record)
    }

    /// Random selection with a fresh generator seeded from `seed`.
    pub fn select_random_seeded(&self, os: &str, seed: u64) -> Result<Fingerprint, FingerprintError> {
        self.select_random(os, &mut StdRng::seed_from_u64(seed))
    }

    /// Random selection with a call-scoped generator seeded from OS entropy.
    pub fn sample(&self, os: &str) -> Result<Fingerprint, FingerprintError> {
        self.select_random(os, &mut StdRng::from_os_rng())
    }

    /// Valid pairs for one OS key, most popular first.
    pub fn pairs_for(&self, os: &str) -> Result<&[Pair], FingerprintError> {
        let os: Os = os.parse()?;
        Ok(self.catalog().pairs_for(os))
    }

    /// Valid pairs for every supported OS.
    pub fn list_pairs(&self) -> BTreeMap<Os, Vec<Pair>> {
        self.catalog().all_pairs()
    }
}

impl From<Store> for Selector {
    fn from(store: Store) -> Self {
        Self::new(Arc::new(store))
    }
}

impl From<Arc<Store>> for Selector {
    fn from(store: Arc<Store>) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::record::Weights;
    use serde_json::json;

    fn payload(tag: &str) -> Fingerprint {
        Fingerprint::from_json(&json!({ "webGl:renderer": tag }).to_string()).unwrap()
    }

    fn selector() -> Selector {
        Selector::from(Store::from_records(vec![
            FingerprintRecord::new("A", "B", Weights::new([3, 0, 0]), payload("AB")),
            FingerprintRecord::new("C", "D", Weights::new([1, 2, 0]), payload("CD")),
        ]))
    }

    #[test]
    fn test_exact_hit() {
        let fp = selector().select_exact("win", "A", "B").unwrap();
        assert_eq!(fp.get("webGl:renderer"), Some(&json!("AB")));
    }

    #[test]
    fn test_exact_zero_weight_is_unsupported() {
        let err = selector().select_exact("mac", "A", "B").unwrap_err();
        match err {
            FingerprintError::UnsupportedCombination { os, valid_pairs, .. } => {
                assert_eq!(os, "mac");
                assert_eq!(valid_pairs, vec![Pair::new("C", "D")]);
            }
            other => panic!("Expected UnsupportedCombination, got {other:?}"),
        }
    }

    #[test]
    fn test_random_on_empty_partition() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = selector().select_random("linux", &mut rng).unwrap_err();
        assert_eq!(err, FingerprintError::empty_corpus("lin"));
    }

    #[test]
    fn test_random_respects_partition() {
        let selector = selector();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let record = selector.pick_random(Os::MacOs, &mut rng).unwrap();
            assert_eq!(record.pair(), Pair::new("C", "D"));
        }
    }

    #[test]
    fn test_unknown_os_rejected_everywhere() {
        let selector = selector();
        assert!(matches!(
            selector.select_exact("plan9", "A", "B"),
            Err(FingerprintError::UnknownOs { .. })
        ));
        assert!(matches!(
            selector.select_random_seeded("plan9", 1),
            Err(FingerprintError::UnknownOs { .. })
        ));
        assert!(matches!(selector.pairs_for("plan9"), Err(FingerprintError::UnknownOs { .. })));
    }
}
