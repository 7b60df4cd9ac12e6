//! Valid (vendor, renderer) pairs per OS.
//!
//! Pair lists back the random sampler's candidate view and the
//! `UnsupportedCombination` error, which carries the full list so callers can
//! show valid alternatives. Lists are derived from the [`Store`] the first
//! time an OS is asked for and cached for the life of the store.

use crate::base::targetos::Os;
use crate::corpus::store::Store;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A GPU vendor/renderer combination. Validity is always OS-relative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    pub vendor: String,
    pub renderer: String,
}

impl Pair {
    pub fn new(vendor: impl Into<String>, renderer: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            renderer: renderer.into(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.vendor, self.renderer)
    }
}

/// Read-only view over a store's pair lists.
#[derive(Debug, Clone, Copy)]
pub struct PairCatalog<'s> {
    store: &'s Store,
}

impl<'s> PairCatalog<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Pairs eligible for `os`, by descending weight, ties broken by vendor
    /// then renderer.
    pub fn pairs_for(&self, os: Os) -> &'s [Pair] {
        let store = self.store;
        store.pair_cache(os).get_or_init(|| derive_pairs(store, os))
    }

    /// Pair lists for every supported OS.
    pub fn all_pairs(&self) -> BTreeMap<Os, Vec<Pair>> {
        Os::ALL
            .into_iter()
            .map(|os| (os, self.pairs_for(os).to_vec()))
            .collect()
    }

    pub fn contains(&self, os: Os, vendor: &str, renderer: &str) -> bool {
        self.pairs_for(os)
            .iter()
            .any(|p| p.vendor == vendor && p.renderer == renderer)
    }
}

fn derive_pairs(store: &Store, os: Os) -> Vec<Pair> {
    let mut ranked: Vec<_> = store.eligible(os).collect();
    ranked.sort_by(|a, b| {
        b.weight(os)
            .cmp(&a.weight(os))
            .then_with(|| a.vendor.cmp(&b.vendor))
            .then_with(|| a.renderer.cmp(&b.renderer))
    });

    let mut seen = HashSet::new();
    let mut pairs = Vec::with_capacity(ranked.len());
    for record in ranked {
        if seen.insert((record.vendor.as_str(), record.renderer.as_str())) {
            pairs.push(record.pair());
        }
    }

    tracing::debug!(os = %os, pairs = pairs.len(), "derived pair catalog");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::record::{FingerprintRecord, Weights};
    use crate::fingerprint::Fingerprint;

    fn store() -> Store {
        let rows = [
            ("Intel", "UHD 620", [3, 0, 1]),
            ("NVIDIA", "GTX 1060", [9, 0, 1]),
            ("AMD", "RX 580", [3, 0, 0]),
            ("Apple", "M1", [0, 5, 0]),
            ("Intel", "UHD 620", [2, 0, 0]),
        ];
        Store::from_records(
            rows.into_iter()
                .map(|(v, r, w)| FingerprintRecord::new(v, r, Weights::new(w), Fingerprint::default()))
                .collect(),
        )
    }

    #[test]
    fn test_descending_weight_with_lexicographic_ties() {
        let store = store();
        let pairs = store.catalog().pairs_for(Os::Windows).to_vec();
        assert_eq!(
            pairs,
            vec![
                Pair::new("NVIDIA", "GTX 1060"),
                Pair::new("AMD", "RX 580"),
                Pair::new("Intel", "UHD 620"),
            ]
        );
    }

    #[test]
    fn test_linux_ties_sorted_by_vendor() {
        let store = store();
        let pairs = store.catalog().pairs_for(Os::Linux);
        assert_eq!(pairs[0], Pair::new("Intel", "UHD 620"));
        assert_eq!(pairs[1], Pair::new("NVIDIA", "GTX 1060"));
    }

    #[test]
    fn test_all_pairs_covers_every_os() {
        let store = store();
        let all = store.catalog().all_pairs();
        assert_eq!(all.len(), Os::COUNT);
        assert_eq!(all[&Os::MacOs], vec![Pair::new("Apple", "M1")]);
    }

    #[test]
    fn test_cached_list_is_stable() {
        let store = store();
        let first = store.catalog().pairs_for(Os::Windows).as_ptr();
        let second = store.catalog().pairs_for(Os::Windows).as_ptr();
        assert_eq!(first, second);
        assert!(store.catalog().contains(Os::MacOs, "Apple", "M1"));
        assert!(!store.catalog().contains(Os::Windows, "Apple", "M1"));
    }

    #[test]
    fn test_pair_display() {
        assert_eq!(Pair::new("Google Inc.", "ANGLE").to_string(), "Google Inc., ANGLE");
    }
}
