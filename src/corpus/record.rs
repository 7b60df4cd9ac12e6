//! Corpus rows.

use crate::base::targetos::Os;
use crate::catalog::Pair;
use crate::fingerprint::Fingerprint;
use std::ops::Index;

/// Per-OS popularity weights, indexed by [`Os`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weights([u32; Os::COUNT]);

impl Weights {
    /// Weights in [`Os::ALL`] order.
    pub const fn new(values: [u32; Os::COUNT]) -> Self {
        Self(values)
    }

    /// Weight set applicable to a single OS.
    pub fn only(os: Os, weight: u32) -> Self {
        Self::default().with(os, weight)
    }

    /// Set the weight for one OS.
    pub fn with(mut self, os: Os, weight: u32) -> Self {
        self.0[os.index()] = weight;
        self
    }

    #[inline]
    pub fn get(&self, os: Os) -> u32 {
        self.0[os.index()]
    }

    /// OS keys this row applies to.
    pub fn applicable(&self) -> impl Iterator<Item = Os> + '_ {
        Os::ALL.into_iter().filter(move |os| self.get(*os) > 0)
    }
}

impl Index<Os> for Weights {
    type Output = u32;

    fn index(&self, os: Os) -> &u32 {
        &self.0[os.index()]
    }
}

/// One observed fingerprint: a GPU vendor/renderer pairing, its popularity
/// on each OS, and the attribute payload handed back to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerprintRecord {
    pub vendor: String,
    pub renderer: String,
    pub weights: Weights,
    pub payload: Fingerprint,
}

impl FingerprintRecord {
    pub fn new(
        vendor: impl Into<String>,
        renderer: impl Into<String>,
        weights: Weights,
        payload: Fingerprint,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            renderer: renderer.into(),
            weights,
            payload,
        }
    }

    #[inline]
    pub fn weight(&self, os: Os) -> u32 {
        self.weights.get(os)
    }

    /// Whether this row may be returned for `os`.
    #[inline]
    pub fn is_eligible(&self, os: Os) -> bool {
        self.weight(os) > 0
    }

    pub fn matches(&self, vendor: &str, renderer: &str) -> bool {
        self.vendor == vendor && self.renderer == renderer
    }

    pub fn pair(&self) -> Pair {
        Pair::new(self.vendor.as_str(), self.renderer.as_str())
    }
}
