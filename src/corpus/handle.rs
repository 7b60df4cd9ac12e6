//! Lazily-opened, closable corpus handle.
//!
//! ```text
//! Unopened --get()/open_async()--> Ready --close()--> Closed
//! ```
//!
//! A failed load leaves the handle `Unopened`; the next call retries.
//! Every operation on a `Closed` handle fails with `StoreClosed`.

use crate::base::fperror::FingerprintError;
use crate::corpus::config::CorpusConfig;
use crate::corpus::store::Store;
use crate::selector::Selector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, PoisonError, RwLock};

/// Lifecycle state of a [`CorpusHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreState {
    /// Not loaded yet.
    #[default]
    Unopened,
    /// Loaded and shareable.
    Ready,
    /// Released; no further use.
    Closed,
}

#[derive(Debug)]
enum Slot {
    Unopened,
    Ready(Arc<Store>),
    Closed,
}

/// Owns the corpus for a process or component.
#[derive(Debug)]
pub struct CorpusHandle {
    config: CorpusConfig,
    slot: RwLock<Slot>,
}

impl CorpusHandle {
    pub fn new(config: CorpusConfig) -> Self {
        Self {
            config,
            slot: RwLock::new(Slot::Unopened),
        }
    }

    /// Handle configured from the environment. See [`CorpusConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(CorpusConfig::from_env())
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    pub fn state(&self) -> StoreState {
        match *self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Slot::Unopened => StoreState::Unopened,
            Slot::Ready(_) => StoreState::Ready,
            Slot::Closed => StoreState::Closed,
        }
    }

    /// The loaded store, opening it on first use.
    ///
    /// Concurrent first calls load the artifact once.
    pub fn get(&self) -> Result<Arc<Store>, FingerprintError> {
        if let Some(ready) = self.ready()? {
            return Ok(ready);
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Slot::Ready(store) => return Ok(Arc::clone(store)),
            Slot::Closed => return Err(FingerprintError::StoreClosed),
            Slot::Unopened => {}
        }

        let store = Arc::new(Store::open(&self.config.path)?);
        *slot = Slot::Ready(Arc::clone(&store));
        Ok(store)
    }

    /// Load on a blocking worker thread, bounded by `load_timeout`.
    ///
    /// On timeout the load is abandoned and no store is installed.
    pub async fn open_async(&self) -> Result<Arc<Store>, FingerprintError> {
        if let Some(ready) = self.ready()? {
            return Ok(ready);
        }

        let path = self.config.path.clone();
        let task = tokio::task::spawn_blocking({
            let path = path.clone();
            move || Store::open(path)
        });

        let joined = match self.config.load_timeout {
            Some(timeout) => tokio::time::timeout(timeout, task).await.map_err(|_| {
                tracing::warn!(path = %path.display(), ?timeout, "corpus load timed out");
                FingerprintError::LoadTimedOut {
                    path: path.clone(),
                    timeout,
                }
            })?,
            None => task.await,
        };
        let store = Arc::new(joined.map_err(|_| FingerprintError::LoadCancelled { path })??);

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Slot::Ready(existing) => return Ok(Arc::clone(existing)),
            Slot::Closed => return Err(FingerprintError::StoreClosed),
            Slot::Unopened => {}
        }

        *slot = Slot::Ready(Arc::clone(&store));
        Ok(store)
    }

    /// Selector over the loaded store.
    pub fn selector(&self) -> Result<Selector, FingerprintError> {
        self.get().map(Selector::new)
    }

    /// Random generator for selections: seeded from the config when a seed
    /// is set, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Release the store. Outstanding `Arc<Store>` clones stay valid until
    /// dropped.
    pub fn close(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if let Slot::Ready(_) = std::mem::replace(&mut *slot, Slot::Closed) {
            tracing::debug!(path = %self.config.path.display(), "corpus handle closed");
        }
    }

    fn ready(&self) -> Result<Option<Arc<Store>>, FingerprintError> {
        match &*self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Slot::Ready(store) => Ok(Some(Arc::clone(store))),
            Slot::Closed => Err(FingerprintError::StoreClosed),
            Slot::Unopened => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_stays_unopened() {
        let handle = CorpusHandle::new(CorpusConfig::builder().path("/nonexistent/corpus.db").build());
        assert_eq!(handle.state(), StoreState::Unopened);
        assert!(matches!(handle.get(), Err(FingerprintError::CorpusLoad { .. })));
        assert_eq!(handle.state(), StoreState::Unopened);
    }

    #[test]
    fn test_closed_handle_fails_fast() {
        let handle = CorpusHandle::new(CorpusConfig::default());
        handle.close();
        assert_eq!(handle.state(), StoreState::Closed);
        assert_eq!(handle.get().unwrap_err(), FingerprintError::StoreClosed);
        assert!(matches!(handle.selector(), Err(FingerprintError::StoreClosed)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;

        let handle = CorpusHandle::new(CorpusConfig::builder().seed(99).build());
        let a: u64 = handle.rng().random();
        let b: u64 = handle.rng().random();
        assert_eq!(a, b);
    }
}
