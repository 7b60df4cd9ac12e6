//! Fingerprint corpus storage.
//!
//! - [`store`]: the in-memory, immutable corpus table
//! - [`handle`]: lazy, closable ownership of a store
//! - [`record`]: corpus rows and per-OS weights
//! - [`schema`]: artifact table and column names
//! - [`config`]: corpus location and selection settings

pub mod config;
pub mod handle;
pub mod record;
pub mod schema;
pub mod store;

pub use config::CorpusConfig;
pub use handle::{CorpusHandle, StoreState};
pub use record::{FingerprintRecord, Weights};
pub use store::Store;
