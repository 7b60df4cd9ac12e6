//! # glprint
//!
//! WebGL/GPU fingerprint selection for browser emulation.
//!
//! `glprint` picks a vendor, renderer and attribute payload that is
//! consistent with a target operating system. Fingerprints come from a
//! precompiled corpus of real-world observations, each weighted by how often
//! it was seen on Windows, macOS and Linux.
//!
//! ## Features
//!
//! - **Exact selection**: validate a caller-chosen vendor/renderer pair
//!   against the target OS, listing every valid pair on failure
//! - **Weighted random selection**: draws proportional to observed
//!   popularity, reproducible with a seeded generator
//! - **Pair catalog**: valid pairs per OS, most popular first
//! - **Launch config**: merge the chosen fingerprint into browser settings
//!   without clobbering caller values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glprint::corpus::{CorpusConfig, CorpusHandle};
//!
//! let handle = CorpusHandle::new(CorpusConfig::builder().path("webgl_data.db").seed(7).build());
//! let selector = handle.selector()?;
//!
//! let mut rng = handle.rng();
//! let fingerprint = selector.select_random("win", &mut rng)?;
//! println!("{}", fingerprint.to_json());
//! # Ok::<(), glprint::base::fperror::FingerprintError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and the OS enumeration
//! - [`corpus`] - Corpus loading, records and configuration
//! - [`catalog`] - Valid (vendor, renderer) pairs per OS
//! - [`selector`] - Exact and weighted-random selection
//! - [`fingerprint`] - The opaque attribute payload
//! - [`launch`] - Merging fingerprints into launch configuration
//! - [`proxy`] - Proxy strings and IP checks
//! - [`warnings`] - Leak warnings

pub mod base;
pub mod catalog;
pub mod corpus;
pub mod fingerprint;
pub mod launch;
pub mod proxy;
pub mod selector;
pub mod warnings;

pub use base::fperror::FingerprintError;
pub use base::targetos::Os;
pub use catalog::{Pair, PairCatalog};
pub use fingerprint::Fingerprint;
pub use selector::Selector;
