//! Base types and error handling.
//!
//! - [`FingerprintError`](fperror::FingerprintError): every failure the engine reports
//! - [`Os`](targetos::Os): the closed set of target operating systems
//! - [`LoadResultExt`](context::LoadResultExt): corpus-path context for load errors

pub mod context;
pub mod fperror;
pub mod targetos;
