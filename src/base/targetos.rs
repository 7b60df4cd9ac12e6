//! Target operating system keys.
//!
//! The corpus carries one weight column per supported OS. The set is closed:
//! adding an OS means adding a variant here and a column to the artifact.

use crate::base::fperror::FingerprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system a fingerprint must be consistent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Os {
    /// Windows (`win`).
    #[serde(rename = "win")]
    Windows,
    /// macOS (`mac`).
    #[serde(rename = "mac")]
    MacOs,
    /// Linux (`lin`).
    #[serde(rename = "lin")]
    Linux,
}

impl Os {
    /// Number of supported OS keys.
    pub const COUNT: usize = 3;

    /// Every supported OS, in column order.
    pub const ALL: [Os; Os::COUNT] = [Os::Windows, Os::MacOs, Os::Linux];

    /// Canonical short key, also the corpus column name.
    pub const fn key(self) -> &'static str {
        match self {
            Os::Windows => "win",
            Os::MacOs => "mac",
            Os::Linux => "lin",
        }
    }

    /// Position of this OS in per-record weight arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Os::Windows => 0,
            Os::MacOs => 1,
            Os::Linux => 2,
        }
    }

    /// Parse a key, accepting `win`/`windows`, `mac`/`macos`, `lin`/`linux`.
    pub fn from_key(key: &str) -> Option<Os> {
        match key.trim().to_ascii_lowercase().as_str() {
            "win" | "windows" => Some(Os::Windows),
            "mac" | "macos" => Some(Os::MacOs),
            "lin" | "linux" => Some(Os::Linux),
            _ => None,
        }
    }

    /// Comma-separated list of canonical keys, for messages.
    pub fn recognized_keys() -> String {
        Os::ALL.iter().map(|os| os.key()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Os {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Os::from_key(s).ok_or_else(|| FingerprintError::unknown_os(s))
    }
}
