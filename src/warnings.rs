//! Leak warnings.
//!
//! Configuration choices that make the emulated browser easier to tell apart
//! from a real one. Each warning is logged through `tracing` with the caller's
//! source location and can be silenced with `i_know_what_im_doing`.

use std::fmt;
use std::panic::Location;

const OPT_OUT_HINT: &str = "If this is intentional, pass `i_know_what_im_doing = true`.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeakWarning {
    /// WebGL disabled entirely.
    BlockWebgl,
    /// Proxy in use without matching geolocation.
    ProxyWithoutGeoip,
    /// Caller config already carries WebGL attributes.
    CustomFingerprint,
}

impl LeakWarning {
    pub fn key(self) -> &'static str {
        match self {
            LeakWarning::BlockWebgl => "block_webgl",
            LeakWarning::ProxyWithoutGeoip => "proxy_without_geoip",
            LeakWarning::CustomFingerprint => "custom_fingerprint",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            LeakWarning::BlockWebgl => {
                "Disabling WebGL is not recommended. Many WAFs check whether WebGL is available."
            }
            LeakWarning::ProxyWithoutGeoip => {
                "When using a proxy, enable geoip so locale and timezone match the exit IP."
            }
            LeakWarning::CustomFingerprint => {
                "Passing your own WebGL attributes is not recommended. Values are sampled from \
                 real devices for the target OS and may no longer be consistent."
            }
        }
    }

    /// Rendered message, or `None` when suppressed.
    ///
    /// `Some(true)` suppresses the warning; `Some(false)` appends a hint on
    /// how to silence it; `None` leaves the text as is.
    pub fn message(self, i_know_what_im_doing: Option<bool>) -> Option<String> {
        match i_know_what_im_doing {
            Some(true) => None,
            Some(false) => Some(format!("{}\n{}", self.text(), OPT_OUT_HINT)),
            None => Some(self.text().to_string()),
        }
    }

    /// Log the warning at the caller's location. Returns whether it was emitted.
    #[track_caller]
    pub fn warn(self, i_know_what_im_doing: Option<bool>) -> bool {
        let Some(message) = self.message(i_know_what_im_doing) else {
            return false;
        };
        let location = Location::caller();
        let at = format!("{}:{}", location.file(), location.line());
        tracing::warn!(key = self.key(), at = %at, "{}", message);
        true
    }
}

impl fmt::Display for LeakWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
