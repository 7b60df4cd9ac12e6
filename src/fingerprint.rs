//! Fingerprint payloads.
//!
//! A [`Fingerprint`] is the attribute bag stored with a corpus row
//! (`webGl:vendor`, `webGl:renderer`, parameter tables, extension lists and
//! so on). The engine never looks inside it; it is handed to the browser
//! configuration as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque WebGL attribute payload for one vendor/renderer pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(Map<String, Value>);

impl Fingerprint {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Parse a payload; anything but a JSON object is rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Compact JSON text of the payload.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Copy every attribute into `config` unless the key is already set there.
    ///
    /// Returns the number of keys inserted. Caller-provided values always win.
    pub fn merge_into(&self, config: &mut Map<String, Value>) -> usize {
        let mut inserted = 0;
        for (key, value) in &self.0 {
            if !config.contains_key(key) {
                config.insert(key.clone(), value.clone());
                inserted += 1;
            }
        }
        inserted
    }
}

impl From<Fingerprint> for Value {
    fn from(fp: Fingerprint) -> Self {
        Value::Object(fp.0)
    }
}

impl From<Map<String, Value>> for Fingerprint {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
