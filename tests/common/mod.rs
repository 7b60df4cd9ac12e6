//! Shared helpers for building corpus artifacts on disk.

#![allow(dead_code)]

use rusqlite::{params, Connection};
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CREATE_TABLE: &str = "CREATE TABLE webgl_fingerprints (
    vendor TEXT NOT NULL,
    renderer TEXT NOT NULL,
    data TEXT NOT NULL,
    win INTEGER NOT NULL DEFAULT 0,
    mac INTEGER NOT NULL DEFAULT 0,
    lin INTEGER NOT NULL DEFAULT 0
)";

/// Payload stored for a row: tagged with its pair so tests can tell rows apart.
pub fn payload(vendor: &str, renderer: &str) -> serde_json::Value {
    json!({
        "webGl:vendor": vendor,
        "webGl:renderer": renderer,
        "webGl:parameters": { "3379": 16384, "34921": 16 },
        "webGl:supportedExtensions": ["ANGLE_instanced_arrays", "OES_texture_float"],
    })
}

/// Write a corpus with `(vendor, renderer, [win, mac, lin])` rows in order.
pub fn write_corpus(dir: &Path, rows: &[(&str, &str, [i64; 3])]) -> PathBuf {
    let path = dir.join("webgl_data.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute(CREATE_TABLE, []).unwrap();
    for (vendor, renderer, [win, mac, lin]) in rows {
        conn.execute(
            "INSERT INTO webgl_fingerprints (vendor, renderer, data, win, mac, lin)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![vendor, renderer, payload(vendor, renderer).to_string(), win, mac, lin],
        )
        .unwrap();
    }
    path
}

/// Run raw SQL against a fresh database file.
pub fn write_raw(dir: &Path, sql: &str) -> PathBuf {
    let path = dir.join("webgl_data.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(sql).unwrap();
    path
}

/// Realistic three-OS corpus.
pub fn standard_rows() -> Vec<(&'static str, &'static str, [i64; 3])> {
    vec![
        (
            "Google Inc. (NVIDIA)",
            "ANGLE (NVIDIA, NVIDIA GeForce GTX 1650 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            [120, 0, 0],
        ),
        (
            "Google Inc. (Intel)",
            "ANGLE (Intel, Intel(R) UHD Graphics 620 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            [300, 0, 0],
        ),
        ("Apple", "Apple M1", [0, 250, 0]),
        ("Intel Inc.", "Intel Iris OpenGL Engine", [0, 40, 0]),
        ("Intel", "Mesa Intel(R) UHD Graphics 620 (KBL GT2)", [0, 0, 90]),
        ("AMD", "AMD Radeon RX 580 (polaris10, LLVM 15.0.7, DRM 3.49)", [5, 0, 90]),
        ("Mozilla", "Mozilla", [0, 0, 0]),
    ]
}

pub fn standard_corpus() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(dir.path(), &standard_rows());
    (dir, path)
}
