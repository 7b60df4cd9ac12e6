//! Corpus artifact layout.
//!
//! The artifact is a SQLite database with one table:
//!
//! ```text
//! webgl_fingerprints(vendor TEXT, renderer TEXT, data TEXT, win INTEGER, mac INTEGER, lin INTEGER)
//! ```
//!
//! `data` holds the JSON attribute payload. Each OS column holds the observed
//! popularity of the row on that OS, `0` meaning the row does not apply.

use crate::base::targetos::Os;

/// Default artifact file name.
pub const DEFAULT_CORPUS_FILE: &str = "webgl_data.db";

/// Fingerprint table name.
pub const TABLE: &str = "webgl_fingerprints";

pub const VENDOR_COLUMN: &str = "vendor";
pub const RENDERER_COLUMN: &str = "renderer";
pub const PAYLOAD_COLUMN: &str = "data";

/// Every column the loader requires, OS weight columns last.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![VENDOR_COLUMN, RENDERER_COLUMN, PAYLOAD_COLUMN];
    columns.extend(Os::ALL.iter().map(|os| os.key()));
    columns
}

/// The single read query. Column names come from the closed `Os` set only.
pub fn select_all_sql() -> String {
    format!("SELECT rowid, {} FROM {} ORDER BY rowid", required_columns().join(", "), TABLE)
}

/// Position of the first OS weight column in [`select_all_sql`] rows.
pub const FIRST_WEIGHT_INDEX: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_shape() {
        assert_eq!(
            select_all_sql(),
            "SELECT rowid, vendor, renderer, data, win, mac, lin FROM webgl_fingerprints ORDER BY rowid"
        );
    }

    #[test]
    fn test_weight_columns_follow_payload() {
        let columns = required_columns();
        // rowid occupies index 0 in the query
        assert_eq!(columns[FIRST_WEIGHT_INDEX - 1], Os::ALL[0].key());
        assert_eq!(columns.len(), 3 + Os::COUNT);
    }
}
