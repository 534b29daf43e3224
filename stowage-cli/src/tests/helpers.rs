//! Test helpers for writing CLI inputs into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test input");
}

/// Create a temporary directory and return it with its UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A catalog with two sufficient listings at location 1 and one at 2.
pub(super) const CATALOG_JSON: &[u8] = br#"[
    {"id": 1, "location_id": 1, "length": 20, "width": 10, "price_in_cents": 500},
    {"id": 2, "location_id": 1, "length": 20, "width": 10, "price_in_cents": 300},
    {"id": 3, "location_id": 2, "length": 25, "width": 20, "price_in_cents": 200}
]"#;

/// A request for one lane-wide car of length 20.
pub(super) const REQUEST_JSON: &[u8] = br#"[{"length": 20, "quantity": 1}]"#;
