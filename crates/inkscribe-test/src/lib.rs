//! inkscribe-test - Regression test helpers for inkscribe
//!
//! Every regression test creates a [`RegParams`], records a sequence of
//! numbered comparisons and finally asserts on [`RegParams::cleanup`],
//! which reports every failed comparison at once.
//!
//! # Usage
//!
//! ```
//! use inkscribe_test::{RegParams, glyph_from_rows};
//!
//! let mut rp = RegParams::new("glyph");
//! let page = glyph_from_rows(&["##..", "....", "#..."]).unwrap();
//! rp.compare_values(3.0, page.ink_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{glyph_from_rows, glyph_to_rows, stamp};
pub use params::RegParams;

use inkscribe_core::GlyphMatrix;

/// Load a binarized test page from the test data directory
///
/// # Arguments
///
/// * `name` - Page filename (e.g., "two_lines.pbm")
pub fn load_test_page(name: &str) -> TestResult<GlyphMatrix> {
    let path = test_data_path(name);
    inkscribe_io::read_image(&path).map_err(|e| TestError::PageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // inkscribe-test is at crates/inkscribe-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get a path for a regression output file, creating the directory
pub fn regout_path(name: &str) -> TestResult<String> {
    let dir = regout_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(format!("{dir}/{name}"))
}
