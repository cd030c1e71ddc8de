//! Matrix regression test
//!
//!   Test 0: write_to_file() / read_from_file() -- exact round trip of
//!           awkward values
//!   Test 1: read_from_bytes() -- multi-line weight files

use inkscribe_core::Matrix;
use inkscribe_test::{RegParams, regout_path};

/// Test 0: file round trip
#[test]
fn test_0_file_round_trip() {
    let mut rp = RegParams::new("matrix_0_round_trip");

    let values: Vec<f64> = (0..12)
        .map(|i| (i as f64 - 5.5) / 7.0 * 10f64.powi(i - 6))
        .collect();
    let m = Matrix::from_vec(3, 4, values).expect("matrix");
    let path = regout_path("matrix_0.txt").expect("regout");
    m.write_to_file(&path).expect("write");
    let restored = Matrix::read_from_file(&path).expect("read");

    rp.check(restored.shape() == m.shape(), "shape restored");
    for (a, b) in m.data().iter().zip(restored.data()) {
        rp.compare_values(*a, *b, 0.0);
    }

    assert!(rp.cleanup(), "matrix_0 regression test failed");
}

/// Test 1: one row per line
#[test]
fn test_1_multiline() {
    let mut rp = RegParams::new("matrix_1_multiline");

    let m = Matrix::read_from_bytes(b"0.5,-0.25,1e-3;\n2,3,4;\n").expect("parse");
    rp.check(m.shape() == (2, 3), "2x3 matrix");
    rp.compare_values(0.001, m.get(0, 2).unwrap_or(f64::NAN), 0.0);
    rp.compare_values(4.0, m.get(1, 2).unwrap_or(f64::NAN), 0.0);

    assert!(rp.cleanup(), "matrix_1 regression test failed");
}
