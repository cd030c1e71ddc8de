//! Regression test parameters and operations

use inkscribe_core::GlyphMatrix;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current comparison index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "lines")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two glyph matrices for exact equality, tags included
    pub fn compare_glyphs(&mut self, expected: &GlyphMatrix, actual: &GlyphMatrix) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: glyph comparison for index {} - dimension mismatch \
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.fail(msg);
            return false;
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: glyph comparison for index {}\nexpected:\n{}actual:\n{}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {}: {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
