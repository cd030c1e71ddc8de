//! Exemplar association memory
//!
//! The simplest classifier: every training sample is remembered as an
//! association `(features -> label, emphasis)`. A query is answered by the
//! matching association with the highest emphasis.

use crate::classifier::{Classifier, check_aligned};
use crate::error::RecogResult;

/// One learned sample
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub source: Vec<f64>,
    pub label: String,
    pub emphasis: f64,
}

/// Exemplar matching options
#[derive(Debug, Clone, PartialEq)]
pub struct ExemplarOptions {
    /// Largest Euclidean distance at which a stored source still matches
    /// a query (default: 0.0, exact equality)
    pub max_distance: f64,
}

impl Default for ExemplarOptions {
    fn default() -> Self {
        Self { max_distance: 0.0 }
    }
}

impl ExemplarOptions {
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }
}

/// Association memory classifier
#[derive(Debug, Clone, Default)]
pub struct ExemplarClassifier {
    options: ExemplarOptions,
    associations: Vec<Association>,
}

impl ExemplarClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExemplarOptions) -> Self {
        Self {
            options,
            associations: Vec::new(),
        }
    }

    pub fn options(&self) -> &ExemplarOptions {
        &self.options
    }

    /// Remember one association
    pub fn learn(&mut self, source: Vec<f64>, label: impl Into<String>, emphasis: f64) {
        self.associations.push(Association {
            source,
            label: label.into(),
            emphasis,
        });
    }

    /// Remember aligned lists of sources and labels with a shared emphasis
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::LengthMismatch`] when the lists differ
    /// in length; nothing is learned in that case.
    pub fn learn_all(
        &mut self,
        sources: &[Vec<f64>],
        labels: &[String],
        emphasis: f64,
    ) -> RecogResult<()> {
        check_aligned(sources.len(), labels.len())?;
        for (source, label) in sources.iter().zip(labels) {
            self.learn(source.clone(), label.clone(), emphasis);
        }
        log::debug!(
            "exemplar: learned {} associations, {} total",
            sources.len(),
            self.associations.len()
        );
        Ok(())
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }

    fn matches(&self, source: &[f64], query: &[f64]) -> bool {
        if source.len() != query.len() {
            return false;
        }
        if self.options.max_distance <= 0.0 {
            return source == query;
        }
        let dist_sq: f64 = source
            .iter()
            .zip(query)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        dist_sq.sqrt() <= self.options.max_distance
    }
}

impl Classifier for ExemplarClassifier {
    /// Label of the matching association with the highest emphasis
    ///
    /// Only emphases strictly above zero are considered; among equal
    /// emphases the association learned first wins.
    fn classify(&self, features: &[f64]) -> Option<String> {
        let mut best: Option<&Association> = None;
        for assoc in &self.associations {
            if !self.matches(&assoc.source, features) {
                continue;
            }
            let highest = best.map_or(0.0, |b| b.emphasis);
            if assoc.emphasis > highest {
                best = Some(assoc);
            }
        }
        best.map(|a| a.label.clone())
    }

    fn train(&mut self, samples: &[Vec<f64>], labels: &[String], weight: f64) -> RecogResult<()> {
        self.learn_all(samples, labels, weight)
    }
}
