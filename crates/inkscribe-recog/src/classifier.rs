//! Classifier abstraction
//!
//! Both recognition strategies map a feature vector (see
//! [`crate::features`]) to a label. The orchestrator only talks to this
//! trait, so strategies are interchangeable.

use crate::error::RecogResult;

/// A trainable mapping from feature vectors to labels
pub trait Classifier {
    /// Classify one feature vector
    ///
    /// Returns `None` when no label can be given; callers render that as
    /// the unknown-character sentinel.
    fn classify(&self, features: &[f64]) -> Option<String>;

    /// Train on aligned samples and labels
    ///
    /// `weight` is a strategy-specific strength: the emphasis of each new
    /// association for the exemplar memory, a learning-rate factor for
    /// the network.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::LengthMismatch`] if `samples` and
    /// `labels` have different lengths.
    fn train(&mut self, samples: &[Vec<f64>], labels: &[String], weight: f64)
    -> RecogResult<()>;
}

pub(crate) fn check_aligned(samples: usize, labels: usize) -> RecogResult<()> {
    if samples != labels {
        return Err(crate::RecogError::LengthMismatch { samples, labels });
    }
    Ok(())
}
