//! inkscribe-recog - Glyph recognition
//!
//! Feature extraction and the two interchangeable classifiers behind the
//! [`Classifier`] trait:
//!
//! - [`ExemplarClassifier`] - association memory answering with the most
//!   emphasized matching sample
//! - [`NeuralNetwork`] - two-layer sigmoid network trained by
//!   backpropagation (see [`train`])
//!
//! # Examples
//!
//! ```
//! use inkscribe_recog::{Classifier, ExemplarClassifier, FeatureOptions, extract};
//! use inkscribe_core::GlyphMatrix;
//!
//! let mut glyph = GlyphMatrix::new(3, 3);
//! glyph.set(1, 1, true).unwrap();
//! let features = extract(&glyph, &FeatureOptions::default());
//!
//! let mut memory = ExemplarClassifier::new();
//! memory.learn(features.clone(), "o", 1.0);
//! assert_eq!(memory.classify(&features).as_deref(), Some("o"));
//! ```

pub mod classifier;
pub mod error;
pub mod exemplar;
pub mod features;
pub mod network;
pub mod train;

pub use classifier::Classifier;
pub use error::{RecogError, RecogResult};
pub use exemplar::{Association, ExemplarClassifier, ExemplarOptions};
pub use features::{FeatureOptions, extract};
pub use network::{NetworkOptions, NeuralNetwork};
pub use train::{
    CostResult, GradientDescent, LayerSizes, Optimizer, cost_function, merge_thetas,
    rand_initialize_weights, sigmoid, unmerge_thetas,
};
