//! Two-layer sigmoid network classifier
//!
//! A fully connected network with one hidden layer. Output unit `k`
//! stands for `charset[k]`; the most active output is the predicted
//! label. Training runs [`GradientDescent`] over [`cost_function`].

use std::path::Path;

use inkscribe_core::Matrix;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::classifier::{Classifier, check_aligned};
use crate::error::{RecogError, RecogResult};
use crate::train::{
    GradientDescent, LayerSizes, Optimizer, cost_function, feed_forward, merge_thetas,
    rand_initialize_weights, unmerge_thetas,
};

/// Network construction and training options
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkOptions {
    /// Hidden layer size (default: 25)
    pub hidden_size: usize,
    /// Initial weights are drawn from `[-epsilon, epsilon]` (default: 0.12)
    pub epsilon: f64,
    /// Outputs whose highest activation is below this are unknown
    /// (default: 0.0, never unknown)
    pub min_confidence: f64,
    /// Gradient descent iterations per training call (default: 200)
    pub iterations: usize,
    /// Gradient descent step size (default: 1.0)
    pub learning_rate: f64,
    /// Seed for weight initialization; random when `None`
    pub seed: Option<u64>,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            hidden_size: 25,
            epsilon: 0.12,
            min_confidence: 0.0,
            iterations: 200,
            learning_rate: 1.0,
            seed: None,
        }
    }
}

impl NetworkOptions {
    pub fn with_hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Set gradient descent iterations and step size
    pub fn with_training(mut self, iterations: usize, learning_rate: f64) -> Self {
        self.iterations = iterations;
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Two-layer network classifier
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    sizes: LayerSizes,
    charset: Vec<String>,
    theta1: Matrix,
    theta2: Matrix,
    options: NetworkOptions,
}

impl NeuralNetwork {
    /// Create a network with randomly initialized weights
    ///
    /// The output layer has one unit per `charset` entry.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if `input_size`, the hidden
    /// size or the charset is empty, the charset has duplicates, or
    /// `epsilon` is negative.
    pub fn new(input_size: usize, charset: Vec<String>, options: NetworkOptions) -> RecogResult<Self> {
        let sizes = LayerSizes::new(input_size, options.hidden_size, charset.len());
        validate(sizes, &charset)?;

        let seed = options.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let theta1 = rand_initialize_weights(sizes.hidden, sizes.input, options.epsilon, &mut rng)?;
        let theta2 = rand_initialize_weights(sizes.output, sizes.hidden, options.epsilon, &mut rng)?;
        debug!(
            "network: initialized {}-{}-{} with seed {seed}",
            sizes.input, sizes.hidden, sizes.output
        );

        Ok(Self {
            sizes,
            charset,
            theta1,
            theta2,
            options,
        })
    }

    /// Create a network from a merged parameter vector
    ///
    /// Installs parameters produced by an external optimizer over
    /// [`cost_function`].
    pub fn from_params(
        params: &[f64],
        sizes: LayerSizes,
        charset: Vec<String>,
        options: NetworkOptions,
    ) -> RecogResult<Self> {
        if sizes.output != charset.len() {
            return Err(RecogError::InvalidParameter(format!(
                "{} output units but {} labels",
                sizes.output,
                charset.len()
            )));
        }
        validate(sizes, &charset)?;
        let (theta1, theta2) = unmerge_thetas(params, sizes)?;
        Ok(Self {
            sizes,
            charset,
            theta1,
            theta2,
            options: NetworkOptions {
                hidden_size: sizes.hidden,
                ..options
            },
        })
    }

    /// Load weights saved by [`NeuralNetwork::save`]
    ///
    /// Layer sizes are taken from the stored matrices.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Core`] if either file can't be read or
    /// decoded, and [`RecogError::InvalidWeights`] if the matrices don't
    /// fit together or don't match `charset`.
    pub fn load(
        theta1_path: impl AsRef<Path>,
        theta2_path: impl AsRef<Path>,
        charset: Vec<String>,
        options: NetworkOptions,
    ) -> RecogResult<Self> {
        let theta1 = Matrix::read_from_file(theta1_path)?;
        let theta2 = Matrix::read_from_file(theta2_path)?;
        if theta1.cols() < 2 || theta2.cols() != theta1.rows() + 1 {
            return Err(RecogError::InvalidWeights(format!(
                "theta1 is {}x{}, theta2 is {}x{}",
                theta1.rows(),
                theta1.cols(),
                theta2.rows(),
                theta2.cols()
            )));
        }
        if theta2.rows() != charset.len() {
            return Err(RecogError::InvalidWeights(format!(
                "{} output units but {} labels",
                theta2.rows(),
                charset.len()
            )));
        }
        let sizes = LayerSizes::new(theta1.cols() - 1, theta1.rows(), theta2.rows());
        validate(sizes, &charset)?;
        info!(
            "network: loaded {}-{}-{} weights",
            sizes.input, sizes.hidden, sizes.output
        );
        Ok(Self {
            sizes,
            charset,
            theta1,
            theta2,
            options: NetworkOptions {
                hidden_size: sizes.hidden,
                ..options
            },
        })
    }

    /// Load saved weights, or start from random weights if they are
    /// missing, unreadable or don't fit `input_size` and `charset`
    pub fn load_or_init(
        theta1_path: impl AsRef<Path>,
        theta2_path: impl AsRef<Path>,
        input_size: usize,
        charset: Vec<String>,
        options: NetworkOptions,
    ) -> RecogResult<Self> {
        let (p1, p2) = (theta1_path.as_ref(), theta2_path.as_ref());
        match Self::load(p1, p2, charset.clone(), options.clone()) {
            Ok(net) if net.sizes.input == input_size => Ok(net),
            Ok(net) => {
                warn!(
                    "network: stored weights expect {} inputs, not {input_size}; reinitializing",
                    net.sizes.input
                );
                Self::new(input_size, charset, options)
            }
            Err(e) => {
                warn!(
                    "network: can't load weights from {} and {}: {e}; reinitializing",
                    p1.display(),
                    p2.display()
                );
                Self::new(input_size, charset, options)
            }
        }
    }

    /// Save both weight matrices in the matrix text format
    pub fn save(&self, theta1_path: impl AsRef<Path>, theta2_path: impl AsRef<Path>) -> RecogResult<()> {
        self.theta1.write_to_file(theta1_path)?;
        self.theta2.write_to_file(theta2_path)?;
        Ok(())
    }

    pub fn sizes(&self) -> LayerSizes {
        self.sizes
    }

    pub fn charset(&self) -> &[String] {
        &self.charset
    }

    pub fn options(&self) -> &NetworkOptions {
        &self.options
    }

    pub fn theta1(&self) -> &Matrix {
        &self.theta1
    }

    pub fn theta2(&self) -> &Matrix {
        &self.theta2
    }

    /// Merged parameter vector (see [`crate::train`] for the layout)
    pub fn params(&self) -> Vec<f64> {
        merge_thetas(&self.theta1, &self.theta2)
    }

    /// Replace the weights with a merged parameter vector
    pub fn set_params(&mut self, params: &[f64]) -> RecogResult<()> {
        let (theta1, theta2) = unmerge_thetas(params, self.sizes)?;
        self.theta1 = theta1;
        self.theta2 = theta2;
        Ok(())
    }

    /// Output activations for one feature vector
    pub fn forward(&self, features: &[f64]) -> RecogResult<Vec<f64>> {
        let act = feed_forward(&self.theta1, &self.theta2, features)?;
        Ok(act.a3.data().to_vec())
    }

    /// Output class index of a label
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.charset.iter().position(|c| c == label)
    }
}

fn validate(sizes: LayerSizes, charset: &[String]) -> RecogResult<()> {
    if sizes.input == 0 || sizes.hidden == 0 || sizes.output == 0 {
        return Err(RecogError::InvalidParameter(format!(
            "layer sizes must be positive, got {}-{}-{}",
            sizes.input, sizes.hidden, sizes.output
        )));
    }
    for (i, label) in charset.iter().enumerate() {
        if charset[..i].contains(label) {
            return Err(RecogError::InvalidParameter(format!(
                "duplicate label {label:?} in charset"
            )));
        }
    }
    Ok(())
}

impl Classifier for NeuralNetwork {
    fn classify(&self, features: &[f64]) -> Option<String> {
        let output = match self.forward(features) {
            Ok(output) => output,
            Err(e) => {
                warn!("network: can't classify: {e}");
                return None;
            }
        };
        let (best, confidence) = output
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, v)| if v > acc.1 { (i, v) } else { acc });
        if self.options.min_confidence > 0.0 && confidence < self.options.min_confidence {
            return None;
        }
        self.charset.get(best).cloned()
    }

    /// Gradient descent over the batch; `weight` scales the learning rate
    fn train(&mut self, samples: &[Vec<f64>], labels: &[String], weight: f64) -> RecogResult<()> {
        check_aligned(samples.len(), labels.len())?;
        let indices = labels
            .iter()
            .map(|l| {
                self.label_index(l)
                    .ok_or_else(|| RecogError::UnknownLabel(l.clone()))
            })
            .collect::<RecogResult<Vec<usize>>>()?;

        let optimizer = GradientDescent {
            iterations: self.options.iterations,
            learning_rate: self.options.learning_rate * weight,
        };
        let sizes = self.sizes;
        let params = optimizer.minimize(self.params(), |p| {
            cost_function(p, sizes, samples, &indices)
        })?;
        self.set_params(&params)?;
        info!(
            "network: trained on {} samples for {} iterations",
            samples.len(),
            optimizer.iterations
        );
        Ok(())
    }
}
