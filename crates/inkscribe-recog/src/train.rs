//! Network training
//!
//! Cost and gradient of the two-layer sigmoid network over a labelled
//! batch, weight initialization, the flat parameter layout shared with
//! optimizers, and a plain gradient-descent driver.
//!
//! # Parameter layout
//!
//! `theta1` is `hidden x (input + 1)` and `theta2` is
//! `output x (hidden + 1)`; column 0 of each holds the bias weights. The
//! merged parameter vector is the column-major flatten of `theta1`
//! followed by the column-major flatten of `theta2`.

use inkscribe_core::Matrix;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::classifier::check_aligned;
use crate::error::{RecogError, RecogResult};

/// Logistic function
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Probabilities are clamped away from 0 and 1 before taking logarithms
const LOG_EPSILON: f64 = 1e-15;

/// Layer sizes of a two-layer network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSizes {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl LayerSizes {
    pub fn new(input: usize, hidden: usize, output: usize) -> Self {
        Self {
            input,
            hidden,
            output,
        }
    }

    /// Shape of `theta1`
    pub fn theta1_shape(&self) -> (usize, usize) {
        (self.hidden, self.input + 1)
    }

    /// Shape of `theta2`
    pub fn theta2_shape(&self) -> (usize, usize) {
        (self.output, self.hidden + 1)
    }

    /// Length of the merged parameter vector
    pub fn param_count(&self) -> usize {
        self.hidden * (self.input + 1) + self.output * (self.hidden + 1)
    }
}

/// Cost and merged gradient at one parameter vector
#[derive(Debug, Clone, PartialEq)]
pub struct CostResult {
    pub cost: f64,
    pub gradient: Vec<f64>,
}

/// Random `rows x (cols + 1)` weight matrix, uniform in `[-epsilon, epsilon]`
pub fn rand_initialize_weights(
    rows: usize,
    cols: usize,
    epsilon: f64,
    rng: &mut StdRng,
) -> RecogResult<Matrix> {
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(RecogError::InvalidParameter(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )));
    }
    let dist = Uniform::new_inclusive(-epsilon, epsilon)
        .map_err(|e| RecogError::InvalidParameter(format!("weight range: {e}")))?;
    let data = (0..rows * (cols + 1)).map(|_| dist.sample(rng)).collect();
    Ok(Matrix::from_vec(rows, cols + 1, data)?)
}

/// Flatten both weight matrices into one parameter vector
pub fn merge_thetas(theta1: &Matrix, theta2: &Matrix) -> Vec<f64> {
    let mut merged = theta1.to_column_major();
    merged.extend(theta2.to_column_major());
    merged
}

/// Split a parameter vector back into `(theta1, theta2)`
///
/// # Errors
///
/// Returns [`RecogError::InvalidParameter`] if `params` doesn't have
/// exactly [`LayerSizes::param_count`] entries.
pub fn unmerge_thetas(params: &[f64], sizes: LayerSizes) -> RecogResult<(Matrix, Matrix)> {
    if params.len() != sizes.param_count() {
        return Err(RecogError::InvalidParameter(format!(
            "expected {} parameters for {}-{}-{} network, got {}",
            sizes.param_count(),
            sizes.input,
            sizes.hidden,
            sizes.output,
            params.len()
        )));
    }
    let (r1, c1) = sizes.theta1_shape();
    let (r2, c2) = sizes.theta2_shape();
    let split = r1 * c1;
    let theta1 = Matrix::from_column_major(r1, c1, &params[..split])?;
    let theta2 = Matrix::from_column_major(r2, c2, &params[split..])?;
    Ok((theta1, theta2))
}

/// Activations of one forward pass
pub(crate) struct Activations {
    /// `[1, x]`, 1 x (input + 1)
    pub a1: Matrix,
    /// `[1; sigmoid(z2)]`, (hidden + 1) x 1
    pub a2: Matrix,
    /// `sigmoid(z3)`, output x 1
    pub a3: Matrix,
}

/// Forward pass for one input vector
pub(crate) fn feed_forward(theta1: &Matrix, theta2: &Matrix, x: &[f64]) -> RecogResult<Activations> {
    if x.len() + 1 != theta1.cols() {
        return Err(RecogError::InvalidParameter(format!(
            "input has {} features, network expects {}",
            x.len(),
            theta1.cols().saturating_sub(1)
        )));
    }
    let mut with_bias = Vec::with_capacity(x.len() + 1);
    with_bias.push(1.0);
    with_bias.extend_from_slice(x);
    let a1 = Matrix::row(&with_bias);

    let z2 = theta1.matmul(&a1.transpose())?;
    let mut hidden = Vec::with_capacity(z2.rows() + 1);
    hidden.push(1.0);
    hidden.extend(z2.data().iter().map(|&z| sigmoid(z)));
    let a2 = Matrix::column(&hidden);

    let a3 = theta2.matmul(&a2)?.map(sigmoid);
    Ok(Activations { a1, a2, a3 })
}

/// Cross-entropy cost and backpropagated gradient over a batch
///
/// `labels[i]` is the output class index of `samples[i]`. The returned
/// gradient has the merged parameter layout and is averaged over the
/// batch, so its length is independent of the batch size. No
/// regularization term is applied.
///
/// # Errors
///
/// Returns [`RecogError::InvalidParameter`] for an empty batch, a wrong
/// parameter count, a sample of the wrong length or a label outside
/// `0..sizes.output`, and [`RecogError::LengthMismatch`] when samples
/// and labels are not aligned.
pub fn cost_function(
    params: &[f64],
    sizes: LayerSizes,
    samples: &[Vec<f64>],
    labels: &[usize],
) -> RecogResult<CostResult> {
    check_aligned(samples.len(), labels.len())?;
    if samples.is_empty() {
        return Err(RecogError::InvalidParameter(
            "training batch is empty".to_string(),
        ));
    }
    let (theta1, theta2) = unmerge_thetas(params, sizes)?;
    let (r1, c1) = sizes.theta1_shape();
    let (r2, c2) = sizes.theta2_shape();
    let mut theta1_grad = Matrix::zeros(r1, c1);
    let mut theta2_grad = Matrix::zeros(r2, c2);
    let theta2_t = theta2.transpose();
    let mut total = 0.0;

    for (x, &label) in samples.iter().zip(labels) {
        if label >= sizes.output {
            return Err(RecogError::InvalidParameter(format!(
                "label {label} out of range for {} output classes",
                sizes.output
            )));
        }
        let Activations { a1, a2, a3 } = feed_forward(&theta1, &theta2, x)?;

        let mut y = vec![0.0; sizes.output];
        y[label] = 1.0;
        let y = Matrix::column(&y);

        total += a3
            .data()
            .iter()
            .zip(y.data())
            .map(|(&h, &yk)| {
                let h = h.clamp(LOG_EPSILON, 1.0 - LOG_EPSILON);
                -yk * h.ln() - (1.0 - yk) * (1.0 - h).ln()
            })
            .sum::<f64>();

        let delta3 = a3.sub(&y)?;
        let slope = a2.hadamard(&a2.map(|v| 1.0 - v))?;
        let delta2 = theta2_t.matmul(&delta3)?.hadamard(&slope)?.without_first_row();

        theta1_grad.add_assign(&delta2.matmul(&a1)?)?;
        theta2_grad.add_assign(&delta3.matmul(&a2.transpose())?)?;
    }

    let m = samples.len() as f64;
    theta1_grad.scale(1.0 / m);
    theta2_grad.scale(1.0 / m);
    Ok(CostResult {
        cost: total / m,
        gradient: merge_thetas(&theta1_grad, &theta2_grad),
    })
}

/// Iterative minimizer of a cost function over a flat parameter vector
pub trait Optimizer {
    /// Minimize `objective` starting from `initial`, returning the final
    /// parameters
    fn minimize<F>(&self, initial: Vec<f64>, objective: F) -> RecogResult<Vec<f64>>
    where
        F: FnMut(&[f64]) -> RecogResult<CostResult>;
}

/// Fixed-step batch gradient descent
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescent {
    pub iterations: usize,
    pub learning_rate: f64,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            iterations: 200,
            learning_rate: 1.0,
        }
    }
}

impl Optimizer for GradientDescent {
    fn minimize<F>(&self, initial: Vec<f64>, mut objective: F) -> RecogResult<Vec<f64>>
    where
        F: FnMut(&[f64]) -> RecogResult<CostResult>,
    {
        let mut params = initial;
        for iter in 0..self.iterations {
            let CostResult { cost, gradient } = objective(&params)?;
            if gradient.len() != params.len() {
                return Err(RecogError::InvalidParameter(format!(
                    "gradient has {} entries, parameters have {}",
                    gradient.len(),
                    params.len()
                )));
            }
            for (p, g) in params.iter_mut().zip(&gradient) {
                *p -= self.learning_rate * g;
            }
            if iter % 50 == 0 || iter + 1 == self.iterations {
                log::debug!("gradient descent: iteration {iter}, cost {cost:.6}");
            }
        }
        Ok(params)
    }
}
