use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::eval::run_test::Compute;
use crate::math::matrix::Matrix;
use crate::rules::rule::LearningRule;

/// Construction parameters for a [`Layer`].
///
/// `new` covers the common case (linear neurons, zero init, no
/// normalization); the remaining fields are public and set directly, the
/// same way training options are configured.
#[derive(Debug, Clone)]
pub struct LayerConfig {
    /// Number of inputs feeding each neuron.
    pub n_inputs: usize,
    /// Number of neurons in the layer (== number of outputs).
    pub n_neurons: usize,
    /// Activation applied to the raw linear output.
    pub activation: ActivationFunction,
    /// Local update rule applied by `learn`.
    pub rule: LearningRule,
    /// Start from uniform [-1, 1] weights, row-normalized to unit norm,
    /// instead of all zeros.
    pub random_init: bool,
    /// Row-normalize the weights after every `learn` call.  Required for
    /// Oja's rule to realize its principal-component property.
    pub normalize_after_learn: bool,
}

impl LayerConfig {
    pub fn new(n_inputs: usize, n_neurons: usize, rule: LearningRule) -> LayerConfig {
        LayerConfig {
            n_inputs,
            n_neurons,
            activation: ActivationFunction::Identity,
            rule,
            random_init: false,
            normalize_after_learn: false,
        }
    }
}

/// A bank of linearly-combined neurons sharing one activation function and
/// one local learning rule.
///
/// The weight matrix has shape `(n_neurons, n_inputs)`; row `i` is neuron
/// `i`'s weight vector.  The matrix is owned exclusively by the layer and
/// mutated in place by `learn`.
#[derive(Debug, Clone)]
pub struct Layer {
    weights: Matrix,
    activation: ActivationFunction,
    rule: LearningRule,
    normalize_after_learn: bool,
}

impl Layer {
    /// Builds a layer from `config`, drawing any random initial weights
    /// from `rng`.
    pub fn from_config<R: Rng>(config: &LayerConfig, rng: &mut R) -> Result<Layer> {
        if config.n_inputs == 0 || config.n_neurons == 0 {
            return Err(NetError::InvalidConfiguration(format!(
                "layer dimensions must be positive (n_inputs={}, n_neurons={})",
                config.n_inputs, config.n_neurons
            )));
        }

        let weights = if config.random_init {
            let mut w = Matrix::random_uniform(config.n_neurons, config.n_inputs, rng);
            w.normalize_rows();
            w
        } else {
            Matrix::zeros(config.n_neurons, config.n_inputs)
        };

        Ok(Layer {
            weights,
            activation: config.activation,
            rule: config.rule,
            normalize_after_learn: config.normalize_after_learn,
        })
    }

    /// `(n_neurons, n_inputs)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.weights.rows, self.weights.cols)
    }

    pub fn rule(&self) -> LearningRule {
        self.rule
    }

    pub fn get_weights(&self) -> &Matrix {
        &self.weights
    }

    /// Replaces the weight matrix.  The new matrix must have exactly the
    /// layer's declared shape; nothing is copied on mismatch.
    pub fn set_weights(&mut self, weights: Matrix) -> Result<()> {
        if weights.rows != self.weights.rows || weights.cols != self.weights.cols {
            return Err(NetError::shape(
                format!("{}x{}", self.weights.rows, self.weights.cols),
                format!("{}x{}", weights.rows, weights.cols),
            ));
        }
        self.weights = weights;
        Ok(())
    }

    /// Forward pass: `activation(W · x)`.  No side effects.
    pub fn compute(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_input(x)?;
        Ok(self.activation.apply(self.weights.dot_vec(x)))
    }

    /// Applies one learning-rule update for the pair `(x, y)`, then row
    /// normalization if configured (zero rows stay zero rather than NaN).
    ///
    /// Shapes are checked before any weight is touched, so a failed call
    /// leaves the layer unchanged.
    pub fn learn(&mut self, x: &[f64], y: &[f64], eta: f64) -> Result<()> {
        self.check_input(x)?;
        if y.len() != self.weights.rows {
            return Err(NetError::shape(
                format!("output vector of length {}", self.weights.rows),
                format!("length {}", y.len()),
            ));
        }

        self.rule.apply(&mut self.weights, x, y, eta);
        if self.normalize_after_learn {
            self.weights.normalize_rows();
        }
        Ok(())
    }

    /// Computes the output for `x`, then learns from it.
    ///
    /// With `target = None` the layer learns toward its *own* computed
    /// output — the self-supervised update used when the layer sits in the
    /// middle of a composed network and no external target exists.  Returns
    /// the computed output either way.
    pub fn compute_then_learn(
        &mut self,
        x: &[f64],
        target: Option<&[f64]>,
        eta: f64,
    ) -> Result<Vec<f64>> {
        let out = self.compute(x)?;
        match target {
            Some(y) => self.learn(x, y, eta)?,
            None => self.learn(x, &out, eta)?,
        }
        Ok(out)
    }

    fn check_input(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.weights.cols {
            return Err(NetError::shape(
                format!("input vector of length {}", self.weights.cols),
                format!("length {}", x.len()),
            ));
        }
        Ok(())
    }
}

impl Compute for Layer {
    fn compute(&self, x: &[f64]) -> Result<Vec<f64>> {
        Layer::compute(self, x)
    }
}
