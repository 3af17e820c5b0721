use serde::{Serialize, Deserialize};

/// Activation applied to a layer's raw linear output.
///
/// The learning rules assume a linear neuron, so `Identity` is the default.
/// `Softmax` is vector-valued and therefore applied to the whole output at
/// once rather than element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Identity,
    Softmax,
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Identity
    }
}

impl ActivationFunction {
    /// Applies the activation to a full output vector.
    pub fn apply(&self, v: Vec<f64>) -> Vec<f64> {
        match self {
            ActivationFunction::Identity => v,
            ActivationFunction::Softmax => softmax(&v),
        }
    }
}

/// Numerically stable softmax: the max is subtracted before exponentiation
/// so that exploding Hebbian activations cannot overflow `exp`.
pub fn softmax(v: &[f64]) -> Vec<f64> {
    let max = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = v.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
