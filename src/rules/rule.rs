use std::fmt;

use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// A local learning rule: the update to a synapse depends only on that
/// synapse's current weight, its input, and its own neuron's output — no
/// global error signal.
///
/// All three rules are single-sample (online) updates and broadcast the
/// per-neuron output scalar `y[i]` against weight row `i`, so they work
/// unchanged for any number of stacked neurons.
/// Serialized result aggregates key the rules as `hebb`, `deca` and `ojas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningRule {
    /// `W += eta * outer(y, x)`.  Purely additive, so training order does
    /// not matter — and weights grow without bound.
    #[serde(rename = "hebb")]
    Hebbian,
    /// `W[i] += eta * y[i] * (x - W[i])`.  The pull toward the input bounds
    /// growth; the update reads the current weights, so order matters.
    #[serde(rename = "deca")]
    HebbianDecay,
    /// `W[i] += eta * y[i] * (x - y[i] * W[i])`.  Pair with
    /// `normalize_after_learn` so each row converges toward the first
    /// principal component of its target's inputs.
    #[serde(rename = "ojas")]
    Oja,
}

impl LearningRule {
    /// Applies one single-sample update to `weights`, in place.
    ///
    /// `x` is the input vector (one entry per column), `y` the per-neuron
    /// output or target (one entry per row), `eta` the learning rate.  The
    /// weight shape is never changed.
    pub fn apply(&self, weights: &mut Matrix, x: &[f64], y: &[f64], eta: f64) {
        for (i, row) in weights.data.iter_mut().enumerate() {
            let yi = y[i];
            for (j, w) in row.iter_mut().enumerate() {
                match self {
                    LearningRule::Hebbian => *w += eta * yi * x[j],
                    LearningRule::HebbianDecay => *w += eta * yi * (x[j] - *w),
                    LearningRule::Oja => *w += eta * yi * (x[j] - yi * *w),
                }
            }
        }
    }

    /// The three rules in their canonical comparison order.
    pub const ALL: [LearningRule; 3] = [
        LearningRule::Hebbian,
        LearningRule::HebbianDecay,
        LearningRule::Oja,
    ];
}

impl fmt::Display for LearningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LearningRule::Hebbian => "Hebbian",
            LearningRule::HebbianDecay => "Decay",
            LearningRule::Oja => "Oja",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hebbian_is_an_outer_product_update() {
        let mut w = Matrix::zeros(2, 3);
        LearningRule::Hebbian.apply(&mut w, &[1.0, 0.5, 0.0], &[1.0, 2.0], 0.1);

        assert_abs_diff_eq!(w.data[0][0], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(w.data[0][1], 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(w.data[1][0], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(w.data[1][2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn decay_pulls_rows_toward_the_input() {
        let mut w = Matrix::from_data(vec![vec![1.0, 1.0]]);
        // y = 1, eta = 1: the row lands exactly on x.
        LearningRule::HebbianDecay.apply(&mut w, &[0.25, 0.75], &[1.0], 1.0);
        assert_abs_diff_eq!(w.data[0][0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(w.data[0][1], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn serializes_under_the_aggregate_keys() {
        let keys: Vec<String> = LearningRule::ALL
            .iter()
            .map(|rule| serde_json::to_string(rule).unwrap())
            .collect();
        assert_eq!(keys, vec!["\"hebb\"", "\"deca\"", "\"ojas\""]);

        let rule: LearningRule = serde_json::from_str("\"ojas\"").unwrap();
        assert_eq!(rule, LearningRule::Oja);
    }

    #[test]
    fn inactive_neurons_are_untouched() {
        for rule in LearningRule::ALL {
            let mut w = Matrix::from_data(vec![vec![0.5, -0.5], vec![0.3, 0.3]]);
            let before = w.data[1].clone();
            rule.apply(&mut w, &[1.0, 1.0], &[1.0, 0.0], 0.1);
            assert_eq!(w.data[1], before, "rule {} moved a y=0 row", rule);
        }
    }
}
