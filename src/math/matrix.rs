use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix of `f64`.
///
/// Rows correspond to neurons, columns to inputs, so a layer's weights have
/// shape `(n_neurons, n_inputs)` and each row is one neuron's weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Entries drawn uniformly from [-1, 1].
    ///
    /// The generator is passed in by the caller; nothing in this crate owns
    /// process-wide random state.
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data,
        }
    }

    /// Matrix-vector product `self · x`.
    ///
    /// Internal helper; public entry points validate `x.len() == self.cols`
    /// before reaching this.
    pub fn dot_vec(&self, x: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.cols);
        self.data
            .iter()
            .map(|row| row.iter().zip(x.iter()).map(|(w, xi)| w * xi).sum())
            .collect()
    }

    /// Scales every row to unit L2 norm, in place.
    ///
    /// A row of all zeros has norm 0; dividing by it would leave NaN in every
    /// entry, so such rows are forced back to all zeros instead.
    pub fn normalize_rows(&mut self) {
        for row in &mut self.data {
            let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            for x in row.iter_mut() {
                let scaled = *x / norm;
                *x = if scaled.is_nan() { 0.0 } else { scaled };
            }
        }
    }

    /// L2 norm of each row.
    pub fn row_norms(&self) -> Vec<f64> {
        self.data
            .iter()
            .map(|row| row.iter().map(|x| x * x).sum::<f64>().sqrt())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_rows_zeroes_nan_rows() {
        let mut m = Matrix::from_data(vec![vec![3.0, 4.0], vec![0.0, 0.0]]);
        m.normalize_rows();

        assert_abs_diff_eq!(m.data[0][0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(m.data[0][1], 0.8, epsilon = 1e-12);
        // Originally-zero row stays exactly zero, never NaN.
        assert_eq!(m.data[1], vec![0.0, 0.0]);
    }

    #[test]
    fn dot_vec_matches_hand_computation() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![-1.0, 0.5]]);
        let y = m.dot_vec(&[2.0, 3.0]);
        assert_abs_diff_eq!(y[0], 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y[1], -0.5, epsilon = 1e-12);
    }
}
