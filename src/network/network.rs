use crate::error::{NetError, Result};
use crate::eval::run_test::Compute;

pub type ComputeFn = Box<dyn Fn(&[f64]) -> Result<Vec<f64>>>;
pub type LearnFn = Box<dyn FnMut(&[f64], &[f64], f64) -> Result<()>>;

/// Wrapper composing multiple layers into one compute/learn unit.
///
/// The two capabilities are explicit strategy slots: a compute function and
/// a learn function, supplied as closures over the constituent layers.
/// Calling a capability whose slot has not been filled fails immediately
/// with [`NetError::UnsetBehavior`] rather than deep inside a training loop.
#[derive(Default)]
pub struct Network {
    compute_fn: Option<ComputeFn>,
    learn_fn: Option<LearnFn>,
}

impl Network {
    /// An empty wrapper; both slots unset.
    pub fn new() -> Network {
        Network {
            compute_fn: None,
            learn_fn: None,
        }
    }

    /// A wrapper with both slots filled at construction time.
    pub fn with_fns(compute: ComputeFn, learn: LearnFn) -> Network {
        Network {
            compute_fn: Some(compute),
            learn_fn: Some(learn),
        }
    }

    pub fn set_compute(&mut self, compute: ComputeFn) {
        self.compute_fn = Some(compute);
    }

    pub fn set_learn(&mut self, learn: LearnFn) {
        self.learn_fn = Some(learn);
    }

    pub fn compute(&self, x: &[f64]) -> Result<Vec<f64>> {
        match &self.compute_fn {
            Some(f) => f(x),
            None => Err(NetError::UnsetBehavior("compute")),
        }
    }

    pub fn learn(&mut self, x: &[f64], y: &[f64], eta: f64) -> Result<()> {
        match &mut self.learn_fn {
            Some(f) => f(x, y, eta),
            None => Err(NetError::UnsetBehavior("learn")),
        }
    }
}

impl Compute for Network {
    fn compute(&self, x: &[f64]) -> Result<Vec<f64>> {
        Network::compute(self, x)
    }
}
