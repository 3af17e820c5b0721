/// Configuration for a [`train_layer`](crate::train::train_layer) run.
///
/// # Fields
/// - `epochs`      — full passes over the training data
/// - `eta`         — initial learning rate
/// - `permute`     — visit samples in a fresh random order each epoch, or in
///                   dataset order
/// - `decay`       — factor in (0, 1] multiplied into `eta` at each decay
///                   point; `1.0` disables decay
/// - `decay_after` — fraction in (0, 1] of the training set after which the
///                   within-epoch decay fires; `1.0` means once per epoch
/// - `verbose`     — print validation accuracy and the current `eta` after
///                   each epoch
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub eta: f64,
    pub permute: bool,
    pub decay: f64,
    pub decay_after: f64,
    pub verbose: bool,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with permutation on and no learning-rate decay.
    pub fn new(epochs: usize, eta: f64) -> TrainConfig {
        TrainConfig {
            epochs,
            eta,
            permute: true,
            decay: 1.0,
            decay_after: 1.0,
            verbose: false,
        }
    }
}
