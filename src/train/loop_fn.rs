use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{NetError, Result};
use crate::eval::run_test::run_test;
use crate::layers::linear::Layer;
use crate::train::train_config::TrainConfig;

/// Trains `layer` online for `config.epochs` epochs and returns the
/// per-epoch validation-accuracy history (one entry per completed epoch).
///
/// # Algorithm
/// Each epoch visits every training sample once — in a fresh random
/// permutation drawn from `rng` when `config.permute` is set, in dataset
/// order otherwise — calling `layer.learn(x, y, eta)` per sample.  Every
/// `floor(n * decay_after)` processed samples the learning rate is
/// multiplied by `config.decay`, and one additional decay step fires at the
/// end of every epoch; the two compound.  After each epoch the layer is
/// scored on the validation set and the accuracy appended to the history.
///
/// # Errors
/// All validation happens before the first learning step, so a failed call
/// performs zero weight updates:
/// - `ShapeMismatch` when training or validation inputs and labels disagree
///   in count;
/// - `InvalidConfiguration` when `decay_after` is outside (0, 1] or selects
///   an empty decay interval.
pub fn train_layer<R: Rng>(
    layer: &mut Layer,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    val_inputs: &[Vec<f64>],
    val_labels: &[Vec<f64>],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if train_inputs.len() != train_labels.len() {
        return Err(NetError::shape(
            format!("labels for {} training samples", train_inputs.len()),
            format!("{} labels", train_labels.len()),
        ));
    }
    if val_inputs.len() != val_labels.len() {
        return Err(NetError::shape(
            format!("labels for {} validation samples", val_inputs.len()),
            format!("{} labels", val_labels.len()),
        ));
    }
    if !(config.decay_after > 0.0 && config.decay_after <= 1.0) {
        return Err(NetError::InvalidConfiguration(format!(
            "decay_after must lie in (0, 1], got {}",
            config.decay_after
        )));
    }

    let n = train_inputs.len();
    // Samples between within-epoch decay steps.
    let decay_interval = (n as f64 * config.decay_after) as usize;
    if decay_interval == 0 {
        return Err(NetError::InvalidConfiguration(format!(
            "decay_after = {} selects zero samples out of {}",
            config.decay_after, n
        )));
    }

    let mut eta = config.eta;
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let mut order: Vec<usize> = (0..n).collect();
        if config.permute {
            order.shuffle(rng);
        }

        for (i, &idx) in order.iter().enumerate() {
            layer.learn(&train_inputs[idx], &train_labels[idx], eta)?;
            if (i + 1) % decay_interval == 0 {
                eta *= config.decay;
            }
        }

        let outcome = run_test(val_inputs, val_labels, layer)?;
        history.push(outcome.accuracy);
        if config.verbose {
            println!("Epoch {}: Val: {:.4} Eta: {}", epoch, outcome.accuracy, eta);
        }

        // End-of-epoch decay, on top of any within-epoch steps.
        eta *= config.decay;
    }

    Ok(history)
}
