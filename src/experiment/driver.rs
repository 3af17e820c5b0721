use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::eval::run_test::run_test;
use crate::layers::linear::{Layer, LayerConfig};
use crate::rules::rule::LearningRule;
use crate::train::loop_fn::train_layer;
use crate::train::train_config::TrainConfig;

use super::results::{ExperimentResults, RuleResult};

/// Configuration for a multi-run rule-comparison experiment.
///
/// `new` fills the defaults used throughout the comparison: a 784-input,
/// 10-class layer trained with `eta = 0.1`, permuted sample order and no
/// learning-rate decay.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of independent repetitions; run `r` seeds its permutations
    /// with `r`.
    pub runs: usize,
    pub epochs: usize,
    pub eta: f64,
    pub decay: f64,
    pub decay_after: f64,
    pub permute: bool,
    pub verbose: bool,
    /// Keep the trained layers in the results instead of discarding them.
    pub retain_networks: bool,
    pub n_inputs: usize,
    pub n_neurons: usize,
}

impl ExperimentConfig {
    pub fn new(runs: usize, epochs: usize) -> ExperimentConfig {
        ExperimentConfig {
            runs,
            epochs,
            eta: 0.1,
            decay: 1.0,
            decay_after: 1.0,
            permute: true,
            verbose: true,
            retain_networks: false,
            n_inputs: 28 * 28,
            n_neurons: 10,
        }
    }

    fn train_config(&self) -> TrainConfig {
        TrainConfig {
            epochs: self.epochs,
            eta: self.eta,
            permute: self.permute,
            decay: self.decay,
            decay_after: self.decay_after,
            verbose: self.verbose,
        }
    }
}

/// Trains one fresh layer per learning rule under identical conditions for
/// `config.runs` independent runs and evaluates each on the held-out test
/// set.
///
/// Fairness protocol: within a run every rule's training call receives its
/// own generator seeded with the run index, so all three rules see the
/// *identical* sequence of sample permutations for that run.  Oja's layer is
/// the only one configured with `normalize_after_learn`.
///
/// Each dataset argument is an `(inputs, one-hot labels)` pair.
pub fn run_experiment(
    train: (&[Vec<f64>], &[Vec<f64>]),
    val: (&[Vec<f64>], &[Vec<f64>]),
    test: (&[Vec<f64>], &[Vec<f64>]),
    config: &ExperimentConfig,
) -> Result<ExperimentResults> {
    let train_config = config.train_config();
    let mut rules: Vec<RuleResult> = LearningRule::ALL
        .iter()
        .map(|&rule| RuleResult::new(rule, config.retain_networks))
        .collect();

    for run in 0..config.runs {
        if config.verbose {
            println!("Run Number {}", run + 1);
        }

        for result in &mut rules {
            if config.verbose {
                println!("{}", result.rule);
            }

            // Reseeding with the run index gives every rule in this run the
            // same permutation sequence.
            let mut rng = StdRng::seed_from_u64(run as u64);

            let mut layer_config = LayerConfig::new(config.n_inputs, config.n_neurons, result.rule);
            layer_config.normalize_after_learn = result.rule == LearningRule::Oja;
            let mut layer = Layer::from_config(&layer_config, &mut rng)?;

            let history = train_layer(
                &mut layer,
                train.0,
                train.1,
                val.0,
                val.1,
                &train_config,
                &mut rng,
            )?;
            let outcome = run_test(test.0, test.1, &layer)?;

            result.accuracies.push(outcome.accuracy);
            result.wrong_indices.push(outcome.wrong_indices);
            result.val_history.push(history);
            if let Some(layers) = &mut result.layers {
                layers.push(layer);
            }
        }
    }

    Ok(ExperimentResults { rules })
}
