pub mod activation;
pub mod data;
pub mod error;
pub mod eval;
pub mod experiment;
pub mod layers;
pub mod math;
pub mod network;
pub mod rules;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{NetError, Result};
pub use eval::run_test::{run_test, run_test_digits, Compute, TestOutcome};
pub use experiment::driver::{run_experiment, ExperimentConfig};
pub use experiment::results::{ExperimentResults, RuleResult};
pub use layers::linear::{Layer, LayerConfig};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use rules::rule::LearningRule;
pub use train::loop_fn::train_layer;
pub use train::train_config::TrainConfig;
