pub mod driver;
pub mod results;

pub use driver::{run_experiment, ExperimentConfig};
pub use results::{ExperimentResults, RuleResult};
