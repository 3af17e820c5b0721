
pub use run_test::{accuracy_per_label, as_digits, run_test, run_test_digits, Compute, TestOutcome};
