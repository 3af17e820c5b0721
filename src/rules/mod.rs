pub mod rule;

pub use rule::LearningRule;
