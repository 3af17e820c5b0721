pub mod loop_fn;
pub mod train_config;

pub use loop_fn::train_layer;
pub use train_config::TrainConfig;
