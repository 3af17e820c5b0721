pub mod linear;

pub use linear::{Layer, LayerConfig};
