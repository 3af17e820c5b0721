pub mod idx;

pub use idx::{load_idx_pair, split_train_val};
