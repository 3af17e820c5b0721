use thiserror::Error;

/// Errors surfaced by the library.
///
/// Shape and configuration problems are detected eagerly at the call
/// boundary, before any caller-visible state is mutated.  An all-zero model
/// output during evaluation is *not* an error — it is an undefined
/// prediction, recorded as a mismatch by `eval::run_test`.
#[derive(Debug, Error)]
pub enum NetError {
    /// Sample/label counts disagree, or an input/weight shape does not match
    /// the owning layer's declared shape.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A parameter is outside its valid range; reported before any training
    /// work starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A `Network` capability was invoked before its strategy function was
    /// supplied.
    #[error("network {0} function not set")]
    UnsetBehavior(&'static str),

    /// A dataset file could not be parsed.
    #[error("dataset error: {0}")]
    Data(String),
}

impl NetError {
    pub(crate) fn shape(expected: impl Into<String>, got: impl Into<String>) -> NetError {
        NetError::ShapeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NetError>;
