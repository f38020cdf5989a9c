//! Word-wrap errors.

/// Errors from configuring the wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    #[error("Wrap width must be at least 1 column, got {width}")]
    InvalidWidth { width: usize },
}
