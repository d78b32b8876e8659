//! Errors raised by component state transitions.

use thiserror::Error;

/// An event referred to something the component does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A category id that is neither a known category nor `"all"`.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// An image id not in the gallery.
    #[error("Unknown image: {0}")]
    UnknownImage(String),

    /// An accordion index past the last item.
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of items.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            UiError::UnknownCategory("soups".into()).to_string(),
            "Unknown category: soups"
        );
        assert_eq!(
            UiError::IndexOutOfRange { index: 7, len: 6 }.to_string(),
            "Index 7 out of range for 6 items"
        );
    }
}
