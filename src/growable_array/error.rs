/// Failures reported by [`GrowableArray`](super::GrowableArray).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested initial capacity can't hold a single element.
    #[error("illegal capacity: {capacity}")]
    InvalidArgument { capacity: usize },

    /// `index` is outside the valid range for the operation. `insert` accepts `index == size`,
    /// every other operation requires `index < size`.
    #[error("index: {index}, size: {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
