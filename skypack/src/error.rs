use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bin size must be positive, got {width}x{height}")]
    InvalidBinSize { width: i64, height: i64 },

    #[error("Rectangle at index {index} must have a positive size, got {width}x{height}")]
    InvalidItemSize {
        index: usize,
        width: i64,
        height: i64,
    },

    #[error("widths and heights must be same length ({widths} widths, {heights} heights)")]
    MismatchedLengths { widths: usize, heights: usize },

    #[error("Dimension {value} is too large to pack")]
    OutOfRange { value: i64 },

    #[error("Packing context is closed and can no longer be modified")]
    ContextClosed,

    #[error("Couldn't allocate packing storage")]
    Allocation {
        #[from]
        source: TryReserveError,
    },
}

impl Error {
    /// Tells whether this error was caused by the caller passing bad input,
    /// as opposed to a failure during the run itself.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidBinSize { .. }
            | Error::InvalidItemSize { .. }
            | Error::MismatchedLengths { .. }
            | Error::OutOfRange { .. } => true,
            _ => false,
        }
    }
}
