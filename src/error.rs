use alloc::string::String;
use enough::StopReason;

/// Errors from bitmap decoding/encoding, raw loading, and pixel unpacking.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GrayError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i64, height: i64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("image is empty")]
    EmptyImage,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for GrayError {
    fn from(r: StopReason) -> Self {
        GrayError::Cancelled(r)
    }
}
