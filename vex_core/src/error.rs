/// Errors raised while encoding or decoding a Vex stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VexError {
    /// The first byte of the stream is not a known format header.
    #[error("unrecognized vex format header 0x{0:02x}")]
    UnrecognizedFormat(u8),

    /// A token (or the header itself) needs more bytes than the stream has left.
    #[error("truncated vex stream at offset {offset}: token needs {needed} bytes, {available} available")]
    TruncatedStream {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// An element is outside `0..=65535`. Only raised under
    /// [`RangePolicy::Strict`](crate::config::RangePolicy::Strict).
    #[error("value {value} at index {index} is outside the 16-bit unsigned range")]
    ValueOutOfRange { index: usize, value: i64 },
}

pub type Result<T> = std::result::Result<T, VexError>;
