use crate::error::{Result, VexError};

/// Header byte of a plain (uncompressed) version 1 stream.
pub const HEADER_PLAIN_V1: u8 = 0x10;

/// Header byte of a zero-run compressed version 1 stream.
pub const HEADER_COMPRESSED_V1: u8 = 0x1C;

/// Size of the format header in bytes. Tokens start right after it.
pub const HEADER_SIZE: usize = 1;

// ── Token shapes ───────────────────────────────────────────────────────────

/// Lead byte of a Wide Token: `0xFE hi lo`, a big-endian u16 value.
pub const WIDE_SENTINEL: u8 = 0xFE;

/// Lead byte of a Zero-Run Token: `0xFF hi lo`, a big-endian u16 run length.
pub const ZERO_RUN_SENTINEL: u8 = 0xFF;

/// Largest value stored as a Short Token. 254 and 255 are the sentinels.
pub const MAX_SHORT_VALUE: u16 = 253;

/// Encoded length of both sentinel-led tokens.
pub const SENTINEL_TOKEN_LEN: usize = 3;

/// Longest zero run a single Zero-Run Token can carry. Longer runs are
/// split into consecutive chunks.
pub const MAX_RUN_LEN: u16 = u16::MAX;

/// Shortest zero run worth a Zero-Run Token. Runs of one or two zeros are
/// cheaper as literal `0x00` Short Tokens.
pub const MIN_ZERO_RUN: usize = 3;

// ── Header ─────────────────────────────────────────────────────────────────

/// Decoded representation of the one-byte format header.
///
/// Both variants share the same token grammar, so the decoder treats them
/// identically. The tag only records which encoder produced the stream and
/// leaves room for later versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHeader {
    PlainV1,
    CompressedV1,
}

impl FormatHeader {
    /// The on-wire tag byte.
    pub fn tag(self) -> u8 {
        match self {
            Self::PlainV1 => HEADER_PLAIN_V1,
            Self::CompressedV1 => HEADER_COMPRESSED_V1,
        }
    }

    /// Map a tag byte back to a header, rejecting unknown tags.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            HEADER_PLAIN_V1 => Ok(Self::PlainV1),
            HEADER_COMPRESSED_V1 => Ok(Self::CompressedV1),
            other => Err(VexError::UnrecognizedFormat(other)),
        }
    }

    /// Read the header from the first byte of `stream`.
    pub fn read(stream: &[u8]) -> Result<Self> {
        match stream.first() {
            Some(&tag) => Self::from_tag(tag),
            None => Err(VexError::TruncatedStream {
                offset: 0,
                needed: HEADER_SIZE,
                available: 0,
            }),
        }
    }

    /// Format version. Every known tag is version 1.
    pub fn version(self) -> u8 {
        1
    }

    pub fn is_compressed(self) -> bool {
        matches!(self, Self::CompressedV1)
    }
}
