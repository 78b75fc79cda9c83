//! Single-value token encoding.
//!
//! Every element of a vector becomes one self-delimiting token:
//!
//! ```text
//! 0x00..=0xFD   Short     value == byte              (1 byte)
//! 0xFE hi lo    Wide      value == u16::from_be      (3 bytes)
//! 0xFF hi lo    ZeroRun   hi:lo consecutive zeros    (3 bytes)
//! ```
//!
//! Because Short Tokens stop at 253, a sentinel byte can only ever start a
//! three-byte token, and no length prefix is needed.

use tracing::debug;

use crate::error::{Result, VexError};
use crate::format::{MAX_SHORT_VALUE, SENTINEL_TOKEN_LEN, WIDE_SENTINEL, ZERO_RUN_SENTINEL};

/// Clamp an arbitrary integer into `0..=65535`.
///
/// This is the default normalization for out-of-range input: values above
/// the range encode as 65535 and negative values encode as 0.
#[inline]
pub fn clamp_value(value: i64) -> u16 {
    value.clamp(0, i64::from(u16::MAX)) as u16
}

/// Clamp every element of `values`, logging how many were out of range.
pub fn clamp_values<T: Copy + Into<i64>>(values: &[T]) -> Vec<u16> {
    let mut clamped = 0usize;
    let out = values
        .iter()
        .map(|&v| {
            let v = v.into();
            let c = clamp_value(v);
            if i64::from(c) != v {
                clamped += 1;
            }
            c
        })
        .collect();
    if clamped > 0 {
        debug!(clamped, total = values.len(), "clamped out-of-range values");
    }
    out
}

/// One decoded unit of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Short(u8),
    Wide(u16),
    /// A run of this many consecutive zeros.
    ZeroRun(u16),
}

impl Token {
    /// The narrowest value token for `value`.
    #[inline]
    pub fn for_value(value: u16) -> Self {
        if value <= MAX_SHORT_VALUE {
            Self::Short(value as u8)
        } else {
            Self::Wide(value)
        }
    }

    /// Bytes this token occupies on the wire.
    #[inline]
    pub fn encoded_len(self) -> usize {
        match self {
            Self::Short(_) => 1,
            Self::Wide(_) | Self::ZeroRun(_) => SENTINEL_TOKEN_LEN,
        }
    }

    /// Number of vector elements this token expands to.
    #[inline]
    pub fn value_count(self) -> usize {
        match self {
            Self::Short(_) | Self::Wide(_) => 1,
            Self::ZeroRun(run) => run as usize,
        }
    }

    /// Append the wire bytes of this token to `out`.
    pub fn write_to(self, out: &mut Vec<u8>) {
        match self {
            Self::Short(b) => out.push(b),
            Self::Wide(v) => {
                out.push(WIDE_SENTINEL);
                out.extend_from_slice(&v.to_be_bytes());
            }
            Self::ZeroRun(run) => {
                out.push(ZERO_RUN_SENTINEL);
                out.extend_from_slice(&run.to_be_bytes());
            }
        }
    }
}

/// Clamp `value` and append its 1- or 3-byte token to `out`.
///
/// Returns the number of bytes written.
pub fn encode_token(value: i64, out: &mut Vec<u8>) -> usize {
    let token = Token::for_value(clamp_value(value));
    token.write_to(out);
    token.encoded_len()
}

/// Decode the value token starting at `offset`.
///
/// Returns the value and the number of bytes consumed. Only the Wide sentinel
/// is interpreted here; `0xFF` expands to many values and is handled by
/// [`read_token`] and the decoder, so this function returns it as the
/// literal 255.
pub fn decode_token(bytes: &[u8], offset: usize) -> Result<(u16, usize)> {
    match bytes.get(offset) {
        Some(&WIDE_SENTINEL) => Ok((sentinel_payload(bytes, offset)?, SENTINEL_TOKEN_LEN)),
        Some(&b) => Ok((u16::from(b), 1)),
        None => Err(truncated(bytes, offset, 1)),
    }
}

/// Classify and decode the token starting at `offset`, including Zero-Run
/// Tokens.
pub fn read_token(bytes: &[u8], offset: usize) -> Result<(Token, usize)> {
    let token = match bytes.get(offset) {
        Some(&WIDE_SENTINEL) => Token::Wide(sentinel_payload(bytes, offset)?),
        Some(&ZERO_RUN_SENTINEL) => Token::ZeroRun(sentinel_payload(bytes, offset)?),
        Some(&b) => Token::Short(b),
        None => return Err(truncated(bytes, offset, 1)),
    };
    Ok((token, token.encoded_len()))
}

/// The big-endian u16 following a sentinel at `offset`.
fn sentinel_payload(bytes: &[u8], offset: usize) -> Result<u16> {
    match bytes.get(offset..offset + SENTINEL_TOKEN_LEN) {
        Some(&[_, hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
        _ => Err(truncated(bytes, offset, SENTINEL_TOKEN_LEN)),
    }
}

fn truncated(bytes: &[u8], offset: usize, needed: usize) -> VexError {
    VexError::TruncatedStream {
        offset,
        needed,
        available: bytes.len().saturating_sub(offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: i64) -> Vec<u8> {
        let mut out = Vec::new();
        let n = encode_token(value, &mut out);
        assert_eq!(n, out.len());
        out
    }

    #[test]
    fn short_and_wide_boundary() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(253), vec![0xFD]);
        assert_eq!(encoded(254), vec![0xFE, 0x00, 0xFE]);
        assert_eq!(encoded(255), vec![0xFE, 0x00, 0xFF]);
        assert_eq!(encoded(333), vec![0xFE, 0x01, 0x4D]);
        assert_eq!(encoded(65535), vec![0xFE, 0xFF, 0xFF]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(encoded(200_000), encoded(65535));
        assert_eq!(encoded(65536), encoded(65535));
        assert_eq!(encoded(-1), encoded(0));
        assert_eq!(encoded(i64::MIN), vec![0x00]);
        assert_eq!(clamp_value(i64::MAX), u16::MAX);
    }

    #[test]
    fn clamp_values_accepts_narrow_integer_types() {
        assert_eq!(clamp_values(&[1u8, 2, 3]), vec![1, 2, 3]);
        assert_eq!(clamp_values(&[-5i32, 70_000, 9]), vec![0, 65535, 9]);
        assert_eq!(clamp_values::<i64>(&[]), Vec::<u16>::new());
    }

    #[test]
    fn decode_token_reads_short_and_wide() {
        let bytes = [0x07, 0xFE, 0x01, 0x4D, 0xFD];
        assert_eq!(decode_token(&bytes, 0).unwrap(), (7, 1));
        assert_eq!(decode_token(&bytes, 1).unwrap(), (333, 3));
        assert_eq!(decode_token(&bytes, 4).unwrap(), (253, 1));
    }

    #[test]
    fn decode_token_leaves_zero_run_sentinel_alone() {
        assert_eq!(decode_token(&[0xFF, 0x00, 0x05], 0).unwrap(), (255, 1));
    }

    #[test]
    fn read_token_classifies_all_shapes() {
        let bytes = [0x03, 0xFE, 0x12, 0x34, 0xFF, 0x00, 0x0F];
        assert_eq!(read_token(&bytes, 0).unwrap(), (Token::Short(3), 1));
        assert_eq!(read_token(&bytes, 1).unwrap(), (Token::Wide(0x1234), 3));
        assert_eq!(read_token(&bytes, 4).unwrap(), (Token::ZeroRun(15), 3));
        assert_eq!(Token::ZeroRun(15).value_count(), 15);
    }

    #[test]
    fn truncated_sentinel_tokens_are_rejected() {
        assert_eq!(
            decode_token(&[0x01, 0xFE, 0x01], 1),
            Err(VexError::TruncatedStream { offset: 1, needed: 3, available: 2 })
        );
        assert_eq!(
            read_token(&[0xFF], 0),
            Err(VexError::TruncatedStream { offset: 0, needed: 3, available: 1 })
        );
        assert_eq!(
            read_token(&[0x01], 1),
            Err(VexError::TruncatedStream { offset: 1, needed: 1, available: 0 })
        );
    }

    #[test]
    fn write_to_matches_encoded_len() {
        for token in [Token::Short(9), Token::Wide(300), Token::ZeroRun(65535)] {
            let mut out = Vec::new();
            token.write_to(&mut out);
            assert_eq!(out.len(), token.encoded_len());
            assert_eq!(read_token(&out, 0).unwrap(), (token, out.len()));
        }
    }
}
