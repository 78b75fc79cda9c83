mod plain;
mod zero_run;

pub use plain::PlainCodec;
pub use zero_run::ZeroRunCodec;

use vex_core::token::clamp_values;
use vex_core::{EncoderConfig, Encoding, FormatHeader, VectorCodec, VectorDecoder, VectorEncoder, VexError};

/// Resolve the codec that writes `encoding`.
pub fn codec_for(encoding: Encoding) -> Box<dyn VectorCodec> {
    match encoding {
        Encoding::Plain => Box::new(PlainCodec),
        Encoding::Compressed => Box::new(ZeroRunCodec),
    }
}

/// Resolve a codec from an on-wire header tag.
///
/// Used to re-encode a stored vector with the framing it was read in.
pub fn codec_by_header(tag: u8) -> Result<Box<dyn VectorCodec>, VexError> {
    let header = FormatHeader::from_tag(tag)?;
    Ok(codec_for(header.into()))
}

/// Build an encoder from host-application settings.
pub fn encoder_from_config(config: &EncoderConfig) -> VectorEncoder {
    VectorEncoder::new(codec_for(config.encoding)).with_policy(config.range_policy)
}

/// Encode with plain framing (header `0x10`), clamping out-of-range values.
pub fn encode<T: Copy + Into<i64>>(values: &[T]) -> Vec<u8> {
    VectorEncoder::new(Box::new(PlainCodec)).encode_u16(&clamp_values(values))
}

/// Encode with zero-run framing (header `0x1C`), clamping out-of-range values.
pub fn encode_compressed<T: Copy + Into<i64>>(values: &[T]) -> Vec<u8> {
    VectorEncoder::new(Box::new(ZeroRunCodec)).encode_u16(&clamp_values(values))
}

/// Decode a stream of either framing.
pub fn decode(stream: &[u8]) -> Result<Vec<u16>, VexError> {
    VectorDecoder::open(stream)?.decode()
}
