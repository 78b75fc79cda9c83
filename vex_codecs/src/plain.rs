use vex_core::codec::VectorCodec;
use vex_core::format::FormatHeader;
use vex_core::token::Token;

/// One token per element, no run compression.
///
/// Useful for:
/// - Dense vectors with few zeros, where run detection buys nothing.
/// - Streams that must map byte offsets to element positions cheaply.
pub struct PlainCodec;

impl VectorCodec for PlainCodec {
    fn header(&self) -> FormatHeader {
        FormatHeader::PlainV1
    }

    fn name(&self) -> &'static str {
        "plain"
    }

    fn encode_tokens(&self, values: &[u16], out: &mut Vec<u8>) {
        out.reserve(values.len());
        for &v in values {
            Token::for_value(v).write_to(out);
        }
    }
}
