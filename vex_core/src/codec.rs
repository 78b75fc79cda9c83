use crate::format::FormatHeader;

/// Framing strategy for turning a vector into a token stream.
///
/// Each `VectorCodec` implementation:
/// - Is identified by the [`FormatHeader`] it writes as byte 0.
/// - Emits only Short, Wide and Zero-Run tokens, so any stream it produces
///   decodes with the one shared decoder regardless of which codec wrote it.
/// - Sees values that are already normalized into `0..=65535`; range policy
///   is the encoder's job.
pub trait VectorCodec: Send + Sync {
    /// Header tag written in front of the token stream.
    fn header(&self) -> FormatHeader;

    /// Human-readable codec name for logs.
    fn name(&self) -> &'static str;

    /// Append the tokens for `values` to `out`. The header has already been
    /// written.
    fn encode_tokens(&self, values: &[u16], out: &mut Vec<u8>);
}
