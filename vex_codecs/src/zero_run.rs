use vex_core::codec::VectorCodec;
use vex_core::format::{FormatHeader, MAX_RUN_LEN, MIN_ZERO_RUN};
use vex_core::token::Token;

/// Zero-run compressing codec.
///
/// Scans left to right. Each maximal run of zeros is cut into chunks of at
/// most 65535; a chunk of three or more becomes one Zero-Run Token and a
/// shorter chunk is written as literal `0x00` bytes. Non-zero values use the
/// ordinary Short/Wide tokens.
///
/// Best for: sparse vectors, histograms, padded embeddings.
pub struct ZeroRunCodec;

impl VectorCodec for ZeroRunCodec {
    fn header(&self) -> FormatHeader {
        FormatHeader::CompressedV1
    }

    fn name(&self) -> &'static str {
        "zero-run"
    }

    fn encode_tokens(&self, values: &[u16], out: &mut Vec<u8>) {
        let mut rest = values;
        while let Some((&first, tail)) = rest.split_first() {
            if first != 0 {
                Token::for_value(first).write_to(out);
                rest = tail;
                continue;
            }
            let run = rest
                .iter()
                .take(MAX_RUN_LEN as usize)
                .take_while(|&&v| v == 0)
                .count();
            write_zero_run(run, out);
            rest = &rest[run..];
        }
    }
}

/// `run` is in `1..=MAX_RUN_LEN`.
fn write_zero_run(run: usize, out: &mut Vec<u8>) {
    if run < MIN_ZERO_RUN {
        out.resize(out.len() + run, 0);
    } else {
        Token::ZeroRun(run as u16).write_to(out);
    }
}
