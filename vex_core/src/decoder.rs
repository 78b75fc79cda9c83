use std::iter::FusedIterator;

use tracing::debug;

use crate::error::Result;
use crate::format::{FormatHeader, HEADER_SIZE};
use crate::token::{read_token, Token};

/// Decoder for Vex streams of either framing.
///
/// # Open sequence
/// 1. Read byte 0 and map it to a [`FormatHeader`]. Unknown tags fail here,
///    before any token is looked at.
/// 2. Tokens are read lazily from byte 1 onward by [`tokens`], [`decode`]
///    or [`decoded_len`].
///
/// Plain and compressed streams go through the same token state machine.
/// Token shapes are self-describing, so the header is bookkeeping only.
///
/// [`tokens`]: VectorDecoder::tokens
/// [`decode`]: VectorDecoder::decode
/// [`decoded_len`]: VectorDecoder::decoded_len
#[derive(Debug, Clone, Copy)]
pub struct VectorDecoder<'a> {
    stream: &'a [u8],
    header: FormatHeader,
}

impl<'a> VectorDecoder<'a> {
    /// Validate the header of `stream`.
    pub fn open(stream: &'a [u8]) -> Result<Self> {
        let header = FormatHeader::read(stream).map_err(|e| {
            debug!(len = stream.len(), error = %e, "rejected vex stream");
            e
        })?;
        debug!(tag = header.tag(), len = stream.len(), "opened vex stream");
        Ok(Self { stream, header })
    }

    pub fn header(&self) -> FormatHeader {
        self.header
    }

    /// Bytes after the header.
    pub fn payload_len(&self) -> usize {
        self.stream.len() - HEADER_SIZE
    }

    /// Iterate over the tokens of the stream.
    ///
    /// Yields one `Err` and then stops if a token is truncated.
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            stream: self.stream,
            pos: HEADER_SIZE,
            state: State::ReadingToken,
        }
    }

    /// Number of values the stream expands to, without materializing them.
    pub fn decoded_len(&self) -> Result<usize> {
        self.tokens()
            .try_fold(0usize, |n, token| Ok(n + token?.value_count()))
    }

    /// Decode the whole stream into a fresh vector.
    pub fn decode(&self) -> Result<Vec<u16>> {
        let mut out = Vec::with_capacity(self.payload_len());
        self.decode_into(&mut out)?;
        Ok(out)
    }

    /// Append the decoded values to `out`, returning how many were appended.
    ///
    /// On error `out` is restored to its original length.
    pub fn decode_into(&self, out: &mut Vec<u16>) -> Result<usize> {
        let start = out.len();
        for token in self.tokens() {
            match token {
                Ok(Token::Short(b)) => out.push(u16::from(b)),
                Ok(Token::Wide(v)) => out.push(v),
                Ok(Token::ZeroRun(run)) => out.resize(out.len() + run as usize, 0),
                Err(e) => {
                    out.truncate(start);
                    debug!(error = %e, "failed to decode vex stream");
                    return Err(e);
                }
            }
        }
        Ok(out.len() - start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingToken,
    Done,
}

/// Iterator over the tokens of a Vex stream, returned by
/// [`VectorDecoder::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    stream: &'a [u8],
    pos: usize,
    state: State,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }
        if self.pos >= self.stream.len() {
            self.state = State::Done;
            return None;
        }
        match read_token(self.stream, self.pos) {
            Ok((token, consumed)) => {
                self.pos += consumed;
                Some(Ok(token))
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
