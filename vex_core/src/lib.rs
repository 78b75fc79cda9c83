pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod token;

pub use codec::VectorCodec;
pub use config::{EncoderConfig, Encoding, RangePolicy};
pub use decoder::{Tokens, VectorDecoder};
pub use encoder::VectorEncoder;
pub use error::VexError;
pub use format::{FormatHeader, HEADER_COMPRESSED_V1, HEADER_PLAIN_V1};
pub use token::{clamp_value, decode_token, encode_token, Token};
