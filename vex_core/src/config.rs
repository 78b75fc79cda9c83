use crate::format::FormatHeader;

/// Which framing an encoder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// One token per element, header `0x10`.
    Plain,
    /// Zero runs of three or more collapse to a Zero-Run Token, header `0x1C`.
    #[default]
    Compressed,
}

impl Encoding {
    pub fn header(self) -> FormatHeader {
        match self {
            Self::Plain => FormatHeader::PlainV1,
            Self::Compressed => FormatHeader::CompressedV1,
        }
    }
}

impl From<FormatHeader> for Encoding {
    fn from(header: FormatHeader) -> Self {
        match header {
            FormatHeader::PlainV1 => Self::Plain,
            FormatHeader::CompressedV1 => Self::Compressed,
        }
    }
}

/// What the encoder does with elements outside `0..=65535`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangePolicy {
    /// Replace the value with the nearest bound (0 or 65535). Lossy, never fails.
    #[default]
    Clamp,
    /// Fail with [`VexError::ValueOutOfRange`](crate::VexError::ValueOutOfRange).
    Strict,
}

/// Encoder settings a host application can carry in its own configuration.
///
/// The default is compressed framing with clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    pub encoding: Encoding,
    pub range_policy: RangePolicy,
}
