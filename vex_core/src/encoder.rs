use tracing::debug;

use crate::codec::VectorCodec;
use crate::config::RangePolicy;
use crate::error::{Result, VexError};
use crate::format::{FormatHeader, HEADER_SIZE};
use crate::token::clamp_values;

/// Encoder for Vex streams.
///
/// # Output layout
/// ```text
/// [HEADER: 1 byte, from the codec]
/// [TOKEN 0] [TOKEN 1] ... [TOKEN N-1]
/// ```
///
/// The output grows in a single `Vec`; nothing is pre-sized for the worst
/// case and copied afterwards.
pub struct VectorEncoder {
    codec: Box<dyn VectorCodec>,
    policy: RangePolicy,
}

impl VectorEncoder {
    /// Create an encoder that clamps out-of-range values.
    pub fn new(codec: Box<dyn VectorCodec>) -> Self {
        Self {
            codec,
            policy: RangePolicy::Clamp,
        }
    }

    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn header(&self) -> FormatHeader {
        self.codec.header()
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// Normalize `values` under the configured range policy and encode them.
    ///
    /// Never fails under [`RangePolicy::Clamp`]. Under
    /// [`RangePolicy::Strict`] the first element outside `0..=65535` is
    /// reported as [`VexError::ValueOutOfRange`] and nothing is written.
    pub fn encode<T: Copy + Into<i64>>(&self, values: &[T]) -> Result<Vec<u8>> {
        let normalized = match self.policy {
            RangePolicy::Clamp => clamp_values(values),
            RangePolicy::Strict => check_range(values)?,
        };
        Ok(self.encode_u16(&normalized))
    }

    /// Encode values that are already in range.
    pub fn encode_u16(&self, values: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + values.len());
        out.push(self.codec.header().tag());
        self.codec.encode_tokens(values, &mut out);

        debug!(
            codec = self.codec.name(),
            values = values.len(),
            bytes = out.len(),
            "encoded vector"
        );
        out
    }
}

fn check_range<T: Copy + Into<i64>>(values: &[T]) -> Result<Vec<u16>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            let value = v.into();
            u16::try_from(value).map_err(|_| {
                debug!(index, value, "rejected out-of-range value");
                VexError::ValueOutOfRange { index, value }
            })
        })
        .collect()
}
