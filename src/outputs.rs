use crate::Error;
use serde::{Deserialize, Serialize};

/// A collection of outputs, represented by their count and aggregate size.
///
/// The count is zero iff the size is zero.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutputDimensions")]
pub struct OutputDimensions {
    count: u64,
    size: u64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutputDimensions {
    count: u64,
    size: u64,
}

impl TryFrom<RawOutputDimensions> for OutputDimensions {
    type Error = Error;

    fn try_from(raw: RawOutputDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.count, raw.size)
    }
}

impl OutputDimensions {
    /// No outputs.
    pub const ZERO: Self = Self { count: 0, size: 0 };

    /// `count` outputs with a total size of `size`.
    pub fn new(count: u64, size: u64) -> Result<Self, Error> {
        if (count == 0) != (size == 0) {
            return Err(Error::InvalidOutputDimensions { count, size });
        }
        Ok(Self { count, size })
    }

    /// A single output of `size` bytes. `size` must not be zero.
    pub(crate) const fn single(size: u64) -> Self {
        assert!(size > 0);
        Self { count: 1, size }
    }

    /// Number of outputs.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Aggregate size of the outputs.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The outputs of both collections.
    pub fn plus(&self, other: &Self) -> Result<Self, Error> {
        Ok(Self {
            count: self
                .count
                .checked_add(other.count)
                .ok_or(Error::Overflow("output count"))?,
            size: self
                .size
                .checked_add(other.size)
                .ok_or(Error::Overflow("output size"))?,
        })
    }

    /// The outputs repeated `factor` times.
    pub fn times(&self, factor: u64) -> Result<Self, Error> {
        let outputs = Self {
            count: self
                .count
                .checked_mul(factor)
                .ok_or(Error::Overflow("output count"))?,
            size: self
                .size
                .checked_mul(factor)
                .ok_or(Error::Overflow("output size"))?,
        };
        Self::new(outputs.count, outputs.size)
    }
}
