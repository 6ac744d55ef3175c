//! Byte lengths of the variable-size encodings used in scripts and transactions.

use crate::Error;

/// The largest element a single script push may carry.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// Length of the opcode(s) needed to push `n` bytes of data onto the script stack.
///
/// Pushes of up to 75 bytes use a single direct-push opcode, larger ones need `OP_PUSHDATA1`
/// followed by a one byte length, and from 255 on `OP_PUSHDATA2` with a two byte length.
/// Elements of [`MAX_SCRIPT_ELEMENT_SIZE`] or more can't be pushed.
pub fn pushdata_encoding_length(n: usize) -> Result<usize, Error> {
    pushdata_len(n).ok_or(Error::InvalidPushdataSize(n))
}

pub(crate) const fn pushdata_len(n: usize) -> Option<usize> {
    if n < 76 {
        Some(1)
    } else if n < 255 {
        Some(2)
    } else if n < MAX_SCRIPT_ELEMENT_SIZE {
        Some(3)
    } else {
        None
    }
}

/// Helper to calculate the size of a CompactSize (varint). `n` is the value the varint
/// represents.
pub const fn compact_size(n: u64) -> usize {
    if n <= 0xfc {
        return 1;
    }
    if n <= 0xffff {
        return 3;
    }
    if n <= 0xffff_ffff {
        return 5;
    }
    9
}
