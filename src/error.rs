use crate::ScriptType;

/// Errors returned when building or measuring [`Dimensions`].
///
/// Every error is fatal to the computation that produced it. They indicate a mistake in how the
/// caller described the transaction, not a transient condition.
///
/// [`Dimensions`]: crate::Dimensions
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dimensions document named a field that does not exist.
    #[error("unknown property {0}")]
    UnknownProperty(String),

    /// A dimensions document tried to set a derived field.
    #[error("read-only property {0}")]
    ReadOnlyProperty(&'static str),

    /// Output count and size must either both be zero or both be non-zero.
    #[error("invalid output dimensions: count={count} size={size}")]
    InvalidOutputDimensions {
        /// Number of outputs.
        count: u64,
        /// Aggregate size of the outputs.
        size: u64,
    },

    /// A single script push cannot carry this many bytes.
    #[error("invalid pushdata size {0}")]
    InvalidPushdataSize(usize),

    /// The tag does not name a supported script type.
    #[error("unexpected scriptType {0}")]
    UnexpectedScriptType(String),

    /// The taproot script path level is missing or not supported for this script type.
    #[error("unexpected script path level {level:?} for {script_type}")]
    UnexpectedScriptPathLevel {
        /// The script type that was being classified.
        script_type: ScriptType,
        /// The level supplied by the caller.
        level: Option<u8>,
    },

    /// The chain code is not known to the classifier.
    #[error("invalid chain code {0}")]
    InvalidChainCode(u32),

    /// An input without a recognizable script or witness was measured without a default spend
    /// type.
    #[error("empty script and assume_unsigned not set")]
    UnsignedInput,

    /// The PSBT input could not be classified.
    #[error("unable to determine script type of psbt input")]
    UnclassifiedPsbtInput,

    /// Wraps the failure of a single input with its position in the transaction.
    #[error("illegal input {index}: {source}")]
    Input {
        /// Position of the input.
        index: usize,
        /// What went wrong with it.
        #[source]
        source: Box<Error>,
    },

    /// `times` only accepts positive factors.
    #[error("expected factor to be positive integer, got {0}")]
    InvalidFactor(u64),

    /// A partial dimensions document used the legacy `nOutputs` shorthand.
    #[error("deprecated partial addition: {0}")]
    DeprecatedPartialAddition(&'static str),

    /// A count or size no longer fits in 64 bits.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

impl Error {
    pub(crate) fn at_input(self, index: usize) -> Self {
        Error::Input {
            index,
            source: Box::new(self),
        }
    }
}
