use crate::virtual_sizes::*;
use crate::{
    compact_size, ChainCodeClassifier, Error, FromUnspentParams, InputClassifier, InputComponents,
    OutputDimensions, PsbtInputClassifier, ScriptType,
};
use bitcoin::{psbt, Psbt, Script, Transaction, TxIn, TxOut};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// The input categories counted by [`Dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputType {
    /// p2sh 2-of-3 multisig.
    P2sh,
    /// p2sh-p2wsh 2-of-3 multisig.
    P2shP2wsh,
    /// p2wsh 2-of-3 multisig.
    P2wsh,
    /// Taproot key path.
    P2trKeypath,
    /// Taproot script path at depth 1.
    P2trScriptPathLevel1,
    /// Taproot script path at depth 2.
    P2trScriptPathLevel2,
    /// p2sh-p2pk replay protection.
    P2shP2pk,
}

impl InputType {
    /// All input types, in the order of the [`Dimensions`] counters.
    pub const ALL: [InputType; 7] = [
        InputType::P2sh,
        InputType::P2shP2wsh,
        InputType::P2wsh,
        InputType::P2trKeypath,
        InputType::P2trScriptPathLevel1,
        InputType::P2trScriptPathLevel2,
        InputType::P2shP2pk,
    ];

    /// The worst-case signed layout of this input type.
    pub const fn components(&self) -> InputComponents {
        match self {
            InputType::P2sh => InputComponents::P2SH,
            InputType::P2shP2wsh => InputComponents::P2SH_P2WSH,
            InputType::P2wsh => InputComponents::P2WSH,
            InputType::P2trKeypath => InputComponents::P2TR_KEYPATH,
            InputType::P2trScriptPathLevel1 => InputComponents::P2TR_SCRIPT_PATH_LEVEL1,
            InputType::P2trScriptPathLevel2 => InputComponents::P2TR_SCRIPT_PATH_LEVEL2,
            InputType::P2shP2pk => InputComponents::P2SH_P2PK,
        }
    }

    /// The vsize of a signed input of this type.
    pub const fn vsize(&self) -> u64 {
        match self {
            InputType::P2sh => P2SH_INPUT_VSIZE,
            InputType::P2shP2wsh => P2SH_P2WSH_INPUT_VSIZE,
            InputType::P2wsh => P2WSH_INPUT_VSIZE,
            InputType::P2trKeypath => P2TR_KEYPATH_INPUT_VSIZE,
            InputType::P2trScriptPathLevel1 => P2TR_SCRIPT_PATH_LEVEL1_INPUT_VSIZE,
            InputType::P2trScriptPathLevel2 => P2TR_SCRIPT_PATH_LEVEL2_INPUT_VSIZE,
            InputType::P2shP2pk => P2SH_P2PK_INPUT_VSIZE,
        }
    }

    /// Whether spending this input type needs a witness.
    pub const fn is_segwit(&self) -> bool {
        !matches!(self, InputType::P2sh | InputType::P2shP2pk)
    }
}

/// The transaction parameters required for vsize estimation.
///
/// The total vsize of a transaction ([`get_vsize`]) is the sum of
///
/// - the overhead vsize ([`get_overhead_vsize`]),
/// - the inputs vsize ([`get_inputs_vsize`]),
/// - the outputs vsize ([`get_outputs_vsize`]).
///
/// `Dimensions` form a monoid under [`plus`] with [`Dimensions::ZERO`] as identity. Partial
/// dimensions are written with struct update syntax:
///
/// ```
/// # use utxo_dimensions::Dimensions;
/// let two_p2sh_inputs = Dimensions { n_p2sh_inputs: 2, ..Dimensions::ZERO };
/// assert_eq!(two_p2sh_inputs.n_inputs(), Ok(2));
/// ```
///
/// [`get_vsize`]: Self::get_vsize
/// [`get_overhead_vsize`]: Self::get_overhead_vsize
/// [`get_inputs_vsize`]: Self::get_inputs_vsize
/// [`get_outputs_vsize`]: Self::get_outputs_vsize
/// [`plus`]: Self::plus
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DimensionsDocument")]
pub struct Dimensions {
    /// Number of p2sh multisig inputs.
    pub n_p2sh_inputs: u64,
    /// Number of p2sh-p2wsh multisig inputs.
    pub n_p2sh_p2wsh_inputs: u64,
    /// Number of p2wsh multisig inputs.
    pub n_p2wsh_inputs: u64,
    /// Number of taproot key path inputs.
    pub n_p2tr_keypath_inputs: u64,
    /// Number of taproot script path inputs at depth 1.
    pub n_p2tr_script_path_level1_inputs: u64,
    /// Number of taproot script path inputs at depth 2.
    pub n_p2tr_script_path_level2_inputs: u64,
    /// Number of p2sh-p2pk replay protection inputs.
    pub n_p2sh_p2pk_inputs: u64,
    /// The outputs.
    pub outputs: OutputDimensions,
}

/// One [`Dimensions`] per input type, each counting a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleInput {
    /// A p2sh multisig input.
    pub p2sh: Dimensions,
    /// A p2sh-p2wsh multisig input.
    pub p2sh_p2wsh: Dimensions,
    /// A p2wsh multisig input.
    pub p2wsh: Dimensions,
    /// A taproot key path input.
    pub p2tr_keypath: Dimensions,
    /// A taproot script path input at depth 1.
    pub p2tr_script_path_level1: Dimensions,
    /// A taproot script path input at depth 2.
    pub p2tr_script_path_level2: Dimensions,
    /// A p2sh-p2pk replay protection input.
    pub p2sh_p2pk: Dimensions,
}

/// One [`Dimensions`] per standard output template, each counting a single output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleOutput {
    /// A p2sh output.
    pub p2sh: Dimensions,
    /// A p2sh-p2wsh output, which has the same script as p2sh.
    pub p2sh_p2wsh: Dimensions,
    /// A p2wsh output.
    pub p2wsh: Dimensions,
    /// A taproot output.
    pub p2tr: Dimensions,
    /// A p2pkh output.
    pub p2pkh: Dimensions,
    /// A p2wpkh output.
    pub p2wpkh: Dimensions,
}

/// Parameters for [`Dimensions::from_input`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FromInputParams {
    /// The dimensions of an input that carries no recognizable script or witness yet. Without
    /// it such inputs are rejected.
    pub assume_unsigned: Option<Dimensions>,
}

impl FromInputParams {
    /// Assume unsigned inputs will be spent like `dimensions`.
    pub fn assume_unsigned(dimensions: Dimensions) -> Self {
        Self {
            assume_unsigned: Some(dimensions),
        }
    }
}

const fn single_output(size: u64) -> Dimensions {
    Dimensions {
        outputs: OutputDimensions::single(size),
        ..Dimensions::ZERO
    }
}

impl Dimensions {
    /// Dimensions where every count is zero.
    pub const ZERO: Self = Self {
        n_p2sh_inputs: 0,
        n_p2sh_p2wsh_inputs: 0,
        n_p2wsh_inputs: 0,
        n_p2tr_keypath_inputs: 0,
        n_p2tr_script_path_level1_inputs: 0,
        n_p2tr_script_path_level2_inputs: 0,
        n_p2sh_p2pk_inputs: 0,
        outputs: OutputDimensions::ZERO,
    };

    /// A single input of each type.
    pub const SINGLE_INPUT: SingleInput = SingleInput {
        p2sh: Self {
            n_p2sh_inputs: 1,
            ..Self::ZERO
        },
        p2sh_p2wsh: Self {
            n_p2sh_p2wsh_inputs: 1,
            ..Self::ZERO
        },
        p2wsh: Self {
            n_p2wsh_inputs: 1,
            ..Self::ZERO
        },
        p2tr_keypath: Self {
            n_p2tr_keypath_inputs: 1,
            ..Self::ZERO
        },
        p2tr_script_path_level1: Self {
            n_p2tr_script_path_level1_inputs: 1,
            ..Self::ZERO
        },
        p2tr_script_path_level2: Self {
            n_p2tr_script_path_level2_inputs: 1,
            ..Self::ZERO
        },
        p2sh_p2pk: Self {
            n_p2sh_p2pk_inputs: 1,
            ..Self::ZERO
        },
    };

    /// A single output of each standard template.
    pub const SINGLE_OUTPUT: SingleOutput = SingleOutput {
        p2sh: single_output(P2SH_OUTPUT_SIZE),
        p2sh_p2wsh: single_output(P2SH_P2WSH_OUTPUT_SIZE),
        p2wsh: single_output(P2WSH_OUTPUT_SIZE),
        p2tr: single_output(P2TR_OUTPUT_SIZE),
        p2pkh: single_output(P2PKH_OUTPUT_SIZE),
        p2wpkh: single_output(P2WPKH_OUTPUT_SIZE),
    };

    /// Assume unsigned inputs are p2sh.
    pub const ASSUME_P2SH: Self = Self::SINGLE_INPUT.p2sh;
    /// Assume unsigned inputs are p2sh-p2wsh.
    pub const ASSUME_P2SH_P2WSH: Self = Self::SINGLE_INPUT.p2sh_p2wsh;
    /// Assume unsigned inputs are p2wsh.
    pub const ASSUME_P2WSH: Self = Self::SINGLE_INPUT.p2wsh;
    /// Assume unsigned inputs are taproot key path spends.
    pub const ASSUME_P2TR_KEYPATH: Self = Self::SINGLE_INPUT.p2tr_keypath;
    /// Assume unsigned inputs are taproot script path spends at depth 1.
    pub const ASSUME_P2TR_SCRIPTPATH_LEVEL1: Self = Self::SINGLE_INPUT.p2tr_script_path_level1;
    /// Assume unsigned inputs are taproot script path spends at depth 2.
    pub const ASSUME_P2TR_SCRIPTPATH_LEVEL2: Self = Self::SINGLE_INPUT.p2tr_script_path_level2;
    /// Assume unsigned inputs are p2sh-p2pk.
    pub const ASSUME_P2SH_P2PK_INPUT: Self = Self::SINGLE_INPUT.p2sh_p2pk;

    /// Dimensions where every count is zero.
    pub fn zero() -> Self {
        Self::ZERO
    }

    fn from_parts(counts: [u64; 7], outputs: OutputDimensions) -> Self {
        let [
            n_p2sh_inputs,
            n_p2sh_p2wsh_inputs,
            n_p2wsh_inputs,
            n_p2tr_keypath_inputs,
            n_p2tr_script_path_level1_inputs,
            n_p2tr_script_path_level2_inputs,
            n_p2sh_p2pk_inputs,
        ] = counts;
        Self {
            n_p2sh_inputs,
            n_p2sh_p2wsh_inputs,
            n_p2wsh_inputs,
            n_p2tr_keypath_inputs,
            n_p2tr_script_path_level1_inputs,
            n_p2tr_script_path_level2_inputs,
            n_p2sh_p2pk_inputs,
            outputs,
        }
    }

    /// The input counts, ordered like [`InputType::ALL`].
    pub fn input_counts(&self) -> [u64; 7] {
        let Self {
            n_p2sh_inputs,
            n_p2sh_p2wsh_inputs,
            n_p2wsh_inputs,
            n_p2tr_keypath_inputs,
            n_p2tr_script_path_level1_inputs,
            n_p2tr_script_path_level2_inputs,
            n_p2sh_p2pk_inputs,
            outputs: _,
        } = *self;
        [
            n_p2sh_inputs,
            n_p2sh_p2wsh_inputs,
            n_p2wsh_inputs,
            n_p2tr_keypath_inputs,
            n_p2tr_script_path_level1_inputs,
            n_p2tr_script_path_level2_inputs,
            n_p2sh_p2pk_inputs,
        ]
    }

    /// The number of inputs of `input_type`.
    pub fn count(&self, input_type: InputType) -> u64 {
        self.input_counts()[input_type as usize]
    }

    /// Sum of all `dimensions`, [`Dimensions::ZERO`] if there are none.
    pub fn sum<'a>(dimensions: impl IntoIterator<Item = &'a Dimensions>) -> Result<Self, Error> {
        dimensions
            .into_iter()
            .try_fold(Self::ZERO, |acc, dimensions| acc.plus(dimensions))
    }

    /// Add the counts and output sizes of `other`.
    pub fn plus(&self, other: &Dimensions) -> Result<Self, Error> {
        let (lhs, rhs) = (self.input_counts(), other.input_counts());
        let mut counts = [0; 7];
        for (i, count) in counts.iter_mut().enumerate() {
            *count = lhs[i]
                .checked_add(rhs[i])
                .ok_or(Error::Overflow("input count"))?;
        }
        Ok(Self::from_parts(counts, self.outputs.plus(&other.outputs)?))
    }

    /// Multiply every count and the output size by `factor`, which must be positive.
    pub fn times(&self, factor: u64) -> Result<Self, Error> {
        if factor == 0 {
            return Err(Error::InvalidFactor(factor));
        }
        let mut counts = self.input_counts();
        for count in counts.iter_mut() {
            *count = count
                .checked_mul(factor)
                .ok_or(Error::Overflow("input count"))?;
        }
        Ok(Self::from_parts(counts, self.outputs.times(factor)?))
    }

    /// Total number of inputs.
    pub fn n_inputs(&self) -> Result<u64, Error> {
        self.input_counts()
            .iter()
            .try_fold(0u64, |acc, count| acc.checked_add(*count))
            .ok_or(Error::Overflow("input count"))
    }

    /// Total number of outputs.
    pub fn n_outputs(&self) -> u64 {
        self.outputs.count()
    }

    /// The dimensions of a single input of `script_type`.
    ///
    /// `p2tr` and `taprootScriptPathSpend` need a `script_path_level` of 1 or 2. `p2trMusig2`
    /// takes no level for a key path spend and level 1 for its script path. Other script types
    /// ignore the level.
    pub fn from_script_type(
        script_type: ScriptType,
        script_path_level: Option<u8>,
    ) -> Result<Self, Error> {
        let single = &Self::SINGLE_INPUT;
        let dimensions = match (script_type, script_path_level) {
            (ScriptType::P2sh, _) => single.p2sh,
            (ScriptType::P2shP2wsh, _) => single.p2sh_p2wsh,
            (ScriptType::P2wsh, _) => single.p2wsh,
            (ScriptType::P2shP2pk, _) => single.p2sh_p2pk,
            (ScriptType::P2tr | ScriptType::TaprootScriptPathSpend, Some(1)) => {
                single.p2tr_script_path_level1
            }
            (ScriptType::P2tr | ScriptType::TaprootScriptPathSpend, Some(2)) => {
                single.p2tr_script_path_level2
            }
            (ScriptType::P2trMusig2, None) | (ScriptType::TaprootKeyPathSpend, _) => {
                single.p2tr_keypath
            }
            (ScriptType::P2trMusig2, Some(1)) => single.p2tr_script_path_level1,
            (
                ScriptType::P2tr | ScriptType::TaprootScriptPathSpend | ScriptType::P2trMusig2,
                level,
            ) => return Err(Error::UnexpectedScriptPathLevel { script_type, level }),
        };
        trace!(%script_type, ?script_path_level, "dimensions from script type");
        Ok(dimensions)
    }

    /// The dimensions of a transaction input.
    ///
    /// Inputs with a scriptSig or witness are classified by `classifier`. Inputs without either,
    /// or that `classifier` doesn't recognize, are assumed to be spent like
    /// `params.assume_unsigned`; if that is not set the input is rejected.
    pub fn from_input<C>(
        input: &TxIn,
        classifier: &C,
        params: &FromInputParams,
    ) -> Result<Self, Error>
    where
        C: InputClassifier + ?Sized,
    {
        if !input.script_sig.is_empty() || !input.witness.is_empty() {
            if let Some(parsed) = classifier.classify_input(input) {
                return Self::from_script_type(parsed.script_type, parsed.script_path_level);
            }
            debug!(outpoint = %input.previous_output, "unrecognized signature script");
        }
        match params.assume_unsigned {
            Some(dimensions) => {
                debug!(outpoint = %input.previous_output, "assuming dimensions of unsigned input");
                Ok(dimensions)
            }
            None => Err(Error::UnsignedInput),
        }
    }

    /// Sum of [`from_input`] for all `inputs`. Failures carry the position of the input.
    ///
    /// [`from_input`]: Self::from_input
    pub fn from_inputs<'a, C>(
        inputs: impl IntoIterator<Item = &'a TxIn>,
        classifier: &C,
        params: &FromInputParams,
    ) -> Result<Self, Error>
    where
        C: InputClassifier + ?Sized,
    {
        inputs
            .into_iter()
            .enumerate()
            .try_fold(Self::ZERO, |acc, (index, input)| {
                let dimensions =
                    Self::from_input(input, classifier, params).map_err(|e| e.at_input(index))?;
                acc.plus(&dimensions)
            })
    }

    /// The dimensions of a PSBT input, classified by `classifier`.
    pub fn from_psbt_input<C>(input: &psbt::Input, classifier: &C) -> Result<Self, Error>
    where
        C: PsbtInputClassifier + ?Sized,
    {
        let parsed = classifier
            .classify_psbt_input(input)
            .ok_or(Error::UnclassifiedPsbtInput)?;
        Self::from_script_type(parsed.script_type, parsed.script_path_level)
    }

    /// Sum of [`from_psbt_input`] for all `inputs`. Failures carry the position of the input.
    ///
    /// [`from_psbt_input`]: Self::from_psbt_input
    pub fn from_psbt_inputs<'a, C>(
        inputs: impl IntoIterator<Item = &'a psbt::Input>,
        classifier: &C,
    ) -> Result<Self, Error>
    where
        C: PsbtInputClassifier + ?Sized,
    {
        inputs
            .into_iter()
            .enumerate()
            .try_fold(Self::ZERO, |acc, (index, input)| {
                let dimensions =
                    Self::from_psbt_input(input, classifier).map_err(|e| e.at_input(index))?;
                acc.plus(&dimensions)
            })
    }

    /// vsize of an output whose script is `script_len` bytes long.
    pub fn get_vsize_for_output_with_script_length(script_len: usize) -> u64 {
        script_len as u64 + compact_size(script_len as u64) as u64 + OUTPUT_AMOUNT_SIZE
    }

    /// The dimensions of an output whose script is `script_len` bytes long.
    pub fn from_output_script_length(script_len: usize) -> Self {
        single_output(Self::get_vsize_for_output_with_script_length(script_len))
    }

    /// The dimensions of an output paying to `script`.
    pub fn from_output_script(script: &Script) -> Self {
        Self::from_output_script_length(script.len())
    }

    /// The dimensions of `output`.
    pub fn from_output(output: &TxOut) -> Self {
        Self::from_output_script(&output.script_pubkey)
    }

    /// Sum of [`from_output`] for all `outputs`.
    ///
    /// [`from_output`]: Self::from_output
    pub fn from_outputs<'a>(outputs: impl IntoIterator<Item = &'a TxOut>) -> Result<Self, Error> {
        outputs
            .into_iter()
            .try_fold(Self::ZERO, |acc, output| acc.plus(&Self::from_output(output)))
    }

    /// Length of the output script of a wallet address on `chain`.
    pub fn get_output_script_length_for_chain<C>(chain: u32, classifier: &C) -> Result<usize, Error>
    where
        C: ChainCodeClassifier + ?Sized,
    {
        match script_type_for_chain(chain, classifier)? {
            ScriptType::P2wsh | ScriptType::P2tr | ScriptType::P2trMusig2 => Ok(34),
            _ => Ok(23),
        }
    }

    /// The dimensions of a single output to a wallet address on `chain`.
    pub fn from_output_on_chain<C>(chain: u32, classifier: &C) -> Result<Self, Error>
    where
        C: ChainCodeClassifier + ?Sized,
    {
        Ok(Self::from_output_script_length(
            Self::get_output_script_length_for_chain(chain, classifier)?,
        ))
    }

    /// The dimensions of spending an unspent on `chain`.
    ///
    /// Taproot unspents are assumed to be spent as described by `params`, which defaults to a
    /// script path spend at depth 1.
    pub fn from_unspent<C>(
        chain: u32,
        classifier: &C,
        params: &FromUnspentParams,
    ) -> Result<Self, Error>
    where
        C: ChainCodeClassifier + ?Sized,
    {
        let script_type = script_type_for_chain(chain, classifier)?;
        let script_path_level = match script_type {
            ScriptType::P2tr => params.p2tr.script_path_level,
            ScriptType::P2trMusig2 => params.p2tr_musig2.script_path_level,
            _ => None,
        };
        trace!(chain, %script_type, ?script_path_level, "dimensions from unspent");
        Self::from_script_type(script_type, script_path_level)
    }

    /// Sum of [`from_unspent`] for all `chains`.
    ///
    /// [`from_unspent`]: Self::from_unspent
    pub fn from_unspents<C>(
        chains: impl IntoIterator<Item = u32>,
        classifier: &C,
        params: &FromUnspentParams,
    ) -> Result<Self, Error>
    where
        C: ChainCodeClassifier + ?Sized,
    {
        chains.into_iter().try_fold(Self::ZERO, |acc, chain| {
            acc.plus(&Self::from_unspent(chain, classifier, params)?)
        })
    }

    /// The dimensions of all inputs and outputs of `tx`. See [`from_input`] for how inputs are
    /// classified.
    ///
    /// [`from_input`]: Self::from_input
    pub fn from_transaction<C>(
        tx: &Transaction,
        classifier: &C,
        params: &FromInputParams,
    ) -> Result<Self, Error>
    where
        C: InputClassifier + ?Sized,
    {
        Self::from_inputs(&tx.input, classifier, params)?.plus(&Self::from_outputs(&tx.output)?)
    }

    /// The dimensions of all inputs and outputs of `psbt`.
    pub fn from_psbt<C>(psbt: &Psbt, classifier: &C) -> Result<Self, Error>
    where
        C: PsbtInputClassifier + ?Sized,
    {
        Self::from_psbt_inputs(&psbt.inputs, classifier)?
            .plus(&Self::from_outputs(&psbt.unsigned_tx.output)?)
    }

    /// Whether any input needs a witness.
    pub fn is_segwit(&self) -> bool {
        InputType::ALL
            .iter()
            .any(|input_type| input_type.is_segwit() && self.count(*input_type) > 0)
    }

    /// Overhead vsize, based on [`is_segwit`].
    ///
    /// [`is_segwit`]: Self::is_segwit
    pub fn get_overhead_vsize(&self) -> u64 {
        if self.is_segwit() {
            TX_SEGWIT_OVERHEAD_VSIZE
        } else {
            TX_OVERHEAD_SIZE
        }
    }

    /// vsize of the inputs, without transaction overhead.
    pub fn get_inputs_vsize(&self) -> Result<u64, Error> {
        InputType::ALL
            .iter()
            .zip(self.input_counts())
            .try_fold(0u64, |size, (input_type, count)| {
                count
                    .checked_mul(input_type.vsize())
                    .and_then(|inputs_size| size.checked_add(inputs_size))
            })
            .ok_or(Error::Overflow("inputs vsize"))
    }

    /// vsize of the outputs, without transaction overhead.
    pub fn get_outputs_vsize(&self) -> u64 {
        self.outputs.size()
    }

    /// Estimated vsize of the signed transaction: overhead, inputs and outputs.
    pub fn get_vsize(&self) -> Result<u64, Error> {
        self.get_overhead_vsize()
            .checked_add(self.get_inputs_vsize()?)
            .and_then(|size| size.checked_add(self.get_outputs_vsize()))
            .ok_or(Error::Overflow("vsize"))
    }
}

fn script_type_for_chain<C>(chain: u32, classifier: &C) -> Result<ScriptType, Error>
where
    C: ChainCodeClassifier + ?Sized,
{
    if !classifier.is_chain_code(chain) {
        return Err(Error::InvalidChainCode(chain));
    }
    classifier
        .script_type_for_chain(chain)
        .ok_or(Error::InvalidChainCode(chain))
}

/// The shape accepted when deserializing [`Dimensions`]. Every field is optional and defaults to
/// zero. The derived `nInputs` and `nOutputs` may be present if they agree with the counts.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DimensionsDocument {
    #[serde(default)]
    n_p2sh_inputs: u64,
    #[serde(default)]
    n_p2sh_p2wsh_inputs: u64,
    #[serde(default)]
    n_p2wsh_inputs: u64,
    #[serde(default)]
    n_p2tr_keypath_inputs: u64,
    #[serde(default)]
    n_p2tr_script_path_level1_inputs: u64,
    #[serde(default)]
    n_p2tr_script_path_level2_inputs: u64,
    #[serde(default)]
    n_p2sh_p2pk_inputs: u64,
    outputs: Option<OutputDimensions>,
    n_inputs: Option<u64>,
    n_outputs: Option<u64>,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde::de::IgnoredAny>,
}

impl TryFrom<DimensionsDocument> for Dimensions {
    type Error = Error;

    fn try_from(doc: DimensionsDocument) -> Result<Self, Self::Error> {
        if let Some(key) = doc.unknown.keys().next() {
            return Err(Error::UnknownProperty(key.clone()));
        }
        match (doc.n_outputs, doc.outputs) {
            (Some(_), None) => {
                return Err(Error::DeprecatedPartialAddition(
                    "argument has key \"nOutputs\" but no \"outputs\"",
                ))
            }
            (Some(n_outputs), Some(outputs)) if n_outputs != outputs.count() => {
                return Err(Error::DeprecatedPartialAddition(
                    "inconsistent values for \"nOutputs\" and \"outputs.count\"",
                ))
            }
            _ => {}
        }
        let dimensions = Dimensions {
            n_p2sh_inputs: doc.n_p2sh_inputs,
            n_p2sh_p2wsh_inputs: doc.n_p2sh_p2wsh_inputs,
            n_p2wsh_inputs: doc.n_p2wsh_inputs,
            n_p2tr_keypath_inputs: doc.n_p2tr_keypath_inputs,
            n_p2tr_script_path_level1_inputs: doc.n_p2tr_script_path_level1_inputs,
            n_p2tr_script_path_level2_inputs: doc.n_p2tr_script_path_level2_inputs,
            n_p2sh_p2pk_inputs: doc.n_p2sh_p2pk_inputs,
            outputs: doc.outputs.unwrap_or_default(),
        };
        let n_inputs = dimensions.n_inputs()?;
        if doc.n_inputs.map_or(false, |n| n != n_inputs) {
            return Err(Error::ReadOnlyProperty("nInputs"));
        }
        Ok(dimensions)
    }
}
