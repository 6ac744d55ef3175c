//! Weight of transaction inputs, measured from real inputs or from the worst-case layout of a
//! spend type.
//!
//! The formulas follow the BIP141 serialization: bytes outside the witness count four times,
//! witness bytes count once.

use crate::script_size::{compact_size, pushdata_encoding_length, pushdata_len};
use crate::Error;
use bitcoin::{TxIn, Witness};

/// Txin "base" fields: `outpoint` (32+4) and `nSequence` (4). The scriptSig is accounted for
/// separately since its length prefix varies.
pub const TXIN_BASE_SIZE: usize = 32 + 4 + 4;

/// Size of a length-prefixed byte slice of `len` bytes.
pub const fn var_slice_size(len: usize) -> usize {
    compact_size(len as u64) + len
}

/// Size of a witness stack whose items have the lengths `item_lens`, including the item count.
pub const fn vector_size(item_lens: &[usize]) -> usize {
    let mut size = compact_size(item_lens.len() as u64);
    let mut i = 0;
    while i < item_lens.len() {
        size += var_slice_size(item_lens[i]);
        i += 1;
    }
    size
}

const fn byte_length(script_len: usize, witness: &[usize], allow_witness: bool) -> usize {
    let mut size = TXIN_BASE_SIZE + var_slice_size(script_len);
    if allow_witness {
        size += vector_size(witness);
    }
    size
}

const fn weight(script_len: usize, witness: &[usize]) -> u64 {
    let base = byte_length(script_len, witness, false) as u64;
    3 * base + byte_length(script_len, witness, true) as u64
}

fn witness_item_lens(witness: &Witness) -> Vec<usize> {
    witness.iter().map(<[u8]>::len).collect()
}

/// Serialized size of `input`, with or without its witness stack.
pub fn input_byte_length(input: &TxIn, allow_witness: bool) -> usize {
    byte_length(
        input.script_sig.len(),
        &witness_item_lens(&input.witness),
        allow_witness,
    )
}

/// Weight of `input` in weight units.
///
/// The witness stack always contributes its item count, so an input without witness still
/// weighs one unit more than four times its base size.
pub fn input_weight(input: &TxIn) -> u64 {
    weight(input.script_sig.len(), &witness_item_lens(&input.witness))
}

/// The signed layout of a spend type, as the sizes of the elements it pushes.
///
/// `script` holds the sizes of the data elements pushed by the scriptSig; each element also
/// costs its push opcode. `witness` holds the sizes of the witness stack items. Sizes are the
/// maximum the element can take once signed (DER signatures are assumed to be 72 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputComponents {
    /// Data elements pushed by the scriptSig.
    pub script: &'static [usize],
    /// Witness stack items.
    pub witness: &'static [usize],
}

const ECDSA_SIGNATURE_SIZE: usize = 72;
const SCHNORR_SIGNATURE_SIZE: usize = 64;
// OP_2 <pubkey> <pubkey> <pubkey> OP_3 OP_CHECKMULTISIG
const MULTISIG_2_OF_3_SCRIPT_SIZE: usize = 1 + 3 * (1 + 33) + 1 + 1;
// OP_0 <32-byte script hash>
const P2WSH_SCRIPT_SIZE: usize = 1 + 1 + 32;
// <pubkey> OP_CHECKSIG
const P2PK_SCRIPT_SIZE: usize = 1 + 33 + 1;
// <xonly pubkey> OP_CHECKSIGVERIFY <xonly pubkey> OP_CHECKSIG
const TAPSCRIPT_2_OF_2_SIZE: usize = 1 + 32 + 1 + 1 + 32 + 1;

const fn control_block_size(level: usize) -> usize {
    1 + 32 + 32 * level
}

// OP_CHECKMULTISIG consumes one extra (empty) stack element.
const MULTISIG_2_OF_3_STACK: [usize; 4] = [
    0,
    ECDSA_SIGNATURE_SIZE,
    ECDSA_SIGNATURE_SIZE,
    MULTISIG_2_OF_3_SCRIPT_SIZE,
];

impl InputComponents {
    /// 2-of-3 multisig in a p2sh scriptSig.
    pub const P2SH: Self = Self {
        script: &MULTISIG_2_OF_3_STACK,
        witness: &[],
    };

    /// 2-of-3 multisig in a p2wsh witness nested in p2sh.
    pub const P2SH_P2WSH: Self = Self {
        script: &[P2WSH_SCRIPT_SIZE],
        witness: &MULTISIG_2_OF_3_STACK,
    };

    /// 2-of-3 multisig in a native p2wsh witness.
    pub const P2WSH: Self = Self {
        script: &[],
        witness: &MULTISIG_2_OF_3_STACK,
    };

    /// Taproot key path spend with an aggregated (MuSig2) key. Default sighash, so no sighash
    /// byte.
    pub const P2TR_KEYPATH: Self = Self {
        script: &[],
        witness: &[SCHNORR_SIGNATURE_SIZE],
    };

    /// Taproot 2-of-2 script path spend of a leaf at depth 1.
    pub const P2TR_SCRIPT_PATH_LEVEL1: Self = Self {
        script: &[],
        witness: &[
            SCHNORR_SIGNATURE_SIZE,
            SCHNORR_SIGNATURE_SIZE,
            TAPSCRIPT_2_OF_2_SIZE,
            control_block_size(1),
        ],
    };

    /// Taproot 2-of-2 script path spend of a leaf at depth 2.
    pub const P2TR_SCRIPT_PATH_LEVEL2: Self = Self {
        script: &[],
        witness: &[
            SCHNORR_SIGNATURE_SIZE,
            SCHNORR_SIGNATURE_SIZE,
            TAPSCRIPT_2_OF_2_SIZE,
            control_block_size(2),
        ],
    };

    /// Single signature p2pk wrapped in p2sh, used for replay protection inputs.
    pub const P2SH_P2PK: Self = Self {
        script: &[ECDSA_SIGNATURE_SIZE, P2PK_SCRIPT_SIZE],
        witness: &[],
    };

    /// Length of the scriptSig, push opcodes included.
    ///
    /// Fails if an element is too large to be pushed.
    pub fn script_len(&self) -> Result<usize, Error> {
        self.script
            .iter()
            .try_fold(0, |len, &n| -> Result<usize, Error> {
                Ok(len + pushdata_encoding_length(n)? + n)
            })
    }

    /// The weight of an input with this layout.
    pub fn weight(&self) -> Result<u64, Error> {
        Ok(weight(self.script_len()?, self.witness))
    }

    /// The virtual size of an input with this layout, rounded up to whole vbytes.
    pub fn vsize(&self) -> Result<u64, Error> {
        Ok(self.weight()?.div_ceil(4))
    }

    // Panics on an unpushable element; only evaluated at compile time for the tables above.
    const fn const_script_len(&self) -> usize {
        let mut len = 0;
        let mut i = 0;
        while i < self.script.len() {
            let n = self.script[i];
            len += match pushdata_len(n) {
                Some(opcode_len) => opcode_len + n,
                None => panic!("invalid pushdata size"),
            };
            i += 1;
        }
        len
    }

    pub(crate) const fn const_vsize(&self) -> u64 {
        weight(self.const_script_len(), self.witness).div_ceil(4)
    }
}

/// Weight of an input laid out as `components`.
///
/// This is the weight [`input_weight`] returns for the largest signed input of the same type.
pub fn input_components_weight(components: &InputComponents) -> Result<u64, Error> {
    components.weight()
}
