//! Constants for signed transaction input and output virtual sizes.
//!
//! See <https://bitcoincore.org/en/segwit_wallet_dev/#transaction-serialization> for the
//! serialization these are derived from.

use crate::InputComponents;

/// vsize of a p2sh 2-of-3 multisig input.
pub const P2SH_INPUT_VSIZE: u64 = InputComponents::P2SH.const_vsize();
/// vsize of a p2sh-p2wsh 2-of-3 multisig input.
pub const P2SH_P2WSH_INPUT_VSIZE: u64 = InputComponents::P2SH_P2WSH.const_vsize();
/// vsize of a p2wsh 2-of-3 multisig input.
pub const P2WSH_INPUT_VSIZE: u64 = InputComponents::P2WSH.const_vsize();
/// vsize of a taproot key path input.
pub const P2TR_KEYPATH_INPUT_VSIZE: u64 = InputComponents::P2TR_KEYPATH.const_vsize();
/// vsize of a taproot script path input at depth 1.
pub const P2TR_SCRIPT_PATH_LEVEL1_INPUT_VSIZE: u64 =
    InputComponents::P2TR_SCRIPT_PATH_LEVEL1.const_vsize();
/// vsize of a taproot script path input at depth 2.
pub const P2TR_SCRIPT_PATH_LEVEL2_INPUT_VSIZE: u64 =
    InputComponents::P2TR_SCRIPT_PATH_LEVEL2.const_vsize();
/// vsize of a p2sh-p2pk replay protection input.
pub const P2SH_P2PK_INPUT_VSIZE: u64 = InputComponents::P2SH_P2PK.const_vsize();

/// Size of a p2pkh input spent with a compressed key.
#[deprecated(note = "no wallet input spends p2pkh")]
pub const P2PKH_INPUT_SIZE_COMPRESSED_KEY: u64 = 148;
/// Size of a p2pkh input spent with an uncompressed key.
#[deprecated(note = "no wallet input spends p2pkh")]
pub const P2PKH_INPUT_SIZE_UNCOMPRESSED_KEY: u64 = 180;

// Output sizes are `script_len + compact_size(script_len) + OUTPUT_AMOUNT_SIZE`. The length
// prefix is a single byte for every template here.

/// Size of the amount field of an output.
pub const OUTPUT_AMOUNT_SIZE: u64 = 8;

/// OP_HASH160 <20 bytes> OP_EQUAL
pub const P2SH_OUTPUT_SIZE: u64 = 23 + 1 + OUTPUT_AMOUNT_SIZE;
/// Same template as [`P2SH_OUTPUT_SIZE`].
pub const P2SH_P2WSH_OUTPUT_SIZE: u64 = P2SH_OUTPUT_SIZE;
/// OP_0 <32 bytes>
pub const P2WSH_OUTPUT_SIZE: u64 = 34 + 1 + OUTPUT_AMOUNT_SIZE;
/// OP_1 <32 byte x-only key>
pub const P2TR_OUTPUT_SIZE: u64 = 34 + 1 + OUTPUT_AMOUNT_SIZE;
/// OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
pub const P2PKH_OUTPUT_SIZE: u64 = 25 + 1 + OUTPUT_AMOUNT_SIZE;
/// OP_0 <20 bytes>
pub const P2WPKH_OUTPUT_SIZE: u64 = 22 + 1 + OUTPUT_AMOUNT_SIZE;

/// Size of an output when the template is unknown.
#[deprecated(note = "use P2PKH_OUTPUT_SIZE instead")]
pub const OUTPUT_SIZE: u64 = P2PKH_OUTPUT_SIZE;

/// `nVersion` (4), input count (1), output count (1) and `nLockTime` (4).
pub const TX_OVERHEAD_SIZE: u64 = 10;
/// Segwit adds one byte each for marker and flag to the witness section, which increases the
/// vsize by one.
pub const TX_SEGWIT_OVERHEAD_VSIZE: u64 = 11;
