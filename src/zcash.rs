//! Conventional transaction fees for Zcash transparent transactions, as defined in
//! [ZIP-317](https://zips.z.cash/zip-0317).
//!
//! The fee is charged per logical action rather than per byte. Transparent inputs and outputs
//! are converted to actions using the size of a standard P2PKH input and output, even though
//! multisig inputs and script outputs are larger.

use crate::{Dimensions, Error};
use serde::{Deserialize, Serialize};

/// The marginal fee per logical action, in zatoshis.
pub const MARGINAL_FEE: u64 = 5_000;

/// The number of logical actions that are always paid for.
pub const GRACE_ACTIONS: u64 = 2;

/// The size of a standard P2PKH transparent input.
pub const P2PKH_STANDARD_INPUT_SIZE: u64 = 150;

/// The size of a standard P2PKH transparent output.
pub const P2PKH_STANDARD_OUTPUT_SIZE: u64 = 34;

/// Parameters of the conventional fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZcashFeeParams {
    /// Fee per logical action, in zatoshis.
    pub marginal_fee_per_action: u64,
    /// Minimum number of logical actions charged.
    pub grace_actions: u64,
}

impl Default for ZcashFeeParams {
    fn default() -> Self {
        Self {
            marginal_fee_per_action: MARGINAL_FEE,
            grace_actions: GRACE_ACTIONS,
        }
    }
}

/// Total sizes of the transparent inputs and outputs of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparentSizes {
    /// Total size of the transparent inputs.
    pub tx_in_total_size: u64,
    /// Total size of the transparent outputs.
    pub tx_out_total_size: u64,
}

impl TransparentSizes {
    /// The transparent sizes of `dimensions`.
    pub fn from_dimensions(dimensions: &Dimensions) -> Result<Self, Error> {
        Ok(Self {
            tx_in_total_size: dimensions.get_inputs_vsize()?,
            tx_out_total_size: dimensions.get_outputs_vsize(),
        })
    }
}

/// The number of logical actions of the transparent part of a transaction.
pub fn logical_actions(sizes: &TransparentSizes) -> u64 {
    Ord::max(
        sizes.tx_in_total_size.div_ceil(P2PKH_STANDARD_INPUT_SIZE),
        sizes.tx_out_total_size.div_ceil(P2PKH_STANDARD_OUTPUT_SIZE),
    )
}

/// The conventional fee in zatoshis for a transaction with transparent `sizes`.
pub fn conventional_fee_zat(
    sizes: &TransparentSizes,
    params: &ZcashFeeParams,
) -> Result<u64, Error> {
    Ord::max(logical_actions(sizes), params.grace_actions)
        .checked_mul(params.marginal_fee_per_action)
        .ok_or(Error::Overflow("conventional fee"))
}

/// The conventional fee in zatoshis for a transaction with `dimensions`.
pub fn conventional_fee_for_dimensions(
    dimensions: &Dimensions,
    params: &ZcashFeeParams,
) -> Result<u64, Error> {
    let sizes = TransparentSizes::from_dimensions(dimensions)?;
    let fee = conventional_fee_zat(&sizes, params)?;
    tracing::trace!(
        tx_in_total_size = sizes.tx_in_total_size,
        tx_out_total_size = sizes.tx_out_total_size,
        fee,
        "zip317 conventional fee"
    );
    Ok(fee)
}
