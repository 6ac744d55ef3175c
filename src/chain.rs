//! Wallet chain codes and the spend parameters used when estimating unspents by chain.

use crate::ScriptType;
use serde::{Deserialize, Serialize};

/// Maps wallet chain codes to the script type of the outputs created on that chain.
pub trait ChainCodeClassifier {
    /// The script type of outputs on `chain`, or `None` if `chain` is not a chain code.
    fn script_type_for_chain(&self, chain: u32) -> Option<ScriptType>;

    /// Whether `chain` is a known chain code.
    fn is_chain_code(&self, chain: u32) -> bool {
        self.script_type_for_chain(chain).is_some()
    }
}

/// The fixed-script wallet chain codes. Each script type has an external (even) and an
/// internal (odd) chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletChainCodes;

impl ChainCodeClassifier for WalletChainCodes {
    fn script_type_for_chain(&self, chain: u32) -> Option<ScriptType> {
        Some(match chain {
            0 | 1 => ScriptType::P2sh,
            10 | 11 => ScriptType::P2shP2wsh,
            20 | 21 => ScriptType::P2wsh,
            30 | 31 => ScriptType::P2tr,
            40 | 41 => ScriptType::P2trMusig2,
            _ => return None,
        })
    }
}

/// How a taproot unspent is assumed to be spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptPathParams {
    /// Depth of the spent leaf. `None` means a key path spend where the script type has one.
    pub script_path_level: Option<u8>,
}

impl Default for ScriptPathParams {
    /// Script path at depth 1. Callers that can't tell whether the key path will be usable
    /// should assume the larger script path spend.
    fn default() -> Self {
        Self {
            script_path_level: Some(1),
        }
    }
}

/// Parameters for [`Dimensions::from_unspent`].
///
/// [`Dimensions::from_unspent`]: crate::Dimensions::from_unspent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FromUnspentParams {
    /// Spend of unspents on p2tr chains.
    pub p2tr: ScriptPathParams,
    /// Spend of unspents on p2trMusig2 chains.
    pub p2tr_musig2: ScriptPathParams,
}
