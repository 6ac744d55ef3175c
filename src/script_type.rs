use crate::Error;
use bitcoin::{psbt, TxIn};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// The spend types a [`Dimensions`] can be declared from.
///
/// Serializes to (and parses from) the camelCase tag used by wallet tooling, e.g. `p2shP2wsh`.
///
/// [`Dimensions`]: crate::Dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptType {
    /// p2sh 2-of-3 multisig.
    P2sh,
    /// p2sh-p2wsh 2-of-3 multisig.
    P2shP2wsh,
    /// p2wsh 2-of-3 multisig.
    P2wsh,
    /// p2sh-p2pk replay protection.
    P2shP2pk,
    /// Taproot with script path spends only.
    P2tr,
    /// Taproot with a MuSig2 key path and a script path fallback.
    P2trMusig2,
    /// Any taproot script path spend.
    TaprootScriptPathSpend,
    /// Any taproot key path spend.
    TaprootKeyPathSpend,
}

impl ScriptType {
    /// All script types.
    pub const ALL: [ScriptType; 8] = [
        ScriptType::P2sh,
        ScriptType::P2shP2wsh,
        ScriptType::P2wsh,
        ScriptType::P2shP2pk,
        ScriptType::P2tr,
        ScriptType::P2trMusig2,
        ScriptType::TaprootScriptPathSpend,
        ScriptType::TaprootKeyPathSpend,
    ];

    /// The tag of the script type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::P2sh => "p2sh",
            ScriptType::P2shP2wsh => "p2shP2wsh",
            ScriptType::P2wsh => "p2wsh",
            ScriptType::P2shP2pk => "p2shP2pk",
            ScriptType::P2tr => "p2tr",
            ScriptType::P2trMusig2 => "p2trMusig2",
            ScriptType::TaprootScriptPathSpend => "taprootScriptPathSpend",
            ScriptType::TaprootKeyPathSpend => "taprootKeyPathSpend",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptType::ALL
            .iter()
            .find(|script_type| script_type.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnexpectedScriptType(s.to_string()))
    }
}

/// What a signature script parser found out about a signed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSpend {
    /// The spend type of the input.
    pub script_type: ScriptType,
    /// Depth of the spent leaf in the taproot tree, for script path spends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_path_level: Option<u8>,
}

impl ParsedSpend {
    /// A spend that has no script path level.
    pub fn new(script_type: ScriptType) -> Self {
        Self {
            script_type,
            script_path_level: None,
        }
    }

    /// A taproot script path spend of a leaf at depth `level`.
    pub fn script_path(script_type: ScriptType, level: u8) -> Self {
        Self {
            script_type,
            script_path_level: Some(level),
        }
    }
}

/// Classifies signed transaction inputs by their scriptSig and witness.
///
/// Returns `None` when the input is not recognized. Implemented for any
/// `Fn(&TxIn) -> Option<ParsedSpend>`.
pub trait InputClassifier {
    /// Classify `input`.
    fn classify_input(&self, input: &TxIn) -> Option<ParsedSpend>;
}

impl<F> InputClassifier for F
where
    F: Fn(&TxIn) -> Option<ParsedSpend>,
{
    fn classify_input(&self, input: &TxIn) -> Option<ParsedSpend> {
        self(input)
    }
}

/// Classifies PSBT inputs, signed or not, by the scripts and signatures they carry.
///
/// Implemented for any `Fn(&psbt::Input) -> Option<ParsedSpend>`.
pub trait PsbtInputClassifier {
    /// Classify `input`.
    fn classify_psbt_input(&self, input: &psbt::Input) -> Option<ParsedSpend>;
}

impl<F> PsbtInputClassifier for F
where
    F: Fn(&psbt::Input) -> Option<ParsedSpend>,
{
    fn classify_psbt_input(&self, input: &psbt::Input) -> Option<ParsedSpend> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for script_type in ScriptType::ALL {
            assert_eq!(script_type.to_string().parse::<ScriptType>(), Ok(script_type));
            let json = serde_json::to_string(&script_type).unwrap();
            assert_eq!(json, format!("\"{}\"", script_type));
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            "p2pkh".parse::<ScriptType>(),
            Err(Error::UnexpectedScriptType("p2pkh".to_string()))
        );
    }
}
