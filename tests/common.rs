#![allow(dead_code)]

use bitcoin::{
    absolute, opcodes::all::OP_CHECKMULTISIG, opcodes::all::OP_CHECKSIG,
    opcodes::all::OP_CHECKSIGVERIFY, psbt, script::Builder, script::PushBytesBuf, transaction,
    Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness,
};
use proptest::prelude::*;
use utxo_dimensions::{Dimensions, InputType, OutputDimensions, ParsedSpend, ScriptType};

/// Largest DER encoded ECDSA signature with sighash byte.
pub const ECDSA_SIG: [u8; 72] = [0x30; 72];
/// Schnorr signature with the default sighash (no sighash byte).
pub const SCHNORR_SIG: [u8; 64] = [0x01; 64];

fn push(builder: Builder, data: &[u8]) -> Builder {
    builder.push_slice(PushBytesBuf::try_from(data.to_vec()).expect("pushable"))
}

fn pubkey(i: u8) -> [u8; 33] {
    let mut key = [i; 33];
    key[0] = 0x02;
    key
}

pub fn multisig_2_of_3_script() -> ScriptBuf {
    let mut builder = Builder::new().push_int(2);
    for i in 1..=3 {
        builder = push(builder, &pubkey(i));
    }
    builder.push_int(3).push_opcode(OP_CHECKMULTISIG).into_script()
}

pub fn p2pk_script() -> ScriptBuf {
    push(Builder::new(), &pubkey(7))
        .push_opcode(OP_CHECKSIG)
        .into_script()
}

pub fn tapscript_2_of_2() -> ScriptBuf {
    let builder = push(Builder::new(), &[0x11; 32]).push_opcode(OP_CHECKSIGVERIFY);
    push(builder, &[0x22; 32])
        .push_opcode(OP_CHECKSIG)
        .into_script()
}

pub fn control_block(level: usize) -> Vec<u8> {
    let mut control_block = vec![0xc0];
    control_block.extend_from_slice(&[0x33; 32]);
    for step in 0..level {
        control_block.extend_from_slice(&[step as u8; 32]);
    }
    control_block
}

fn multisig_witness() -> Witness {
    Witness::from_slice(&[
        Vec::new(),
        ECDSA_SIG.to_vec(),
        ECDSA_SIG.to_vec(),
        multisig_2_of_3_script().to_bytes(),
    ])
}

fn txin(script_sig: ScriptBuf, witness: Witness) -> TxIn {
    TxIn {
        previous_output: OutPoint::null(),
        script_sig,
        sequence: Sequence::MAX,
        witness,
    }
}

/// A fully signed input of `input_type` with the largest signatures it can carry.
pub fn signed_input(input_type: InputType) -> TxIn {
    match input_type {
        InputType::P2sh => {
            let builder = push(Builder::new(), &[]);
            let builder = push(builder, &ECDSA_SIG);
            let builder = push(builder, &ECDSA_SIG);
            let script_sig = push(builder, multisig_2_of_3_script().as_bytes()).into_script();
            txin(script_sig, Witness::new())
        }
        InputType::P2shP2wsh => {
            let witness_script_hash = [0x44; 32];
            let program = push(Builder::new().push_int(0), &witness_script_hash).into_script();
            let script_sig = push(Builder::new(), program.as_bytes()).into_script();
            txin(script_sig, multisig_witness())
        }
        InputType::P2wsh => txin(ScriptBuf::new(), multisig_witness()),
        InputType::P2trKeypath => txin(ScriptBuf::new(), Witness::from_slice(&[SCHNORR_SIG])),
        InputType::P2trScriptPathLevel1 | InputType::P2trScriptPathLevel2 => {
            let level = if input_type == InputType::P2trScriptPathLevel1 {
                1
            } else {
                2
            };
            let witness = Witness::from_slice(&[
                SCHNORR_SIG.to_vec(),
                SCHNORR_SIG.to_vec(),
                tapscript_2_of_2().to_bytes(),
                control_block(level),
            ]);
            txin(ScriptBuf::new(), witness)
        }
        InputType::P2shP2pk => {
            let builder = push(Builder::new(), &ECDSA_SIG);
            let script_sig = push(builder, p2pk_script().as_bytes()).into_script();
            txin(script_sig, Witness::new())
        }
    }
}

pub fn unsigned_input() -> TxIn {
    txin(ScriptBuf::new(), Witness::new())
}

pub fn output(script_len: usize) -> TxOut {
    TxOut {
        value: Amount::from_sat(10_000),
        script_pubkey: ScriptBuf::from_bytes(vec![0x51; script_len]),
    }
}

pub fn transaction(input: Vec<TxIn>, output: Vec<TxOut>) -> Transaction {
    Transaction {
        version: transaction::Version::TWO,
        lock_time: absolute::LockTime::ZERO,
        input,
        output,
    }
}

/// Stands in for a signature script parser. It only knows the layouts of [`signed_input`].
pub fn classify(input: &TxIn) -> Option<ParsedSpend> {
    let witness: Vec<&[u8]> = input.witness.iter().collect();
    match witness.as_slice() {
        [] => match input.script_sig.instructions().count() {
            4 => Some(ParsedSpend::new(ScriptType::P2sh)),
            2 => Some(ParsedSpend::new(ScriptType::P2shP2pk)),
            _ => None,
        },
        [_] => Some(ParsedSpend::new(ScriptType::TaprootKeyPathSpend)),
        [_, _, _, _] if !input.script_sig.is_empty() => {
            Some(ParsedSpend::new(ScriptType::P2shP2wsh))
        }
        [first, _, _, _] if first.is_empty() => Some(ParsedSpend::new(ScriptType::P2wsh)),
        [_, _, _, control_block] => match control_block.len() {
            65 => Some(ParsedSpend::script_path(ScriptType::TaprootScriptPathSpend, 1)),
            97 => Some(ParsedSpend::script_path(ScriptType::TaprootScriptPathSpend, 2)),
            _ => None,
        },
        _ => None,
    }
}

/// Stands in for a PSBT input parser: classifies by the scripts attached to the input.
pub fn classify_psbt(input: &psbt::Input) -> Option<ParsedSpend> {
    match (&input.redeem_script, &input.witness_script) {
        (Some(_), Some(_)) => Some(ParsedSpend::new(ScriptType::P2shP2wsh)),
        (Some(_), None) => Some(ParsedSpend::new(ScriptType::P2sh)),
        (None, Some(_)) => Some(ParsedSpend::new(ScriptType::P2wsh)),
        (None, None) => None,
    }
}

pub fn dimensions() -> impl Strategy<Value = Dimensions> {
    (
        proptest::array::uniform7(0u64..1_000),
        0u64..1_000,
        1u64..100,
    )
        .prop_map(|(counts, n_outputs, output_size)| Dimensions {
            n_p2sh_inputs: counts[0],
            n_p2sh_p2wsh_inputs: counts[1],
            n_p2wsh_inputs: counts[2],
            n_p2tr_keypath_inputs: counts[3],
            n_p2tr_script_path_level1_inputs: counts[4],
            n_p2tr_script_path_level2_inputs: counts[5],
            n_p2sh_p2pk_inputs: counts[6],
            outputs: OutputDimensions::new(n_outputs, n_outputs * output_size)
                .expect("count and size are both zero or both positive"),
        })
}
