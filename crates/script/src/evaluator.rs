//! Evaluates a combined `scriptSig` + `scriptPubkey` instruction stream against a signature
//! hash, the two-stack (main + alt) machine at the core of Bitcoin Script.
use num_bigint::BigUint;
use tracing::{instrument, trace};

use satstack_core::hashes::{hash160, hash256};
use satstack_secp256k1::privkey::verify as ecdsa_verify;
use satstack_secp256k1::secp256k1::sec_decode;
use satstack_secp256k1::Signature;

use crate::error::{ScriptError, ScriptResult};
use crate::numbers::{decode_num, encode_num};
use crate::opcodes::*;
use crate::script::{Instruction, Script};

/// Runs a [`Script`]'s instructions against `z`, the sighash digest `OP_CHECKSIG` consumes.
///
/// Evaluation succeeds if it runs to completion and leaves exactly one element on the main stack
/// that decodes to a nonzero number ("clean stack" in spec language, minus `OP_CHECKLOCKTIMEVERIFY`
/// style anti-malleability rules this crate's template set never triggers).
#[instrument(skip(script, z), fields(instructions = script.instructions().len()))]
pub fn evaluate(script: &Script, z: &BigUint) -> ScriptResult<bool> {
    let mut remaining: Vec<Instruction> = script.instructions().to_vec();
    remaining.reverse(); // pop from the end to consume front-to-back
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut alt_stack: Vec<Vec<u8>> = Vec::new();

    while let Some(instruction) = remaining.pop() {
        match instruction {
            Instruction::PushBytes(data) => stack.push(data),
            Instruction::Op(opcode) => {
                trace!(opcode = %opcode_name(opcode), "executing opcode");
                run_opcode(opcode, &mut stack, &mut alt_stack, &mut remaining, z)?;
            }
        }
    }

    if stack.len() != 1 || !alt_stack.is_empty() {
        return Err(ScriptError::NotCleanStack);
    }
    Ok(decode_num(&stack[0]) != 0)
}

fn run_opcode(
    opcode: u8,
    stack: &mut Vec<Vec<u8>>,
    alt_stack: &mut Vec<Vec<u8>>,
    remaining: &mut Vec<Instruction>,
    z: &BigUint,
) -> ScriptResult<()> {
    match opcode {
        OP_0 => stack.push(encode_num(0)),
        n if (OP_1..=OP_16).contains(&n) => stack.push(encode_num((n - OP_1 + 1) as i64)),
        OP_DUP => {
            let top = stack.last().ok_or(ScriptError::StackUnderflow("OP_DUP", 1))?;
            stack.push(top.clone());
        }
        OP_HASH160 => {
            let element = pop(stack, "OP_HASH160", 1)?;
            stack.push(hash160(&element).to_vec());
        }
        OP_HASH256 => {
            let element = pop(stack, "OP_HASH256", 1)?;
            stack.push(hash256(&element).to_vec());
        }
        OP_EQUAL => {
            let a = pop(stack, "OP_EQUAL", 2)?;
            let b = pop(stack, "OP_EQUAL", 2)?;
            stack.push(encode_num(if a == b { 1 } else { 0 }));
        }
        OP_EQUALVERIFY => {
            let a = pop(stack, "OP_EQUALVERIFY", 2)?;
            let b = pop(stack, "OP_EQUALVERIFY", 2)?;
            if a != b {
                return Err(ScriptError::StackUnderflow("OP_EQUALVERIFY", 2));
            }
        }
        OP_TOALTSTACK => {
            let element = pop(stack, "OP_TOALTSTACK", 1)?;
            alt_stack.push(element);
        }
        OP_FROMALTSTACK => {
            let element = alt_stack.pop().ok_or(ScriptError::AltStackUnderflow)?;
            stack.push(element);
        }
        OP_IF => run_conditional(true, stack, remaining)?,
        OP_NOTIF => run_conditional(false, stack, remaining)?,
        OP_ELSE | OP_ENDIF => {
            // Only reachable if a branch body reaches its own ELSE/ENDIF without the enclosing
            // OP_IF/OP_NOTIF having collected it first, which collect_branches prevents.
            return Err(ScriptError::UnbalancedConditional);
        }
        OP_CHECKSIG => run_checksig(stack, z)?,
        OP_CHECKSIGVERIFY | OP_CHECKMULTISIG | OP_CHECKMULTISIGVERIFY => {
            return Err(ScriptError::UnknownOpcode(opcode));
        }
        other => return Err(ScriptError::UnknownOpcode(other)),
    }
    Ok(())
}

fn pop(stack: &mut Vec<Vec<u8>>, op_name: &'static str, needs: usize) -> ScriptResult<Vec<u8>> {
    stack
        .pop()
        .ok_or(ScriptError::StackUnderflow(op_name, needs))
}

fn run_checksig(stack: &mut Vec<Vec<u8>>, z: &BigUint) -> ScriptResult<()> {
    let sec_pubkey = pop(stack, "OP_CHECKSIG", 2)?;
    let der_sig_with_type = pop(stack, "OP_CHECKSIG", 2)?;
    // the last byte of the scriptSig's signature push is the sighash-type byte, not part of the
    // DER encoding itself
    let der_sig = der_sig_with_type
        .split_last()
        .map(|(_, rest)| rest)
        .unwrap_or(&[]);
    let pubkey = sec_decode(&sec_pubkey)?;
    let signature = Signature::from_der(der_sig)?;
    let valid = ecdsa_verify(&pubkey, z, &signature)?;
    stack.push(encode_num(if valid { 1 } else { 0 }));
    Ok(())
}

/// Collects the true/false instruction runs following an `OP_IF`/`OP_NOTIF`, honoring nested
/// conditionals, then splices the taken branch back onto the front of `remaining`.
fn run_conditional(
    is_if: bool,
    stack: &mut Vec<Vec<u8>>,
    remaining: &mut Vec<Instruction>,
) -> ScriptResult<()> {
    let mut true_branch = Vec::new();
    let mut false_branch = Vec::new();
    let mut in_false_branch = false;
    let mut depth = 1usize;
    let mut closed = false;

    while let Some(instruction) = remaining.pop() {
        match &instruction {
            Instruction::Op(OP_IF) | Instruction::Op(OP_NOTIF) => {
                depth += 1;
                push_branch(&mut true_branch, &mut false_branch, in_false_branch, instruction);
            }
            Instruction::Op(OP_ELSE) if depth == 1 => {
                in_false_branch = true;
            }
            Instruction::Op(OP_ENDIF) => {
                depth -= 1;
                if depth == 0 {
                    closed = true;
                    break;
                }
                push_branch(&mut true_branch, &mut false_branch, in_false_branch, instruction);
            }
            _ => push_branch(&mut true_branch, &mut false_branch, in_false_branch, instruction),
        }
    }

    if !closed {
        return Err(ScriptError::UnbalancedConditional);
    }

    let condition = decode_num(&pop(stack, if is_if { "OP_IF" } else { "OP_NOTIF" }, 1)?) != 0;
    let take_true = if is_if { condition } else { !condition };
    let chosen = if take_true { true_branch } else { false_branch };
    remaining.extend(chosen.into_iter().rev());
    Ok(())
}

fn push_branch(
    true_branch: &mut Vec<Instruction>,
    false_branch: &mut Vec<Instruction>,
    in_false_branch: bool,
    instruction: Instruction,
) {
    if in_false_branch {
        false_branch.push(instruction);
    } else {
        true_branch.push(instruction);
    }
}
