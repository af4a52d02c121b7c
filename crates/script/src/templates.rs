//! Standard script templates: P2PKH `scriptPubkey` and `scriptSig` construction.
use satstack_secp256k1::secp256k1::pubkey_hash160;
use satstack_secp256k1::{Point, Signature};

use crate::error::ScriptResult;
use crate::opcodes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160};
use crate::script::{Instruction, Script};

/// Build a `scriptPubkey` locking funds to `pubkey`'s HASH160:
/// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`.
pub fn p2pkh_script_pubkey(pubkey: &Point, compressed: bool) -> ScriptResult<Script> {
    let hash = pubkey_hash160(pubkey, compressed)?;
    Ok(Script::from_instructions(vec![
        Instruction::Op(OP_DUP),
        Instruction::Op(OP_HASH160),
        Instruction::PushBytes(hash.to_vec()),
        Instruction::Op(OP_EQUALVERIFY),
        Instruction::Op(OP_CHECKSIG),
    ]))
}

/// Build the `scriptSig` unlocking a P2PKH output: `<DER sig || sighash type> <SEC pubkey>`.
pub fn p2pkh_script_sig(
    signature: &Signature,
    sighash_type: u8,
    pubkey: &Point,
    compressed: bool,
) -> ScriptResult<Script> {
    let mut der = signature.to_der();
    der.push(sighash_type);
    let sec = satstack_secp256k1::secp256k1::sec_encode(pubkey, compressed)?;
    Ok(Script::from_instructions(vec![
        Instruction::PushBytes(der),
        Instruction::PushBytes(sec),
    ]))
}

/// True if `script_pubkey` matches the P2PKH template:
/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`.
pub fn is_p2pkh(script_pubkey: &Script) -> bool {
    matches!(
        script_pubkey.instructions(),
        [
            Instruction::Op(OP_DUP),
            Instruction::Op(OP_HASH160),
            Instruction::PushBytes(hash),
            Instruction::Op(OP_EQUALVERIFY),
            Instruction::Op(OP_CHECKSIG),
        ] if hash.len() == 20
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;
    use satstack_secp256k1::PrivKey;

    #[test]
    fn it_builds_a_recognizable_p2pkh_pubkey_script() {
        let priv_key = PrivKey::new(BigUint::from(5001u32));
        let pubkey = priv_key.public_key().unwrap();
        let script = p2pkh_script_pubkey(&pubkey, true).unwrap();
        assert!(is_p2pkh(&script));
    }

    #[test]
    fn it_round_trips_sig_and_pubkey_script_through_evaluation() {
        let priv_key = PrivKey::new(BigUint::from(424242u64));
        let pubkey = priv_key.public_key().unwrap();
        let z = BigUint::from(987654321u64);
        let sig = priv_key.sign(&z).unwrap();

        let script_sig = p2pkh_script_sig(&sig, 0x01, &pubkey, true).unwrap();
        let script_pubkey = p2pkh_script_pubkey(&pubkey, true).unwrap();

        let mut combined = script_sig;
        combined.append(&script_pubkey);
        assert!(crate::evaluator::evaluate(&combined, &z).unwrap());
    }
}
