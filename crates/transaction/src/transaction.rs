//! The legacy (pre-segwit) Bitcoin transaction type: wire codec, txid, sighash, signing, and
//! input verification.
use std::io::{Read, Write};

use num_bigint::BigUint;
use tracing::instrument;

use satstack_core::hashes::hash256;
use satstack_core::ser::{read_u32_le, write_u32_le, ByteFormat};
use satstack_core::varint::{compact_int_length, read_compact_int, write_compact_int};
use satstack_script::{evaluate, Script};
use satstack_secp256k1::PrivKey;

use crate::error::{TxError, TxResult};
use crate::input::Input;
use crate::output::Output;
use crate::sighash::SighashFlag;
use crate::txid::TxId;

const SEGWIT_MARKER: [u8; 2] = [0x00, 0x01];

/// A legacy Bitcoin transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// The transaction format version.
    pub version: u32,
    /// Spent outputs.
    pub inputs: Vec<Input>,
    /// Created outputs.
    pub outputs: Vec<Output>,
    /// The block height or timestamp below which this transaction is not valid.
    pub locktime: u32,
}

impl Transaction {
    /// Build a transaction from its parts.
    pub fn new(version: u32, inputs: Vec<Input>, outputs: Vec<Output>, locktime: u32) -> Transaction {
        Transaction {
            version,
            inputs,
            outputs,
            locktime,
        }
    }

    /// This transaction's id: `Hash256` of its legacy serialization, in internal byte order.
    pub fn txid(&self) -> TxResult<TxId> {
        let mut buf = Vec::with_capacity(self.serialized_length());
        self.write_to(&mut buf)?;
        Ok(TxId::new(hash256(&buf)))
    }

    /// Total value carried by this transaction's outputs, in satoshis.
    pub fn output_sum(&self) -> u64 {
        self.outputs.iter().map(|o| o.value).sum()
    }

    /// The transaction fee: the sum of `input_values` (the resolved prevout values, in input
    /// order) minus the sum of this transaction's output values.
    ///
    /// Fails with [`TxError::NegativeFee`] if outputs spend more than the inputs provide — a
    /// transaction no miner would ever accept, and not something this crate should silently
    /// produce a fee for.
    pub fn fee(&self, input_values: &[u64]) -> TxResult<u64> {
        let total_in: u64 = input_values.iter().sum();
        let total_out = self.output_sum();
        total_in.checked_sub(total_out).ok_or(TxError::NegativeFee {
            inputs: total_in,
            outputs: total_out,
        })
    }

    /// Compute the legacy (`SIGHASH_ALL`-only) sighash for `input_index`, substituting
    /// `prevout_script_pubkey` as that input's `scriptSig` and blanking every other input's
    /// `scriptSig`, per BIP 143's predecessor algorithm.
    pub fn legacy_sighash(
        &self,
        input_index: usize,
        prevout_script_pubkey: &Script,
        sighash_type: SighashFlag,
    ) -> TxResult<BigUint> {
        if input_index >= self.inputs.len() {
            return Err(TxError::InputIndexOutOfRange(input_index));
        }
        let mut shadow_inputs = Vec::with_capacity(self.inputs.len());
        for (i, input) in self.inputs.iter().enumerate() {
            let script_sig = if i == input_index {
                prevout_script_pubkey.clone()
            } else {
                Script::new()
            };
            shadow_inputs.push(Input {
                previous_output: input.previous_output,
                script_sig,
                sequence: input.sequence,
            });
        }
        let shadow = Transaction {
            version: self.version,
            inputs: shadow_inputs,
            outputs: self.outputs.clone(),
            locktime: self.locktime,
        };

        let mut preimage = Vec::new();
        shadow.write_to(&mut preimage)?;
        write_u32_le(&mut preimage, sighash_type.to_u8() as u32)?;

        Ok(BigUint::from_bytes_be(&hash256(&preimage)))
    }

    /// Sign `input_index` as a P2PKH spend of `prevout_script_pubkey`, replacing that input's
    /// `scriptSig` with the freshly built unlocking script.
    #[instrument(skip(self, priv_key, prevout_script_pubkey))]
    pub fn sign_input(
        &mut self,
        input_index: usize,
        priv_key: &PrivKey,
        prevout_script_pubkey: &Script,
        compressed: bool,
    ) -> TxResult<()> {
        let z = self.legacy_sighash(input_index, prevout_script_pubkey, SighashFlag::All)?;
        let signature = priv_key.sign(&z)?;
        let pubkey = priv_key.public_key()?;
        let script_sig = satstack_script::templates::p2pkh_script_sig(
            &signature,
            SighashFlag::All.to_u8(),
            &pubkey,
            compressed,
        )?;
        self.inputs
            .get_mut(input_index)
            .ok_or(TxError::InputIndexOutOfRange(input_index))?
            .script_sig = script_sig;
        Ok(())
    }

    /// Verify that `input_index`'s `scriptSig`, combined with `prevout_script_pubkey`, evaluates
    /// to true under this transaction's legacy sighash.
    #[instrument(skip(self, prevout_script_pubkey))]
    pub fn verify_input(
        &self,
        input_index: usize,
        prevout_script_pubkey: &Script,
    ) -> TxResult<bool> {
        let input = self
            .inputs
            .get(input_index)
            .ok_or(TxError::InputIndexOutOfRange(input_index))?;
        let z = self.legacy_sighash(input_index, prevout_script_pubkey, SighashFlag::All)?;
        let mut combined = input.script_sig.clone();
        combined.append(prevout_script_pubkey);
        Ok(evaluate(&combined, &z)?)
    }
}

impl ByteFormat for Transaction {
    type Error = TxError;

    fn serialized_length(&self) -> usize {
        4 + compact_int_length(self.inputs.len() as u64)
            + self.inputs.iter().map(|i| i.serialized_length()).sum::<usize>()
            + compact_int_length(self.outputs.len() as u64)
            + self.outputs.iter().map(|o| o.serialized_length()).sum::<usize>()
            + 4
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self, TxError> {
        let version = read_u32_le(reader)?;

        let mut peek = [0u8; 1];
        reader.read_exact(&mut peek)?;
        let num_inputs = if peek[0] == SEGWIT_MARKER[0] {
            let mut flag = [0u8; 1];
            reader.read_exact(&mut flag)?;
            if flag[0] != SEGWIT_MARKER[1] {
                return Err(TxError::SegwitUnsupported);
            }
            return Err(TxError::SegwitUnsupported);
        } else {
            decode_compact_int_with_first_byte(reader, peek[0])?
        };

        let mut inputs = Vec::with_capacity(num_inputs as usize);
        for _ in 0..num_inputs {
            inputs.push(Input::read_from(reader)?);
        }

        let num_outputs = read_compact_int(reader)?;
        let mut outputs = Vec::with_capacity(num_outputs as usize);
        for _ in 0..num_outputs {
            outputs.push(Output::read_from(reader)?);
        }

        let locktime = read_u32_le(reader)?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            locktime,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, TxError> {
        let mut written = write_u32_le(writer, self.version)?;
        written += write_compact_int(writer, self.inputs.len() as u64)?;
        for input in &self.inputs {
            written += input.write_to(writer)?;
        }
        written += write_compact_int(writer, self.outputs.len() as u64)?;
        for output in &self.outputs {
            written += output.write_to(writer)?;
        }
        written += write_u32_le(writer, self.locktime)?;
        Ok(written)
    }
}

/// Reads the remainder of a CompactSize integer whose first byte has already been consumed
/// (necessary here because that first byte doubles as the segwit marker check).
fn decode_compact_int_with_first_byte<R: Read>(reader: &mut R, first: u8) -> TxResult<u64> {
    use satstack_core::ser::{read_u16_le, read_u32_le as read_u32_le_inner, read_u64_le};
    match first {
        0xff => Ok(read_u64_le(reader)?),
        0xfe => Ok(read_u32_le_inner(reader)? as u64),
        0xfd => Ok(read_u16_le(reader)? as u64),
        n => Ok(n as u64),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::OutPoint;
    use num_bigint::BigUint;
    use satstack_script::{templates::p2pkh_script_pubkey, Instruction};
    use satstack_secp256k1::PrivKey;

    fn sample_tx() -> Transaction {
        let mut prev_hash = [0u8; 32];
        for (i, b) in prev_hash.iter_mut().enumerate() {
            *b = i as u8;
        }
        let input = Input::unsigned(
            OutPoint {
                txid: TxId::new(prev_hash),
                index: 0,
            },
            0xffffffff,
        );
        let mut spk1 = vec![0x76, 0xa9, 0x14];
        spk1.extend((0u8..20).collect::<Vec<_>>());
        spk1.extend([0x88, 0xac]);
        let mut spk2 = vec![0x76, 0xa9, 0x14];
        spk2.extend((20u8..40).collect::<Vec<_>>());
        spk2.extend([0x88, 0xac]);

        Transaction::new(
            1,
            vec![input],
            vec![
                Output::new(100_000, Script::from_raw_bytes(&spk1).unwrap()),
                Output::new(50_000, Script::from_raw_bytes(&spk2).unwrap()),
            ],
            0,
        )
    }

    #[test]
    fn it_round_trips_the_known_wire_encoding() {
        let tx = sample_tx();
        let mut buf = Vec::new();
        tx.write_to(&mut buf).unwrap();
        assert_eq!(
            hex::encode(&buf),
            "0100000001000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f0000000000ffffffff02a0860100000000001976a914000102030405060708090a0b0c0d0e0f1011121388ac50c30000000000001976a9141415161718191a1b1c1d1e1f202122232425262788ac00000000"
        );
        let parsed = Transaction::read_from(&mut buf.as_slice()).unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn it_computes_the_known_txid() {
        let tx = sample_tx();
        let txid = tx.txid().unwrap();
        assert_eq!(
            format!("{}", txid),
            "f7155a6bd67f4ef69b9e5b23238f93b4e252210801e0eeacf49182d8a06bbc5c"
        );
    }

    #[test]
    fn it_rejects_segwit_marker() {
        // version (4 bytes) followed by the segwit marker/flag pair
        let raw = [0x01, 0x00, 0x00, 0x00, 0x00, 0x01];
        assert!(matches!(
            Transaction::read_from(&mut &raw[..]),
            Err(TxError::SegwitUnsupported)
        ));
    }

    #[test]
    fn it_signs_and_verifies_a_p2pkh_input() {
        let priv_key = PrivKey::new(BigUint::from(99999u32));
        let pubkey = priv_key.public_key().unwrap();
        let prevout_script_pubkey = p2pkh_script_pubkey(&pubkey, true).unwrap();

        let input = Input::unsigned(
            OutPoint {
                txid: TxId::new([0x22u8; 32]),
                index: 0,
            },
            0xffffffff,
        );
        let output_spk = Script::from_instructions(vec![Instruction::PushBytes(vec![0xcd; 20])]);
        let mut tx = Transaction::new(1, vec![input], vec![Output::new(40_000, output_spk)], 0);

        tx.sign_input(0, &priv_key, &prevout_script_pubkey, true)
            .unwrap();

        assert!(tx.verify_input(0, &prevout_script_pubkey).unwrap());
    }

    #[test]
    fn it_fails_verification_against_the_wrong_prevout_script() {
        let priv_key = PrivKey::new(BigUint::from(13131313u64));
        let other_priv_key = PrivKey::new(BigUint::from(24242424u64));
        let pubkey = priv_key.public_key().unwrap();
        let prevout_script_pubkey = p2pkh_script_pubkey(&pubkey, true).unwrap();
        let wrong_script_pubkey =
            p2pkh_script_pubkey(&other_priv_key.public_key().unwrap(), true).unwrap();

        let input = Input::unsigned(
            OutPoint {
                txid: TxId::new([0x33u8; 32]),
                index: 0,
            },
            0xffffffff,
        );
        let output_spk = Script::from_instructions(vec![Instruction::PushBytes(vec![0xef; 20])]);
        let mut tx = Transaction::new(1, vec![input], vec![Output::new(1_000, output_spk)], 0);
        tx.sign_input(0, &priv_key, &prevout_script_pubkey, true)
            .unwrap();

        assert!(!tx.verify_input(0, &wrong_script_pubkey).unwrap_or(false));
    }

    #[test]
    fn it_computes_fee() {
        let tx = sample_tx();
        assert_eq!(tx.fee(&[200_000]).unwrap(), 50_000);
    }

    #[test]
    fn it_rejects_negative_fee() {
        let tx = sample_tx();
        assert!(matches!(
            tx.fee(&[1_000]),
            Err(TxError::NegativeFee { .. })
        ));
    }
}
