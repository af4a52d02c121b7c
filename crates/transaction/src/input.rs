//! A transaction input: the previous outpoint it spends, its unlocking script, and sequence.
use std::io::{Read, Write};

use satstack_core::ser::{read_u32_le, write_u32_le, ByteFormat};
use satstack_script::Script;

use crate::error::TxError;
use crate::txid::TxId;

/// A reference to a specific output of a previous transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    /// The previous transaction's id.
    pub txid: TxId,
    /// The index of the output within that transaction.
    pub index: u32,
}

/// One input of a [`crate::Transaction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    /// The outpoint this input spends.
    pub previous_output: OutPoint,
    /// The unlocking script. Empty until the input is signed.
    pub script_sig: Script,
    /// The input's sequence number.
    pub sequence: u32,
}

impl Input {
    /// Build an unsigned input (an empty `scriptSig`) spending `previous_output`.
    pub fn unsigned(previous_output: OutPoint, sequence: u32) -> Input {
        Input {
            previous_output,
            script_sig: Script::new(),
            sequence,
        }
    }
}

impl ByteFormat for Input {
    type Error = TxError;

    fn serialized_length(&self) -> usize {
        32 + 4 + self.script_sig.serialized_length() + 4
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self, TxError> {
        let mut txid_bytes = [0u8; 32];
        reader.read_exact(&mut txid_bytes)?;
        let index = read_u32_le(reader)?;
        let script_sig = Script::read_from(reader)?;
        let sequence = read_u32_le(reader)?;
        Ok(Input {
            previous_output: OutPoint {
                txid: TxId::new(txid_bytes),
                index,
            },
            script_sig,
            sequence,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, TxError> {
        writer.write_all(self.previous_output.txid.as_bytes())?;
        let mut written = 32;
        written += write_u32_le(writer, self.previous_output.index)?;
        written += self.script_sig.write_to(writer)?;
        written += write_u32_le(writer, self.sequence)?;
        Ok(written)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_round_trips_an_empty_script_sig_input() {
        let input = Input::unsigned(
            OutPoint {
                txid: TxId::new([0x11u8; 32]),
                index: 7,
            },
            0xffffffff,
        );
        let mut buf = Vec::new();
        input.write_to(&mut buf).unwrap();
        let parsed = Input::read_from(&mut buf.as_slice()).unwrap();
        assert_eq!(parsed, input);
        assert_eq!(buf.len(), input.serialized_length());
    }
}
