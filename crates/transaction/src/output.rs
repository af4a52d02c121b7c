//! A transaction output: a value in satoshis and the script that locks it.
use std::io::{Read, Write};

use satstack_core::ser::{read_u64_le, write_u64_le, ByteFormat};
use satstack_script::Script;

use crate::error::TxError;

/// One output of a [`crate::Transaction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    /// The output's value, in satoshis.
    pub value: u64,
    /// The locking script.
    pub script_pubkey: Script,
}

impl Output {
    /// Build an output paying `value` satoshis to `script_pubkey`.
    pub fn new(value: u64, script_pubkey: Script) -> Output {
        Output {
            value,
            script_pubkey,
        }
    }
}

impl ByteFormat for Output {
    type Error = TxError;

    fn serialized_length(&self) -> usize {
        8 + self.script_pubkey.serialized_length()
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self, TxError> {
        let value = read_u64_le(reader)?;
        let script_pubkey = Script::read_from(reader)?;
        Ok(Output {
            value,
            script_pubkey,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, TxError> {
        let mut written = write_u64_le(writer, self.value)?;
        written += self.script_pubkey.write_to(writer)?;
        Ok(written)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use satstack_script::{Instruction, Script};

    #[test]
    fn it_round_trips_an_output() {
        let script_pubkey = Script::from_instructions(vec![Instruction::PushBytes(vec![0xab; 20])]);
        let output = Output::new(100_000, script_pubkey);
        let mut buf = Vec::new();
        output.write_to(&mut buf).unwrap();
        let parsed = Output::read_from(&mut buf.as_slice()).unwrap();
        assert_eq!(parsed, output);
    }
}
