//! [`Instruction`] and [`Script`]: a disassembled Bitcoin Script and its wire codec.
use std::io::{Read, Write};

use satstack_core::ser::{read_u16_le, write_u16_le, ByteFormat};
use satstack_core::varint::{compact_int_length, read_compact_int, write_compact_int};

use crate::error::{ScriptError, ScriptResult};
use crate::opcodes::{is_direct_push, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};

const MAX_PUSH_LEN: usize = 520;

/// One element of a disassembled script: either an opcode byte, or a data element a `PUSH*`
/// instruction placed on the stack.
///
/// The source program represented every instruction as a bare `[]byte`, telling opcodes and
/// one-byte pushes apart with a length heuristic (`IsInteger`) that could not actually
/// distinguish "the one-byte push of 0x76" from "the literal OP_DUP opcode". Splitting the two
/// into their own variants removes the ambiguity at the type level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// A single opcode byte.
    Op(u8),
    /// A data element placed on the stack by a push instruction.
    PushBytes(Vec<u8>),
}

/// A disassembled Bitcoin Script: an ordered list of [`Instruction`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    instructions: Vec<Instruction>,
}

impl Script {
    /// An empty script.
    pub fn new() -> Script {
        Script {
            instructions: Vec::new(),
        }
    }

    /// Build a script directly from its instructions.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Script {
        Script { instructions }
    }

    /// The script's instructions, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Append another script's instructions to this one, e.g. combining a `scriptSig` with the
    /// previous output's `scriptPubkey` for evaluation.
    pub fn append(&mut self, other: &Script) {
        self.instructions.extend(other.instructions.iter().cloned());
    }

    /// Encode the raw, length-prefixless byte string this script disassembles from/to.
    pub fn to_raw_bytes(&self) -> ScriptResult<Vec<u8>> {
        let mut out = Vec::new();
        for instruction in &self.instructions {
            match instruction {
                Instruction::Op(op) => out.push(*op),
                Instruction::PushBytes(data) => {
                    let len = data.len();
                    if len <= 0x4b {
                        out.push(len as u8);
                    } else if len < 0x100 {
                        out.push(OP_PUSHDATA1);
                        out.push(len as u8);
                    } else if len < MAX_PUSH_LEN {
                        out.push(OP_PUSHDATA2);
                        write_u16_le(&mut out, len as u16)?;
                    } else {
                        return Err(ScriptError::ElementTooLong(len));
                    }
                    out.extend_from_slice(data);
                }
            }
        }
        Ok(out)
    }

    /// Disassemble a raw, length-prefixless byte string into instructions.
    pub fn from_raw_bytes(raw: &[u8]) -> ScriptResult<Script> {
        let mut instructions = Vec::new();
        let mut cursor = 0usize;
        while cursor < raw.len() {
            let opcode = raw[cursor];
            cursor += 1;
            if is_direct_push(opcode) {
                let len = opcode as usize;
                take_push(raw, &mut cursor, len, &mut instructions)?;
            } else if opcode == OP_PUSHDATA1 {
                let len = *require_byte(raw, cursor)? as usize;
                cursor += 1;
                take_push(raw, &mut cursor, len, &mut instructions)?;
            } else if opcode == OP_PUSHDATA2 {
                require_bytes(raw, cursor, 2)?;
                let len = u16::from_le_bytes([raw[cursor], raw[cursor + 1]]) as usize;
                cursor += 2;
                take_push(raw, &mut cursor, len, &mut instructions)?;
            } else if opcode == OP_PUSHDATA4 {
                require_bytes(raw, cursor, 4)?;
                let len = u32::from_le_bytes([
                    raw[cursor],
                    raw[cursor + 1],
                    raw[cursor + 2],
                    raw[cursor + 3],
                ]) as usize;
                cursor += 4;
                take_push(raw, &mut cursor, len, &mut instructions)?;
            } else {
                instructions.push(Instruction::Op(opcode));
            }
        }
        Ok(Script { instructions })
    }
}

fn require_byte(raw: &[u8], at: usize) -> ScriptResult<&u8> {
    raw.get(at).ok_or(ScriptError::TruncatedPush {
        wanted: 1,
        available: raw.len().saturating_sub(at),
    })
}

fn require_bytes(raw: &[u8], at: usize, len: usize) -> ScriptResult<()> {
    if raw.len() < at + len {
        return Err(ScriptError::TruncatedPush {
            wanted: len,
            available: raw.len().saturating_sub(at),
        });
    }
    Ok(())
}

fn take_push(
    raw: &[u8],
    cursor: &mut usize,
    len: usize,
    instructions: &mut Vec<Instruction>,
) -> ScriptResult<()> {
    require_bytes(raw, *cursor, len)?;
    instructions.push(Instruction::PushBytes(raw[*cursor..*cursor + len].to_vec()));
    *cursor += len;
    Ok(())
}

impl ByteFormat for Script {
    type Error = ScriptError;

    fn serialized_length(&self) -> usize {
        let raw_len = self.to_raw_bytes().map(|v| v.len()).unwrap_or(0);
        compact_int_length(raw_len as u64) + raw_len
    }

    fn read_from<R: Read>(reader: &mut R) -> ScriptResult<Self> {
        let len = read_compact_int(reader)?;
        let mut raw = vec![0u8; len as usize];
        reader.read_exact(&mut raw)?;
        Script::from_raw_bytes(&raw)
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> ScriptResult<usize> {
        let raw = self.to_raw_bytes()?;
        let mut written = write_compact_int(writer, raw.len() as u64)?;
        writer.write_all(&raw)?;
        written += raw.len();
        Ok(written)
    }
}
