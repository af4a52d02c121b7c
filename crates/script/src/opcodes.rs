//! Opcode constants this crate's evaluator knows how to run, plus a few it only recognizes well
//! enough to report as unsupported rather than silently misinterpreting as push data.
#![allow(missing_docs)]

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_IF: u8 = 0x63;
pub const OP_NOTIF: u8 = 0x64;
pub const OP_ELSE: u8 = 0x67;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_VERIFY: u8 = 0x69;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_TOALTSTACK: u8 = 0x6b;
pub const OP_FROMALTSTACK: u8 = 0x6c;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_HASH256: u8 = 0xaa;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKSIGVERIFY: u8 = 0xad;
pub const OP_CHECKMULTISIG: u8 = 0xae;
pub const OP_CHECKMULTISIGVERIFY: u8 = 0xaf;

/// True if `opcode` pushes `opcode` itself as a length-prefixed data element (the `OP_PUSHBYTES_N`
/// range `0x01..=0x4b`).
pub fn is_direct_push(opcode: u8) -> bool {
    (0x01..=0x4b).contains(&opcode)
}

/// Render an opcode's canonical name, for error messages and disassembly; falls back to a hex
/// literal for anything this crate doesn't otherwise name.
pub fn opcode_name(opcode: u8) -> String {
    match opcode {
        OP_0 => "OP_0".into(),
        OP_PUSHDATA1 => "OP_PUSHDATA1".into(),
        OP_PUSHDATA2 => "OP_PUSHDATA2".into(),
        OP_PUSHDATA4 => "OP_PUSHDATA4".into(),
        OP_1NEGATE => "OP_1NEGATE".into(),
        OP_IF => "OP_IF".into(),
        OP_NOTIF => "OP_NOTIF".into(),
        OP_ELSE => "OP_ELSE".into(),
        OP_ENDIF => "OP_ENDIF".into(),
        OP_VERIFY => "OP_VERIFY".into(),
        OP_RETURN => "OP_RETURN".into(),
        OP_TOALTSTACK => "OP_TOALTSTACK".into(),
        OP_FROMALTSTACK => "OP_FROMALTSTACK".into(),
        OP_DUP => "OP_DUP".into(),
        OP_EQUAL => "OP_EQUAL".into(),
        OP_EQUALVERIFY => "OP_EQUALVERIFY".into(),
        OP_HASH160 => "OP_HASH160".into(),
        OP_HASH256 => "OP_HASH256".into(),
        OP_CHECKSIG => "OP_CHECKSIG".into(),
        OP_CHECKSIGVERIFY => "OP_CHECKSIGVERIFY".into(),
        OP_CHECKMULTISIG => "OP_CHECKMULTISIG".into(),
        OP_CHECKMULTISIGVERIFY => "OP_CHECKMULTISIGVERIFY".into(),
        n if (OP_1..=OP_16).contains(&n) => format!("OP_{}", n - OP_1 + 1),
        n => format!("OP_UNKNOWN(0x{:02x})", n),
    }
}
