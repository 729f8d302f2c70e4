//! # Opcode Descriptor Table
//!
//! This module contains the complete 256-entry opcode descriptor table that
//! serves as the single source of truth for all 6502 instruction decoding.
//!
//! The table covers the **151 documented instructions** of the NMOS 6502
//! (56 operations across up to 13 addressing modes). The 105 undocumented
//! encodings are `None`: fetching one raises
//! [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError) rather
//! than guessing a behavior.
//!
//! Each descriptor carries:
//! - The semantic operation (a closed enum, matched exhaustively at dispatch)
//! - The addressing mode
//! - The encoded byte value
//! - Total instruction size in bytes (opcode + operands)
//! - Base cycle cost (page-crossing and branch penalties added dynamically)

use crate::addressing::AddressingMode;

/// The 56 documented 6502 operations.
///
/// Dispatch is an exhaustive `match` over this enum, so adding a variant
/// without a handler is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (zero set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus (negative set)
    Bmi,
    /// Branch if not equal (zero clear)
    Bne,
    /// Branch if plus (negative clear)
    Bpl,
    /// Force interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X register
    Cpx,
    /// Compare Y register
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X register
    Dex,
    /// Decrement Y register
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X register
    Inx,
    /// Increment Y register
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X register
    Stx,
    /// Store Y register
    Sty,
    /// Transfer accumulator to X
    Tax,
    /// Transfer accumulator to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to accumulator
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to accumulator
    Tya,
}

/// Descriptor for a single documented opcode encoding.
///
/// One descriptor exists per legal (operation, addressing mode) pair. Look
/// descriptors up by encoded byte during fetch with [`lookup_by_byte`], or
/// by pair with [`lookup`] when tooling or tests need the encoding for a
/// given combination.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.op, Operation::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Semantic operation.
    pub op: Operation,

    /// Addressing mode for this encoding.
    pub mode: AddressingMode,

    /// Encoded byte value (equal to the descriptor's table index).
    pub code: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub bytes: u8,

    /// Base cycle cost before page-crossing and branch penalties.
    pub cycles: u8,
}

const fn entry(
    op: Operation,
    mode: AddressingMode,
    code: u8,
    bytes: u8,
    cycles: u8,
) -> Option<Opcode> {
    Some(Opcode {
        op,
        mode,
        code,
        bytes,
        cycles,
    })
}

/// Looks up the descriptor for an encoded opcode byte.
///
/// Returns `None` for the 105 undocumented encodings; the stepper turns
/// that into an `UnimplementedOpcode` error.
pub fn lookup_by_byte(code: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[code as usize].as_ref()
}

/// Looks up the descriptor for an (operation, addressing mode) pair.
///
/// Used by tests and tooling to find the encoded byte, cycle count, and
/// length for a given combination. Returns `None` when the operation does
/// not support the mode.
pub fn lookup(op: Operation, mode: AddressingMode) -> Option<&'static Opcode> {
    OPCODE_TABLE
        .iter()
        .flatten()
        .find(|opcode| opcode.op == op && opcode.mode == mode)
}

/// Complete 256-entry opcode descriptor table indexed by encoded byte.
///
/// Documented encodings carry a descriptor; undocumented encodings are
/// `None`. Read-only after construction, so it is safe to share freely.
pub const OPCODE_TABLE: [Option<Opcode>; 256] = [
    /* 0x00 */ entry(Operation::Brk, AddressingMode::Implicit, 0x00, 1, 7),
    /* 0x01 */ entry(Operation::Ora, AddressingMode::IndirectX, 0x01, 2, 6),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ entry(Operation::Ora, AddressingMode::ZeroPage, 0x05, 2, 3),
    /* 0x06 */ entry(Operation::Asl, AddressingMode::ZeroPage, 0x06, 2, 5),
    /* 0x07 */ None,
    /* 0x08 */ entry(Operation::Php, AddressingMode::Implicit, 0x08, 1, 3),
    /* 0x09 */ entry(Operation::Ora, AddressingMode::Immediate, 0x09, 2, 2),
    /* 0x0A */ entry(Operation::Asl, AddressingMode::Accumulator, 0x0A, 1, 2),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ entry(Operation::Ora, AddressingMode::Absolute, 0x0D, 3, 4),
    /* 0x0E */ entry(Operation::Asl, AddressingMode::Absolute, 0x0E, 3, 6),
    /* 0x0F */ None,
    /* 0x10 */ entry(Operation::Bpl, AddressingMode::Relative, 0x10, 2, 2),
    /* 0x11 */ entry(Operation::Ora, AddressingMode::IndirectY, 0x11, 2, 5),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ entry(Operation::Ora, AddressingMode::ZeroPageX, 0x15, 2, 4),
    /* 0x16 */ entry(Operation::Asl, AddressingMode::ZeroPageX, 0x16, 2, 6),
    /* 0x17 */ None,
    /* 0x18 */ entry(Operation::Clc, AddressingMode::Implicit, 0x18, 1, 2),
    /* 0x19 */ entry(Operation::Ora, AddressingMode::AbsoluteY, 0x19, 3, 4),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ entry(Operation::Ora, AddressingMode::AbsoluteX, 0x1D, 3, 4),
    /* 0x1E */ entry(Operation::Asl, AddressingMode::AbsoluteX, 0x1E, 3, 7),
    /* 0x1F */ None,
    /* 0x20 */ entry(Operation::Jsr, AddressingMode::Absolute, 0x20, 3, 6),
    /* 0x21 */ entry(Operation::And, AddressingMode::IndirectX, 0x21, 2, 6),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ entry(Operation::Bit, AddressingMode::ZeroPage, 0x24, 2, 3),
    /* 0x25 */ entry(Operation::And, AddressingMode::ZeroPage, 0x25, 2, 3),
    /* 0x26 */ entry(Operation::Rol, AddressingMode::ZeroPage, 0x26, 2, 5),
    /* 0x27 */ None,
    /* 0x28 */ entry(Operation::Plp, AddressingMode::Implicit, 0x28, 1, 4),
    /* 0x29 */ entry(Operation::And, AddressingMode::Immediate, 0x29, 2, 2),
    /* 0x2A */ entry(Operation::Rol, AddressingMode::Accumulator, 0x2A, 1, 2),
    /* 0x2B */ None,
    /* 0x2C */ entry(Operation::Bit, AddressingMode::Absolute, 0x2C, 3, 4),
    /* 0x2D */ entry(Operation::And, AddressingMode::Absolute, 0x2D, 3, 4),
    /* 0x2E */ entry(Operation::Rol, AddressingMode::Absolute, 0x2E, 3, 6),
    /* 0x2F */ None,
    /* 0x30 */ entry(Operation::Bmi, AddressingMode::Relative, 0x30, 2, 2),
    /* 0x31 */ entry(Operation::And, AddressingMode::IndirectY, 0x31, 2, 5),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ entry(Operation::And, AddressingMode::ZeroPageX, 0x35, 2, 4),
    /* 0x36 */ entry(Operation::Rol, AddressingMode::ZeroPageX, 0x36, 2, 6),
    /* 0x37 */ None,
    /* 0x38 */ entry(Operation::Sec, AddressingMode::Implicit, 0x38, 1, 2),
    /* 0x39 */ entry(Operation::And, AddressingMode::AbsoluteY, 0x39, 3, 4),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ entry(Operation::And, AddressingMode::AbsoluteX, 0x3D, 3, 4),
    /* 0x3E */ entry(Operation::Rol, AddressingMode::AbsoluteX, 0x3E, 3, 7),
    /* 0x3F */ None,
    /* 0x40 */ entry(Operation::Rti, AddressingMode::Implicit, 0x40, 1, 6),
    /* 0x41 */ entry(Operation::Eor, AddressingMode::IndirectX, 0x41, 2, 6),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ entry(Operation::Eor, AddressingMode::ZeroPage, 0x45, 2, 3),
    /* 0x46 */ entry(Operation::Lsr, AddressingMode::ZeroPage, 0x46, 2, 5),
    /* 0x47 */ None,
    /* 0x48 */ entry(Operation::Pha, AddressingMode::Implicit, 0x48, 1, 3),
    /* 0x49 */ entry(Operation::Eor, AddressingMode::Immediate, 0x49, 2, 2),
    /* 0x4A */ entry(Operation::Lsr, AddressingMode::Accumulator, 0x4A, 1, 2),
    /* 0x4B */ None,
    /* 0x4C */ entry(Operation::Jmp, AddressingMode::Absolute, 0x4C, 3, 3),
    /* 0x4D */ entry(Operation::Eor, AddressingMode::Absolute, 0x4D, 3, 4),
    /* 0x4E */ entry(Operation::Lsr, AddressingMode::Absolute, 0x4E, 3, 6),
    /* 0x4F */ None,
    /* 0x50 */ entry(Operation::Bvc, AddressingMode::Relative, 0x50, 2, 2),
    /* 0x51 */ entry(Operation::Eor, AddressingMode::IndirectY, 0x51, 2, 5),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ entry(Operation::Eor, AddressingMode::ZeroPageX, 0x55, 2, 4),
    /* 0x56 */ entry(Operation::Lsr, AddressingMode::ZeroPageX, 0x56, 2, 6),
    /* 0x57 */ None,
    /* 0x58 */ entry(Operation::Cli, AddressingMode::Implicit, 0x58, 1, 2),
    /* 0x59 */ entry(Operation::Eor, AddressingMode::AbsoluteY, 0x59, 3, 4),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ entry(Operation::Eor, AddressingMode::AbsoluteX, 0x5D, 3, 4),
    /* 0x5E */ entry(Operation::Lsr, AddressingMode::AbsoluteX, 0x5E, 3, 7),
    /* 0x5F */ None,
    /* 0x60 */ entry(Operation::Rts, AddressingMode::Implicit, 0x60, 1, 6),
    /* 0x61 */ entry(Operation::Adc, AddressingMode::IndirectX, 0x61, 2, 6),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ entry(Operation::Adc, AddressingMode::ZeroPage, 0x65, 2, 3),
    /* 0x66 */ entry(Operation::Ror, AddressingMode::ZeroPage, 0x66, 2, 5),
    /* 0x67 */ None,
    /* 0x68 */ entry(Operation::Pla, AddressingMode::Implicit, 0x68, 1, 4),
    /* 0x69 */ entry(Operation::Adc, AddressingMode::Immediate, 0x69, 2, 2),
    /* 0x6A */ entry(Operation::Ror, AddressingMode::Accumulator, 0x6A, 1, 2),
    /* 0x6B */ None,
    /* 0x6C */ entry(Operation::Jmp, AddressingMode::Indirect, 0x6C, 3, 5),
    /* 0x6D */ entry(Operation::Adc, AddressingMode::Absolute, 0x6D, 3, 4),
    /* 0x6E */ entry(Operation::Ror, AddressingMode::Absolute, 0x6E, 3, 6),
    /* 0x6F */ None,
    /* 0x70 */ entry(Operation::Bvs, AddressingMode::Relative, 0x70, 2, 2),
    /* 0x71 */ entry(Operation::Adc, AddressingMode::IndirectY, 0x71, 2, 5),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ entry(Operation::Adc, AddressingMode::ZeroPageX, 0x75, 2, 4),
    /* 0x76 */ entry(Operation::Ror, AddressingMode::ZeroPageX, 0x76, 2, 6),
    /* 0x77 */ None,
    /* 0x78 */ entry(Operation::Sei, AddressingMode::Implicit, 0x78, 1, 2),
    /* 0x79 */ entry(Operation::Adc, AddressingMode::AbsoluteY, 0x79, 3, 4),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ entry(Operation::Adc, AddressingMode::AbsoluteX, 0x7D, 3, 4),
    /* 0x7E */ entry(Operation::Ror, AddressingMode::AbsoluteX, 0x7E, 3, 7),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ entry(Operation::Sta, AddressingMode::IndirectX, 0x81, 2, 6),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ entry(Operation::Sty, AddressingMode::ZeroPage, 0x84, 2, 3),
    /* 0x85 */ entry(Operation::Sta, AddressingMode::ZeroPage, 0x85, 2, 3),
    /* 0x86 */ entry(Operation::Stx, AddressingMode::ZeroPage, 0x86, 2, 3),
    /* 0x87 */ None,
    /* 0x88 */ entry(Operation::Dey, AddressingMode::Implicit, 0x88, 1, 2),
    /* 0x89 */ None,
    /* 0x8A */ entry(Operation::Txa, AddressingMode::Implicit, 0x8A, 1, 2),
    /* 0x8B */ None,
    /* 0x8C */ entry(Operation::Sty, AddressingMode::Absolute, 0x8C, 3, 4),
    /* 0x8D */ entry(Operation::Sta, AddressingMode::Absolute, 0x8D, 3, 4),
    /* 0x8E */ entry(Operation::Stx, AddressingMode::Absolute, 0x8E, 3, 4),
    /* 0x8F */ None,
    /* 0x90 */ entry(Operation::Bcc, AddressingMode::Relative, 0x90, 2, 2),
    /* 0x91 */ entry(Operation::Sta, AddressingMode::IndirectY, 0x91, 2, 6),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ entry(Operation::Sty, AddressingMode::ZeroPageX, 0x94, 2, 4),
    /* 0x95 */ entry(Operation::Sta, AddressingMode::ZeroPageX, 0x95, 2, 4),
    /* 0x96 */ entry(Operation::Stx, AddressingMode::ZeroPageY, 0x96, 2, 4),
    /* 0x97 */ None,
    /* 0x98 */ entry(Operation::Tya, AddressingMode::Implicit, 0x98, 1, 2),
    /* 0x99 */ entry(Operation::Sta, AddressingMode::AbsoluteY, 0x99, 3, 5),
    /* 0x9A */ entry(Operation::Txs, AddressingMode::Implicit, 0x9A, 1, 2),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ entry(Operation::Sta, AddressingMode::AbsoluteX, 0x9D, 3, 5),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ entry(Operation::Ldy, AddressingMode::Immediate, 0xA0, 2, 2),
    /* 0xA1 */ entry(Operation::Lda, AddressingMode::IndirectX, 0xA1, 2, 6),
    /* 0xA2 */ entry(Operation::Ldx, AddressingMode::Immediate, 0xA2, 2, 2),
    /* 0xA3 */ None,
    /* 0xA4 */ entry(Operation::Ldy, AddressingMode::ZeroPage, 0xA4, 2, 3),
    /* 0xA5 */ entry(Operation::Lda, AddressingMode::ZeroPage, 0xA5, 2, 3),
    /* 0xA6 */ entry(Operation::Ldx, AddressingMode::ZeroPage, 0xA6, 2, 3),
    /* 0xA7 */ None,
    /* 0xA8 */ entry(Operation::Tay, AddressingMode::Implicit, 0xA8, 1, 2),
    /* 0xA9 */ entry(Operation::Lda, AddressingMode::Immediate, 0xA9, 2, 2),
    /* 0xAA */ entry(Operation::Tax, AddressingMode::Implicit, 0xAA, 1, 2),
    /* 0xAB */ None,
    /* 0xAC */ entry(Operation::Ldy, AddressingMode::Absolute, 0xAC, 3, 4),
    /* 0xAD */ entry(Operation::Lda, AddressingMode::Absolute, 0xAD, 3, 4),
    /* 0xAE */ entry(Operation::Ldx, AddressingMode::Absolute, 0xAE, 3, 4),
    /* 0xAF */ None,
    /* 0xB0 */ entry(Operation::Bcs, AddressingMode::Relative, 0xB0, 2, 2),
    /* 0xB1 */ entry(Operation::Lda, AddressingMode::IndirectY, 0xB1, 2, 5),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ entry(Operation::Ldy, AddressingMode::ZeroPageX, 0xB4, 2, 4),
    /* 0xB5 */ entry(Operation::Lda, AddressingMode::ZeroPageX, 0xB5, 2, 4),
    /* 0xB6 */ entry(Operation::Ldx, AddressingMode::ZeroPageY, 0xB6, 2, 4),
    /* 0xB7 */ None,
    /* 0xB8 */ entry(Operation::Clv, AddressingMode::Implicit, 0xB8, 1, 2),
    /* 0xB9 */ entry(Operation::Lda, AddressingMode::AbsoluteY, 0xB9, 3, 4),
    /* 0xBA */ entry(Operation::Tsx, AddressingMode::Implicit, 0xBA, 1, 2),
    /* 0xBB */ None,
    /* 0xBC */ entry(Operation::Ldy, AddressingMode::AbsoluteX, 0xBC, 3, 4),
    /* 0xBD */ entry(Operation::Lda, AddressingMode::AbsoluteX, 0xBD, 3, 4),
    /* 0xBE */ entry(Operation::Ldx, AddressingMode::AbsoluteY, 0xBE, 3, 4),
    /* 0xBF */ None,
    /* 0xC0 */ entry(Operation::Cpy, AddressingMode::Immediate, 0xC0, 2, 2),
    /* 0xC1 */ entry(Operation::Cmp, AddressingMode::IndirectX, 0xC1, 2, 6),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ entry(Operation::Cpy, AddressingMode::ZeroPage, 0xC4, 2, 3),
    /* 0xC5 */ entry(Operation::Cmp, AddressingMode::ZeroPage, 0xC5, 2, 3),
    /* 0xC6 */ entry(Operation::Dec, AddressingMode::ZeroPage, 0xC6, 2, 5),
    /* 0xC7 */ None,
    /* 0xC8 */ entry(Operation::Iny, AddressingMode::Implicit, 0xC8, 1, 2),
    /* 0xC9 */ entry(Operation::Cmp, AddressingMode::Immediate, 0xC9, 2, 2),
    /* 0xCA */ entry(Operation::Dex, AddressingMode::Implicit, 0xCA, 1, 2),
    /* 0xCB */ None,
    /* 0xCC */ entry(Operation::Cpy, AddressingMode::Absolute, 0xCC, 3, 4),
    /* 0xCD */ entry(Operation::Cmp, AddressingMode::Absolute, 0xCD, 3, 4),
    /* 0xCE */ entry(Operation::Dec, AddressingMode::Absolute, 0xCE, 3, 6),
    /* 0xCF */ None,
    /* 0xD0 */ entry(Operation::Bne, AddressingMode::Relative, 0xD0, 2, 2),
    /* 0xD1 */ entry(Operation::Cmp, AddressingMode::IndirectY, 0xD1, 2, 5),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ entry(Operation::Cmp, AddressingMode::ZeroPageX, 0xD5, 2, 4),
    /* 0xD6 */ entry(Operation::Dec, AddressingMode::ZeroPageX, 0xD6, 2, 6),
    /* 0xD7 */ None,
    /* 0xD8 */ entry(Operation::Cld, AddressingMode::Implicit, 0xD8, 1, 2),
    /* 0xD9 */ entry(Operation::Cmp, AddressingMode::AbsoluteY, 0xD9, 3, 4),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ entry(Operation::Cmp, AddressingMode::AbsoluteX, 0xDD, 3, 4),
    /* 0xDE */ entry(Operation::Dec, AddressingMode::AbsoluteX, 0xDE, 3, 7),
    /* 0xDF */ None,
    /* 0xE0 */ entry(Operation::Cpx, AddressingMode::Immediate, 0xE0, 2, 2),
    /* 0xE1 */ entry(Operation::Sbc, AddressingMode::IndirectX, 0xE1, 2, 6),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ entry(Operation::Cpx, AddressingMode::ZeroPage, 0xE4, 2, 3),
    /* 0xE5 */ entry(Operation::Sbc, AddressingMode::ZeroPage, 0xE5, 2, 3),
    /* 0xE6 */ entry(Operation::Inc, AddressingMode::ZeroPage, 0xE6, 2, 5),
    /* 0xE7 */ None,
    /* 0xE8 */ entry(Operation::Inx, AddressingMode::Implicit, 0xE8, 1, 2),
    /* 0xE9 */ entry(Operation::Sbc, AddressingMode::Immediate, 0xE9, 2, 2),
    /* 0xEA */ entry(Operation::Nop, AddressingMode::Implicit, 0xEA, 1, 2),
    /* 0xEB */ None,
    /* 0xEC */ entry(Operation::Cpx, AddressingMode::Absolute, 0xEC, 3, 4),
    /* 0xED */ entry(Operation::Sbc, AddressingMode::Absolute, 0xED, 3, 4),
    /* 0xEE */ entry(Operation::Inc, AddressingMode::Absolute, 0xEE, 3, 6),
    /* 0xEF */ None,
    /* 0xF0 */ entry(Operation::Beq, AddressingMode::Relative, 0xF0, 2, 2),
    /* 0xF1 */ entry(Operation::Sbc, AddressingMode::IndirectY, 0xF1, 2, 5),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ entry(Operation::Sbc, AddressingMode::ZeroPageX, 0xF5, 2, 4),
    /* 0xF6 */ entry(Operation::Inc, AddressingMode::ZeroPageX, 0xF6, 2, 6),
    /* 0xF7 */ None,
    /* 0xF8 */ entry(Operation::Sed, AddressingMode::Implicit, 0xF8, 1, 2),
    /* 0xF9 */ entry(Operation::Sbc, AddressingMode::AbsoluteY, 0xF9, 3, 4),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ entry(Operation::Sbc, AddressingMode::AbsoluteX, 0xFD, 3, 4),
    /* 0xFE */ entry(Operation::Inc, AddressingMode::AbsoluteX, 0xFE, 3, 7),
    /* 0xFF */ None,];
