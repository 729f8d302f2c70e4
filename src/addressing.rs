//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor and the resolution logic that turns operand bytes into
//! effective addresses.
//!
//! Resolution consumes operand bytes by advancing the CPU's fetch cursor
//! (the program counter), performs the mode's pointer reads in hardware
//! order, and reports whether an indexed access crossed a page boundary.
//! Whether a page crossing costs an extra cycle is the instruction's
//! decision: loads and read-modify-write operations pay it, stores never do.

use crate::{Cpu, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the
    /// address after the branch.
    Relative,

    /// Full 16-bit address, low byte first.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Carries the NMOS page-boundary defect: a pointer with low byte 0xFF
    /// reads its high byte from the start of the same page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X). Both pointer bytes are read with zero-page
    /// wraparound. Never pays a page-cross penalty.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. May incur +1 cycle penalty if adding Y
    /// crosses a page boundary.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode byte.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Returns true when `base` and `resolved` sit in different 256-byte pages.
fn page_crossed(base: u16, resolved: u16) -> bool {
    base & 0xFF00 != resolved & 0xFF00
}

impl<M: MemoryBus> Cpu<M> {
    /// Resolves the effective address for an address-producing mode.
    ///
    /// Consumes the mode's operand bytes by advancing the program counter
    /// and returns `(address, page_crossed)`. The page-crossed flag is only
    /// ever true for AbsoluteX, AbsoluteY, IndirectY, and Relative; whether
    /// it costs a cycle is up to the caller.
    ///
    /// Implicit, Accumulator, and Immediate have no effective address and
    /// must not be resolved through this path.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::ZeroPage => (self.fetch_byte() as u16, false),

            AddressingMode::ZeroPageX => {
                // Index addition wraps within the zero page
                let base = self.fetch_byte();
                (base.wrapping_add(self.x) as u16, false)
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                (base.wrapping_add(self.y) as u16, false)
            }

            AddressingMode::Absolute => (self.fetch_word(), false),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                // Offset is relative to the address after the 2-byte branch,
                // which is exactly where the fetch cursor now points.
                let base = self.pc;
                let target = base.wrapping_add_signed(offset as i16);
                (target, page_crossed(base, target))
            }

            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let target_lo = self.memory.read(ptr) as u16;
                // NMOS hardware defect: when the pointer's low byte is 0xFF
                // the high byte is read from the start of the same page, not
                // from ptr+1. Preserved, not fixed.
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let target_hi = self.memory.read(hi_addr) as u16;
                ((target_hi << 8) | target_lo, false)
            }

            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                (self.read_word_zero_page(ptr), false)
            }

            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_word_zero_page(ptr);
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Immediate => {
                unreachable!("mode {:?} has no effective address", mode)
            }
        }
    }

    /// Resolves and reads the operand value for a value-consuming mode.
    ///
    /// Returns `(value, page_crossed)`. Immediate reads the byte following
    /// the opcode; Accumulator yields the A register without touching the
    /// bus; every other mode resolves an effective address and reads it.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> (u8, bool) {
        match mode {
            AddressingMode::Immediate => (self.fetch_byte(), false),
            AddressingMode::Accumulator => (self.a, false),
            _ => {
                let (addr, crossed) = self.operand_address(mode);
                (self.memory.read(addr), crossed)
            }
        }
    }

    /// Reads a 16-bit little-endian word from the zero page with pointer
    /// wraparound: the high byte of a pointer at 0xFF comes from 0x00.
    pub(crate) fn read_word_zero_page(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_byte_counts() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::ZeroPageX.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Absolute.operand_bytes(), 2);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_page_crossed() {
        assert!(!page_crossed(0x04FA, 0x04FF));
        assert!(page_crossed(0x04FA, 0x050A));
        assert!(page_crossed(0xFFFF, 0x0000));
    }
}
