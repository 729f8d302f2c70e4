//! # Load and Store Instructions
//!
//! - LDA/LDX/LDY: copy the operand into the target register, updating Z/N
//! - STA/STX/STY: write the source register to the effective address,
//!   flags unaffected
//!
//! Loads pay the page-crossing penalty on indexed modes; stores never do,
//! even when the resolver reports a crossing.

use crate::{AddressingMode, Cpu, MemoryBus};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.a = value;
    cpu.status.set_zero_negative(value);
    page_crossed as u8
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.x = value;
    cpu.status.set_zero_negative(value);
    page_crossed as u8
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.y = value;
    cpu.status.set_zero_negative(value);
    page_crossed as u8
}

/// STA - Store Accumulator. No flags, no page-cross penalty.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (addr, _) = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.a);
    0
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (addr, _) = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.x);
    0
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (addr, _) = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.y);
    0
}
