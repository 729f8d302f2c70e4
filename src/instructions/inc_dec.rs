//! # Increment and Decrement Instructions
//!
//! - INC/DEC: read-modify-write on memory, mod 256
//! - INX/INY/DEX/DEY: register forms
//!
//! Z/N updated from the new value; Carry and Overflow are never involved.
//! The indexed memory forms carry their index overhead in the base cycle
//! count, so no page-crossing penalty applies.

use crate::{AddressingMode, Cpu, MemoryBus};

/// INC - Increment Memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (addr, _) = cpu.operand_address(mode);
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.status.set_zero_negative(result);
    0
}

/// DEC - Decrement Memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (addr, _) = cpu.operand_address(mode);
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.status.set_zero_negative(result);
    0
}

/// INX - Increment X Register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.x);
    0
}

/// INY - Increment Y Register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.y);
    0
}

/// DEX - Decrement X Register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.x);
    0
}

/// DEY - Decrement Y Register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.y);
    0
}
