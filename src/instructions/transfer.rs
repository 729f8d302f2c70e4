//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS: copy one register into another.
//!
//! All transfers update Z/N from the destination value except TXS, which
//! writes the stack pointer and touches no flags.

use crate::{Cpu, MemoryBus};

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.a;
    cpu.status.set_zero_negative(cpu.x);
    0
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.y = cpu.a;
    cpu.status.set_zero_negative(cpu.y);
    0
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.a = cpu.x;
    cpu.status.set_zero_negative(cpu.a);
    0
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.a = cpu.y;
    cpu.status.set_zero_negative(cpu.a);
    0
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.x = cpu.sp;
    cpu.status.set_zero_negative(cpu.x);
    0
}

/// TXS - Transfer X to Stack Pointer. No flags affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.sp = cpu.x;
    0
}
