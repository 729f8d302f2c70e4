//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV: set or clear exactly one named flag.
//! No other flags or registers are affected. There is no "set overflow"
//! instruction on the 6502; V is only set by arithmetic, BIT, and PLP/RTI.

use crate::{Cpu, MemoryBus, Status};

/// CLC - Clear Carry Flag.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::CARRY);
    0
}

/// SEC - Set Carry Flag.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::CARRY);
    0
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
    0
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    0
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::DECIMAL);
    0
}

/// SED - Set Decimal Mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.insert(Status::DECIMAL);
    0
}

/// CLV - Clear Overflow Flag.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    cpu.status.remove(Status::OVERFLOW);
    0
}
