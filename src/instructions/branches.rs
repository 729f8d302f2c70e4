//! # Branch Instructions
//!
//! Conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing with a signed 8-bit offset from the
//! address after the 2-byte instruction. Cycle timing:
//! - +0 if the branch is not taken
//! - +1 if taken to the same page
//! - +2 if taken to a different page
//!
//! No flags are affected.

use crate::{AddressingMode, Cpu, MemoryBus, Status};

/// Resolves the relative target and redirects PC when `taken`.
///
/// Returns the extra cycles owed: 1 for a taken branch plus 1 more when the
/// destination is on a different page than the address after the branch.
fn branch<M: MemoryBus>(cpu: &mut Cpu<M>, taken: bool) -> u8 {
    // The offset byte is consumed whether or not the branch is taken
    let (target, page_crossed) = cpu.operand_address(AddressingMode::Relative);

    if taken {
        cpu.pc = target;
        1 + page_crossed as u8
    } else {
        0
    }
}

/// BCC - Branch if Carry Clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = !cpu.status.contains(Status::CARRY);
    branch(cpu, taken)
}

/// BCS - Branch if Carry Set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = cpu.status.contains(Status::CARRY);
    branch(cpu, taken)
}

/// BEQ - Branch if Equal (Zero set).
pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = cpu.status.contains(Status::ZERO);
    branch(cpu, taken)
}

/// BNE - Branch if Not Equal (Zero clear).
pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = !cpu.status.contains(Status::ZERO);
    branch(cpu, taken)
}

/// BMI - Branch if Minus (Negative set).
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = cpu.status.contains(Status::NEGATIVE);
    branch(cpu, taken)
}

/// BPL - Branch if Plus (Negative clear).
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = !cpu.status.contains(Status::NEGATIVE);
    branch(cpu, taken)
}

/// BVC - Branch if Overflow Clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = !cpu.status.contains(Status::OVERFLOW);
    branch(cpu, taken)
}

/// BVS - Branch if Overflow Set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let taken = cpu.status.contains(Status::OVERFLOW);
    branch(cpu, taken)
}
