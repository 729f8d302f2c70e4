//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left (bit 7 into Carry, 0 into bit 0)
//! - LSR: Logical Shift Right (bit 0 into Carry, 0 into bit 7)
//! - ROL: Rotate Left through Carry
//! - ROR: Rotate Right through Carry
//!
//! In Accumulator mode the operation works on A directly; otherwise it is a
//! read-modify-write on the effective address. The base cycle counts for
//! the indexed memory forms already include the index overhead, so no
//! page-crossing penalty ever applies.

use crate::{AddressingMode, Cpu, MemoryBus, Status};

/// Applies a shift/rotate to the accumulator or to memory, updating Z/N
/// from the result. The closure computes the new value and the outgoing
/// carry bit.
fn modify<M, F>(cpu: &mut Cpu<M>, mode: AddressingMode, f: F) -> u8
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let carry_in = cpu.status.contains(Status::CARRY);

    let result = match mode {
        AddressingMode::Accumulator => {
            let (result, carry_out) = f(cpu.a, carry_in);
            cpu.a = result;
            cpu.status.set(Status::CARRY, carry_out);
            result
        }
        _ => {
            let (addr, _) = cpu.operand_address(mode);
            let value = cpu.memory.read(addr);
            let (result, carry_out) = f(value, carry_in);
            cpu.memory.write(addr, result);
            cpu.status.set(Status::CARRY, carry_out);
            result
        }
    };

    cpu.status.set_zero_negative(result);
    0
}

/// ASL - Arithmetic Shift Left.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    modify(cpu, mode, |value, _| (value << 1, value & 0x80 != 0))
}

/// LSR - Logical Shift Right.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    modify(cpu, mode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// ROL - Rotate Left through Carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    modify(cpu, mode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// ROR - Rotate Right through Carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    modify(cpu, mode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
