//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND/ORA/EOR: Bitwise logic against the accumulator
//! - CMP/CPX/CPY: Register comparison
//! - BIT: Bit test
//!
//! ADC and SBC implement binary arithmetic regardless of the Decimal flag;
//! the D flag is tracked but BCD result correction is not emulated.

use crate::{AddressingMode, Cpu, MemoryBus, Status};

/// Adds `value` plus the carry flag into the accumulator, setting C, Z, N,
/// and V. Shared by ADC and SBC (SBC adds the one's complement).
fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.status.set(Status::CARRY, result16 > 0xFF);
    // Overflow: both operands had the same sign, result has a different
    // one. V = (A ^ result) & (value ^ result) & 0x80
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.status.set_zero_negative(result);
    cpu.a = result;
}

/// ADC - Add with Carry.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    add_with_carry(cpu, value);
    page_crossed as u8
}

/// SBC - Subtract with Carry.
///
/// A - M - (1 - C), implemented as A + !M + C; carry acts as NOT borrow.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    add_with_carry(cpu, !value);
    page_crossed as u8
}

/// AND - Logical AND with the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.a &= value;
    cpu.status.set_zero_negative(cpu.a);
    page_crossed as u8
}

/// ORA - Logical Inclusive OR with the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.a |= value;
    cpu.status.set_zero_negative(cpu.a);
    page_crossed as u8
}

/// EOR - Exclusive OR with the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    cpu.a ^= value;
    cpu.status.set_zero_negative(cpu.a);
    page_crossed as u8
}

/// Compares a register against the operand without storing the result.
///
/// Carry set iff register >= operand (unsigned), Zero iff equal, Negative
/// from bit 7 of the 8-bit difference.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.operand_value(mode);
    let result = register.wrapping_sub(value);

    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zero_negative(result);
    page_crossed as u8
}

/// CMP - Compare Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let a = cpu.a;
    compare(cpu, a, mode)
}

/// CPX - Compare X Register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let x = cpu.x;
    compare(cpu, x, mode)
}

/// CPY - Compare Y Register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let y = cpu.y;
    compare(cpu, y, mode)
}

/// BIT - Bit Test.
///
/// Zero from (A AND operand); Overflow and Negative copied directly from
/// bits 6 and 7 of the operand. Accumulator and Carry are untouched.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (value, _) = cpu.operand_value(mode);

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    0
}
