//! # Control Flow Instructions
//!
//! - JMP: unconditional jump (Absolute or Indirect, with the indirect
//!   page-boundary defect preserved by the addressing layer)
//! - JSR/RTS: subroutine call and return
//! - BRK/RTI: software interrupt and return
//! - NOP: no operation
//!
//! JSR pushes the address of the last byte of the instruction (return
//! address minus one); RTS compensates by adding one after the pull. BRK
//! pushes PC+2 and the status byte with the Break bit set, then vectors
//! through the IRQ vector at 0xFFFE/0xFFFF.

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, Cpu, MemoryBus, Status};

/// JMP - Jump. No flags, no stack effect.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, mode: AddressingMode) -> u8 {
    let (target, _) = cpu.operand_address(mode);
    cpu.pc = target;
    0
}

/// JSR - Jump to Subroutine.
///
/// Pushes (return address - 1), high byte first, then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let (target, _) = cpu.operand_address(AddressingMode::Absolute);

    // The fetch cursor now points at the next instruction; the 6502 pushes
    // that address minus one.
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push((return_addr >> 8) as u8);
    cpu.push((return_addr & 0xFF) as u8);

    cpu.pc = target;
    0
}

/// RTS - Return from Subroutine.
///
/// Pulls the return address (low byte first), adds one, and resumes there.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    0
}

/// RTI - Return from Interrupt.
///
/// Pulls status (Break bit dropped, bit 5 immaterial), then the return
/// address. Unlike RTS, no increment is applied.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled_byte(pulled);

    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;
    0
}

/// BRK - Force Interrupt.
///
/// Pushes PC+2 (counting from the opcode byte; BRK carries a padding byte),
/// pushes status with the Break bit set, sets Interrupt Disable, and loads
/// PC from the IRQ vector.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    // The fetch cursor sits on the padding byte; the pushed return address
    // skips it.
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push((return_addr >> 8) as u8);
    cpu.push((return_addr & 0xFF) as u8);
    cpu.push(cpu.status.as_pushed_byte());

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.pc = cpu.read_word(IRQ_VECTOR);
    0
}

/// NOP - No Operation.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut Cpu<M>) -> u8 {
    0
}
