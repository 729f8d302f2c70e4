//! # Stack Instructions
//!
//! - PHA/PHP: push accumulator / processor status
//! - PLA/PLP: pull accumulator / processor status
//!
//! Pushes write to 0x0100+SP then decrement SP; pulls increment SP first
//! then read. Both wrap within the stack page. PHP forces bits 4 and 5 set
//! on the pushed byte only; PLP drops bit 4 and bit 5 is rematerialized on
//! every read.

use crate::{Cpu, MemoryBus, Status};

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let a = cpu.a;
    cpu.push(a);
    0
}

/// PHP - Push Processor Status.
///
/// The pushed byte has the Break and unused bits forced set; the live
/// register is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let value = cpu.status.as_pushed_byte();
    cpu.push(value);
    0
}

/// PLA - Pull Accumulator. Updates Z/N from the pulled value.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let value = cpu.pull();
    cpu.a = value;
    cpu.status.set_zero_negative(value);
    0
}

/// PLP - Pull Processor Status.
///
/// Replaces the entire status register with the pulled byte; the Break bit
/// is dropped and bit 5 reads as 1 regardless of the stored value.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> u8 {
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled_byte(pulled);
    0
}
