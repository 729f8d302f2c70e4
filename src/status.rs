//! # Status Register
//!
//! The 6502 processor status register (P) as a bitflag type.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, reads as 1 on the real chip
//! - Bit 4: B (Break) - only meaningful on bytes pushed by BRK/PHP
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! Bit 5 is not tracked as state. It is OR'd in by [`Status::as_byte`],
//! which is the single place the register is materialized as a byte; every
//! push, pull, and read path goes through it.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry flag (set on unsigned overflow/underflow).
        const CARRY = 0b0000_0001;
        /// Zero flag (set if result is zero).
        const ZERO = 0b0000_0010;
        /// Interrupt disable flag (blocks IRQ when set).
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode flag (enables BCD arithmetic on real hardware).
        const DECIMAL = 0b0000_1000;
        /// Break flag. Only meaningful in bytes pushed to the stack:
        /// set by BRK/PHP, clear in IRQ/NMI pushes. Never consulted
        /// during execution.
        const BREAK = 0b0001_0000;
        /// Unused bit. Hardwired to 1 on the real chip; forced by
        /// `as_byte`, never stored.
        const UNUSED = 0b0010_0000;
        /// Overflow flag (set on signed overflow).
        const OVERFLOW = 0b0100_0000;
        /// Negative flag (set if bit 7 of result is 1).
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Power-on default: interrupt disable set, everything else clear.
    pub const fn power_on() -> Self {
        Status::INTERRUPT_DISABLE
    }

    /// Materializes the register as a byte with bit 5 forced to 1.
    ///
    /// This is the only place the hardwired bit is applied; `status()`
    /// reads and stack pushes all route through here.
    pub fn as_byte(self) -> u8 {
        (self | Status::UNUSED).bits()
    }

    /// Byte value pushed by BRK and PHP: bits 4 and 5 forced set.
    ///
    /// The forcing applies to the pushed byte only; the live register is
    /// unchanged.
    pub fn as_pushed_byte(self) -> u8 {
        (self | Status::UNUSED | Status::BREAK).bits()
    }

    /// Byte value pushed during IRQ/NMI service: bit 5 set, bit 4 clear.
    pub fn as_interrupt_byte(self) -> u8 {
        ((self | Status::UNUSED) - Status::BREAK).bits()
    }

    /// Reconstructs the register from a byte pulled by PLP or RTI.
    ///
    /// Bit 4 is dropped (the Break flag does not exist as processor state)
    /// and bit 5 is immaterial since `as_byte` forces it on every read.
    pub fn from_pulled_byte(value: u8) -> Self {
        (Status::from_bits_truncate(value) - Status::BREAK) - Status::UNUSED
    }

    /// Sets or clears the Zero and Negative flags from a result value.
    ///
    /// Shared by every instruction family that updates Z/N: Z iff the value
    /// is zero, N iff bit 7 is set.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}
