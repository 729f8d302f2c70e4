//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations. This enables flexible memory
//! configurations including:
//!
//! - Flat 64KB RAM (FlatMemory implementation provided)
//! - Memory-mapped I/O
//! - ROM/RAM splits and banked memory systems
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored
//! - Interrupt request lines are exposed by the bus, not the CPU

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// The CPU performs reads and writes in the exact order the addressing mode
/// and operation dictate, so memory-mapped devices may rely on read side
/// effects.
///
/// # Examples
///
/// ```
/// use core6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped or invalid,
    /// implementations may return garbage data (matching 6502 hardware
    /// behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or
    /// unmapped, implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line on the 6502 is level-sensitive and shared: it is active
    /// if ANY device has a pending interrupt, and stays active until all
    /// devices clear. The CPU samples it after each retired instruction and
    /// services the interrupt when the I flag is clear.
    ///
    /// The default implementation returns `false` for simple memories with
    /// no interrupt-capable devices.
    fn irq_active(&self) -> bool {
        false
    }

    /// Checks if the NMI (Non-Maskable Interrupt) line is active.
    ///
    /// Unlike IRQ, NMI is edge-triggered: the CPU services it once per
    /// rising edge of this line, regardless of the I flag.
    ///
    /// The default implementation returns `false`.
    fn nmi_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array
/// initialized to 0x00. Useful for testing and for simple programs that
/// don't need a ROM/RAM distinction.
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
///
/// let mut cpu = Cpu::new(memory);
/// cpu.step().unwrap(); // reset sequence
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies a program image into memory starting at `addr`.
    ///
    /// Wraps at the top of the address space like the hardware bus would.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            let target = addr.wrapping_add(i as u16);
            self.data[target as usize] = b;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
