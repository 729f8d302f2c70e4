//! # 6502 CPU Execution Core
//!
//! A cycle-accurate NMOS 6502 instruction-execution core: registers, flags,
//! the 256-entry opcode table, all thirteen addressing modes, and the
//! fetch-decode-execute stepper, behind a trait-based memory bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{Cpu, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory and point the reset vector at 0x8000
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//! memory.write(0x8000, 0xA9); // LDA #$42
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = Cpu::new(memory);
//!
//! // The first step after power-on runs the reset sequence
//! assert_eq!(cpu.step().unwrap(), 7);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! // Then normal fetch-decode-execute
//! assert_eq!(cpu.step().unwrap(), 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Cycle Accuracy**: every instruction reports the cycles it consumed,
//!   including page-crossing and branch penalties
//! - **Table-Driven Decode**: one const descriptor table, enum dispatch
//! - **Determinism**: identical state and bus responses always produce
//!   identical results
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset sequencing, and the stepper
//! - `memory` - MemoryBus trait and FlatMemory implementation
//! - `opcodes` - Operation enum and opcode descriptor table
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Status register

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::Cpu;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Opcode, Operation, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte is not a documented 6502 opcode.
    ///
    /// Contains the opcode byte value for debugging purposes. The program
    /// counter is left pointing at the faulting byte; callers should treat
    /// this as a stop condition for the instruction stream.
    UnimplementedOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode(opcode) => {
                write!(f, "Opcode 0x{:02X} is not implemented", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
