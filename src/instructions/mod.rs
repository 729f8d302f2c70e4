//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 56 documented 6502
//! operations, organized by family. Each instruction is a standalone
//! function that takes a mutable reference to the CPU (and the addressing
//! mode where the operation supports more than one), resolves its operand
//! through the addressing layer, and returns the extra cycles it owes
//! beyond the descriptor's base cost.
//!
//! ## Families
//!
//! - **alu**: Arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate (ASL, LSR, ROL, ROR)
//! - **load_store**: Loads and stores (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
