//! # CPU State and Execution
//!
//! This module contains the Cpu struct representing the 6502 processor state
//! and the fetch-decode-execute stepper.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: N, V, B, D, I, Z, C as a [`Status`] bitflag value
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! [`Cpu::power`] applies the power-on defaults but does not establish a
//! program counter. The first [`Cpu::step`] thereafter performs the reset
//! sequence: it loads PC from the reset vector at 0xFFFC/0xFFFD and charges
//! 7 cycles. Every subsequent `step` runs exactly one
//! fetch-decode-resolve-execute-retire cycle to completion and returns the
//! cycles consumed, including any page-crossing or branch penalties and any
//! interrupt service triggered by the bus lines.

use crate::opcodes::{self, Opcode, Operation};
use crate::{instructions, ExecutionError, MemoryBus, Status};

/// Base address of the stack page. The 8-bit stack pointer is an offset
/// into this page, so stack arithmetic is circular within 0x0100-0x01FF.
pub const STACK_BASE: u16 = 0x0100;

/// Reset vector: PC is loaded from this address (little-endian) by the
/// first step after power-on.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// NMI vector, used by non-maskable interrupt delivery.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// IRQ vector, shared by maskable interrupts and the BRK instruction.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycle cost of the reset sequence and of BRK/IRQ/NMI delivery.
///
/// The documented reference value; the tests that pin this down note the
/// assumption.
pub const INTERRUPT_CYCLES: u8 = 7;

/// 6502 CPU state and execution context.
///
/// The Cpu struct contains all processor state including registers, flags,
/// program counter, stack pointer, and cycle counter. It is generic over the
/// memory implementation via the [`MemoryBus`] trait and owns the bus for
/// its lifetime.
///
/// # Examples
///
/// ```
/// use core6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let mut cpu = Cpu::new(memory);
///
/// // Power-on defaults; PC not yet valid
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
///
/// // First step runs the reset sequence
/// assert_eq!(cpu.step().unwrap(), 7);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (STACK_BASE + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) status: Status,

    /// Total CPU cycles executed. Monotonic; never reset, not even by
    /// `power`.
    pub(crate) cycles: u64,

    /// Set by `power`; the next step runs the reset sequence instead of
    /// fetching an instruction.
    pending_reset: bool,

    /// Last sampled level of the bus NMI line, for edge detection.
    nmi_line: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus, in the power-on state.
    ///
    /// Equivalent to constructing and calling [`Cpu::power`]: registers and
    /// flags hold their documented defaults, the program counter is not yet
    /// valid, and the first [`Cpu::step`] will run the reset sequence.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::empty(),
            cycles: 0,
            pending_reset: false,
            nmi_line: false,
            memory,
        };
        cpu.power();
        cpu
    }

    /// Applies the 6502 power-on defaults.
    ///
    /// - Stack pointer set to 0xFD
    /// - Interrupt Disable flag set, all other flags clear
    /// - A, X, Y zeroed
    /// - A reset is latched: the next `step` reads the reset vector into PC
    ///
    /// The program counter is NOT loaded here and the cycle counter is NOT
    /// reset; it counts monotonically from construction.
    pub fn power(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.status = Status::power_on();
        self.pending_reset = true;
        self.nmi_line = false;
    }

    /// Executes one instruction and returns the cycles consumed.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up its descriptor in the opcode table
    /// 3. Resolve the addressing mode (advancing PC past operand bytes)
    /// 4. Execute the operation, collecting any extra cycles owed
    /// 5. Retire: accumulate cycles, then sample the interrupt lines
    ///
    /// The first call after [`Cpu::power`] instead performs the reset
    /// sequence (load PC from 0xFFFC/0xFFFD, 7 cycles).
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] when the fetched byte
    /// is not a documented opcode. PC is left pointing at the faulting byte
    /// and no other state changes; callers should treat this as a stop
    /// condition for the instruction stream.
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.pending_reset {
            self.pending_reset = false;
            self.pc = self.read_word(RESET_VECTOR);
            self.cycles += INTERRUPT_CYCLES as u64;
            return Ok(INTERRUPT_CYCLES);
        }

        // Fetch and decode
        let code = self.memory.read(self.pc);
        let Some(opcode) = opcodes::lookup_by_byte(code) else {
            return Err(ExecutionError::UnimplementedOpcode(code));
        };

        // Advance the fetch cursor past the opcode byte; the addressing
        // mode resolver consumes the operand bytes from here.
        self.pc = self.pc.wrapping_add(1);

        let extra = self.execute(opcode);
        let mut consumed = opcode.cycles + extra;
        self.cycles += consumed as u64;

        consumed += self.poll_interrupts();

        Ok(consumed)
    }

    /// Runs the CPU for at least the specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an
    /// error occurs, returning the actual number of cycles consumed (may
    /// exceed the budget due to instruction granularity). Useful for
    /// frame-locked execution models.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ExecutionError`] encountered.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Dispatches one decoded instruction to its family handler.
    ///
    /// Returns the extra cycles the instruction owes beyond its base cost
    /// (page-crossing and branch penalties).
    fn execute(&mut self, opcode: &Opcode) -> u8 {
        use instructions::*;

        let mode = opcode.mode;
        match opcode.op {
            // Loads and stores
            Operation::Lda => load_store::lda(self, mode),
            Operation::Ldx => load_store::ldx(self, mode),
            Operation::Ldy => load_store::ldy(self, mode),
            Operation::Sta => load_store::sta(self, mode),
            Operation::Stx => load_store::stx(self, mode),
            Operation::Sty => load_store::sty(self, mode),

            // Register transfers
            Operation::Tax => transfer::tax(self),
            Operation::Tay => transfer::tay(self),
            Operation::Txa => transfer::txa(self),
            Operation::Tya => transfer::tya(self),
            Operation::Tsx => transfer::tsx(self),
            Operation::Txs => transfer::txs(self),

            // Increments and decrements
            Operation::Inc => inc_dec::inc(self, mode),
            Operation::Dec => inc_dec::dec(self, mode),
            Operation::Inx => inc_dec::inx(self),
            Operation::Iny => inc_dec::iny(self),
            Operation::Dex => inc_dec::dex(self),
            Operation::Dey => inc_dec::dey(self),

            // Shifts and rotates
            Operation::Asl => shifts::asl(self, mode),
            Operation::Lsr => shifts::lsr(self, mode),
            Operation::Rol => shifts::rol(self, mode),
            Operation::Ror => shifts::ror(self, mode),

            // Arithmetic and logic
            Operation::Adc => alu::adc(self, mode),
            Operation::Sbc => alu::sbc(self, mode),
            Operation::And => alu::and(self, mode),
            Operation::Ora => alu::ora(self, mode),
            Operation::Eor => alu::eor(self, mode),
            Operation::Cmp => alu::cmp(self, mode),
            Operation::Cpx => alu::cpx(self, mode),
            Operation::Cpy => alu::cpy(self, mode),
            Operation::Bit => alu::bit(self, mode),

            // Branches
            Operation::Bcc => branches::bcc(self),
            Operation::Bcs => branches::bcs(self),
            Operation::Beq => branches::beq(self),
            Operation::Bne => branches::bne(self),
            Operation::Bmi => branches::bmi(self),
            Operation::Bpl => branches::bpl(self),
            Operation::Bvc => branches::bvc(self),
            Operation::Bvs => branches::bvs(self),

            // Control flow
            Operation::Jmp => control::jmp(self, mode),
            Operation::Jsr => control::jsr(self),
            Operation::Rts => control::rts(self),
            Operation::Rti => control::rti(self),
            Operation::Brk => control::brk(self),
            Operation::Nop => control::nop(self),

            // Stack
            Operation::Pha => stack::pha(self),
            Operation::Php => stack::php(self),
            Operation::Pla => stack::pla(self),
            Operation::Plp => stack::plp(self),

            // Flag set/clear
            Operation::Clc => flags::clc(self),
            Operation::Sec => flags::sec(self),
            Operation::Cli => flags::cli(self),
            Operation::Sei => flags::sei(self),
            Operation::Cld => flags::cld(self),
            Operation::Sed => flags::sed(self),
            Operation::Clv => flags::clv(self),
        }
    }

    /// Samples the bus interrupt lines after a retired instruction.
    ///
    /// NMI is edge-triggered and serviced regardless of the I flag; IRQ is
    /// level-sensitive and masked by I. Returns the cycles charged for
    /// delivery (0 when nothing was serviced).
    fn poll_interrupts(&mut self) -> u8 {
        let nmi_now = self.memory.nmi_active();
        let nmi_edge = nmi_now && !self.nmi_line;
        self.nmi_line = nmi_now;

        if nmi_edge {
            self.interrupt(NMI_VECTOR);
            return INTERRUPT_CYCLES;
        }

        if self.memory.irq_active() && !self.status.contains(Status::INTERRUPT_DISABLE) {
            self.interrupt(IRQ_VECTOR);
            return INTERRUPT_CYCLES;
        }

        0
    }

    /// Hardware interrupt service sequence, shared by IRQ and NMI.
    ///
    /// Pushes PC (high byte first), pushes status with the Break bit clear,
    /// sets Interrupt Disable, and loads PC from the vector.
    fn interrupt(&mut self, vector: u16) {
        self.push((self.pc >> 8) as u8);
        self.push((self.pc & 0xFF) as u8);
        self.push(self.status.as_interrupt_byte());
        self.status.insert(Status::INTERRUPT_DISABLE);
        self.pc = self.read_word(vector);
        self.cycles += INTERRUPT_CYCLES as u64;
    }

    // ========== Fetch and bus helpers ==========

    /// Reads the byte at PC and advances the fetch cursor.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a 16-bit little-endian word at PC and advances the fetch
    /// cursor by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a 16-bit little-endian word from an absolute address.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Pushes a byte onto the stack.
    ///
    /// Writes to STACK_BASE + SP, then decrements SP with wraparound; a
    /// push at offset 0x00 leaves the pointer at 0xFF.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte from the stack.
    ///
    /// Increments SP first (wrapping 0xFF to 0x00), then reads from
    /// STACK_BASE + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Register getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bit 5 always reads as 1; [`Status::as_byte`] is the single place
    /// that invariant lives.
    pub fn status(&self) -> u8 {
        self.status.as_byte()
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status flag getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    ///
    /// Only observable when forced via [`Cpu::set_status`]; execution never
    /// sets it in the live register, only in pushed bytes.
    pub fn flag_b(&self) -> bool {
        self.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    // ========== Harness mutators ==========
    //
    // Scenario-setup conveniences with no hardware counterpart. Tests use
    // them to force registers and flags to arbitrary values.

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Forces the status register to an arbitrary byte value.
    ///
    /// Bit 5 of `value` is ignored; it reads back as 1 regardless.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits_truncate(value) - Status::UNUSED;
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.set(Status::BREAK, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }
}
