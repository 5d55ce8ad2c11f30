//! # CPU Execution
//!
//! The decode-execute step and reset sequence, plus the [`CPU`] wrapper that
//! bundles a register file with a memory bus.
//!
//! ## Execution Model
//!
//! - [`step`]: Execute exactly one instruction against a caller-owned register file
//! - [`reset`]: Run the reset sequence (SP decays by 3, PC from $FFFC/$FFFD)
//! - [`CPU::run_for_cycles`]: Execute until a cycle budget is exhausted
//!
//! A step either applies an instruction completely or, for an unknown opcode,
//! fails without touching the register file.

use crate::instructions::Flow;
use crate::{decode, ExecutionError, MemoryBus, Registers, StatusFlags, RESET_VECTOR};

/// Executes one instruction and advances the register file.
///
/// Performs the fetch-decode-execute cycle:
/// 1. Fetch opcode byte at PC
/// 2. Look up instruction metadata in the opcode table
/// 3. Call the handler stored in the table entry
/// 4. Move PC to the next instruction (or the handler's jump target)
/// 5. Add base cycles plus any page-crossing or branch surcharge
///
/// # Errors
///
/// Returns [`ExecutionError::UnknownOpcode`] if the byte at PC is not a
/// documented opcode. The register file is left untouched in that case.
///
/// # Examples
///
/// ```
/// use cpu6502::{step, ExecutionError, FlatMemory, MemoryBus, Registers};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0200, &[0xEA, 0x02]); // NOP, then an illegal opcode
///
/// let mut regs = Registers { pc: 0x0200, ..Registers::default() };
/// step(&mut regs, &mut mem).unwrap();
/// assert_eq!(regs.pc, 0x0201);
/// assert_eq!(regs.cycles, 2);
///
/// let before = regs;
/// assert_eq!(
///     step(&mut regs, &mut mem),
///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0x0201 })
/// );
/// assert_eq!(regs, before);
/// ```
pub fn step(regs: &mut Registers, bus: &mut dyn MemoryBus) -> Result<(), ExecutionError> {
    let address = regs.pc;
    let byte = bus.read(address);

    let Some(opcode) = decode(byte) else {
        log::debug!("unknown opcode ${:02X} at ${:04X}", byte, address);
        return Err(ExecutionError::UnknownOpcode {
            opcode: byte,
            address,
        });
    };

    log::trace!(
        "{:04X}  {:02X}  {} {:?}  {}",
        address,
        byte,
        opcode.mnemonic,
        opcode.addressing_mode,
        regs
    );

    let extra = match (opcode.handler)(regs, bus, opcode) {
        Flow::Next { extra } => {
            regs.pc = address.wrapping_add(opcode.size_bytes() as u16);
            extra
        }
        Flow::Jump { target, extra } => {
            regs.pc = target;
            extra
        }
    };

    regs.cycles += opcode.base_cycles as u64 + extra as u64;
    Ok(())
}

/// Runs the 6502 reset sequence.
///
/// SP is decremented by 3, mirroring the three suppressed stack writes the
/// chip performs during reset, and PC is loaded from the reset vector at
/// $FFFC (low) / $FFFD (high). A, X, Y, P and the cycle counter are left as
/// the host set them.
///
/// # Examples
///
/// ```
/// use cpu6502::{reset, FlatMemory, MemoryBus, Registers};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFC, 0x00);
/// mem.write(0xFFFD, 0xE0);
///
/// let mut regs = Registers::default();
/// reset(&mut regs, &mut mem);
/// assert_eq!(regs.pc, 0xE000);
/// assert_eq!(regs.sp, 0xFD);
/// ```
pub fn reset<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M) {
    regs.sp = regs.sp.wrapping_sub(3);
    regs.pc = bus.read_word(RESET_VECTOR);
    log::debug!("reset: PC=${:04X} SP=${:02X}", regs.pc, regs.sp);
}

/// 6502 CPU: a register file bundled with the memory bus it runs against.
///
/// A thin owner over [`step`] and [`reset`] for hosts that do not need to
/// hold the two halves separately.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    regs: Registers,
    memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a powered-on CPU over `memory` and runs the reset sequence.
    ///
    /// All registers start at zero, so after reset SP is $FD and PC holds the
    /// reset vector.
    pub fn new(memory: M) -> Self {
        Self::with_registers(Registers::default(), memory)
    }

    /// Creates a CPU from an explicit power-on register state and resets it.
    pub fn with_registers(regs: Registers, memory: M) -> Self {
        let mut cpu = Self { regs, memory };
        cpu.reset();
        cpu
    }

    /// Executes one instruction. See [`step`].
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        step(&mut self.regs, &mut self.memory)
    }

    /// Runs the reset sequence. See [`reset`].
    pub fn reset(&mut self) {
        reset(&mut self.regs, &mut self.memory);
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes whole instructions until at least `cycle_budget` cycles have
    /// elapsed or an error occurs. Returns the cycles actually consumed, which
    /// may exceed the budget by part of one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.regs.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.regs.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.regs.cycles - start_cycles)
    }

    // ========== Register Access ==========

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the register file mutably.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus mutably.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Splits the CPU back into its register file and memory bus.
    pub fn into_parts(self) -> (Registers, M) {
        (self.regs, self.memory)
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    /// Returns the total number of CPU cycles executed since power-on.
    pub fn cycles(&self) -> u64 {
        self.regs.cycles
    }

    /// Overwrites the accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0x69, 0x01]); // ADC #$01
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.set_a(0x41);
    /// cpu.set_flag_c(true);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.a(), 0x43);
    /// ```
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Overwrites the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Overwrites the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Moves the program counter; the next step fetches from `value`.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Overwrites the stack pointer (offset into page $01).
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = StatusFlags::from_bits_retain(value);
    }

    // ========== Status Flags ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flag(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flag(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.flag(StatusFlags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flag(StatusFlags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flag(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flag(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flag(StatusFlags::CARRY)
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::NEGATIVE, on);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::OVERFLOW, on);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::BREAK, on);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::DECIMAL, on);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::INTERRUPT_DISABLE, on);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::ZERO, on);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, on: bool) {
        self.regs.set_flag(StatusFlags::CARRY, on);
    }
}
