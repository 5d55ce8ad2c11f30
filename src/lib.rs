//! # 6502 Instruction Engine
//!
//! An instruction-level NMOS 6502 emulator core. The engine owns no state: it
//! operates on a caller-owned [`Registers`] file and reaches memory only
//! through the [`MemoryBus`] trait, so the host keeps full control of the
//! backing store, memory-mapped I/O and real-time pacing.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{reset, step, FlatMemory, MemoryBus, Registers};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Reset vector low byte
//! memory.write(0xFFFD, 0x80); // Reset vector high byte
//! memory.load(0x8000, &[0xA9, 0x42, 0xEA]); // LDA #$42 / NOP
//!
//! let mut regs = Registers::default();
//! reset(&mut regs, &mut memory);
//! assert_eq!(regs.pc, 0x8000);
//! assert_eq!(regs.sp, 0xFD);
//!
//! step(&mut regs, &mut memory).unwrap();
//! assert_eq!(regs.a, 0x42);
//! assert_eq!(regs.cycles, 2);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: every documented opcode is an entry in
//!   [`OPCODE_TABLE`]; the dispatcher is a lookup plus a call into a small
//!   per-category handler.
//! - **Explicit page crossing**: operand resolution returns whether a page
//!   boundary was crossed instead of publishing it through shared state.
//! - **Trait-based bus**: any [`MemoryBus`] implementation can back the CPU.
//!
//! ## Modules
//!
//! - `cpu` - `step`/`reset` and the [`CPU`] convenience wrapper
//! - `registers` - register file and status flags
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing modes and operand resolution
//! - `disassembler` - machine code to assembly text

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{reset, step, CPU};
pub use disassembler::{disassemble, format_instruction, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Mnemonic, Opcode, OPCODE_TABLE};
pub use registers::{Registers, StatusFlags};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_BRK_VECTOR: u16 = 0xFFFE;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `address` is not a documented 6502 opcode.
    ///
    /// Raised before the instruction touches any register, so the register
    /// file is exactly as it was before the failed step.
    UnknownOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_opcode_display() {
        let err = ExecutionError::UnknownOpcode {
            opcode: 0x02,
            address: 0xE01F,
        };
        assert_eq!(err.to_string(), "Unknown opcode 0x02 at 0xE01F");
    }
}
