//! # Status Flag Instructions
//!
//! CLC, SEC, CLD, SED, CLI, SEI and CLV each set or clear a single bit of P
//! and leave every other bit alone.

use super::Flow;
use crate::{MemoryBus, Mnemonic, Opcode, Registers, StatusFlags};

/// Executes any of the single-flag set/clear instructions.
pub(crate) fn execute_flag(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let (flag, on) = match opcode.mnemonic {
        Mnemonic::Clc => (StatusFlags::CARRY, false),
        Mnemonic::Sec => (StatusFlags::CARRY, true),
        Mnemonic::Cld => (StatusFlags::DECIMAL, false),
        Mnemonic::Sed => (StatusFlags::DECIMAL, true),
        Mnemonic::Cli => (StatusFlags::INTERRUPT_DISABLE, false),
        Mnemonic::Sei => (StatusFlags::INTERRUPT_DISABLE, true),
        Mnemonic::Clv => (StatusFlags::OVERFLOW, false),
        other => unreachable!("{} is not a flag instruction", other),
    };

    regs.set_flag(flag, on);
    Flow::NEXT
}
