//! # Branch Instructions
//!
//! This module implements the eight conditional branches. Each tests a single
//! status bit and uses relative addressing with a signed 8-bit offset measured
//! from the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use super::Flow;
use crate::addressing::different_page;
use crate::{MemoryBus, Mnemonic, Opcode, Registers, StatusFlags};

/// Returns the flag a branch tests and the value that makes it taken.
fn condition(mnemonic: Mnemonic) -> (StatusFlags, bool) {
    match mnemonic {
        Mnemonic::Bcc => (StatusFlags::CARRY, false),
        Mnemonic::Bcs => (StatusFlags::CARRY, true),
        Mnemonic::Bne => (StatusFlags::ZERO, false),
        Mnemonic::Beq => (StatusFlags::ZERO, true),
        Mnemonic::Bpl => (StatusFlags::NEGATIVE, false),
        Mnemonic::Bmi => (StatusFlags::NEGATIVE, true),
        Mnemonic::Bvc => (StatusFlags::OVERFLOW, false),
        Mnemonic::Bvs => (StatusFlags::OVERFLOW, true),
        other => unreachable!("{} is not a branch", other),
    }
}

/// Executes any conditional branch.
pub(crate) fn execute_branch(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let (flag, expected) = condition(opcode.mnemonic);
    if regs.flag(flag) != expected {
        return Flow::NEXT;
    }

    let offset = bus.read(regs.pc.wrapping_add(1)) as i8;
    let next = regs.pc.wrapping_add(opcode.size_bytes() as u16);
    let target = next.wrapping_add_signed(offset as i16);

    Flow::Jump {
        target,
        extra: 1 + different_page(next, target) as u8,
    }
}
