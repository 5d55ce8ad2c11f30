//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or, read-modify-write, on memory. Carry
//! receives the bit shifted out; Z and N follow the result, so LSR always
//! leaves N clear. The memory forms never pay a page-crossing penalty.

use super::Flow;
use crate::addressing::{resolve_address, AddressingMode};
use crate::{MemoryBus, Opcode, Registers, StatusFlags};

/// Reads the operand, applies `shift` (which returns the result and the
/// carry-out), writes the result back and updates C, Z and N.
fn read_modify_write<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    bus: &mut M,
    opcode: &Opcode,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) -> Flow {
    let carry_in = regs.flag(StatusFlags::CARRY);

    let (result, carry_out) = if opcode.addressing_mode == AddressingMode::Accumulator {
        let (result, carry_out) = shift(regs.a, carry_in);
        regs.a = result;
        (result, carry_out)
    } else {
        // Resolve once so the operand bytes are fetched a single time
        let address = resolve_address(regs, bus, opcode.addressing_mode).address;
        let (result, carry_out) = shift(bus.read(address), carry_in);
        bus.write(address, result);
        (result, carry_out)
    };

    regs.set_flag(StatusFlags::CARRY, carry_out);
    regs.set_zn(result);

    Flow::NEXT
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    read_modify_write(regs, bus, opcode, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    read_modify_write(regs, bus, opcode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    read_modify_write(regs, bus, opcode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7, so N mirrors the carry held before the rotate.
pub(crate) fn execute_ror(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    read_modify_write(regs, bus, opcode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
