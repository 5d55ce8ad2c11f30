//! # Increment and Decrement Instructions
//!
//! INC/DEC work read-modify-write on memory; INX/INY/DEX/DEY on the index
//! registers. All wrap modulo 256 and touch only Z and N.

use super::Flow;
use crate::addressing::resolve_address;
use crate::{MemoryBus, Opcode, Registers};

fn modify_memory<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    bus: &mut M,
    opcode: &Opcode,
    delta: fn(u8) -> u8,
) -> Flow {
    let address = resolve_address(regs, bus, opcode.addressing_mode).address;
    let result = delta(bus.read(address));
    bus.write(address, result);
    regs.set_zn(result);
    Flow::NEXT
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    modify_memory(regs, bus, opcode, |v| v.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    modify_memory(regs, bus, opcode, |v| v.wrapping_sub(1))
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.x = regs.x.wrapping_add(1);
    regs.set_zn(regs.x);
    Flow::NEXT
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.y = regs.y.wrapping_add(1);
    regs.set_zn(regs.y);
    Flow::NEXT
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.x = regs.x.wrapping_sub(1);
    regs.set_zn(regs.x);
    Flow::NEXT
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.y = regs.y.wrapping_sub(1);
    regs.set_zn(regs.y);
    Flow::NEXT
}
