//! # Load and Store Instructions
//!
//! LDA/LDX/LDY set Z and N from the loaded byte and pay the page-crossing
//! penalty on indexed reads. STA/STX/STY affect no flags; their indexed forms
//! have the extra cycle built into the base cost.

use super::Flow;
use crate::addressing::{read_operand, write_operand};
use crate::{MemoryBus, Opcode, Registers};

/// Reads the operand and sets Z/N from it, returning the byte for the caller
/// to place in its register.
fn load<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M, opcode: &Opcode) -> (u8, Flow) {
    let fetched = read_operand(regs, bus, opcode.addressing_mode);
    regs.set_zn(fetched.value);
    (fetched.value, Flow::page_penalty(fetched.page_crossed))
}

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let (value, flow) = load(regs, bus, opcode);
    regs.a = value;
    flow
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let (value, flow) = load(regs, bus, opcode);
    regs.x = value;
    flow
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let (value, flow) = load(regs, bus, opcode);
    regs.y = value;
    flow
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let a = regs.a;
    write_operand(regs, bus, opcode.addressing_mode, a);
    Flow::NEXT
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let x = regs.x;
    write_operand(regs, bus, opcode.addressing_mode, x);
    Flow::NEXT
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let y = regs.y;
    write_operand(regs, bus, opcode.addressing_mode, y);
    Flow::NEXT
}
