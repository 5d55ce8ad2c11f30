//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//!
//! JSR pushes the address of its own last byte (PC+2), so RTS adds one after
//! pulling it. BRK skips a padding byte and pushes PC+2; RTI restores PC
//! exactly as pulled.

use super::stack::{pop, pop_word, push, push_word};
use super::Flow;
use crate::addressing::resolve_address;
use crate::{MemoryBus, Opcode, Registers, StatusFlags, IRQ_BRK_VECTOR};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234
/// - Indirect (0x6C): JMP ($1234)
///
/// The indirect form keeps the NMOS page-wrap bug: JMP ($10FF) reads its
/// target from $10FF and $1000, not $1100.
///
/// Flags affected: None
pub(crate) fn execute_jmp(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let target = resolve_address(regs, bus, opcode.addressing_mode).address;
    Flow::jump(target)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC+2 high byte first, then jumps to the absolute operand.
pub(crate) fn execute_jsr(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let target = resolve_address(regs, bus, opcode.addressing_mode).address;
    let return_address = regs.pc.wrapping_add(2);
    push_word(regs, bus, return_address);
    Flow::jump(target)
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    let return_address = pop_word(regs, bus);
    Flow::jump(return_address.wrapping_add(1))
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Setting the B flag in P
/// 2. Pushing PC+2 (high byte, then low byte)
/// 3. Pushing P, which now carries B
/// 4. Setting the I (interrupt disable) flag
/// 5. Loading PC from the IRQ/BRK vector at $FFFE/$FFFF
pub(crate) fn execute_brk(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.p.insert(StatusFlags::BREAK);

    let return_address = regs.pc.wrapping_add(2);
    push_word(regs, bus, return_address);
    let status = regs.p.bits();
    push(regs, bus, status);

    regs.p.insert(StatusFlags::INTERRUPT_DISABLE);

    let target = bus.read_word(IRQ_BRK_VECTOR);
    log::debug!(
        "BRK at ${:04X}, vectoring to ${:04X}",
        return_address.wrapping_sub(2),
        target
    );
    Flow::jump(target)
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls P, then PC low and high bytes. PC is not incremented.
pub(crate) fn execute_rti(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.p = StatusFlags::from_bits_retain(pop(regs, bus));
    let return_address = pop_word(regs, bus);
    Flow::jump(return_address)
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(
    _regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    Flow::NEXT
}
