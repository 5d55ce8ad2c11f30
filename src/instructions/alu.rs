//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (borrow)
//! - AND, ORA, EOR: Logical operations on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! All operand reads go through the addressing resolver; indexed reads that
//! cross a page cost one extra cycle.
//!
//! ## Decimal mode
//!
//! When D is set, ADC and SBC apply a low-nibble correction only: +6 after an
//! add and -6 after a subtract whenever the low nibble of the result exceeds
//! 9. The high nibble is never corrected and N/V are computed as in binary
//! mode.

use super::Flow;
use crate::addressing::read_operand;
use crate::{MemoryBus, Opcode, Registers, StatusFlags};

/// Shared adder behind ADC and SBC.
///
/// SBC feeds the one's complement of its operand, which turns the carry-in
/// into "not borrow".
fn add_with_carry(regs: &mut Registers, value: u8, subtract: bool) {
    let a = regs.a;
    let operand = if subtract { !value } else { value };
    let decimal = regs.flag(StatusFlags::DECIMAL);

    let mut sum = a as u16 + operand as u16 + regs.carry_bit() as u16;
    if decimal && !subtract && (sum & 0x0F) > 9 {
        sum += 0x06;
    }

    let mut result = sum as u8;
    if decimal && subtract && (result & 0x0F) > 9 {
        result = result.wrapping_sub(0x06);
    }

    regs.set_flag(StatusFlags::CARRY, sum > 0xFF);
    // Overflow: both inputs share a sign that the result does not
    regs.set_flag(
        StatusFlags::OVERFLOW,
        (a ^ result) & (operand ^ result) & 0x80 != 0,
    );
    regs.set_zn(result);
    regs.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_adc(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let fetched = read_operand(regs, bus, opcode.addressing_mode);
    add_with_carry(regs, fetched.value, false);
    Flow::page_penalty(fetched.page_crossed)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry is set when no borrow occurred.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_sbc(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let fetched = read_operand(regs, bus, opcode.addressing_mode);
    add_with_carry(regs, fetched.value, true);
    Flow::page_penalty(fetched.page_crossed)
}

fn logical<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    bus: &mut M,
    opcode: &Opcode,
    op: fn(u8, u8) -> u8,
) -> Flow {
    let fetched = read_operand(regs, bus, opcode.addressing_mode);
    regs.a = op(regs.a, fetched.value);
    regs.set_zn(regs.a);
    Flow::page_penalty(fetched.page_crossed)
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_and(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    logical(regs, bus, opcode, |a, m| a & m)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ora(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    logical(regs, bus, opcode, |a, m| a | m)
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_eor(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    logical(regs, bus, opcode, |a, m| a ^ m)
}

fn compare<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    bus: &mut M,
    opcode: &Opcode,
    register: u8,
) -> Flow {
    let fetched = read_operand(regs, bus, opcode.addressing_mode);
    regs.set_flag(StatusFlags::CARRY, register >= fetched.value);
    regs.set_zn(register.wrapping_sub(fetched.value));
    Flow::page_penalty(fetched.page_crossed)
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected: C (A >= M), Z, N (from A - M)
pub(crate) fn execute_cmp(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let a = regs.a;
    compare(regs, bus, opcode, a)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let x = regs.x;
    compare(regs, bus, opcode, x)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let y = regs.y;
    compare(regs, bus, opcode, y)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - Z: set if `A & M` is zero
/// - N: bit 7 of M
/// - V: bit 6 of M
pub(crate) fn execute_bit(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let value = read_operand(regs, bus, opcode.addressing_mode).value;

    regs.set_flag(StatusFlags::ZERO, regs.a & value == 0);
    regs.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    regs.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);

    Flow::NEXT
}
