//! # Stack Instructions
//!
//! PHA, PHP, PLA and PLP, plus the push/pop primitives shared with the
//! control-flow instructions.
//!
//! The stack lives in page one and grows downward. A push writes to
//! `0x0100 | SP` and then decrements SP; a pop increments SP and then reads.

use super::Flow;
use crate::{MemoryBus, Opcode, Registers, StatusFlags, STACK_BASE};

/// Pushes one byte onto the stack.
pub(crate) fn push<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M, value: u8) {
    bus.write(STACK_BASE | regs.sp as u16, value);
    regs.sp = regs.sp.wrapping_sub(1);
}

/// Pops one byte from the stack.
pub(crate) fn pop<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M) -> u8 {
    regs.sp = regs.sp.wrapping_add(1);
    bus.read(STACK_BASE | regs.sp as u16)
}

/// Pushes a 16-bit value, high byte first.
pub(crate) fn push_word<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M, value: u16) {
    push(regs, bus, (value >> 8) as u8);
    push(regs, bus, value as u8);
}

/// Pops a 16-bit value, low byte first.
pub(crate) fn pop_word<M: MemoryBus + ?Sized>(regs: &mut Registers, bus: &mut M) -> u16 {
    let lo = pop(regs, bus) as u16;
    let hi = pop(regs, bus) as u16;
    (hi << 8) | lo
}

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    let a = regs.a;
    push(regs, bus, a);
    Flow::NEXT
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed exactly as held in P.
pub(crate) fn execute_php(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    let p = regs.p.bits();
    push(regs, bus, p);
    Flow::NEXT
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_pla(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.a = pop(regs, bus);
    regs.set_zn(regs.a);
    Flow::NEXT
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight bits are taken verbatim; nothing is masked.
pub(crate) fn execute_plp(
    regs: &mut Registers,
    bus: &mut dyn MemoryBus,
    _opcode: &Opcode,
) -> Flow {
    regs.p = StatusFlags::from_bits_retain(pop(regs, bus));
    Flow::NEXT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_push_pop_discipline() {
        let mut mem = FlatMemory::new();
        let mut regs = Registers {
            sp: 0xFD,
            ..Registers::default()
        };

        push(&mut regs, &mut mem, 0x42);
        assert_eq!(mem.read(0x01FD), 0x42);
        assert_eq!(regs.sp, 0xFC);

        assert_eq!(pop(&mut regs, &mut mem), 0x42);
        assert_eq!(regs.sp, 0xFD);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut mem = FlatMemory::new();
        let mut regs = Registers::default(); // SP = 0x00

        push(&mut regs, &mut mem, 0x11);
        assert_eq!(mem.read(0x0100), 0x11);
        assert_eq!(regs.sp, 0xFF);

        assert_eq!(pop(&mut regs, &mut mem), 0x11);
        assert_eq!(regs.sp, 0x00);
    }

    #[test]
    fn test_word_order() {
        let mut mem = FlatMemory::new();
        let mut regs = Registers {
            sp: 0xFF,
            ..Registers::default()
        };

        push_word(&mut regs, &mut mem, 0xABCD);
        assert_eq!(mem.read(0x01FF), 0xAB); // High byte first
        assert_eq!(mem.read(0x01FE), 0xCD);
        assert_eq!(pop_word(&mut regs, &mut mem), 0xABCD);
        assert_eq!(regs.sp, 0xFF);
    }
}
