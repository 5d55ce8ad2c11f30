//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, executes one
//! instruction, and checks the all-or-nothing and cycle-bound contracts.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{decode, step, FlatMemory, MemoryBus, Registers, StatusFlags};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register file for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    /// Raw status byte, every bit allowed
    p: u8,
}

/// Memory regions the instruction is most likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Interrupt and reset vectors at $FFFA-$FFFF
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0xFFFA, &input.memory.vectors);
    // Last, so the instruction wins when PC sits on one of the regions above
    memory.load(input.registers.pc, &input.memory.instruction_bytes);

    let mut regs = Registers {
        a: input.registers.a,
        x: input.registers.x,
        y: input.registers.y,
        sp: input.registers.sp,
        pc: input.registers.pc,
        p: StatusFlags::from_bits_retain(input.registers.p),
        cycles: 0,
    };
    let before = regs;
    let opcode = memory.read(regs.pc);

    match (decode(opcode), step(&mut regs, &mut memory)) {
        (None, Err(_)) => assert_eq!(regs, before, "rejected opcode must not mutate state"),
        (Some(entry), Ok(())) => {
            let base = entry.base_cycles as u64;
            assert!(regs.cycles >= base && regs.cycles <= base + 2);
        }
        (decoded, result) => panic!(
            "decode and step disagree on ${:02X}: {:?} vs {:?}",
            opcode, decoded, result
        ),
    }
});
