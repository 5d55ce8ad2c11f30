//! Tests for the eight conditional branch instructions.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Places a two-byte branch at `pc` and points the CPU at it.
fn place_branch(cpu: &mut CPU<FlatMemory>, pc: u16, opcode: u8, offset: u8) {
    cpu.memory_mut().load(pc, &[opcode, offset]);
    cpu.set_pc(pc);
}

#[test]
fn test_beq_taken_forward() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x1000, 0xF0, 0x7F);

    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1081);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_beq_not_taken() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x1000, 0xF0, 0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_bne_taken_backward() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x1000, 0xD0, 0xFC); // -4

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0FFE);
    assert_eq!(cpu.cycles(), 4); // Crosses from page $10 to $0F
}

#[test]
fn test_branch_page_cross_measured_from_next_instruction() {
    let mut cpu = setup_cpu();
    // Next instruction at $1100, target $10FF: crosses.
    place_branch(&mut cpu, 0x10FE, 0xD0, 0xFF);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x10FF);
    assert_eq!(cpu.cycles(), 4);

    // Next instruction at $10F2, target $10F1: same page.
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x10F0, 0xD0, 0xFF);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x10F1);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_branch_offset_zero() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x2000, 0x90, 0x00); // BCC +0

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x2002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_branch_conditions() {
    // (opcode, flag setter, value that takes the branch)
    let cases: [(u8, fn(&mut CPU<FlatMemory>, bool), bool); 8] = [
        (0x10, CPU::set_flag_n, false), // BPL
        (0x30, CPU::set_flag_n, true),  // BMI
        (0x50, CPU::set_flag_v, false), // BVC
        (0x70, CPU::set_flag_v, true),  // BVS
        (0x90, CPU::set_flag_c, false), // BCC
        (0xB0, CPU::set_flag_c, true),  // BCS
        (0xD0, CPU::set_flag_z, false), // BNE
        (0xF0, CPU::set_flag_z, true),  // BEQ
    ];

    for (opcode, set_flag, taken_when) in cases {
        let mut cpu = setup_cpu();
        place_branch(&mut cpu, 0x3000, opcode, 0x10);
        set_flag(&mut cpu, taken_when);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x3012, "opcode {:02X} should branch", opcode);

        let mut cpu = setup_cpu();
        place_branch(&mut cpu, 0x3000, opcode, 0x10);
        set_flag(&mut cpu, !taken_when);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x3002, "opcode {:02X} should fall through", opcode);
    }
}

#[test]
fn test_branch_leaves_flags() {
    let mut cpu = setup_cpu();
    place_branch(&mut cpu, 0x1000, 0xB0, 0x05); // BCS

    cpu.set_status(0xC3);
    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0xC3);
    assert_eq!(cpu.pc(), 0x1007);
}
