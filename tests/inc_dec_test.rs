//! Tests for INC, DEC, INX, INY, DEX and DEY.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().load(0x8000, program);
}

#[test]
fn test_inc_zero_page_wraps_to_zero() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE6, 0x10]); // INC $10
    cpu.memory_mut().write(0x0010, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x0010), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_inc_absolute_x_sets_negative() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xFE, 0xFF, 0x20]); // INC $20FF,X
    cpu.memory_mut().write(0x2100, 0x7F);

    cpu.set_x(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x2100), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 7); // No page penalty on read-modify-write
}

#[test]
fn test_dec_absolute_wraps_to_ff() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xCE, 0x00, 0x30]); // DEC $3000

    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x3000), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_c()); // Carry untouched
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_dec_zero_page_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xD6, 0xF0]); // DEC $F0,X
    cpu.memory_mut().write(0x0000, 0x01);

    cpu.set_x(0x10);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x0000), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_inx_iny_wrap() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE8, 0xC8]); // INX, INY

    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());

    assert_eq!(cpu.cycles(), 4);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_dex_dey_wrap() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xCA, 0x88]); // DEX, DEY

    cpu.set_x(0x00);
    cpu.set_y(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_countdown_loop() {
    let mut cpu = setup_cpu();
    // LDX #$03; loop: DEX; BNE loop
    load(&mut cpu, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD]);

    // LDX, then three DEX with two taken branches and one fall-through
    for _ in 0..7 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8005);
    assert_eq!(cpu.cycles(), 2 + 3 * 2 + 2 * 3 + 2);
}
