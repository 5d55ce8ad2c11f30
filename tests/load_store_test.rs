//! Tests for LDA, LDX, LDY, STA, STX and STY across their addressing modes.

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

// ========== Loads ==========

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA9, 0x00, 0xA9, 0x80]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_preserves_carry_and_overflow() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA9, 0x01]);

    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB9, 0xF0, 0x12]); // LDA $12F0,Y
    cpu.memory_mut().write(0x1310, 0x33);

    cpu.set_y(0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lda_indirect_x_pointer_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xA1, 0xFF]); // LDA ($FF,X)
    // (0xFF + 0x00) -> pointer low at $FF, high at $00
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x4000, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_y_no_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB1, 0x10]); // LDA ($10),Y
    cpu.memory_mut().write(0x0010, 0x00);
    cpu.memory_mut().write(0x0011, 0x40);
    cpu.memory_mut().write(0x4005, 0x77);

    cpu.set_y(0x05);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_ldx_zero_page_y_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xB6, 0xFF]); // LDX $FF,Y
    cpu.memory_mut().write(0x0001, 0x99);

    cpu.set_y(0x02);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x99);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBE, 0xFF, 0x20]); // LDX $20FF,Y
    cpu.memory_mut().write(0x2100, 0x01);

    cpu.set_y(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xBC, 0x00, 0x20]); // LDY $2000,X
    cpu.memory_mut().write(0x2003, 0x00);

    cpu.set_x(0x03);
    cpu.set_y(0xFF);
    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x85, 0x10]); // STA $10

    cpu.set_a(0x42);
    let status = cpu.status();
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x0010), 0x42);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_absolute_x_has_no_page_penalty() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x9D, 0xFF, 0x20]); // STA $20FF,X

    cpu.set_a(0x11);
    cpu.set_x(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x2100), 0x11);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_y_has_no_page_penalty() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x91, 0x20]); // STA ($20),Y
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.memory_mut().write(0x0021, 0x30);

    cpu.set_a(0x66);
    cpu.set_y(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x3100), 0x66);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x81, 0x40]); // STA ($40,X)
    cpu.memory_mut().write(0x0042, 0x00);
    cpu.memory_mut().write(0x0043, 0x02);

    cpu.set_a(0xAB);
    cpu.set_x(0x02);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x0200), 0xAB);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x96, 0xF0]); // STX $F0,Y

    cpu.set_x(0x5C);
    cpu.set_y(0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0x0010), 0x5C);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x8C, 0x12, 0xD0]); // STY $D012

    cpu.set_y(0x8D);
    cpu.step().unwrap();

    assert_eq!(cpu.memory_mut().read(0xD012), 0x8D);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}
