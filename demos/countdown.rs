//! Runs a small countdown program and prints a trace of every step.
//!
//! Run with: `cargo run --example countdown`

use cpu6502::{disassemble, format_instruction, FlatMemory, MemoryBus, CPU};

fn main() {
    // $8000  LDX #$05
    // $8002  STX $0200   <- loop
    // $8005  DEX
    // $8006  BNE $8002
    // $8008  BRK
    let program = [0xA2, 0x05, 0x8E, 0x00, 0x02, 0xCA, 0xD0, 0xFA, 0x00];

    let mut memory = FlatMemory::new();
    memory.load(0x8000, &program);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    // BRK vectors to a lone illegal byte, which ends the run
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0x9000, 0x02);

    println!("Program:");
    for instr in disassemble(&program, 0x8000) {
        println!("  {:04X}  {}", instr.address, format_instruction(&instr));
    }
    println!();

    let mut cpu = CPU::new(memory);
    println!("{}", cpu.registers());

    loop {
        match cpu.step() {
            Ok(()) => println!("{}", cpu.registers()),
            Err(e) => {
                println!("Stopped: {}", e);
                break;
            }
        }
    }

    println!("\n$0200 = ${:02X}", cpu.memory_mut().read(0x0200));
}
