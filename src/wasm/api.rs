//! Browser-facing wrapper around a [`CPU`] over flat memory.

use crate::{disassemble, format_instruction, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsError;

/// A 6502 with 64KB of RAM, driven from JavaScript.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Powers on over zeroed memory. PC comes from a zero reset vector until
    /// a program and vector are loaded and `reset` is called.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator6502 {
        Self {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Copies an image into memory. Registers are left alone.
    pub fn load(&mut self, start_addr: u16, image: &[u8]) {
        self.cpu.memory_mut().load(start_addr, image);
    }

    /// Runs the reset sequence, loading PC from $FFFC/$FFFD.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction.
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(JsError::from)
    }

    /// Executes whole instructions until `budget` cycles have passed and
    /// returns the cycles actually spent, saturated to `u32::MAX`.
    pub fn run_for_cycles(&mut self, budget: u32) -> Result<u32, JsError> {
        let spent = self.cpu.run_for_cycles(budget as u64)?;
        Ok(saturate_cycles(spent))
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(setter)]
    pub fn set_pc(&mut self, pc: u16) {
        self.cpu.set_pc(pc);
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Cycle counter as a JS number; exact up to 2^53.
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    /// One-line register dump, e.g. `A:00 X:00 Y:00 SP:FD P:00 PC:8000 CYC:0`.
    pub fn state_line(&self) -> String {
        self.cpu.registers().to_string()
    }

    /// Reads one byte through the memory bus.
    pub fn read(&mut self, addr: u16) -> u8 {
        self.cpu.memory_mut().read(addr)
    }

    /// Writes one byte through the memory bus.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Snapshot of one 256-byte page, for memory viewers.
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    /// Disassembles `count` instructions from `start_addr` as
    /// `"ADDR  TEXT"` strings.
    pub fn disassemble(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        let memory = self.cpu.memory().as_slice();
        // Three bytes per instruction at most
        let window: Vec<u8> = (0..count as usize * 3)
            .map(|i| memory[start_addr.wrapping_add(i as u16) as usize])
            .collect();

        disassemble(&window, start_addr)
            .iter()
            .take(count as usize)
            .map(|instr| {
                let line = format!("{:04X}  {}", instr.address, format_instruction(instr));
                JsValue::from(line)
            })
            .collect()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

// The overshoot past a budget is at most one instruction, but the count is
// clamped rather than wrapped if it ever exceeds u32.
fn saturate_cycles(spent: u64) -> u32 {
    u32::try_from(spent).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_count_saturates() {
        assert_eq!(saturate_cycles(7), 7);
        assert_eq!(saturate_cycles(u32::MAX as u64), u32::MAX);
        assert_eq!(saturate_cycles(u32::MAX as u64 + 5), u32::MAX);
    }
}
