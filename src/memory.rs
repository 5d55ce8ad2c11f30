//! # Memory Bus
//!
//! Every fetch, operand read, stack access and store the engine performs goes
//! through [`MemoryBus`]. The host owns the address space and decides what
//! each address means: plain RAM, ROM that ignores writes, or a device
//! register such as a keyboard latch or a display port.
//!
//! Bus accesses cannot fail. An unmapped read returns whatever the host
//! chooses and an unwanted write is simply dropped. A read is allowed to
//! change device state, which is why it takes `&mut self`.

/// Byte-wide access to the 64KB address space.
///
/// `write` followed by `read` of the same address returns the written byte
/// unless the host maps that address to a device.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// /// RAM with a keyboard latch at $D010/$D011.
/// struct KeyboardMemory {
///     ram: Vec<u8>,
/// }
///
/// impl MemoryBus for KeyboardMemory {
///     fn read(&mut self, addr: u16) -> u8 {
///         let value = self.ram[addr as usize];
///         if addr == 0xD010 {
///             // Reading the key clears the ready bit
///             self.ram[0xD011] &= 0x7F;
///         }
///         value
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[addr as usize] = value;
///     }
/// }
///
/// let mut mem = KeyboardMemory { ram: vec![0; 0x10000] };
/// mem.write(0xD010, b'A' | 0x80);
/// mem.write(0xD011, 0x80);
/// assert_eq!(mem.read(0xD010), 0xC1);
/// assert_eq!(mem.read(0xD011), 0x00);
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`. Must not panic.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes `value` to `addr`. Must not panic; read-only addresses may
    /// drop the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping at $FFFF).
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// A plain 64KB RAM image with no devices mapped.
///
/// Every address starts at $00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.load(0x8000, &[0xEA]); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates zeroed memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past $FFFF.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFF00, &[0xD8, 0x58]);
    /// assert_eq!(mem.read(0xFF01), 0x58);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
