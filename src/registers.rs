//! # Register File
//!
//! The 6502 register file as a plain, caller-owned value. The engine borrows
//! it mutably for the duration of one `step` and never keeps a copy.
//!
//! ## Status Register
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Packed processor status register (P).
    ///
    /// All eight bits are stored verbatim, including the unused bit 5, so a
    /// byte pulled from the stack by PLP or RTI round-trips exactly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// 6502 register file.
///
/// `Registers::default()` is the power-on state: every field zero. Hosts
/// normally follow it with [`crate::reset`], which leaves SP at `0xFD` and
/// loads PC from the reset vector.
///
/// # Examples
///
/// ```
/// use cpu6502::{Registers, StatusFlags};
///
/// let mut regs = Registers::default();
/// regs.set_zn(0x80);
/// assert!(regs.p.contains(StatusFlags::NEGATIVE));
/// assert!(!regs.p.contains(StatusFlags::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Processor status
    pub p: StatusFlags,

    /// Total instruction cycles executed since power-on
    pub cycles: u64,
}

impl Registers {
    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.p.contains(flag)
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: StatusFlags, on: bool) {
        self.p.set(flag, on);
    }

    /// Updates Z and N from `value`.
    pub fn set_zn(&mut self, value: u8) {
        self.p.set(StatusFlags::ZERO, value == 0);
        self.p.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Returns the carry flag as 0 or 1, ready to feed into arithmetic.
    pub(crate) fn carry_bit(&self) -> u8 {
        self.p.contains(StatusFlags::CARRY) as u8
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X} PC:{:04X} CYC:{}",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.p.bits(),
            self.pc,
            self.cycles
        )
    }
}
