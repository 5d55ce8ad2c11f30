//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns an instruction's operand bytes into an effective address or
//! operand value.
//!
//! Every resolution reports whether indexing moved the address onto a
//! different 256-byte page. Read instructions pay one extra cycle for that;
//! the flag is returned by value, so it belongs to exactly one resolution.

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// An effective address produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Final address the instruction reads or writes.
    pub address: u16,

    /// True if indexing moved the address to a different page.
    pub page_crossed: bool,
}

/// An operand value produced by the read-side resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetched {
    /// The operand byte.
    pub value: u8,

    /// True if indexing moved the address to a different page.
    pub page_crossed: bool,
}

/// Returns true if `a` and `b` lie on different 256-byte pages.
pub fn different_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a little-endian pointer from zero page, wrapping the high byte's
/// address within zero page.
fn zero_page_pointer<M: MemoryBus + ?Sized>(bus: &mut M, zp: u8) -> u16 {
    let lo = bus.read(zp as u16) as u16;
    let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

fn indexed(base: u16, index: u8) -> Resolved {
    let address = base.wrapping_add(index as u16);
    Resolved {
        address,
        page_crossed: different_page(base, address),
    }
}

/// Computes the effective address for `mode` of the instruction at `regs.pc`.
///
/// Immediate and Relative resolve to the address of the operand byte itself
/// (`PC + 1`). Indirect reproduces the NMOS JMP bug: a pointer at `$xxFF`
/// takes its high byte from `$xx00`.
///
/// # Panics
///
/// Panics for Implicit and Accumulator, which have no effective address. The
/// opcode table never pairs such a mode with a memory instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::addressing::resolve_address;
/// use cpu6502::{AddressingMode, FlatMemory, MemoryBus, Registers};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0xBD, 0xF0, 0x12]); // LDA $12F0,X
///
/// let regs = Registers { pc: 0x8000, x: 0x20, ..Registers::default() };
/// let resolved = resolve_address(&regs, &mut mem, AddressingMode::AbsoluteX);
/// assert_eq!(resolved.address, 0x1310);
/// assert!(resolved.page_crossed);
/// ```
pub fn resolve_address<M: MemoryBus + ?Sized>(
    regs: &Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> Resolved {
    let operand_addr = regs.pc.wrapping_add(1);

    let address = match mode {
        AddressingMode::Immediate | AddressingMode::Relative => operand_addr,
        AddressingMode::ZeroPage => bus.read(operand_addr) as u16,
        AddressingMode::ZeroPageX => bus.read(operand_addr).wrapping_add(regs.x) as u16,
        AddressingMode::ZeroPageY => bus.read(operand_addr).wrapping_add(regs.y) as u16,
        AddressingMode::Absolute => bus.read_word(operand_addr),
        AddressingMode::AbsoluteX => return indexed(bus.read_word(operand_addr), regs.x),
        AddressingMode::AbsoluteY => return indexed(bus.read_word(operand_addr), regs.y),
        AddressingMode::Indirect => {
            let ptr = bus.read_word(operand_addr);
            let lo = bus.read(ptr) as u16;
            // High byte never carries into the next page
            let hi = bus.read((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)) as u16;
            (hi << 8) | lo
        }
        AddressingMode::IndirectX => {
            let zp = bus.read(operand_addr).wrapping_add(regs.x);
            zero_page_pointer(bus, zp)
        }
        AddressingMode::IndirectY => {
            let zp = bus.read(operand_addr);
            return indexed(zero_page_pointer(bus, zp), regs.y);
        }
        AddressingMode::Implicit | AddressingMode::Accumulator => {
            unreachable!("{:?} has no effective address", mode)
        }
    };

    Resolved {
        address,
        page_crossed: false,
    }
}

/// Reads the operand for `mode`. Accumulator mode yields `A`.
pub fn read_operand<M: MemoryBus + ?Sized>(
    regs: &Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> Fetched {
    if mode == AddressingMode::Accumulator {
        return Fetched {
            value: regs.a,
            page_crossed: false,
        };
    }

    let resolved = resolve_address(regs, bus, mode);
    Fetched {
        value: bus.read(resolved.address),
        page_crossed: resolved.page_crossed,
    }
}

/// Writes `value` to the operand location for `mode`. Accumulator mode
/// stores into `A`. Returns whether the address crossed a page.
pub fn write_operand<M: MemoryBus + ?Sized>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
    value: u8,
) -> bool {
    if mode == AddressingMode::Accumulator {
        regs.a = value;
        return false;
    }

    let resolved = resolve_address(regs, bus, mode);
    bus.write(resolved.address, value);
    resolved.page_crossed
}
