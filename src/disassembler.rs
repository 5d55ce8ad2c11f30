//! 6502 Disassembler
//!
//! Converts machine code into assembly text, using the same opcode table the
//! engine executes from.

use crate::addressing::AddressingMode;
use crate::opcodes::decode;

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA"), or ".byte" for an illegal opcode
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Decode a single instruction from a byte slice
///
/// Returns `None` for an illegal opcode or if `bytes` is too short to hold
/// the whole instruction.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let &opcode = bytes.first()?;
    let metadata = decode(opcode)?;
    let size = metadata.size_bytes() as usize;

    if bytes.len() < size {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic.as_str(),
        addressing_mode: metadata.addressing_mode,
        operand_bytes: bytes[1..size].to_vec(),
        size_bytes: metadata.size_bytes(),
        base_cycles: metadata.base_cycles,
    })
}

/// Disassemble a byte slice into a vector of instructions
///
/// Bytes that do not start a valid instruction become single-byte `.byte`
/// entries, so the listing always covers the whole input.
///
/// # Examples
///
/// ```
/// use cpu6502::{disassemble, format_instruction};
///
/// let listing: Vec<String> = disassemble(&[0xA9, 0x01, 0x02, 0xD0, 0xFB], 0x8000)
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, ["LDA #$01", ".byte $02", "BNE $8000"]);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decode_instruction(&bytes[offset..], address).unwrap_or_else(|| Instruction {
            address,
            opcode: bytes[offset],
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
        });

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Format a single instruction as assembly text
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => 0,
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", byte),
        ZeroPage => format!("${:02X}", byte),
        ZeroPageX => format!("${:02X},X", byte),
        ZeroPageY => format!("${:02X},Y", byte),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add_signed(byte as i8 as i16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", word),
        AbsoluteX => format!("${:04X},X", word),
        AbsoluteY => format!("${:04X},Y", word),
        Indirect => format!("(${:04X})", word),
        IndirectX => format!("(${:02X},X)", byte),
        IndirectY => format!("(${:02X}),Y", byte),
    }
}
