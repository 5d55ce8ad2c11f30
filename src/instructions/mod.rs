//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone [`Handler`] that takes the register file,
//! the memory bus and the decoded opcode, applies the instruction's effect and
//! reports how control continues. The opcode table stores the handler next to
//! the rest of each opcode's metadata; `cpu::step` calls it and owns the final
//! PC update and cycle accounting.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Mnemonic, Opcode, Registers};

/// How execution continues after a handler has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Fall through to the next instruction, charging `extra` cycles over the base cost.
    Next { extra: u8 },

    /// Continue at `target`, charging `extra` cycles over the base cost.
    Jump { target: u16, extra: u8 },
}

impl Flow {
    /// Fall through with no surcharge.
    pub(crate) const NEXT: Flow = Flow::Next { extra: 0 };

    /// Fall through, charging one cycle if a page boundary was crossed.
    pub(crate) fn page_penalty(page_crossed: bool) -> Flow {
        Flow::Next {
            extra: page_crossed as u8,
        }
    }

    /// Unconditional jump with no surcharge.
    pub(crate) fn jump(target: u16) -> Flow {
        Flow::Jump { target, extra: 0 }
    }
}

/// Signature shared by every instruction handler.
pub(crate) type Handler = fn(&mut Registers, &mut dyn MemoryBus, &Opcode) -> Flow;

/// Picks the handler for `mnemonic`.
///
/// Only evaluated while the opcode table is built, so a step is a table
/// lookup followed by one indirect call.
pub(crate) const fn handler_for(mnemonic: Mnemonic) -> Handler {
    use Mnemonic::*;

    match mnemonic {
        Adc => alu::execute_adc,
        Sbc => alu::execute_sbc,
        And => alu::execute_and,
        Ora => alu::execute_ora,
        Eor => alu::execute_eor,
        Cmp => alu::execute_cmp,
        Cpx => alu::execute_cpx,
        Cpy => alu::execute_cpy,
        Bit => alu::execute_bit,

        Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => branches::execute_branch,

        Asl => shifts::execute_asl,
        Lsr => shifts::execute_lsr,
        Rol => shifts::execute_rol,
        Ror => shifts::execute_ror,

        Lda => load_store::execute_lda,
        Ldx => load_store::execute_ldx,
        Ldy => load_store::execute_ldy,
        Sta => load_store::execute_sta,
        Stx => load_store::execute_stx,
        Sty => load_store::execute_sty,

        Inc => inc_dec::execute_inc,
        Dec => inc_dec::execute_dec,
        Inx => inc_dec::execute_inx,
        Iny => inc_dec::execute_iny,
        Dex => inc_dec::execute_dex,
        Dey => inc_dec::execute_dey,

        Jmp => control::execute_jmp,
        Jsr => control::execute_jsr,
        Rts => control::execute_rts,
        Rti => control::execute_rti,
        Brk => control::execute_brk,
        Nop => control::execute_nop,

        Pha => stack::execute_pha,
        Php => stack::execute_php,
        Pla => stack::execute_pla,
        Plp => stack::execute_plp,

        Clc | Sec | Cld | Sed | Cli | Sei | Clv => flags::execute_flag,

        Tax | Tay | Txa | Tya | Tsx | Txs => transfer::execute_transfer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, FlatMemory};

    #[test]
    fn test_table_entry_carries_its_handler() {
        let mut mem = FlatMemory::new();
        let mut regs = Registers {
            pc: 0x0400,
            x: 0x41,
            ..Registers::default()
        };

        let inx = decode(0xE8).unwrap();
        assert_eq!((inx.handler)(&mut regs, &mut mem, inx), Flow::NEXT);
        assert_eq!(regs.x, 0x42);

        mem.load(0x0400, &[0x4C, 0x34, 0x12]); // JMP $1234
        let jmp = decode(0x4C).unwrap();
        assert_eq!((jmp.handler)(&mut regs, &mut mem, jmp), Flow::jump(0x1234));
    }
}
