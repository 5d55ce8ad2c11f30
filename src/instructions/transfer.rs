//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set Z/N from
//! the copied value. TXS loads the stack pointer and affects no flags.

use super::Flow;
use crate::{MemoryBus, Mnemonic, Opcode, Registers};

/// Executes any register transfer.
pub(crate) fn execute_transfer(
    regs: &mut Registers,
    _bus: &mut dyn MemoryBus,
    opcode: &Opcode,
) -> Flow {
    let value = match opcode.mnemonic {
        Mnemonic::Tax => {
            regs.x = regs.a;
            regs.x
        }
        Mnemonic::Tay => {
            regs.y = regs.a;
            regs.y
        }
        Mnemonic::Txa => {
            regs.a = regs.x;
            regs.a
        }
        Mnemonic::Tya => {
            regs.a = regs.y;
            regs.a
        }
        Mnemonic::Tsx => {
            regs.x = regs.sp;
            regs.x
        }
        Mnemonic::Txs => {
            regs.sp = regs.x;
            return Flow::NEXT;
        }
        other => unreachable!("{} is not a transfer", other),
    };

    regs.set_zn(value);
    Flow::NEXT
}
