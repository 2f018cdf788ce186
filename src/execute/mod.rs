//! Per-opcode execution.
//!
//! Split into one file per mnemonic group rather than one giant `match`.

mod abs_jump;
mod arith_logic;
mod branch;
mod compare;
mod io_ops;
mod load_store;
mod move_ops;
mod mul_div;
mod special;

use crate::decode::Op;
use crate::exceptions::Exception;
use crate::machine::Machine;

/// Execute one decoded instruction against `m`. Never panics; unknown
/// operations were already folded into `Op::Illegal` by the decoder.
pub(crate) fn execute(m: &mut Machine, op: Op) {
    match op {
        Op::ArithLogic { f, rd, ra, rb } => arith_logic::exec(m, f, rd, ra, rb),
        Op::Compare { f, rd, ra, rb } => compare::exec(m, f, rd, ra, rb),
        Op::Addi { rd, ra, imm6 } => load_store::addi(m, rd, ra, imm6),
        Op::Load { rd, ra, imm6 } => load_store::load(m, rd, ra, imm6),
        Op::Store { ra, rb, imm6 } => load_store::store(m, ra, rb, imm6),
        Op::LoadByte { rd, ra, imm6 } => load_store::load_byte(m, rd, ra, imm6),
        Op::StoreByte { ra, rb, imm6 } => load_store::store_byte(m, ra, rb, imm6),
        Op::Movi { rd, imm8 } => move_ops::movi(m, rd, imm8),
        Op::Movhi { rd, imm8 } => move_ops::movhi(m, rd, imm8),
        Op::Bz { rb, imm8 } => branch::bz(m, rb, imm8),
        Op::Bnz { rb, imm8 } => branch::bnz(m, rb, imm8),
        Op::In { rd, imm8 } => io_ops::in_port(m, rd, imm8),
        Op::Out { rb, imm8 } => io_ops::out_port(m, rb, imm8),
        Op::MulDiv { f, rd, ra, rb } => mul_div::exec(m, f, rd, ra, rb),
        Op::AbsJump { f, rd, ra } => abs_jump::exec(m, f, rd, ra),
        Op::Special { f, rd, ra, sa } => special::exec(m, f, rd, ra, sa),
        Op::Illegal => m.raise(Exception::IllegalInstr),
    }
}
