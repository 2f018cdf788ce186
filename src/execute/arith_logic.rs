//! `ARIT_LOGIC` group: AND, OR, XOR, NOT, ADD, SUB, SHA, SHL.

use crate::decode::{sext5, ArithLogicOp};
use crate::machine::Machine;

/// Shift `value` by `amount` (from a sign-extended 5-bit field): positive
/// shifts left, negative shifts right. `arithmetic` selects sign-extending
/// (SHA) vs zero-filling (SHL) right shifts; left shifts behave
/// identically either way.
fn shift(value: u16, amount: i16, arithmetic: bool) -> u16 {
    if amount >= 0 {
        let n = amount as u32;
        if n >= 16 { 0 } else { value << n }
    } else {
        let n = (-amount) as u32;
        if arithmetic {
            if n >= 16 {
                if (value as i16) < 0 { 0xFFFF } else { 0 }
            } else {
                ((value as i16) >> n) as u16
            }
        } else if n >= 16 {
            0
        } else {
            value >> n
        }
    }
}

pub(crate) fn exec(m: &mut Machine, f: ArithLogicOp, rd: u16, ra: u16, rb: u16) {
    let a = m.regs.r(ra);
    let b = m.regs.r(rb);
    let result = match f {
        ArithLogicOp::And => a & b,
        ArithLogicOp::Or => a | b,
        ArithLogicOp::Xor => a ^ b,
        ArithLogicOp::Not => !a,
        ArithLogicOp::Add => a.wrapping_add(b),
        ArithLogicOp::Sub => a.wrapping_sub(b),
        ArithLogicOp::Sha => shift(a, sext5(b), true),
        ArithLogicOp::Shl => shift(a, sext5(b), false),
    };
    m.regs.set_r(rd, result);
}
