//! `COMPARE` group: CMPLT, CMPLE, CMPEQ, CMPLTU, CMPLEU.

use crate::decode::CompareOp;
use crate::machine::Machine;

pub(crate) fn exec(m: &mut Machine, f: CompareOp, rd: u16, ra: u16, rb: u16) {
    let a = m.regs.r(ra);
    let b = m.regs.r(rb);
    let result = match f {
        CompareOp::Lt => (a as i16) < (b as i16),
        CompareOp::Le => (a as i16) <= (b as i16),
        CompareOp::Eq => a == b,
        CompareOp::LtU => a < b,
        CompareOp::LeU => a <= b,
    };
    m.regs.set_r(rd, result as u16);
}
