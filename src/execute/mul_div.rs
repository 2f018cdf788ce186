//! `MUL_DIV` group: MUL, MULH, MULHU, DIV, DIVU.

use crate::decode::MulDivOp;
use crate::exceptions::Exception;
use crate::machine::Machine;

pub(crate) fn exec(m: &mut Machine, f: MulDivOp, rd: u16, ra: u16, rb: u16) {
    let a = m.regs.r(ra);
    let b = m.regs.r(rb);

    let result = match f {
        MulDivOp::Mul => a.wrapping_mul(b),
        MulDivOp::Mulh => {
            let product = (a as i16 as i32) * (b as i16 as i32);
            (product >> 16) as u16
        }
        MulDivOp::Mulhu => {
            let product = (a as u32) * (b as u32);
            (product >> 16) as u16
        }
        MulDivOp::Div => {
            if b == 0 {
                m.raise(Exception::DivisionByZero);
                return;
            }
            (a as i16).wrapping_div(b as i16) as u16
        }
        MulDivOp::Divu => {
            if b == 0 {
                m.raise(Exception::DivisionByZero);
                return;
            }
            a / b
        }
    };
    m.regs.set_r(rd, result);
}
