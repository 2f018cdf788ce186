//! `IN_OUT` group.

use crate::machine::Machine;

pub(crate) fn in_port(m: &mut Machine, rd: u16, imm8: u16) {
    let value = m.io.read(imm8);
    m.regs.set_r(rd, value);
}

pub(crate) fn out_port(m: &mut Machine, rb: u16, imm8: u16) {
    let value = m.regs.r(rb);
    m.io.write(imm8, value, &mut m.ints_pending);
}
