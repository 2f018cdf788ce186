//! `REL_JMP` group: BZ, BNZ.
//!
//! The displacement is relative to the branch instruction's own
//! (pre-increment) PC; the uniform `PC += 2` that DEMW applies afterward
//! is what lets the displacement skip past the branch itself.

use crate::machine::Machine;

fn branch_if(m: &mut Machine, taken: bool, imm8: i16) {
    if taken {
        let displacement = (imm8 as i32) << 1;
        m.pc = (m.pc as i32).wrapping_add(displacement) as u16;
    }
}

pub(crate) fn bz(m: &mut Machine, rb: u16, imm8: i16) {
    let taken = m.regs.r(rb) == 0;
    branch_if(m, taken, imm8);
}

pub(crate) fn bnz(m: &mut Machine, rb: u16, imm8: i16) {
    let taken = m.regs.r(rb) != 0;
    branch_if(m, taken, imm8);
}
