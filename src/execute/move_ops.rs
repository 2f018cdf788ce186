//! `MOV` group: MOVI, MOVHI.

use crate::machine::Machine;

pub(crate) fn movi(m: &mut Machine, rd: u16, imm8: i16) {
    m.regs.set_r(rd, imm8 as u16);
}

/// `R[Rd] <- (imm8 << 8) | (R[Ra9] & 0xFF)`. `Ra9` occupies the same bit
/// field as `Rd`, so this reads and writes the same register,
/// overwriting only its high byte.
pub(crate) fn movhi(m: &mut Machine, rd: u16, imm8: u16) {
    let low = m.regs.r(rd) & 0xFF;
    m.regs.set_r(rd, (imm8 << 8) | low);
}
