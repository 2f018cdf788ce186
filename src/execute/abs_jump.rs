//! `ABS_JMP` group: JZ, JNZ, JMP, JAL, CALLS.
//!
//! No surviving draft names the register `JZ`/`JNZ` branch on; this crate
//! tests `R[Rd]`, the only field otherwise unused by those two mnemonics
//! (the same dual-use-of-a-field pattern the spec already uses for
//! `MOVHI`'s `Ra9` and `SPECIAL`'s `WRPI`/`WRVI` operands). See DESIGN.md.

use crate::decode::AbsJumpOp;
use crate::exceptions::Exception;
use crate::machine::Machine;
use crate::registers;

pub(crate) fn exec(m: &mut Machine, f: AbsJumpOp, rd: u16, ra: u16) {
    let old_pc = m.pc;
    let target = m.regs.r(ra);

    let jump = match f {
        AbsJumpOp::Jz => m.regs.r(rd) == 0,
        AbsJumpOp::Jnz => m.regs.r(rd) != 0,
        AbsJumpOp::Jmp | AbsJumpOp::Jal => true,
        AbsJumpOp::Calls => false,
    };

    if jump {
        m.pc = target.wrapping_sub(2);
    }
    if f == AbsJumpOp::Jal {
        m.regs.set_r(rd, old_pc.wrapping_add(2));
    }
    if f == AbsJumpOp::Calls {
        m.regs.set_s(registers::s::FAULT_ADDR, target);
        m.raise(Exception::Calls);
    }
}
