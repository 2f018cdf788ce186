//! `SPECIAL` group: EI, DI, RETI, GETIID, RDS, WRS, WRPI, WRVI, WRPD,
//! WRVD, FLUSH, HALT.

use crate::decode::Special;
use crate::machine::Machine;
use crate::registers;
use crate::tlb::TlbEntry;

pub(crate) fn exec(m: &mut Machine, f: Special, rd: u16, ra: u16, sa: u16) {
    match f {
        Special::Ei => m.regs.set_interrupts_enabled(true),
        Special::Di => m.regs.set_interrupts_enabled(false),
        Special::Reti => {
            let saved_psw = m.regs.s(registers::s::SAVED_PSW);
            m.regs.set_psw(saved_psw);
            let saved_pc = m.regs.s(registers::s::SAVED_PC);
            m.pc = saved_pc.wrapping_sub(2);
        }
        Special::Getiid => {
            let id = m.ints_pending.take_lowest();
            m.regs.set_r(rd, id);
        }
        Special::Rds => {
            let value = m.regs.s(sa as usize);
            m.regs.set_r(rd, value);
        }
        Special::Wrs => {
            let value = m.regs.r(ra);
            m.regs.set_s(rd as usize, value);
        }
        Special::Wrpi | Special::Wrpd => {
            let index = m.regs.r(ra);
            let word = m.regs.r(rd);
            let tlb = if f == Special::Wrpi { &mut m.itlb } else { &mut m.dtlb };
            let vpn = tlb.entry(index).vpn;
            tlb.set_entry(index, TlbEntry::unpack_pfn_word(vpn, word));
        }
        Special::Wrvi | Special::Wrvd => {
            let index = m.regs.r(ra);
            let vpn = (m.regs.r(rd) & 0xF) as u8;
            let tlb = if f == Special::Wrvi { &mut m.itlb } else { &mut m.dtlb };
            tlb.set_vpn(index, vpn);
        }
        Special::Flush => {}
        Special::Halt => m.halted = true,
    }
}
