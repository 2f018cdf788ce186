//! `ADDI`, `LOAD`, `STORE`, `LOAD_BYTE`, `STORE_BYTE`.
//!
//! LOAD/STORE check translation *before* writeback: a faulting access
//! leaves registers and memory untouched, and `Machine::read_data_*`/
//! `write_data_*` already encode that by returning `None` without mutating
//! anything once the fault is latched.

use crate::machine::Machine;

pub(crate) fn addi(m: &mut Machine, rd: u16, ra: u16, imm6: i16) {
    let result = m.regs.r(ra).wrapping_add(imm6 as u16);
    m.regs.set_r(rd, result);
}

pub(crate) fn load(m: &mut Machine, rd: u16, ra: u16, imm6: i16) {
    let vaddr = m.regs.r(ra).wrapping_add((imm6 << 1) as u16);
    if let Some(value) = m.read_data_word(vaddr) {
        m.regs.set_r(rd, value);
    }
}

pub(crate) fn store(m: &mut Machine, ra: u16, rb: u16, imm6: i16) {
    let vaddr = m.regs.r(ra).wrapping_add((imm6 << 1) as u16);
    let value = m.regs.r(rb);
    m.write_data_word(vaddr, value);
}

pub(crate) fn load_byte(m: &mut Machine, rd: u16, ra: u16, imm6: i16) {
    let vaddr = m.regs.r(ra).wrapping_add(imm6 as u16);
    if let Some(byte) = m.read_data_byte(vaddr) {
        m.regs.set_r(rd, crate::decode::sext8(byte as u16) as u16);
    }
}

pub(crate) fn store_byte(m: &mut Machine, ra: u16, rb: u16, imm6: i16) {
    let vaddr = m.regs.r(ra).wrapping_add(imm6 as u16);
    let value = (m.regs.r(rb) & 0xFF) as u8;
    m.write_data_byte(vaddr, value);
}
