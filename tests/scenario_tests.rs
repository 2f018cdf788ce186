//! End-to-end scenarios exercising the full fetch/decode/execute/trap cycle.

mod common;
use common::*;
use sisa::exceptions::Exception;
use sisa::registers::{self, Mode};
use sisa::{Machine, SequencerState};

/// MOVI into two registers, then HALT.
#[test]
fn movi_then_halt() {
    let mut m = Machine::new();
    m.mem.write_word(0xC000, 0x5003); // MOVI R0, 3
    m.mem.write_word(0xC002, 0x5204); // MOVI R1, 4
    m.mem.write_word(0xC004, 0xFFFF); // HALT

    for _ in 0..6 {
        m.step_cycle();
    }

    assert_eq!(m.regs.r(0), 3);
    assert_eq!(m.regs.r(1), 4);
    assert!(m.cpu_is_halted());
    assert_eq!(m.pc, 0xC006); // HALT's address (0xC004) + 2
}

/// ADDI loop: increment R0 once per iteration, counting down R2 from 5,
/// and verify R0 reaches the intended value (5) once the loop exits.
#[test]
fn addi_loop_counts_down_to_zero() {
    let mut m = Machine::new();
    m.tlb_set_enabled(false);

    m.mem.write_word(0xC000, movi(0, 0)); // R0 = 0 (accumulator)
    m.mem.write_word(0xC002, movi(2, 5)); // R2 = 5 (loop counter)
    let loop_start = 0xC004u16;
    m.mem.write_word(loop_start, addi(0, 0, 1)); // R0 += 1
    let decrement_addr = 0xC006u16;
    m.mem.write_word(decrement_addr, addi(2, 2, 0x3F)); // R2 += sext6(0x3F) == -1
    let bnz_addr = 0xC008u16;
    // target = branch_addr(BNZ) + disp*2 + 2 == loop_start
    let disp = ((loop_start as i32 - bnz_addr as i32 - 2) / 2) as i16;
    m.mem.write_word(bnz_addr, bnz(2, disp as u16 & 0xFF));
    m.mem.write_word(0xC00A, HALT);

    for _ in 0..200 {
        if m.cpu_is_halted() {
            break;
        }
        m.step_cycle();
    }
    assert!(m.cpu_is_halted());
    assert_eq!(m.regs.r(0), 5);
    assert_eq!(m.regs.r(2), 0);
}

/// An unaligned LOAD faults before the TLB lookup runs.
#[test]
fn unaligned_load_faults() {
    let mut m = Machine::new();
    m.regs.set_r(1, 0x0001);
    m.mem.write_word(0xC000, load(0, 1, 0));

    m.step_cycle(); // FETCH
    m.step_cycle(); // DEMW: LOAD faults on translation

    assert_eq!(m.exception, Some(Exception::UnalignedAccess));
    assert_eq!(m.regs.s(registers::s::FAULT_ADDR), 0x0001);
    assert_eq!(m.state, SequencerState::System);
}

/// Dividing by zero raises and delivers the right cause code.
#[test]
fn divide_by_zero_raises() {
    let mut m = Machine::new();
    m.tlb_set_enabled(false);
    m.regs.set_r(1, 10);
    m.regs.set_r(2, 0);
    m.mem.write_word(0xC000, mul_div(F_DIV, 0, 1, 2));

    m.step_cycle(); // FETCH
    m.step_cycle(); // DEMW
    assert_eq!(m.exception, Some(Exception::DivisionByZero));

    m.step_cycle(); // SYSTEM
    assert_eq!(m.regs.s(registers::s::CAUSE), 0x4);
}

/// A timer interrupt preempts an idling main loop and GETIID reports it.
#[test]
fn timer_interrupt_preempts_main_loop() {
    let mut m = Machine::new();
    m.tlb_set_enabled(false);
    m.regs.set_interrupts_enabled(true);
    m.regs.set_s(registers::s::TRAP_VECTOR_BASE, 0xD000);

    // Handler: GETIID into R0, then RETI.
    m.mem.write_word(0xD000, special(F_GETIID, 0, 0));
    m.mem.write_word(0xD002, special(F_RETI, 0, 0));
    // Main-line code: an infinite no-op loop (BZ R0, -1 with R0 staying 0).
    m.mem.write_word(0xC000, bz(0, 0xFF));

    let ticks_per_timer = sisa::CPU_CLK_FREQ / sisa::TIMER_FREQ;
    let mut entered_handler = false;
    for _ in 0..(ticks_per_timer * 4) {
        m.step_cycle();
        if m.pc == 0xD000 && m.state == SequencerState::Fetch {
            entered_handler = true;
            break;
        }
    }

    assert!(entered_handler, "timer interrupt never delivered control to the handler");
    assert!(m.cycles >= ticks_per_timer);

    step_instruction(&mut m); // execute GETIID
    assert_eq!(m.regs.r(0), sisa::interrupts::INTERRUPT_TIMER);
    assert_eq!(m.ints_pending.0 & 1, 0);
}

/// CALLS traps into system mode and RETI returns to the caller.
#[test]
fn calls_traps_and_reti_returns() {
    let mut m = Machine::new();
    m.tlb_set_enabled(false);
    m.regs.set_mode(Mode::User);
    m.regs.set_interrupts_enabled(true);
    m.regs.set_s(registers::s::TRAP_VECTOR_BASE, 0xD000);
    m.regs.set_r(3, 0x4242);
    let old_psw = m.regs.psw();

    m.mem.write_word(0xC000, abs_jump(F_CALLS, 0, 3));
    m.step_cycle(); // FETCH
    m.step_cycle(); // DEMW: raises Calls, PC already advanced past the CALLS word
    let next_pc = m.pc;
    m.step_cycle(); // SYSTEM

    assert_eq!(m.regs.s(registers::s::FAULT_ADDR), 0x4242);
    assert_eq!(m.regs.s(registers::s::SAVED_PSW), old_psw);
    assert_eq!(m.regs.s(registers::s::SAVED_PC), next_pc);
    assert_eq!(m.regs.s(registers::s::CAUSE), Exception::Calls.code());
    assert!(matches!(m.regs.mode(), Mode::System));
    assert!(!m.regs.interrupts_enabled());
    assert_eq!(m.pc, 0xD000);

    // A subsequent RETI returns to the caller with PSW restored.
    m.mem.write_word(0xD000, special(F_RETI, 0, 0));
    step_instruction(&mut m);
    assert_eq!(m.pc, next_pc);
    assert_eq!(m.regs.psw(), old_psw);
}
