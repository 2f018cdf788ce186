//! The aggregate `Machine` state and its external API.
//!
//! A single owning value: the executor, MMU, and I/O bus all reach into one
//! struct through `&mut Machine`, with no internal pointer aliasing between
//! components.

use crate::breakpoints::Breakpoints;
use crate::exceptions::Exception;
use crate::interrupts::{INTERRUPT_TIMER, PendingInterrupts};
use crate::io::IoBus;
use crate::memory::Memory;
use crate::registers::{self, Mode, RegisterFile};
use crate::tlb::{Tlb, TlbKind, translate};

/// Physical address guest code is conventionally loaded at.
pub const CODE_LOAD_ADDR: u16 = 0xC000;
/// Physical address guest data is conventionally loaded at.
pub const DATA_LOAD_ADDR: u16 = 0x8000;
/// Start of the VGA text framebuffer.
pub const VGA_START_ADDR: u16 = 0xA000;

/// CPU crystal frequency, in Hz.
pub const CPU_CLK_FREQ: u64 = 6_250_000;
/// Timer interrupt frequency, in Hz.
pub const TIMER_FREQ: u64 = 20;

/// The four micro-sequencer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Fetch,
    Demw,
    System,
    Nop,
}

/// The whole machine: CPU registers, memory, both TLBs, the I/O bus, and
/// the breakpoint set. Owned and mutated exclusively through `step_cycle`
/// and the setters below. There is no internal locking — callers
/// injecting stimulus from another thread must serialize access to this
/// value themselves.
#[derive(Debug)]
pub struct Machine {
    pub regs: RegisterFile,
    pub mem: Memory,
    pub itlb: Tlb,
    pub dtlb: Tlb,
    pub io: IoBus,
    pub breakpoints: Breakpoints,

    pub pc: u16,
    pub ir: u16,
    pub state: SequencerState,
    /// The latched cause of the fault or interrupt about to be delivered,
    /// if any. `Some` is exactly `exc_happened` from the spec.
    pub exception: Option<Exception>,
    pub ints_pending: PendingInterrupts,
    pub halted: bool,
    pub cycles: u64,
    pub tlb_enabled: bool,
}

impl Machine {
    /// `init(machine)`: reset to the architectural post-reset state.
    pub fn new() -> Self {
        let mut m = Self {
            regs: RegisterFile::new(),
            mem: Memory::new(),
            itlb: Tlb::new(),
            dtlb: Tlb::new(),
            io: IoBus::new(),
            breakpoints: Breakpoints::new(),
            pc: CODE_LOAD_ADDR,
            ir: 0,
            state: SequencerState::Fetch,
            exception: None,
            ints_pending: PendingInterrupts::default(),
            halted: false,
            cycles: 0,
            tlb_enabled: true,
        };
        m.reset();
        m
    }

    /// Re-run `init`'s reset sequence on an existing machine.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.itlb.reset();
        self.dtlb.reset();
        self.io.reset();
        self.breakpoints.clear();
        self.pc = CODE_LOAD_ADDR;
        self.ir = 0;
        self.state = SequencerState::Fetch;
        self.exception = None;
        self.ints_pending = PendingInterrupts::default();
        self.halted = false;
        self.cycles = 0;
        self.tlb_enabled = true;
    }

    /// `load_binary(machine, addr, bytes)`.
    pub fn load_binary(&mut self, addr: u16, bytes: &[u8]) {
        self.mem.load(addr, bytes);
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn tlb_set_enabled(&mut self, enabled: bool) {
        self.tlb_enabled = enabled;
    }

    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.add(addr);
    }

    /// True only when the sequencer is in FETCH and `PC` is a breakpoint
    /// — tested once per architectural instruction, not once per
    /// micro-step.
    pub fn breakpoint_reached(&self) -> bool {
        self.state == SequencerState::Fetch && self.breakpoints.contains(self.pc)
    }

    pub fn cpu_is_halted(&self) -> bool {
        self.halted
    }

    pub fn keys_set(&mut self, value: u16) {
        self.io.keys_set(value, &mut self.ints_pending);
    }

    pub fn key_toggle(&mut self, n: u16) {
        self.io.key_toggle(n, &mut self.ints_pending);
    }

    pub fn switches_set(&mut self, value: u16) {
        self.io.switches_set(value, &mut self.ints_pending);
    }

    pub fn switch_toggle(&mut self, n: u16) {
        self.io.switch_toggle(n, &mut self.ints_pending);
    }

    pub fn keyboard_press(&mut self, key: u8) {
        self.io.keyboard_press(key, &mut self.ints_pending);
    }

    /// Latch an exception that carries no faulting address (illegal
    /// instruction, division by zero, CALLS after S3 is set explicitly,
    /// or an external interrupt).
    pub(crate) fn raise(&mut self, exception: Exception) {
        self.exception = Some(exception);
    }

    /// Latch a translation/alignment fault: sets S3 to the faulting
    /// virtual address, then `raise`s it.
    pub(crate) fn raise_fault(&mut self, exception: Exception, vaddr: u16) {
        self.regs.set_s(registers::s::FAULT_ADDR, vaddr);
        self.raise(exception);
    }

    /// Translate `vaddr` through the given TLB and surface a fault through
    /// `self.exception`/S3 on failure.
    fn translate_checked(&mut self, kind: TlbKind, vaddr: u16, word_access: bool, write: bool) -> Option<u16> {
        let tlb = match kind {
            TlbKind::Instruction => &self.itlb,
            TlbKind::Data => &self.dtlb,
        };
        let user_mode = matches!(self.regs.mode(), Mode::User);
        match translate(tlb, kind, self.tlb_enabled, user_mode, vaddr, word_access, write) {
            Ok(paddr) => Some(paddr),
            Err(fault) => {
                self.raise_fault(fault.exception, fault.vaddr);
                None
            }
        }
    }

    /// Read a data word through the DTLB, raising a fault on failure.
    pub(crate) fn read_data_word(&mut self, vaddr: u16) -> Option<u16> {
        let paddr = self.translate_checked(TlbKind::Data, vaddr, true, false)?;
        Some(self.mem.read_word(paddr))
    }

    /// Write a data word through the DTLB, raising a fault on failure.
    pub(crate) fn write_data_word(&mut self, vaddr: u16, value: u16) -> Option<()> {
        let paddr = self.translate_checked(TlbKind::Data, vaddr, true, true)?;
        self.mem.write_word(paddr, value);
        Some(())
    }

    /// Read a data byte through the DTLB, raising a fault on failure.
    pub(crate) fn read_data_byte(&mut self, vaddr: u16) -> Option<u8> {
        let paddr = self.translate_checked(TlbKind::Data, vaddr, false, false)?;
        Some(self.mem.read_byte(paddr))
    }

    /// Write a data byte through the DTLB, raising a fault on failure.
    pub(crate) fn write_data_byte(&mut self, vaddr: u16, value: u8) -> Option<()> {
        let paddr = self.translate_checked(TlbKind::Data, vaddr, false, true)?;
        self.mem.write_byte(paddr, value);
        Some(())
    }

    /// Advance one micro-step. A no-op while halted.
    pub fn step_cycle(&mut self) {
        if self.halted {
            return;
        }

        match self.state {
            SequencerState::Fetch => self.step_fetch(),
            SequencerState::Demw => self.step_demw(),
            SequencerState::Nop => self.state = SequencerState::System,
            SequencerState::System => self.step_system(),
        }

        self.cycles += 1;
        if self.cycles % (CPU_CLK_FREQ / TIMER_FREQ) == 0 {
            self.ints_pending.raise(INTERRUPT_TIMER);
        }
        if self.cycles % (CPU_CLK_FREQ / 1000) == 0 {
            self.io.tick_millis();
        }
        self.io.tick_cycles(self.cycles);
    }

    fn step_fetch(&mut self) {
        match self.translate_checked(TlbKind::Instruction, self.pc, true, false) {
            Some(paddr) => {
                self.ir = self.mem.read_word(paddr);
                self.state = SequencerState::Demw;
            }
            None => self.state = SequencerState::Nop,
        }
    }

    fn step_demw(&mut self) {
        let op = crate::decode::decode(self.ir);
        crate::execute::execute(self, op);
        self.pc = self.pc.wrapping_add(2);

        if self.exception.is_some() {
            self.state = SequencerState::System;
        } else if self.regs.interrupts_enabled() && self.ints_pending.any() {
            self.raise(Exception::Interrupt);
            self.state = SequencerState::System;
        } else {
            self.state = SequencerState::Fetch;
        }
    }

    fn step_system(&mut self) {
        let exception = self
            .exception
            .take()
            .expect("SYSTEM is only entered with a latched exception");
        self.regs.set_s(registers::s::SAVED_PSW, self.regs.psw());
        self.regs.set_s(registers::s::SAVED_PC, self.pc);
        self.regs.set_s(registers::s::CAUSE, exception.code());
        self.pc = self.regs.s(registers::s::TRAP_VECTOR_BASE);
        self.regs.set_interrupts_enabled(false);
        self.regs.set_mode(Mode::System);
        self.state = SequencerState::Fetch;
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
