//! # sisa
//!
//! Core emulator for SISA, a pedagogical 16-bit word-addressed processor
//! with paged virtual memory, vectored traps, and a memory-mapped I/O
//! bus. This crate implements the processor/MMU/trap/interrupt engine: the
//! fetch-execute state machine, instruction decode and semantics,
//! TLB-based address translation, and the exception/interrupt delivery
//! protocol. The host-side interactive driver (terminal UI, file loading,
//! VGA rendering) is not part of this crate.

pub mod breakpoints;
pub mod decode;
pub mod exceptions;
mod execute;
pub mod interrupts;
pub mod io;
pub mod machine;
pub mod memory;
pub mod registers;
pub mod tlb;

pub use io::NUM_IO_PORTS;
pub use machine::{
    CODE_LOAD_ADDR, CPU_CLK_FREQ, DATA_LOAD_ADDR, Machine, SequencerState, TIMER_FREQ,
    VGA_START_ADDR,
};
pub use memory::MEMORY_SIZE;
pub use tlb::NUM_TLB_ENTRIES;
