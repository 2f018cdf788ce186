//! sisa CLI
//!
//! A minimal smoke-test harness, not an interactive driver: no TUI, file
//! browser, or VGA rendering. Takes one optional argument, a raw binary
//! file loaded at `CODE_LOAD_ADDR`, then single-steps until halted or a
//! step budget is exhausted.

use sisa::Machine;
use std::env;
use std::fs;

fn main() {
    println!("sisa - SISA processor/MMU/trap core");
    println!("====================================\n");

    let mut machine = Machine::new();

    if let Some(path) = env::args().nth(1) {
        match fs::read(&path) {
            Ok(bytes) => {
                machine.load_binary(sisa::CODE_LOAD_ADDR, &bytes);
                println!("Loaded {} bytes from {path} at ${:04X}", bytes.len(), sisa::CODE_LOAD_ADDR);
            }
            Err(err) => {
                eprintln!("Could not read {path}: {err}");
                return;
            }
        }
    }

    println!("Initial PC: ${:04X}", machine.pc);

    const STEP_BUDGET: u64 = 1_000_000;
    let mut steps = 0;
    while !machine.cpu_is_halted() && steps < STEP_BUDGET {
        machine.step_cycle();
        steps += 1;
    }

    println!("Ran {steps} micro-steps ({} cycles)", machine.cycles);
    println!("Halted: {}", machine.cpu_is_halted());
    println!("Final PC: ${:04X}", machine.pc);
}
