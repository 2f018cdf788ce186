//! Breakpoint set.

use std::collections::HashSet;

/// An unordered set of breakpoint addresses.
#[derive(Debug, Clone, Default)]
pub struct Breakpoints(HashSet<u16>);

impl Breakpoints {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    pub fn add(&mut self, addr: u16) {
        self.0.insert(addr);
    }

    pub fn remove(&mut self, addr: u16) {
        self.0.remove(&addr);
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.0.contains(&addr)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
