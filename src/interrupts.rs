//! External interrupt sources and the pending-interrupt bitmap.
//!
//! `INTERRUPT_KEYBOARD` is fixed at bit 3. `TIMER` occupies bit 0 (a timer
//! tick must be the lowest-numbered pending source so `GETIID` reports it
//! first when nothing else is pending); `KEY` and `SWITCH` fill the
//! remaining low bits. See `DESIGN.md` for the full rationale.

/// Bit index of the timer interrupt in `ints_pending`.
pub const INTERRUPT_TIMER: u16 = 0;
/// Bit index of the key (switch-panel key) interrupt.
pub const INTERRUPT_KEY: u16 = 1;
/// Bit index of the switch (switch-panel toggle) interrupt.
pub const INTERRUPT_SWITCH: u16 = 2;
/// Bit index of the keyboard interrupt.
pub const INTERRUPT_KEYBOARD: u16 = 3;

/// The 16-bit bitmap of pending interrupt sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingInterrupts(pub u16);

impl PendingInterrupts {
    #[inline]
    pub fn raise(&mut self, source: u16) {
        self.0 |= 1 << source;
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    /// `GETIID`: clear the lowest set bit and return its index, or 0 if
    /// none are pending.
    #[inline]
    pub fn take_lowest(&mut self) -> u16 {
        if self.0 == 0 {
            return 0;
        }
        let id = self.0.trailing_zeros() as u16;
        self.0 &= self.0 - 1;
        id
    }
}
