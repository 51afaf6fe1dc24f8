//! LED output bank.

use embedded_hal::digital::OutputPin;

/// Drives `N` LED lines. Out-of-range indices are silent no-ops; there is
/// nothing useful to report to in a closed control loop.
pub struct LedBank<O, const N: usize> {
    lines: [O; N],
}

impl<O: OutputPin, const N: usize> LedBank<O, N> {
    /// Takes ownership of the lines and switches them all off.
    pub fn new(lines: [O; N]) -> Self {
        let mut bank = Self { lines };
        bank.off_all();
        bank
    }

    pub fn on(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.set_high().ok();
        }
    }

    pub fn off(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.set_low().ok();
        }
    }

    pub fn on_all(&mut self) {
        for line in self.lines.iter_mut() {
            line.set_high().ok();
        }
    }

    pub fn off_all(&mut self) {
        for line in self.lines.iter_mut() {
            line.set_low().ok();
        }
    }

    pub fn count(&self) -> usize {
        N
    }
}
