//! Debounced button bank.
//!
//! Buttons are wired with pull-ups, so the idle level is high and a press
//! pulls the line low. A press therefore shows up as a debounced high->low
//! transition, which is what [`ButtonBank::pressed_edge`] reports.

use embedded_hal::digital::InputPin;

/// Minimum time between accepted transitions on one line.
pub const DEBOUNCE_MS: u32 = 25;

#[derive(Clone, Copy)]
struct LineState {
    /// Debounced level, true when the line reads low (pressed).
    stable_low: bool,
    /// Level before the last accepted transition.
    prev_stable_low: bool,
    /// Timestamp of the last accepted transition.
    last_change_ms: u32,
    /// True only during the tick in which a press was accepted.
    edge: bool,
}

/// Polls `N` input lines and tracks debounced state plus press edges.
pub struct ButtonBank<I, const N: usize> {
    lines: [I; N],
    states: [LineState; N],
}

impl<I: InputPin, const N: usize> ButtonBank<I, N> {
    /// Takes ownership of the lines and latches their current levels as the
    /// initial stable state, so a button held during startup does not fire.
    pub fn new(mut lines: [I; N], now_ms: u32) -> Self {
        let mut states = [LineState {
            stable_low: false,
            prev_stable_low: false,
            last_change_ms: now_ms,
            edge: false,
        }; N];
        for (line, state) in lines.iter_mut().zip(states.iter_mut()) {
            let low = line.is_low().unwrap_or(false);
            state.stable_low = low;
            state.prev_stable_low = low;
        }
        Self { lines, states }
    }

    /// Samples every line once. Must run exactly once per tick, before the
    /// game logic reads edges: edge flags are only valid until the next poll.
    pub fn poll(&mut self, now_ms: u32) {
        for (line, state) in self.lines.iter_mut().zip(self.states.iter_mut()) {
            state.edge = false;
            let raw_low = line.is_low().unwrap_or(state.stable_low);
            if raw_low != state.stable_low
                && now_ms.wrapping_sub(state.last_change_ms) >= DEBOUNCE_MS
            {
                state.prev_stable_low = state.stable_low;
                state.stable_low = raw_low;
                state.last_change_ms = now_ms;
                // Only the idle->pressed direction counts as an edge.
                state.edge = state.stable_low && !state.prev_stable_low;
            }
        }
    }

    /// Debounced "is this button down" view.
    pub fn is_pressed(&self, index: usize) -> bool {
        self.states.get(index).map_or(false, |s| s.stable_low)
    }

    /// Lowest-indexed button that was pressed this tick, if any.
    pub fn pressed_edge(&self) -> Option<usize> {
        self.states.iter().position(|s| s.edge)
    }

    pub fn count(&self) -> usize {
        N
    }
}
