//! The color sequence the player has to reproduce.

use heapless::Vec;
use rand::RngCore;

use crate::{Color, COLOR_COUNT};

/// Append-only sequence of colors, bounded by `CAP`.
///
/// Only two mutations exist: appending one random color and resetting to
/// empty. Appending past capacity is a silent no-op; in practice the win
/// threshold stops growth long before that.
pub struct Pattern<const CAP: usize> {
    seq: Vec<Color, CAP>,
}

impl<const CAP: usize> Pattern<CAP> {
    pub fn new() -> Self {
        Self { seq: Vec::new() }
    }

    pub fn reset(&mut self) {
        self.seq.clear();
    }

    /// Draw one color uniformly from `[0, COLOR_COUNT)` and append it.
    pub fn append_random<R: RngCore>(&mut self, rng: &mut R) {
        let color = (rng.next_u32() % COLOR_COUNT as u32) as Color;
        self.seq.push(color).ok();
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.seq.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

impl<const CAP: usize> Default for Pattern<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
