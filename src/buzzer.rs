//! Piezo buzzer tones and jingles.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::Color;

/// One short tone per color, played whenever that color lights up.
/// C4, E4, G4, C5 -- distinct enough to tell the buttons apart by ear.
pub const CLICK_TONES: [u16; 4] = [262, 330, 392, 523];

/// Duration of a per-color click.
pub const CLICK_MS: u16 = 35;

/// Ascending run played on a win.
const SUCCESS_JINGLE: [(u16, u16); 4] = [(523, 120), (659, 120), (784, 120), (1047, 320)];

/// Descending groan played on a loss.
const FAIL_JINGLE: [(u16, u16); 3] = [(330, 180), (294, 180), (262, 420)];

/// Sound output as the game engine sees it.
///
/// `click` fires during pattern playback and on input acknowledgement; the
/// two jingles are terminal feedback and are allowed to block the caller
/// for their full length.
pub trait Sounder {
    fn tone(&mut self, freq_hz: u16, duration_ms: u16);

    fn click(&mut self, color: Color) {
        let freq = CLICK_TONES[color as usize % CLICK_TONES.len()];
        self.tone(freq, CLICK_MS);
    }

    fn success_jingle(&mut self) {
        for (freq, dur) in SUCCESS_JINGLE {
            self.tone(freq, dur);
        }
    }

    fn fail_jingle(&mut self) {
        for (freq, dur) in FAIL_JINGLE {
            self.tone(freq, dur);
        }
    }
}

/// Bit-banged square wave on a single output pin.
pub struct Piezo<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Piezo<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }
}

impl<P: OutputPin, D: DelayNs> Sounder for Piezo<P, D> {
    fn tone(&mut self, freq_hz: u16, duration_ms: u16) {
        if freq_hz == 0 || duration_ms == 0 {
            return;
        }
        let cycles = freq_hz as u32 * duration_ms as u32 / 1000;
        let half_period_us = 500_000 / freq_hz as u32;
        for _ in 0..cycles {
            self.pin.set_high().ok();
            self.delay.delay_us(half_period_us);
            self.pin.set_low().ok();
            self.delay.delay_us(half_period_us);
        }
    }
}
