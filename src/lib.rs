#![cfg_attr(not(test), no_std)]

//! Simon Says game core.
//!
//! Everything in here is hardware-independent: peripherals come in through
//! `embedded-hal` pin/delay traits plus the [`Sounder`] and [`CharDisplay`]
//! traits, and time comes in as a millisecond value passed to
//! [`Game::tick`]. The AVR binary wires the real board up in `main.rs`.

pub mod buttons;
pub mod buzzer;
pub mod game;
pub mod leds;
pub mod pattern;
pub mod screen;

pub use buttons::ButtonBank;
pub use buzzer::{Piezo, Sounder};
pub use game::{Game, State};
pub use leds::LedBank;
pub use pattern::Pattern;
pub use screen::{CharDisplay, Screen, StatusScreen};

/// Number of colors, buttons and LEDs.
pub const COLOR_COUNT: usize = 4;

/// A color is an index in `[0, COLOR_COUNT)`.
pub type Color = u8;
