//! The game engine: a cooperative state machine driven by `tick`.
//!
//! Nothing in here sleeps except the two documented feedback points (the
//! 120 ms press-acknowledgement flash and the end-of-game jingles). All
//! other cadence comes from comparing against the `now_ms` value handed to
//! [`Game::tick`] by the main loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use rand::RngCore;

use crate::buttons::ButtonBank;
use crate::buzzer::Sounder;
use crate::leds::LedBank;
use crate::pattern::Pattern;
use crate::screen::Screen;
use crate::Color;

/// How long each color stays lit during pattern playback.
pub const SHOW_ON_MS: u32 = 400;

/// Press-acknowledgement flash. Intentionally blocking: it is part of the
/// game feel and short enough that nothing else needs the CPU meanwhile.
pub const ACK_FLASH_MS: u32 = 120;

/// Game-over blink half-periods.
pub const BLINK_WON_MS: u32 = 400;
pub const BLINK_LOST_MS: u32 = 200;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Idle,
    ShowPattern,
    WaitInput,
    GameOver,
}

pub struct Game<I, O, S, C, D, R, const N: usize, const CAP: usize> {
    buttons: ButtonBank<I, N>,
    leds: LedBank<O, N>,
    sounder: S,
    screen: C,
    delay: D,
    rng: R,
    pattern: Pattern<CAP>,
    state: State,
    level: u8,
    score: u8,
    high_score: u8,
    won: bool,
    show_cursor: usize,
    input_cursor: usize,
    led_lit: bool,
    led_since_ms: u32,
    state_since_ms: u32,
    win_score: u8,
}

impl<I, O, S, C, D, R, const N: usize, const CAP: usize> Game<I, O, S, C, D, R, N, CAP>
where
    I: InputPin,
    O: OutputPin,
    S: Sounder,
    C: Screen,
    D: DelayNs,
    R: RngCore,
{
    pub fn new(
        buttons: ButtonBank<I, N>,
        leds: LedBank<O, N>,
        sounder: S,
        screen: C,
        delay: D,
        rng: R,
        win_score: u8,
        now_ms: u32,
    ) -> Self {
        Self {
            buttons,
            leds,
            sounder,
            screen,
            delay,
            rng,
            pattern: Pattern::new(),
            state: State::Idle,
            level: 0,
            score: 0,
            high_score: 0,
            won: false,
            show_cursor: 0,
            input_cursor: 0,
            led_lit: false,
            led_since_ms: now_ms,
            state_since_ms: now_ms,
            win_score,
        }
    }

    /// One pass of the control loop. Polls the buttons exactly once, then
    /// dispatches on the current state.
    pub fn tick(&mut self, now_ms: u32) {
        self.buttons.poll(now_ms);
        match self.state {
            State::Idle => self.tick_idle(now_ms),
            State::ShowPattern => self.tick_show_pattern(now_ms),
            State::WaitInput => self.tick_wait_input(now_ms),
            State::GameOver => self.tick_game_over(now_ms),
        }
    }

    fn enter(&mut self, state: State, now_ms: u32) {
        self.state = state;
        self.state_since_ms = now_ms;
    }

    fn tick_idle(&mut self, now_ms: u32) {
        if self.buttons.pressed_edge().is_none() {
            return;
        }
        // New game: fresh pattern, level 1, score 0. High score survives.
        self.leds.off_all();
        self.pattern.reset();
        self.level = 1;
        self.score = 0;
        self.won = false;
        self.pattern.append_random(&mut self.rng);
        self.show_cursor = 0;
        self.led_lit = false;
        self.screen.render_level(self.level, self.high_score);
        self.enter(State::ShowPattern, now_ms);
    }

    fn tick_show_pattern(&mut self, now_ms: u32) {
        if self.show_cursor >= self.pattern.len() {
            self.leds.off_all();
            self.input_cursor = 0;
            self.enter(State::WaitInput, now_ms);
        } else if !self.led_lit {
            if let Some(color) = self.pattern.get(self.show_cursor) {
                self.leds.on(color as usize);
                self.sounder.click(color);
            }
            self.led_lit = true;
            self.led_since_ms = now_ms;
        } else if now_ms.wrapping_sub(self.led_since_ms) >= SHOW_ON_MS {
            if let Some(color) = self.pattern.get(self.show_cursor) {
                self.leds.off(color as usize);
            }
            self.led_lit = false;
            self.show_cursor += 1;
        }
    }

    fn tick_wait_input(&mut self, now_ms: u32) {
        let pressed = match self.buttons.pressed_edge() {
            Some(index) => index,
            None => return,
        };

        // Acknowledge the press with a short flash and click.
        self.leds.on(pressed);
        self.sounder.click(pressed as Color);
        self.delay.delay_ms(ACK_FLASH_MS);
        self.leds.off(pressed);

        if self.pattern.get(self.input_cursor) != Some(pressed as Color) {
            self.won = false;
            self.sounder.fail_jingle();
            self.screen.render_game_over(self.score, self.high_score);
            self.enter(State::GameOver, now_ms);
            return;
        }

        self.input_cursor += 1;
        if self.input_cursor < self.pattern.len() {
            return;
        }

        // Round complete.
        self.score = self.pattern.len() as u8;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        if self.score >= self.win_score {
            self.won = true;
            self.sounder.success_jingle();
            self.screen.render_win(self.score, self.high_score);
            self.enter(State::GameOver, now_ms);
        } else {
            self.level += 1;
            self.pattern.append_random(&mut self.rng);
            self.show_cursor = 0;
            self.led_lit = false;
            self.screen.render_level(self.level, self.high_score);
            self.enter(State::ShowPattern, now_ms);
        }
    }

    fn tick_game_over(&mut self, now_ms: u32) {
        if self.buttons.pressed_edge().is_some() {
            self.leds.off_all();
            self.screen.render_prompt();
            self.enter(State::Idle, now_ms);
            return;
        }

        // Blink everything: slow victory lap, fast loss.
        let half_period = if self.won { BLINK_WON_MS } else { BLINK_LOST_MS };
        if (now_ms / half_period) % 2 == 0 {
            self.leds.on_all();
        } else {
            self.leds.off_all();
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn high_score(&self) -> u8 {
        self.high_score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn pattern(&self) -> &Pattern<CAP> {
        &self.pattern
    }

    /// When the current state was entered.
    pub fn state_since_ms(&self) -> u32 {
        self.state_since_ms
    }
}
