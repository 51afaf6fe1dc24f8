//! End-to-end game flow against fake peripherals.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use simon::buttons::DEBOUNCE_MS;
use simon::{ButtonBank, Color, Game, LedBank, Screen, Sounder, State};

#[derive(Clone)]
struct FakePin(Rc<Cell<bool>>);

impl FakePin {
    fn released() -> Self {
        FakePin(Rc::new(Cell::new(false)))
    }
}

impl embedded_hal::digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SilentSounder;

impl Sounder for SilentSounder {
    fn tone(&mut self, _freq_hz: u16, _duration_ms: u16) {}
}

#[derive(Clone, Default)]
struct ScreenLog(Rc<RefCell<Vec<String>>>);

impl Screen for ScreenLog {
    fn render_welcome(&mut self) {
        self.0.borrow_mut().push("welcome".into());
    }

    fn render_level(&mut self, level: u8, high_score: u8) {
        self.0.borrow_mut().push(format!("level {level} hi {high_score}"));
    }

    fn render_win(&mut self, score: u8, high_score: u8) {
        self.0.borrow_mut().push(format!("win {score} hi {high_score}"));
    }

    fn render_game_over(&mut self, score: u8, high_score: u8) {
        self.0
            .borrow_mut()
            .push(format!("game over {score} hi {high_score}"));
    }

    fn render_prompt(&mut self) {
        self.0.borrow_mut().push("prompt".into());
    }
}

struct NullDelay;

impl DelayNs for NullDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

type TestGame = Game<FakePin, FakePin, SilentSounder, ScreenLog, NullDelay, SmallRng, 4, 32>;

struct Board {
    buttons: [FakePin; 4],
    screen: ScreenLog,
    game: TestGame,
    now: u32,
}

impl Board {
    fn new(win_score: u8, seed: u64) -> Self {
        let buttons = [
            FakePin::released(),
            FakePin::released(),
            FakePin::released(),
            FakePin::released(),
        ];
        let leds = [
            FakePin::released(),
            FakePin::released(),
            FakePin::released(),
            FakePin::released(),
        ];
        let screen = ScreenLog::default();
        let game = Game::new(
            ButtonBank::new(
                [
                    buttons[0].clone(),
                    buttons[1].clone(),
                    buttons[2].clone(),
                    buttons[3].clone(),
                ],
                0,
            ),
            LedBank::new(leds),
            SilentSounder,
            screen.clone(),
            NullDelay,
            SmallRng::seed_from_u64(seed),
            win_score,
            0,
        );
        Board {
            buttons,
            screen,
            game,
            now: 0,
        }
    }

    fn tick(&mut self) {
        self.now += DEBOUNCE_MS * 2;
        self.game.tick(self.now);
    }

    fn press(&mut self, index: usize) {
        self.buttons[index].0.set(true);
        self.tick();
        self.buttons[index].0.set(false);
        self.tick();
    }

    fn wait_for_input(&mut self) {
        for _ in 0..1000 {
            if self.game.state() == State::WaitInput {
                return;
            }
            self.now += 400;
            self.game.tick(self.now);
        }
        panic!("never reached WaitInput");
    }

    fn replay_pattern(&mut self) {
        let colors: Vec<Color> = (0..self.game.pattern().len())
            .map(|i| self.game.pattern().get(i).unwrap())
            .collect();
        for color in colors {
            self.press(color as usize);
        }
    }
}

#[test]
fn full_game_to_victory() {
    let mut board = Board::new(3, 99);

    board.press(0);
    assert_eq!(board.game.state(), State::ShowPattern);

    for round in 1..=3u8 {
        board.wait_for_input();
        assert_eq!(board.game.pattern().len(), round as usize);
        board.replay_pattern();
    }

    assert_eq!(board.game.state(), State::GameOver);
    assert!(board.game.won());
    assert_eq!(board.game.score(), 3);
    assert_eq!(board.game.high_score(), 3);
    assert_eq!(board.screen.0.borrow().last().unwrap(), "win 3 hi 3");
}

#[test]
fn loss_then_restart_then_better_run() {
    let mut board = Board::new(10, 5);

    // First game: fail on the very first input.
    board.press(1);
    board.wait_for_input();
    let expected = board.game.pattern().get(0).unwrap();
    board.press((expected as usize + 1) % 4);
    assert_eq!(board.game.state(), State::GameOver);
    assert!(!board.game.won());
    assert_eq!(board.screen.0.borrow().last().unwrap(), "game over 0 hi 0");

    // Any press leaves game over and prompts for a new game.
    board.press(2);
    assert_eq!(board.game.state(), State::Idle);
    assert_eq!(board.screen.0.borrow().last().unwrap(), "prompt");

    // Second game: two clean rounds push the high score to 2.
    board.press(2);
    for _ in 0..2 {
        board.wait_for_input();
        board.replay_pattern();
    }
    assert_eq!(board.game.score(), 2);
    assert_eq!(board.game.high_score(), 2);
    assert_eq!(board.game.state(), State::ShowPattern);
}
