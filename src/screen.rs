//! Fixed 16x2 status screens.

use heapless::String;
use ufmt::uwrite;

/// Minimal surface of a character LCD: clear, position the cursor, print.
/// `ag-lcd` provides exactly this on the real board.
pub trait CharDisplay {
    fn clear(&mut self);
    fn set_position(&mut self, col: u8, row: u8);
    fn print(&mut self, text: &str);
}

/// The five screens the game shows. Each render is a full redraw.
pub trait Screen {
    fn render_welcome(&mut self);
    fn render_level(&mut self, level: u8, high_score: u8);
    fn render_win(&mut self, score: u8, high_score: u8);
    fn render_game_over(&mut self, score: u8, high_score: u8);
    fn render_prompt(&mut self);
}

/// Renders the fixed layouts onto any [`CharDisplay`].
pub struct StatusScreen<T> {
    lcd: T,
}

impl<T: CharDisplay> StatusScreen<T> {
    pub fn new(lcd: T) -> Self {
        Self { lcd }
    }

    fn two_lines(&mut self, top: &str, bottom: &str) {
        self.lcd.clear();
        self.lcd.set_position(0, 0);
        self.lcd.print(top);
        self.lcd.set_position(0, 1);
        self.lcd.print(bottom);
    }

    fn score_line(score: u8, high_score: u8) -> String<16> {
        let mut line: String<16> = String::new();
        uwrite!(&mut line, "Score {}  Hi {}", score, high_score).ok();
        line
    }
}

impl<T: CharDisplay> Screen for StatusScreen<T> {
    fn render_welcome(&mut self) {
        self.two_lines("Simon Says", "Press any button");
    }

    fn render_level(&mut self, level: u8, high_score: u8) {
        let mut top: String<16> = String::new();
        uwrite!(&mut top, "Level {}", level).ok();
        let mut bottom: String<16> = String::new();
        uwrite!(&mut bottom, "High score: {}", high_score).ok();
        self.lcd.clear();
        self.lcd.set_position(0, 0);
        self.lcd.print(top.as_str());
        self.lcd.set_position(0, 1);
        self.lcd.print(bottom.as_str());
    }

    fn render_win(&mut self, score: u8, high_score: u8) {
        let bottom = Self::score_line(score, high_score);
        self.lcd.clear();
        self.lcd.set_position(0, 0);
        self.lcd.print("You win!");
        self.lcd.set_position(0, 1);
        self.lcd.print(bottom.as_str());
    }

    fn render_game_over(&mut self, score: u8, high_score: u8) {
        let bottom = Self::score_line(score, high_score);
        self.lcd.clear();
        self.lcd.set_position(0, 0);
        self.lcd.print("Game over");
        self.lcd.set_position(0, 1);
        self.lcd.print(bottom.as_str());
    }

    fn render_prompt(&mut self) {
        self.two_lines("Play again?", "Press any button");
    }
}
