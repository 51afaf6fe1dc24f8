#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

//! Board wiring for the Arduino Uno build.
//!
//! Buttons on d2-d5 (pull-up, pressed = low), LEDs on d8-d11, buzzer on d6,
//! 16x2 LCD behind a PCF8574 I2C backpack on a4/a5.

#[cfg(target_arch = "avr")]
mod board {
    use core::cell::Cell;

    use ag_lcd::{Cursor, Display, LcdDisplay, Lines};
    use avr_device::interrupt::{self, Mutex};
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::OutputPin;
    use panic_halt as _;
    use port_expander::dev::pcf8574::Pcf8574;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use simon::{ButtonBank, CharDisplay, Game, LedBank, Piezo, Screen, StatusScreen};

    /// Score needed to win a game.
    const WIN_SCORE: u8 = 10;

    /// Pattern storage; comfortably above the win threshold.
    const PATTERN_CAPACITY: usize = 32;

    static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

    /// TIMER0 in CTC mode: 16 MHz / 64 / 250 = 1 kHz compare interrupts.
    fn millis_init(tc0: &arduino_hal::pac::TC0) {
        tc0.tccr0a.write(|w| w.wgm0().ctc());
        tc0.ocr0a.write(|w| w.bits(249));
        tc0.tccr0b.write(|w| w.cs0().prescale_64());
        tc0.timsk0.write(|w| w.ocie0a().set_bit());
    }

    #[avr_device::interrupt(atmega328p)]
    fn TIMER0_COMPA() {
        interrupt::free(|cs| {
            let counter = MILLIS.borrow(cs);
            counter.set(counter.get().wrapping_add(1));
        });
    }

    fn millis() -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }

    /// Adapts `ag-lcd` to the library's display trait.
    struct Lcd<T, D> {
        inner: LcdDisplay<T, D>,
    }

    impl<T, D> CharDisplay for Lcd<T, D>
    where
        T: OutputPin + Sized,
        D: DelayNs + Sized,
    {
        fn clear(&mut self) {
            self.inner.clear();
        }

        fn set_position(&mut self, col: u8, row: u8) {
            self.inner.set_position(col, row);
        }

        fn print(&mut self, text: &str) {
            self.inner.print(text);
        }
    }

    #[arduino_hal::entry]
    fn main() -> ! {
        let dp = arduino_hal::Peripherals::take().unwrap();
        let pins = arduino_hal::pins!(dp);
        let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

        millis_init(&dp.TC0);
        unsafe { avr_device::interrupt::enable() };

        let buttons = ButtonBank::new(
            [
                pins.d2.into_pull_up_input().downgrade(),
                pins.d3.into_pull_up_input().downgrade(),
                pins.d4.into_pull_up_input().downgrade(),
                pins.d5.into_pull_up_input().downgrade(),
            ],
            millis(),
        );

        let leds = LedBank::new([
            pins.d8.into_output().downgrade(),
            pins.d9.into_output().downgrade(),
            pins.d10.into_output().downgrade(),
            pins.d11.into_output().downgrade(),
        ]);

        let buzzer = Piezo::new(pins.d6.into_output().downgrade(), arduino_hal::Delay::new());

        // A floating analog pin is as close to ambient noise as this board
        // gets; one read seeds the pattern generator.
        let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
        let seed_pin = pins.a0.into_analog_input(&mut adc);
        let seed = seed_pin.analog_read(&mut adc) as u64;
        let rng = SmallRng::seed_from_u64(seed ^ 0xDEAD_BEEF);

        let sda = pins.a4.into_pull_up_input();
        let scl = pins.a5.into_pull_up_input();
        let i2c = arduino_hal::i2c::I2c::new(dp.TWI, sda, scl, 50000);
        let mut expander = Pcf8574::new(i2c, true, true, true);

        let lcd: LcdDisplay<_, _> =
            LcdDisplay::new_pcf8574(&mut expander, arduino_hal::Delay::new())
                .with_lines(Lines::TwoLines)
                .with_display(Display::On)
                .with_cursor(Cursor::Off)
                .build();

        let mut screen = StatusScreen::new(Lcd { inner: lcd });
        screen.render_welcome();

        let mut game: Game<_, _, _, _, _, _, 4, PATTERN_CAPACITY> = Game::new(
            buttons,
            leds,
            buzzer,
            screen,
            arduino_hal::Delay::new(),
            rng,
            WIN_SCORE,
            millis(),
        );

        ufmt::uwriteln!(&mut serial, "simon ready, win at {}", WIN_SCORE).ok();

        loop {
            game.tick(millis());
            arduino_hal::delay_ms(1);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
