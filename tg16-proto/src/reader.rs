//! Two-bank multiplexed read sequence.
//!
//! The pad has a 4-line output bus behind a multiplexer with an active-low
//! output enable and a data-select input. Each bank is given a millisecond
//! to settle.

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use gamepad_core::{infallible, InputBus};

/// Settle time after enabling the outputs and after each select change.
pub const BANK_SETTLE_MS: u32 = 1;

/// Drives data-select and /OE and samples the 4-line bus.
pub struct Tg16Reader<S, E, B, T> {
    select: S,
    output_enable: E,
    bus: B,
    delay: T,
}

impl<S, E, B, T> Tg16Reader<S, E, B, T>
where
    S: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    B: InputBus,
    T: DelayNs,
{
    /// Wrap the lines. `output_enable` is the active-low /OE line; bus pins
    /// must already have their pull-ups enabled.
    pub fn new(select: S, output_enable: E, bus: B, delay: T) -> Self {
        Self {
            select,
            output_enable,
            bus,
            delay,
        }
    }

    /// Outputs disabled, data-select high.
    pub fn configure(&mut self) {
        infallible(self.output_enable.set_high());
        infallible(self.select.set_high());
    }

    /// Read both banks: bank A (select high) in the low nibble, bank B
    /// (select low) in the high nibble. Active low.
    pub fn read(&mut self) -> u8 {
        infallible(self.output_enable.set_low());
        self.delay.delay_ms(BANK_SETTLE_MS);

        infallible(self.select.set_high());
        self.delay.delay_ms(BANK_SETTLE_MS);
        let bank_a = self.bus.sample() & 0x0f;

        infallible(self.select.set_low());
        self.delay.delay_ms(BANK_SETTLE_MS);
        let bank_b = self.bus.sample() & 0x0f;

        infallible(self.output_enable.set_high());

        bank_a | (bank_b << 4)
    }

    /// Give the lines back.
    pub fn release(self) -> (S, E, B, T) {
        (self.select, self.output_enable, self.bus, self.delay)
    }
}
