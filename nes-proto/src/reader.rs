//! Shift-register read sequence.
//!
//! The pad holds a 4021 parallel-in/serial-out register. A latch pulse loads
//! the button states, then each clock cycle presents the next bit on the
//! data line. The data line is active-low and pulled up, so an unplugged pad
//! reads as "nothing pressed".

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use gamepad_core::infallible;

/// Minimum latch high time in microseconds.
pub const LATCH_PULSE_US: u32 = 12;

/// Minimum time the clock is held on each side of a sample, in microseconds.
pub const CLOCK_HALF_PERIOD_US: u32 = 6;

/// Bits shifted out per read.
pub const BITS_PER_READ: u32 = 8;

/// Drives latch and clock and samples the data line.
pub struct ShiftRegisterReader<L, C, D, T> {
    latch: L,
    clock: C,
    data: D,
    delay: T,
}

impl<L, C, D, T> ShiftRegisterReader<L, C, D, T>
where
    L: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: InputPin<Error = Infallible>,
    T: DelayNs,
{
    /// Wrap the lines. The data pin must already have its pull-up enabled.
    pub fn new(latch: L, clock: C, data: D, delay: T) -> Self {
        Self {
            latch,
            clock,
            data,
            delay,
        }
    }

    /// Put the lines in their idle levels: clock high, latch low.
    pub fn configure(&mut self) {
        infallible(self.clock.set_high());
        infallible(self.latch.set_low());
    }

    /// Latch and shift out one byte, first bit in bit 7.
    ///
    /// A bit is set when the data line read low (pressed).
    pub fn read(&mut self) -> u8 {
        infallible(self.latch.set_high());
        self.delay.delay_us(LATCH_PULSE_US);
        infallible(self.latch.set_low());

        let mut bits = 0u8;
        for _ in 0..BITS_PER_READ {
            infallible(self.clock.set_low());
            self.delay.delay_us(CLOCK_HALF_PERIOD_US);

            bits <<= 1;
            if infallible(self.data.is_low()) {
                bits |= 1;
            }

            self.delay.delay_us(CLOCK_HALF_PERIOD_US);
            infallible(self.clock.set_high());
        }
        bits
    }

    /// Give the lines back.
    pub fn release(self) -> (L, C, D, T) {
        (self.latch, self.clock, self.data, self.delay)
    }
}
