//! Digital line access.
//!
//! Single lines use the `embedded-hal` 1.0 pin traits directly. Drivers
//! require `Error = Infallible`, which holds for GPIO on every HAL the
//! firmware targets; [`infallible`] strips the `Result` without a panic path.
//!
//! Multi-line inputs that a protocol samples as one word go through
//! [`InputBus`].

use core::convert::Infallible;
use embedded_hal::digital::InputPin;

/// Unwrap a result whose error type cannot be constructed.
#[inline(always)]
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A group of input lines sampled together.
///
/// Bit `i` of the returned word is logical line `i`, set when that line is
/// electrically high. Protocol crates document which logical line carries
/// which signal; the implementation is responsible for routing physical pins
/// to logical positions.
pub trait InputBus {
    /// Number of meaningful low bits in a sample.
    const WIDTH: u8;

    /// Sample all lines. Bits at or above [`WIDTH`](Self::WIDTH) are zero.
    fn sample(&mut self) -> u8;
}

/// [`InputBus`] over an array of individual input pins.
///
/// `pins[i]` becomes logical line `i`, so the array order is the wiring map:
/// a board revision that routes the connector differently only changes the
/// order it passes pins in.
pub struct PinBus<P, const N: usize> {
    pins: [P; N],
}

impl<P, const N: usize> PinBus<P, N>
where
    P: InputPin<Error = Infallible>,
{
    const FITS: () = assert!(N <= 8, "a bus sample is one byte wide");

    /// Build a bus from pins listed in logical order.
    #[must_use]
    pub fn new(pins: [P; N]) -> Self {
        let () = Self::FITS;
        Self { pins }
    }

    /// Give the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P, const N: usize> InputBus for PinBus<P, N>
where
    P: InputPin<Error = Infallible>,
{
    const WIDTH: u8 = N as u8;

    fn sample(&mut self) -> u8 {
        self.pins
            .iter_mut()
            .enumerate()
            .fold(0, |word, (i, pin)| {
                if infallible(pin.is_high()) {
                    word | (1 << i)
                } else {
                    word
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    struct FixedPin(bool);

    impl ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_pin_bus_orders_bits_by_position() {
        let mut bus = PinBus::new([
            FixedPin(true),
            FixedPin(false),
            FixedPin(false),
            FixedPin(true),
        ]);
        assert_eq!(bus.sample(), 0b1001);
    }

    #[test]
    fn test_pin_bus_all_pulled_up() {
        let mut bus = PinBus::new([
            FixedPin(true),
            FixedPin(true),
            FixedPin(true),
            FixedPin(true),
            FixedPin(true),
            FixedPin(true),
        ]);
        assert_eq!(bus.sample(), 0x3f);
        assert_eq!(<PinBus<FixedPin, 6> as InputBus>::WIDTH, 6);
    }
}
