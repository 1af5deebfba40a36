//! Five-phase select-line read sequence.
//!
//! ```text
//!  |   1 |  2  |  3  |  4  | 5 ...
//!  ___    __    __    __    __
//!     |__|  |__|  |__|  |__|
//!   ^  ^     ^     ^   ^
//!   0  1     3     4   2      <- RawSample index
//! ```
//!
//! Indices 0, 1 and 2 carry controller data (select high, select low, and
//! the extra 6-button bank on the fourth rising edge). Indices 3 and 4 are
//! only used for identification.
//!
//! Logical bus lines, by select level and controller:
//!
//! | Line | Select high (Genesis) | Select low (Genesis) | Extra bank (6-button) | Atari / SMS |
//! |------|-----------------------|----------------------|-----------------------|-------------|
//! | 0    | Up                    | Up                   | Z                     | Up          |
//! | 1    | Down                  | Down                 | Y                     | Down        |
//! | 2    | Left                  | 0                    | X                     | Left        |
//! | 3    | Right                 | 0                    | Mode                  | Right       |
//! | 4    | B                     | A                    |                       | Button 1    |
//! | 5    | C                     | Start                |                       | Button 2    |

use crate::identify::ControllerKind;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use gamepad_core::{infallible, InputBus};

/// Settle time after every select transition, in microseconds.
///
/// Third-party pads multiplex slower than first-party ones; less than this
/// causes misreads.
pub const SELECT_SETTLE_US: u32 = 20;

/// Delay before identification, in milliseconds.
///
/// Multi-tap adapters are not recognised reliably without it (50 ms was
/// stable in practice).
pub const POWER_UP_SETTLE_MS: u32 = 100;

/// Samples captured by one full read.
pub const PHASES: usize = 5;

/// Marker for phases that were not sampled.
pub const NOT_SAMPLED: u8 = 0xff;

pub const PHASE_HIGH: usize = 0;
pub const PHASE_LOW: usize = 1;
pub const PHASE_EXTRA: usize = 2;
pub const PHASE_ID_A: usize = 3;
pub const PHASE_ID_B: usize = 4;

/// Raw bus words of one read, active-low, in [`PHASE_HIGH`]..[`PHASE_ID_B`] order.
pub type RawSample = [u8; PHASES];

/// Drives the select line and samples the 6-line bus.
pub struct MultiplexReader<S, B, T> {
    select: S,
    bus: B,
    delay: T,
}

impl<S, B, T> MultiplexReader<S, B, T>
where
    S: OutputPin<Error = Infallible>,
    B: InputBus,
    T: DelayNs,
{
    /// Wrap the lines. Bus pins must already have their pull-ups enabled.
    pub fn new(select: S, bus: B, delay: T) -> Self {
        Self { select, bus, delay }
    }

    /// Select idles high.
    pub fn configure(&mut self) {
        infallible(self.select.set_high());
    }

    /// Wait out the power-up settle time before identification.
    pub fn settle(&mut self) {
        self.delay.delay_ms(POWER_UP_SETTLE_MS);
    }

    /// Read as much as `kind` needs.
    ///
    /// Atari and SMS pads have no second bank, so only the first phase is
    /// read for them and the rest are [`NOT_SAMPLED`].
    pub fn read(&mut self, kind: ControllerKind) -> RawSample {
        if kind.is_genesis() {
            self.read_all()
        } else {
            self.read_first_bank()
        }
    }

    /// Select high, sample once.
    pub fn read_first_bank(&mut self) -> RawSample {
        let high = self.select_and_sample(true);
        [high, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED]
    }

    /// Run all five phases and leave select high.
    pub fn read_all(&mut self) -> RawSample {
        let mut sample = [NOT_SAMPLED; PHASES];

        sample[PHASE_HIGH] = self.select_and_sample(true);
        sample[PHASE_LOW] = self.select_and_sample(false);

        self.drive_select(true);
        sample[PHASE_ID_A] = self.select_and_sample(false);

        self.drive_select(true);
        sample[PHASE_ID_B] = self.select_and_sample(false);

        sample[PHASE_EXTRA] = self.select_and_sample(true);

        self.drive_select(false);
        infallible(self.select.set_high());

        sample
    }

    /// Give the lines back.
    pub fn release(self) -> (S, B, T) {
        (self.select, self.bus, self.delay)
    }

    fn drive_select(&mut self, high: bool) {
        if high {
            infallible(self.select.set_high());
        } else {
            infallible(self.select.set_low());
        }
        self.delay.delay_us(SELECT_SETTLE_US);
    }

    fn select_and_sample(&mut self, high: bool) -> u8 {
        self.drive_select(high);
        self.bus.sample()
    }
}
