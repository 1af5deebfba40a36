//! [`NesGamepad`]: the NES family driver.

use crate::descriptor::{DEVICE_DESCRIPTOR, REPORT_DESCRIPTOR};
use crate::mapping::{serialize, translate, REPORT_SIZE};
use crate::reader::ShiftRegisterReader;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use gamepad_core::{Gamepad, InitError, PadState, ReportBuf, ReportId, ReportLatch};

/// NES controller on a latch/clock/data port.
pub struct NesGamepad<L, C, D, T> {
    reader: ShiftRegisterReader<L, C, D, T>,
    state: PadState,
    reports: ReportLatch<REPORT_SIZE>,
}

impl<L, C, D, T> NesGamepad<L, C, D, T>
where
    L: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: InputPin<Error = Infallible>,
    T: DelayNs,
{
    /// Create the driver. Call [`Gamepad::initialize`] before polling.
    pub fn new(latch: L, clock: C, data: D, delay: T) -> Self {
        let state = PadState::neutral();
        Self {
            reader: ShiftRegisterReader::new(latch, clock, data, delay),
            state,
            reports: ReportLatch::new(serialize(&state)),
        }
    }

    /// Canonical state from the last poll.
    #[must_use]
    pub fn state(&self) -> PadState {
        self.state
    }

    /// Give the lines back.
    pub fn release(self) -> (L, C, D, T) {
        self.reader.release()
    }
}

impl<L, C, D, T> Gamepad for NesGamepad<L, C, D, T>
where
    L: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: InputPin<Error = Infallible>,
    T: DelayNs,
{
    fn report_size(&self) -> usize {
        REPORT_SIZE
    }

    fn report_descriptor(&self) -> &'static [u8] {
        REPORT_DESCRIPTOR
    }

    fn device_descriptor(&self) -> Option<&'static [u8]> {
        Some(DEVICE_DESCRIPTOR)
    }

    fn initialize(&mut self) -> Result<(), InitError> {
        self.reader.configure();
        self.reports.rearm();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "NES lines configured, latch pulse {}us, clock half-period {}us",
            crate::reader::LATCH_PULSE_US,
            crate::reader::CLOCK_HALF_PERIOD_US
        );

        Ok(())
    }

    fn poll(&mut self) {
        self.state = translate(self.reader.read());
        self.reports.store(serialize(&self.state));
    }

    fn has_changed(&mut self, _id: ReportId) -> bool {
        self.reports.changed()
    }

    fn build_report(&mut self, buf: Option<&mut ReportBuf>, _id: ReportId) -> usize {
        self.reports.emit(buf)
    }
}
