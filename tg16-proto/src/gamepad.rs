//! [`Tg16Gamepad`]: the TurboGrafx-16 family driver.

use crate::descriptor::REPORT_DESCRIPTOR;
use crate::mapping::{serialize, translate, REPORT_SIZE};
use crate::reader::Tg16Reader;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use gamepad_core::{Gamepad, InitError, InputBus, PadState, ReportBuf, ReportId, ReportLatch};

/// TG16 / PC Engine pad on data-select, /OE and a 4-line bus.
pub struct Tg16Gamepad<S, E, B, T> {
    reader: Tg16Reader<S, E, B, T>,
    state: PadState,
    reports: ReportLatch<REPORT_SIZE>,
}

impl<S, E, B, T> Tg16Gamepad<S, E, B, T>
where
    S: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    B: InputBus,
    T: DelayNs,
{
    /// Create the driver. Call [`Gamepad::initialize`] before polling.
    pub fn new(select: S, output_enable: E, bus: B, delay: T) -> Self {
        let state = PadState::neutral();
        Self {
            reader: Tg16Reader::new(select, output_enable, bus, delay),
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
    pub fn release(self) -> (S, E, B, T) {
        self.reader.release()
    }

    fn refresh(&mut self) {
        self.state = translate(self.reader.read());
        self.reports.store(serialize(&self.state));
    }
}

impl<S, E, B, T> Gamepad for Tg16Gamepad<S, E, B, T>
where
    S: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    B: InputBus,
    T: DelayNs,
{
    fn report_size(&self) -> usize {
        REPORT_SIZE
    }

    fn report_descriptor(&self) -> &'static [u8] {
        REPORT_DESCRIPTOR
    }

    fn initialize(&mut self) -> Result<(), InitError> {
        critical_section::with(|_| {
            self.reader.configure();
            self.refresh();
            self.reports.rearm();
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("TG16 initial state: {}", self.state);

        Ok(())
    }

    fn poll(&mut self) {
        self.refresh();
    }

    fn has_changed(&mut self, _id: ReportId) -> bool {
        self.reports.changed()
    }

    fn build_report(&mut self, buf: Option<&mut ReportBuf>, _id: ReportId) -> usize {
        self.reports.emit(buf)
    }
}
