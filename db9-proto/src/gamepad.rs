//! [`Db9Gamepad`]: the DB9 family driver.

use crate::descriptor::REPORT_DESCRIPTOR;
use crate::identify::{identify, ControllerKind};
use crate::mapping::{serialize, translate, REPORT_SIZE};
use crate::reader::MultiplexReader;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use gamepad_core::{Gamepad, InitError, InputBus, PadState, ReportBuf, ReportId, ReportLatch};

/// Atari, SMS or Genesis controller on a select line and a 6-line bus.
///
/// The controller kind is identified once by [`Gamepad::initialize`] and kept
/// until the next initialization.
pub struct Db9Gamepad<S, B, T> {
    reader: MultiplexReader<S, B, T>,
    kind: ControllerKind,
    state: PadState,
    reports: ReportLatch<REPORT_SIZE>,
}

impl<S, B, T> Db9Gamepad<S, B, T>
where
    S: OutputPin<Error = Infallible>,
    B: InputBus,
    T: DelayNs,
{
    /// Create the driver. Call [`Gamepad::initialize`] before polling.
    pub fn new(select: S, bus: B, delay: T) -> Self {
        let state = PadState::neutral();
        Self {
            reader: MultiplexReader::new(select, bus, delay),
            kind: ControllerKind::Genesis3,
            state,
            reports: ReportLatch::new(serialize(&state)),
        }
    }

    /// The identified controller kind.
    #[must_use]
    pub fn kind(&self) -> ControllerKind {
        self.kind
    }

    /// Canonical state from the last poll.
    #[must_use]
    pub fn state(&self) -> PadState {
        self.state
    }

    /// Give the lines back.
    pub fn release(self) -> (S, B, T) {
        self.reader.release()
    }

    fn refresh(&mut self) {
        let kind = self.kind;
        let raw = critical_section::with(|_| self.reader.read(kind));
        self.state = translate(kind, &raw);
        self.reports.store(serialize(&self.state));
    }
}

impl<S, B, T> Gamepad for Db9Gamepad<S, B, T>
where
    S: OutputPin<Error = Infallible>,
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
        critical_section::with(|_| -> Result<(), InitError> {
            self.reader.configure();
            self.reader.settle();
            // Always the full sequence, whatever was identified before
            let sample = self.reader.read_all();

            let kind = identify(&sample).inspect_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("DB9 identification failed: {}", _e);
            })?;

            #[cfg(feature = "defmt")]
            defmt::info!("DB9 controller identified as {}", kind);

            self.kind = kind;
            self.reports.rearm();
            // Runs right after the identification read, before a 6-button
            // pad's phase counter has timed out; the first report may be
            // out of phase. The next poll is not.
            self.refresh();
            Ok(())
        })
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
