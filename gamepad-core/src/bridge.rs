//! PadBridge: connects a polled controller driver to an output sink.

use crate::gamepad::Gamepad;
use crate::output::{OutputError, OutputSink};
use crate::report::{ReportBuf, ReportId, MAX_REPORT_SIZE};

/// Forwards reports from a [`Gamepad`] driver to an [`OutputSink`].
///
/// Each step polls the driver once and sends a report only when the driver
/// says it changed. If the sink fails, the report is marked reported by the
/// driver already, so the bridge remembers to send on the next step even if
/// the controller did not change in between.
pub struct PadBridge<G, O> {
    gamepad: G,
    output: O,
    report_id: ReportId,
    resend: bool,
}

impl<G: Gamepad, O: OutputSink> PadBridge<G, O> {
    /// Create a new bridge from an initialized driver and an output sink.
    pub fn new(gamepad: G, output: O) -> Self {
        Self {
            gamepad,
            output,
            report_id: 0,
            resend: false,
        }
    }

    /// Poll once and forward the report if it changed.
    ///
    /// Returns `Ok(true)` when a report was sent.
    pub async fn process_one(&mut self) -> Result<bool, BridgeError> {
        self.gamepad.poll();

        if !self.gamepad.has_changed(self.report_id) && !self.resend {
            return Ok(false);
        }

        let mut buf: ReportBuf = [0; MAX_REPORT_SIZE];
        let len = self.gamepad.build_report(Some(&mut buf), self.report_id);

        match self.output.send(&buf[..len]).await {
            Ok(()) => {
                self.resend = false;
                Ok(true)
            }
            Err(e) => {
                self.resend = true;
                Err(BridgeError::Output(e))
            }
        }
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the output sink.
    Output(OutputError),
}
