//! The uniform driver contract and its error type.

use crate::report::{ReportBuf, ReportId};
use core::fmt;

/// Error type for driver initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// A multi-tap adapter answered instead of a single controller.
    ///
    /// Retrying cannot succeed until the adapter is unplugged.
    MultiTap,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MultiTap => f.write_str("multi-tap detected, not independently supported"),
        }
    }
}

/// A controller family driver as seen by the USB side.
///
/// Every family implements the same four operations so a dispatcher can
/// treat them interchangeably:
///
/// 1. [`initialize`](Self::initialize) once at boot,
/// 2. [`poll`](Self::poll) on every polling period,
/// 3. [`has_changed`](Self::has_changed) to decide whether to send,
/// 4. [`build_report`](Self::build_report) to produce the bytes.
///
/// The descriptor accessors return process-lifetime byte tables that the
/// USB layer passes to the host verbatim.
pub trait Gamepad {
    /// Number of distinct input reports. Always 1 for the families here.
    fn num_reports(&self) -> u8 {
        1
    }

    /// Length in bytes of the report produced by [`build_report`](Self::build_report).
    fn report_size(&self) -> usize;

    /// HID report descriptor.
    fn report_descriptor(&self) -> &'static [u8];

    /// USB device descriptor overriding the firmware default, if this family
    /// presents its own product identity.
    fn device_descriptor(&self) -> Option<&'static [u8]> {
        None
    }

    /// Configure lines, wait out any settle time and identify the attached
    /// controller. Re-arms change detection.
    fn initialize(&mut self) -> Result<(), InitError>;

    /// Run one full protocol read and rebuild the canonical state.
    fn poll(&mut self);

    /// `true` on the first call after [`initialize`](Self::initialize), then
    /// only when the polled report differs from the last one built.
    fn has_changed(&mut self, id: ReportId) -> bool;

    /// Copy the current report into `buf` when given, mark it as reported
    /// and return its length.
    fn build_report(&mut self, buf: Option<&mut ReportBuf>, id: ReportId) -> usize;
}

impl<G: Gamepad + ?Sized> Gamepad for &mut G {
    fn num_reports(&self) -> u8 {
        (**self).num_reports()
    }

    fn report_size(&self) -> usize {
        (**self).report_size()
    }

    fn report_descriptor(&self) -> &'static [u8] {
        (**self).report_descriptor()
    }

    fn device_descriptor(&self) -> Option<&'static [u8]> {
        (**self).device_descriptor()
    }

    fn initialize(&mut self) -> Result<(), InitError> {
        (**self).initialize()
    }

    fn poll(&mut self) {
        (**self).poll()
    }

    fn has_changed(&mut self, id: ReportId) -> bool {
        (**self).has_changed(id)
    }

    fn build_report(&mut self, buf: Option<&mut ReportBuf>, id: ReportId) -> usize {
        (**self).build_report(buf, id)
    }
}
