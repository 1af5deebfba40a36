//! USB HID report output.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{self, HidWriter, State};
use embassy_usb::Builder;
use gamepad_core::{OutputError, OutputSink, MAX_REPORT_SIZE};

/// One serialized input report.
pub type Report = heapless::Vec<u8, MAX_REPORT_SIZE>;

/// Hand-off between the poll task and the USB task.
///
/// Latest report wins. A report that was overwritten before the USB task
/// picked it up is never needed, the newer one carries the full state.
pub type ReportSignal = Signal<CriticalSectionRawMutex, Report>;

type UsbDriver<'d> = Driver<'d, USB>;

/// Writes reports to the HID interrupt IN endpoint.
pub struct UsbHidOutput<'d> {
    writer: HidWriter<'d, UsbDriver<'d>, MAX_REPORT_SIZE>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    pub fn new(writer: HidWriter<'d, UsbDriver<'d>, MAX_REPORT_SIZE>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the host has configured the device.
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl OutputSink for UsbHidOutput<'_> {
    async fn send(&mut self, report: &[u8]) -> Result<(), OutputError> {
        if !self.ready {
            return Err(OutputError::NotReady);
        }
        self.writer.write(report).await.map_err(|_| OutputError::Io)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Forwards reports to a [`ReportSignal`] instead of the endpoint.
///
/// Lets the poll loop run on its own ticker without waiting for the host
/// to drain the endpoint.
pub struct ReportSignalSink {
    signal: &'static ReportSignal,
}

impl ReportSignalSink {
    pub fn new(signal: &'static ReportSignal) -> Self {
        Self { signal }
    }
}

impl OutputSink for ReportSignalSink {
    async fn send(&mut self, report: &[u8]) -> Result<(), OutputError> {
        let report = Report::from_slice(report).map_err(|_| OutputError::Dropped)?;
        self.signal.signal(report);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Register the HID interface with the active family's report descriptor.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, UsbDriver<'d>>,
    state: &'d mut State<'d>,
    report_descriptor: &'d [u8],
) -> HidWriter<'d, UsbDriver<'d>, MAX_REPORT_SIZE> {
    let config = hid::Config {
        report_descriptor,
        request_handler: None,
        poll_ms: 1,
        max_packet_size: MAX_REPORT_SIZE as u16,
        hid_subclass: hid::HidSubclass::No,
        hid_boot_protocol: hid::HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
