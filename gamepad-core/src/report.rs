//! Change detection and report building shared by every driver.
//!
//! A driver serializes its [`PadState`](crate::PadState) into a fixed-size
//! byte array after each poll and hands it to a [`ReportLatch`]. The latch
//! answers "has this changed since the last report?" and copies the bytes
//! out when a report is built. Both halves compare the serialized form, so
//! two states that produce the same report bytes are never reported twice.

/// Largest report any family produces, in bytes.
///
/// Matches the HID interrupt endpoint packet size.
pub const MAX_REPORT_SIZE: usize = 8;

/// Destination buffer for [`build_report`](crate::Gamepad::build_report).
pub type ReportBuf = [u8; MAX_REPORT_SIZE];

/// HID report identifier.
///
/// Every family here has exactly one report; the id is carried so that a
/// dispatcher can address multi-report devices the same way.
pub type ReportId = u8;

/// Holds the most recently polled report and the last one emitted.
#[derive(Debug, Clone)]
pub struct ReportLatch<const N: usize> {
    current: [u8; N],
    reported: [u8; N],
    first: bool,
}

impl<const N: usize> ReportLatch<N> {
    const FITS: () = assert!(N <= MAX_REPORT_SIZE, "report larger than MAX_REPORT_SIZE");

    /// Report length in bytes.
    pub const SIZE: usize = N;

    /// Create a latch holding `initial` as both current and reported bytes.
    ///
    /// The first call to [`changed`](Self::changed) still returns `true`.
    #[must_use]
    pub const fn new(initial: [u8; N]) -> Self {
        let () = Self::FITS;
        Self {
            current: initial,
            reported: initial,
            first: true,
        }
    }

    /// Re-arm the first-call flag. Called by a driver's `initialize`.
    pub fn rearm(&mut self) {
        self.first = true;
    }

    /// Replace the current report with freshly polled bytes.
    #[inline]
    pub fn store(&mut self, report: [u8; N]) {
        self.current = report;
    }

    /// The most recently stored report.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &[u8; N] {
        &self.current
    }

    /// The last report handed out by [`emit`](Self::emit).
    #[inline]
    #[must_use]
    pub fn reported(&self) -> &[u8; N] {
        &self.reported
    }

    /// `true` on the first call after creation or [`rearm`](Self::rearm),
    /// afterwards `true` only when the current bytes differ from the last
    /// emitted ones.
    pub fn changed(&mut self) -> bool {
        if self.first {
            self.first = false;
            return true;
        }
        self.current != self.reported
    }

    /// Copy the current report into `buf` (if any) and record it as emitted.
    ///
    /// The emitted copy is updated even without a buffer. Returns the report
    /// length.
    pub fn emit(&mut self, buf: Option<&mut ReportBuf>) -> usize {
        if let Some(buf) = buf {
            buf[..N].copy_from_slice(&self.current);
        }
        self.reported = self.current;
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_always_changed() {
        let mut latch = ReportLatch::new([128, 128, 0]);
        assert!(latch.changed());
        assert!(!latch.changed());
    }

    #[test]
    fn test_emit_then_changed_is_false() {
        let mut latch = ReportLatch::new([128, 128, 0]);
        assert!(latch.changed());
        latch.store([0, 128, 1]);
        assert!(latch.changed());
        let mut buf = [0xAA; MAX_REPORT_SIZE];
        assert_eq!(latch.emit(Some(&mut buf)), 3);
        assert_eq!(&buf[..3], &[0, 128, 1]);
        // bytes past the report are left alone
        assert_eq!(&buf[3..], &[0xAA; 5]);
        assert!(!latch.changed());
    }

    #[test]
    fn test_emit_without_buffer_still_syncs() {
        let mut latch = ReportLatch::new([128, 128, 0, 0]);
        let _ = latch.changed();
        latch.store([255, 128, 0, 2]);
        assert_eq!(latch.emit(None), 4);
        assert_eq!(latch.reported(), &[255, 128, 0, 2]);
        assert!(!latch.changed());
    }

    #[test]
    fn test_emit_is_idempotent() {
        let mut latch = ReportLatch::new([128, 128, 0]);
        latch.store([0, 255, 0x0f]);
        let mut first = [0; MAX_REPORT_SIZE];
        let mut second = [0; MAX_REPORT_SIZE];
        latch.emit(Some(&mut first));
        latch.emit(Some(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_rearm_forces_next_report() {
        let mut latch = ReportLatch::new([128, 128, 0]);
        let _ = latch.changed();
        latch.emit(None);
        assert!(!latch.changed());
        latch.rearm();
        assert!(latch.changed());
        assert!(!latch.changed());
    }
}
