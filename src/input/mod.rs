//! Controller family selection and dispatch.
//!
//! One family is active per boot. [`PadFamily`] is decoded from the mode
//! jumpers, the matching driver is built on the shared port lines and
//! wrapped in [`Pad`], which forwards the [`Gamepad`] contract to it.

use db9_proto::Db9Gamepad;
use defmt::Format;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Delay;
use gamepad_core::{Gamepad, InitError, PinBus, ReportBuf, ReportId};
use nes_proto::NesGamepad;
use tg16_proto::Tg16Gamepad;

/// NES pad: latch, clock, data.
pub type NesPad<'d> = NesGamepad<Output<'d>, Output<'d>, Input<'d>, Delay>;

/// DB9 pad: select and six bus lines.
pub type Db9Pad<'d> = Db9Gamepad<Output<'d>, PinBus<Input<'d>, 6>, Delay>;

/// TG16 pad: data-select, /OE and four bus lines.
pub type Tg16Pad<'d> = Tg16Gamepad<Output<'d>, Output<'d>, PinBus<Input<'d>, 4>, Delay>;

/// Which controller family the adapter is wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum PadFamily {
    Nes,
    Db9,
    Tg16,
}

impl PadFamily {
    /// Decode the two mode jumpers (`true` = jumper fitted, line pulled low).
    ///
    /// | J1 | J2 | Family |
    /// |----|----|--------|
    /// | -  | -  | DB9    |
    /// | x  | -  | NES    |
    /// | -  | x  | TG16   |
    /// | x  | x  | DB9    |
    #[must_use]
    pub const fn from_jumpers(j1: bool, j2: bool) -> Self {
        match (j1, j2) {
            (true, false) => PadFamily::Nes,
            (false, true) => PadFamily::Tg16,
            _ => PadFamily::Db9,
        }
    }

    /// USB product string for this family.
    #[must_use]
    pub const fn product_name(self) -> &'static str {
        match self {
            PadFamily::Nes => "NES to USB",
            PadFamily::Db9 => "Atari/SMS/Genesis to USB",
            PadFamily::Tg16 => "TG16 to USB",
        }
    }
}

/// The active driver.
pub enum Pad<'d> {
    Nes(NesPad<'d>),
    Db9(Db9Pad<'d>),
    Tg16(Tg16Pad<'d>),
}

impl Pad<'_> {
    /// Family of the wrapped driver.
    #[must_use]
    pub fn family(&self) -> PadFamily {
        match self {
            Pad::Nes(_) => PadFamily::Nes,
            Pad::Db9(_) => PadFamily::Db9,
            Pad::Tg16(_) => PadFamily::Tg16,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $pad:ident => $body:expr) => {
        match $self {
            Pad::Nes($pad) => $body,
            Pad::Db9($pad) => $body,
            Pad::Tg16($pad) => $body,
        }
    };
}

impl Gamepad for Pad<'_> {
    fn num_reports(&self) -> u8 {
        dispatch!(self, pad => pad.num_reports())
    }

    fn report_size(&self) -> usize {
        dispatch!(self, pad => pad.report_size())
    }

    fn report_descriptor(&self) -> &'static [u8] {
        dispatch!(self, pad => pad.report_descriptor())
    }

    fn device_descriptor(&self) -> Option<&'static [u8]> {
        dispatch!(self, pad => pad.device_descriptor())
    }

    fn initialize(&mut self) -> Result<(), InitError> {
        dispatch!(self, pad => pad.initialize())
    }

    fn poll(&mut self) {
        dispatch!(self, pad => pad.poll())
    }

    fn has_changed(&mut self, id: ReportId) -> bool {
        dispatch!(self, pad => pad.has_changed(id))
    }

    fn build_report(&mut self, buf: Option<&mut ReportBuf>, id: ReportId) -> usize {
        dispatch!(self, pad => pad.build_report(buf, id))
    }
}
