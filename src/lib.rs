//! RP2040 firmware support for the retro controller to USB adapter.
//!
//! The controller drivers live in the `nes-proto`, `db9-proto` and
//! `tg16-proto` crates. This crate binds them to RP2040 pins and to the
//! embassy-usb HID class.
//!
//! # Wiring
//!
//! | GPIO | NES   | DB9          | TG16           |
//! |------|-------|--------------|----------------|
//! | 2    | Latch | Select       | Data select    |
//! | 3    | Clock | -            | /OE            |
//! | 4    | Data  | Up/Up        | Left/Run       |
//! | 5    | -     | Down/Down    | Down/Select    |
//! | 6    | -     | Left/0       | Right/II       |
//! | 7    | -     | Right/0      | Up/I           |
//! | 8    | -     | B/A          | -              |
//! | 9    | -     | C/Start      | -              |
//! | 14   | Mode jumper J1 (to ground) |||
//! | 15   | Mode jumper J2 (to ground) |||

#![no_std]

pub mod input;
pub mod usb_output;

pub use input::{Db9Pad, NesPad, Pad, PadFamily, Tg16Pad};
pub use usb_output::{configure_usb_hid, Report, ReportSignal, ReportSignalSink, UsbHidOutput};

/// Interval between controller polls.
pub const POLL_PERIOD_MS: u64 = 5;

/// Identity used when the active family does not supply a device descriptor.
pub const DEFAULT_VENDOR_ID: u16 = 0x1209;
pub const DEFAULT_PRODUCT_ID: u16 = 0x0001;
