//! TurboGrafx-16 / PC Engine controller polling and report mapping.
//!
//! | Line        | Direction | Idle | Notes |
//! |-------------|-----------|------|-------|
//! | Data select | output    | high | High = directions, low = buttons |
//! | /OE         | output    | high | Active low, enabled only while reading |
//! | Bus 0..3    | input     | high | Active low, pull-ups enabled |
//!
//! Bus lines carry Left/Run, Down/Select, Right/II and Up/I in that order.
//! A read takes about 3 ms because of the per-bank settle time.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod descriptor;
pub mod gamepad;
pub mod mapping;
pub mod reader;

#[cfg(test)]
mod tests;

pub use descriptor::REPORT_DESCRIPTOR;
pub use gamepad::Tg16Gamepad;
pub use mapping::{serialize, translate, REPORT_SIZE};
pub use reader::{Tg16Reader, BANK_SETTLE_MS};
