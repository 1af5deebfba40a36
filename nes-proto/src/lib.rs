//! NES controller polling and report mapping.
//!
//! Chip-agnostic driver for NES pads (and SNES pads, whose first eight bits
//! follow the same layout) on three digital lines:
//!
//! | Line  | Direction | Idle | Notes |
//! |-------|-----------|------|-------|
//! | Latch | output    | low  | Active high |
//! | Clock | output    | high | Bit presented while low |
//! | Data  | input     | high | Active low, pull-up enabled |
//!
//! # Example
//!
//! ```ignore
//! use gamepad_core::Gamepad;
//! use nes_proto::NesGamepad;
//!
//! let mut pad = NesGamepad::new(latch, clock, data, delay);
//! pad.initialize()?;
//! loop {
//!     pad.poll();
//!     if pad.has_changed(0) {
//!         let mut buf = [0u8; gamepad_core::MAX_REPORT_SIZE];
//!         let len = pad.build_report(Some(&mut buf), 0);
//!         // send &buf[..len]
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod descriptor;
pub mod gamepad;
pub mod mapping;
pub mod reader;


pub use descriptor::{DEVICE_DESCRIPTOR, PRODUCT_ID, REPORT_DESCRIPTOR};
pub use gamepad::NesGamepad;
pub use mapping::{serialize, translate, REPORT_SIZE};
pub use reader::{ShiftRegisterReader, BITS_PER_READ, CLOCK_HALF_PERIOD_US, LATCH_PULSE_US};
