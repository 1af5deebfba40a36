//! Platform-agnostic gamepad state, report latching and the driver contract.
//!
//! This crate holds everything the controller protocol crates share, with
//! no chip-specific dependencies. It is used both on the RP2040 firmware and
//! on host for testing.
//!
//! # Overview
//!
//! - [`types`]: Canonical state ([`PadState`], [`Buttons`], axis levels)
//! - [`report`]: Change detection and report building ([`ReportLatch`])
//! - [`gamepad`]: The uniform driver contract ([`Gamepad`], [`InitError`])
//! - [`lines`]: Digital line helpers ([`InputBus`], [`PinBus`])
//! - [`descriptor`]: USB descriptor helpers ([`DeviceIdentity`])
//! - [`output`]: Output sink trait ([`OutputSink`])
//! - [`bridge`]: Poll-to-output loop step ([`PadBridge`])
//!
//! # Example
//!
//! ```rust
//! use gamepad_core::{ReportLatch, MAX_REPORT_SIZE};
//!
//! let mut latch = ReportLatch::new([128, 128, 0]);
//! assert!(latch.changed()); // the first check always reports
//!
//! let mut buf = [0u8; MAX_REPORT_SIZE];
//! assert_eq!(latch.emit(Some(&mut buf)), 3);
//! assert!(!latch.changed());
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod descriptor;
pub mod gamepad;
pub mod lines;
pub mod output;
pub mod report;
pub mod types;

// Re-export main types at crate root
pub use bridge::{BridgeError, PadBridge};
pub use descriptor::DeviceIdentity;
pub use gamepad::{Gamepad, InitError};
pub use lines::{infallible, InputBus, PinBus};
pub use output::{OutputError, OutputSink};
pub use report::{ReportBuf, ReportId, ReportLatch, MAX_REPORT_SIZE};
pub use types::{Buttons, PadState, AXIS_CENTER, AXIS_MAX, AXIS_MIN};
