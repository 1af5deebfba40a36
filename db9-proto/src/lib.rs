//! DB9 controller polling, identification and report mapping.
//!
//! Chip-agnostic driver for the 9-pin pads of the Atari, Sega Master System
//! and Sega Genesis / Mega Drive (3- and 6-button). One output line drives
//! the pad's select input and six inputs are sampled as a bus; see
//! [`reader`] for the logical line assignment.
//!
//! The controller kind is detected once at initialization:
//!
//! ```text
//! phase nibbles (1, 2, _, 4, 5)   kind
//! (0x3, *, *, *, *)               multi-tap -> InitError::MultiTap
//! (0xf, 0x3, *, 0x3, 0x3)         Genesis3
//! (0xf, 0x3, *, other)            Genesis6
//! anything else                   Sms
//! Start held during detection     Genesis6
//! ```
//!
//! Interrupts are masked with [`critical_section`] for identification and
//! for every read, so jitter never stretches a select phase.
//!
//! # Example
//!
//! ```ignore
//! use db9_proto::Db9Gamepad;
//! use gamepad_core::{Gamepad, PinBus};
//!
//! let mut pad = Db9Gamepad::new(select, PinBus::new(lines), delay);
//! pad.initialize()?; // 100 ms settle, then identification
//! pad.poll();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod descriptor;
pub mod gamepad;
pub mod identify;
pub mod mapping;
pub mod reader;


pub use descriptor::REPORT_DESCRIPTOR;
pub use gamepad::Db9Gamepad;
pub use identify::{identify, ControllerKind};
pub use mapping::{serialize, translate, REPORT_SIZE};
pub use reader::{
    MultiplexReader, RawSample, NOT_SAMPLED, PHASES, POWER_UP_SETTLE_MS, SELECT_SETTLE_US,
};
