//! Controller-type identification from one full read.

use crate::reader::{RawSample, PHASE_HIGH, PHASE_ID_A, PHASE_ID_B, PHASE_LOW};
use gamepad_core::InitError;

/// Low nibble of the first phase when a multi-tap adapter is attached.
pub const MULTITAP_ID: u8 = 0x3;

/// Low nibble of the first phase when nothing pulls a direction line down.
pub const NO_CONNECT_ID: u8 = 0xf;

/// Low nibble a Genesis pad returns with select low (Left and Right held low).
pub const GENESIS_ID: u8 = 0x3;

/// Start on the select-low phase (active low).
pub const START_HELD_MASK: u8 = 0x20;

/// What is plugged into the DB9 port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerKind {
    /// One-button joystick. Never auto-detected; read like [`Sms`](Self::Sms).
    Atari,
    /// Single bank, two buttons.
    Sms,
    /// Up/Down/Left/Right, A, B, C, Start.
    Genesis3,
    /// Genesis3 plus X, Y, Z, Mode.
    Genesis6,
}

impl ControllerKind {
    /// Whether the pad has a select-multiplexed second bank.
    #[inline]
    #[must_use]
    pub const fn is_genesis(self) -> bool {
        matches!(self, ControllerKind::Genesis3 | ControllerKind::Genesis6)
    }
}

/// Classify the attached device from a full five-phase read.
///
/// Rules, in order:
///
/// 1. Phase-1 nibble `0x3`: multi-tap, error.
/// 2. Phase-1 nibble `0xf` and phase-2 nibble `0x3`: Genesis. Six-button
///    unless both identification phases still read `0x3`.
/// 3. Anything else: SMS.
/// 4. Start held on phase 2 forces Genesis6.
///
/// Six-button pads actually return `0x0` and `0xf` on the identification
/// phases; rule 2 only checks for "not what a 3-button pad returns" so pads
/// that deviate from that still work.
pub fn identify(sample: &RawSample) -> Result<ControllerKind, InitError> {
    let nibble = |phase: usize| sample[phase] & 0x0f;

    if nibble(PHASE_HIGH) == MULTITAP_ID {
        return Err(InitError::MultiTap);
    }

    let mut kind = ControllerKind::Sms;

    if nibble(PHASE_HIGH) == NO_CONNECT_ID && nibble(PHASE_LOW) == GENESIS_ID {
        kind = if nibble(PHASE_ID_A) != GENESIS_ID || nibble(PHASE_ID_B) != GENESIS_ID {
            ControllerKind::Genesis6
        } else {
            ControllerKind::Genesis3
        };
    }

    // Manual override for pads the heuristic gets wrong
    if sample[PHASE_LOW] & START_HELD_MASK == 0 {
        kind = ControllerKind::Genesis6;
    }

    Ok(kind)
}
