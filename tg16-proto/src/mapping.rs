//! Packed TG16 byte to canonical state and report bytes.
//!
//! | Bit | Bank | Signal |
//! |-----|------|--------|
//! | 7   | B    | I      |
//! | 6   | B    | II     |
//! | 5   | B    | Select |
//! | 4   | B    | Run    |
//! | 3   | A    | Up     |
//! | 2   | A    | Right  |
//! | 1   | A    | Down   |
//! | 0   | A    | Left   |

use gamepad_core::{Buttons, PadState, AXIS_CENTER, AXIS_MAX, AXIS_MIN};

pub const LEFT: u8 = 0x01;
pub const DOWN: u8 = 0x02;
pub const RIGHT: u8 = 0x04;
pub const UP: u8 = 0x08;
pub const RUN: u8 = 0x10;
pub const SELECT: u8 = 0x20;
pub const II: u8 = 0x40;
pub const I: u8 = 0x80;

/// Report length: X, Y, buttons.
pub const REPORT_SIZE: usize = 3;

/// Packed bits in report button order.
const BUTTON_ORDER: [u8; 4] = [I, II, SELECT, RUN];

/// Translate one packed read (active low) into canonical state.
///
/// Down wins over Up and Right over Left.
#[must_use]
pub fn translate(raw: u8) -> PadState {
    let pressed = raw ^ 0xff;

    let mut x = AXIS_CENTER;
    let mut y = AXIS_CENTER;

    if pressed & UP != 0 {
        y = AXIS_MIN;
    }
    if pressed & DOWN != 0 {
        y = AXIS_MAX;
    }
    if pressed & LEFT != 0 {
        x = AXIS_MIN;
    }
    if pressed & RIGHT != 0 {
        x = AXIS_MAX;
    }

    let mut buttons = Buttons::NONE;
    for (slot, bit) in BUTTON_ORDER.iter().enumerate() {
        buttons.set(Buttons::nth(slot as u8), pressed & bit != 0);
    }

    PadState { x, y, buttons }
}

/// Serialize canonical state into the TG16 report layout.
#[must_use]
pub fn serialize(state: &PadState) -> [u8; REPORT_SIZE] {
    [state.x, state.y, (state.buttons.raw() & 0x0f) as u8]
}
