//! Raw shift-register byte to canonical state and report bytes.
//!
//! Bit layout of the raw byte (set = pressed), in the order the pad clocks
//! them out:
//!
//! | Bit | Button |
//! |-----|--------|
//! | 7   | A      |
//! | 6   | B      |
//! | 5   | Select |
//! | 4   | Start  |
//! | 3   | Up     |
//! | 2   | Down   |
//! | 1   | Left   |
//! | 0   | Right  |

use gamepad_core::{Buttons, PadState, AXIS_CENTER, AXIS_MAX, AXIS_MIN};

pub const RIGHT: u8 = 0x01;
pub const LEFT: u8 = 0x02;
pub const DOWN: u8 = 0x04;
pub const UP: u8 = 0x08;
pub const START: u8 = 0x10;
pub const SELECT: u8 = 0x20;
pub const B: u8 = 0x40;
pub const A: u8 = 0x80;

/// Report length: X, Y, buttons.
pub const REPORT_SIZE: usize = 3;

/// Raw bits in report button order: A, B, Select, Start.
const BUTTON_ORDER: [u8; 4] = [A, B, SELECT, START];

/// Translate one raw read into canonical state.
///
/// Within each axis the later check wins when both directions are set:
/// Left over Right, Up over Down.
#[must_use]
pub fn translate(raw: u8) -> PadState {
    let mut x = AXIS_CENTER;
    let mut y = AXIS_CENTER;

    if raw & RIGHT != 0 {
        x = AXIS_MAX;
    }
    if raw & LEFT != 0 {
        x = AXIS_MIN;
    }
    if raw & DOWN != 0 {
        y = AXIS_MAX;
    }
    if raw & UP != 0 {
        y = AXIS_MIN;
    }

    let mut buttons = Buttons::NONE;
    for (slot, bit) in BUTTON_ORDER.iter().enumerate() {
        buttons.set(Buttons::nth(slot as u8), raw & bit != 0);
    }

    PadState { x, y, buttons }
}

/// Serialize canonical state into the NES report layout.
#[must_use]
pub fn serialize(state: &PadState) -> [u8; REPORT_SIZE] {
    [state.x, state.y, (state.buttons.raw() & 0x0f) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pressed_is_centered() {
        assert_eq!(translate(0), PadState::neutral());
    }

    #[test]
    fn test_a_maps_to_first_button() {
        let state = translate(0b1000_0000);
        assert_eq!(state.buttons.raw(), 0x01);
        assert_eq!(serialize(&state), [128, 128, 0x01]);
    }

    #[test]
    fn test_button_reorder() {
        assert_eq!(translate(B).buttons.raw(), 0x02);
        assert_eq!(translate(SELECT).buttons.raw(), 0x04);
        assert_eq!(translate(START).buttons.raw(), 0x08);
        assert_eq!(translate(A | B | SELECT | START).buttons.raw(), 0x0f);
    }

    #[test]
    fn test_directions() {
        assert_eq!(serialize(&translate(RIGHT)), [255, 128, 0]);
        assert_eq!(serialize(&translate(LEFT)), [0, 128, 0]);
        assert_eq!(serialize(&translate(DOWN)), [128, 255, 0]);
        assert_eq!(serialize(&translate(UP)), [128, 0, 0]);
        assert_eq!(serialize(&translate(UP | LEFT)), [0, 0, 0]);
    }

    #[test]
    fn test_opposite_directions_later_check_wins() {
        let state = translate(LEFT | RIGHT | UP | DOWN);
        assert_eq!(state.x, AXIS_MIN);
        assert_eq!(state.y, AXIS_MIN);
    }
}
