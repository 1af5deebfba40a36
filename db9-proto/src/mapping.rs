//! Raw DB9 sample to canonical state and report bytes.

use crate::identify::ControllerKind;
use crate::reader::{RawSample, PHASE_EXTRA, PHASE_HIGH, PHASE_LOW};
use gamepad_core::{Buttons, PadState, AXIS_CENTER, AXIS_MAX, AXIS_MIN};

// Lines on the select-high and select-low phases
pub const UP: u8 = 0x01;
pub const DOWN: u8 = 0x02;
pub const LEFT: u8 = 0x04;
pub const RIGHT: u8 = 0x08;
/// B on select high, A on select low, fire button 1 on Atari/SMS.
pub const BTN_LOW: u8 = 0x10;
/// C on select high, Start on select low, button 2 on SMS.
pub const BTN_HIGH: u8 = 0x20;

// Lines on the extra 6-button bank
pub const Z: u8 = 0x01;
pub const Y: u8 = 0x02;
pub const X: u8 = 0x04;
pub const MODE: u8 = 0x08;

/// Report length: X, Y, buttons 1-6, buttons 7-8.
pub const REPORT_SIZE: usize = 4;

/// Where a report button comes from: (phase, line mask).
type ButtonSource = (usize, u8);

/// Buttons 1 and 2. Numbering starts at button 1 because some Atari
/// emulators cannot remap.
const ONE_BANK_BUTTONS: &[ButtonSource] = &[(PHASE_HIGH, BTN_LOW), (PHASE_HIGH, BTN_HIGH)];

/// A, B, C, Start.
const GENESIS3_BUTTONS: &[ButtonSource] = &[
    (PHASE_LOW, BTN_LOW),
    (PHASE_HIGH, BTN_LOW),
    (PHASE_HIGH, BTN_HIGH),
    (PHASE_LOW, BTN_HIGH),
];

/// Y, B, C, Z, A, Mode, X, Start: the order PS3-style consumers expect.
const GENESIS6_BUTTONS: &[ButtonSource] = &[
    (PHASE_EXTRA, Y),
    (PHASE_HIGH, BTN_LOW),
    (PHASE_HIGH, BTN_HIGH),
    (PHASE_EXTRA, Z),
    (PHASE_LOW, BTN_LOW),
    (PHASE_EXTRA, MODE),
    (PHASE_EXTRA, X),
    (PHASE_LOW, BTN_HIGH),
];

/// Report button order for a controller kind.
#[must_use]
pub const fn button_map(kind: ControllerKind) -> &'static [ButtonSource] {
    match kind {
        ControllerKind::Atari | ControllerKind::Sms => ONE_BANK_BUTTONS,
        ControllerKind::Genesis3 => GENESIS3_BUTTONS,
        ControllerKind::Genesis6 => GENESIS6_BUTTONS,
    }
}

/// Translate one raw read into canonical state.
///
/// Lines are active low and inverted first. Directions come from the
/// select-high phase; Down wins over Up and Right over Left.
#[must_use]
pub fn translate(kind: ControllerKind, raw: &RawSample) -> PadState {
    let pressed = raw.map(|word| word ^ 0xff);
    let dirs = pressed[PHASE_HIGH];

    let mut x = AXIS_CENTER;
    let mut y = AXIS_CENTER;

    if dirs & UP != 0 {
        y = AXIS_MIN;
    }
    if dirs & DOWN != 0 {
        y = AXIS_MAX;
    }
    if dirs & LEFT != 0 {
        x = AXIS_MIN;
    }
    if dirs & RIGHT != 0 {
        x = AXIS_MAX;
    }

    let mut buttons = Buttons::NONE;
    for (slot, &(phase, mask)) in button_map(kind).iter().enumerate() {
        buttons.set(Buttons::nth(slot as u8), pressed[phase] & mask != 0);
    }

    PadState { x, y, buttons }
}

/// Serialize canonical state into the DB9 report layout.
#[must_use]
pub fn serialize(state: &PadState) -> [u8; REPORT_SIZE] {
    let buttons = state.buttons.raw();
    [
        state.x,
        state.y,
        (buttons & 0x3f) as u8,
        ((buttons >> 6) & 0x03) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::NOT_SAMPLED;

    const IDLE: u8 = 0x3f;

    /// Sample with every line released, then `pressed` lines pulled low.
    fn sample(pressed: [u8; 3]) -> RawSample {
        [
            IDLE & !pressed[0],
            IDLE & !pressed[1],
            IDLE & !pressed[2],
            IDLE,
            IDLE,
        ]
    }

    #[test]
    fn test_idle_is_neutral_for_every_kind() {
        for kind in [
            ControllerKind::Atari,
            ControllerKind::Sms,
            ControllerKind::Genesis3,
            ControllerKind::Genesis6,
        ] {
            let state = translate(kind, &sample([0, 0, 0]));
            assert_eq!(serialize(&state), [128, 128, 0, 0]);
        }
    }

    #[test]
    fn test_directions_later_check_wins() {
        let kind = ControllerKind::Genesis3;
        assert_eq!(translate(kind, &sample([UP, 0, 0])).y, AXIS_MIN);
        assert_eq!(translate(kind, &sample([UP | DOWN, 0, 0])).y, AXIS_MAX);
        assert_eq!(translate(kind, &sample([LEFT, 0, 0])).x, AXIS_MIN);
        assert_eq!(translate(kind, &sample([LEFT | RIGHT, 0, 0])).x, AXIS_MAX);
    }

    #[test]
    fn test_sms_buttons_start_at_one() {
        let raw = [IDLE & !BTN_LOW, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED];
        assert_eq!(serialize(&translate(ControllerKind::Sms, &raw)), [128, 128, 0x01, 0]);

        let raw = [IDLE & !BTN_HIGH, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED, NOT_SAMPLED];
        assert_eq!(serialize(&translate(ControllerKind::Atari, &raw)), [128, 128, 0x02, 0]);
    }

    #[test]
    fn test_genesis3_order() {
        let kind = ControllerKind::Genesis3;
        assert_eq!(translate(kind, &sample([0, BTN_LOW, 0])).buttons.raw(), 0x01); // A
        assert_eq!(translate(kind, &sample([BTN_LOW, 0, 0])).buttons.raw(), 0x02); // B
        assert_eq!(translate(kind, &sample([BTN_HIGH, 0, 0])).buttons.raw(), 0x04); // C
        assert_eq!(translate(kind, &sample([0, BTN_HIGH, 0])).buttons.raw(), 0x08); // Start
    }

    #[test]
    fn test_genesis3_ignores_extra_bank() {
        let state = translate(ControllerKind::Genesis3, &sample([0, 0, X | Y | Z | MODE]));
        assert_eq!(state.buttons.raw(), 0);
    }

    #[test]
    fn test_genesis6_order() {
        let kind = ControllerKind::Genesis6;
        let report = |pressed| serialize(&translate(kind, &sample(pressed)));
        assert_eq!(report([0, 0, Y]), [128, 128, 0x01, 0]);
        assert_eq!(report([BTN_LOW, 0, 0]), [128, 128, 0x02, 0]); // B
        assert_eq!(report([BTN_HIGH, 0, 0]), [128, 128, 0x04, 0]); // C
        assert_eq!(report([0, 0, Z]), [128, 128, 0x08, 0]);
        assert_eq!(report([0, BTN_LOW, 0]), [128, 128, 0x10, 0]); // A
        assert_eq!(report([0, 0, MODE]), [128, 128, 0x20, 0]);
        assert_eq!(report([0, 0, X]), [128, 128, 0, 0x01]);
        assert_eq!(report([0, BTN_HIGH, 0]), [128, 128, 0, 0x02]); // Start
    }

    #[test]
    fn test_genesis6_everything_held() {
        let state = translate(
            ControllerKind::Genesis6,
            &sample([UP | LEFT | BTN_LOW | BTN_HIGH, BTN_LOW | BTN_HIGH, X | Y | Z | MODE]),
        );
        assert_eq!(serialize(&state), [0, 0, 0x3f, 0x03]);
    }
}
