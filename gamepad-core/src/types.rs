//! Core gamepad types: Buttons, PadState and the quantized axis levels.

/// Axis value when the negative direction (up / left) is held.
pub const AXIS_MIN: u8 = 0;

/// Axis value when neither direction is held.
pub const AXIS_CENTER: u8 = 128;

/// Axis value when the positive direction (down / right) is held.
pub const AXIS_MAX: u8 = 255;

/// Button state represented as a bitfield.
///
/// Bit `n` is HID button `n + 1`. The meaning of each bit is decided by the
/// protocol crate that fills it in, so the same value can hold the NES
/// A-B-Select-Start order or the Genesis 6-button order.
///
/// # Example
///
/// ```
/// use gamepad_core::Buttons;
///
/// let mut buttons = Buttons::NONE;
/// buttons.set(Buttons::nth(0), true);
/// buttons.set(Buttons::nth(3), true);
/// assert_eq!(buttons.raw(), 0b1001);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// The button in slot `n` (HID button `n + 1`).
    #[inline]
    #[must_use]
    pub const fn nth(n: u8) -> Self {
        Self(1 << n)
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Canonical controller state: two 3-level axes and a button bitmask.
///
/// Rebuilt from scratch on every poll. Axis values are always one of
/// [`AXIS_MIN`], [`AXIS_CENTER`] or [`AXIS_MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadState {
    pub x: u8,
    pub y: u8,
    pub buttons: Buttons,
}

impl PadState {
    /// Centered axes, nothing pressed.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            x: AXIS_CENTER,
            y: AXIS_CENTER,
            buttons: Buttons::NONE,
        }
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::neutral()
    }
}
