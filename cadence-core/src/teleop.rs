//! Teleop input shaping
//!
//! Helpers for mapping gamepad input to actuator power: range clipping,
//! cubic scaling for fine control at low speed, tank-drive mapping, and
//! an edge-triggered toggle for buttons that cycle through states.

/// Clip a value to `[min, max]`.
pub fn clip(value: f32, min: f32, max: f32) -> f32 {
    value.clamp(min, max)
}

/// Scale a stick value in `[-1, 1]` so small deflections map to small
/// powers.
///
/// Cubic: preserves the endpoints and the sign while flattening the
/// response around center for precise low-speed driving.
pub fn scale_input(value: f32) -> f32 {
    value * value * value
}

/// Map tank-drive stick positions to (left, right) wheel powers.
///
/// Stick y axes read -1.0 when pushed fully forward, so both are negated
/// before clipping and scaling.
pub fn tank_drive(left_stick_y: f32, right_stick_y: f32) -> (f32, f32) {
    let left = scale_input(clip(-left_stick_y, -1.0, 1.0));
    let right = scale_input(clip(-right_stick_y, -1.0, 1.0));
    (left, right)
}

/// An edge-triggered button that cycles through a fixed number of states.
///
/// Each press-and-release advances the value by one, wrapping at
/// `states`. Typical use: one button alternately opening and closing a
/// claw servo (two states).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleButton {
    pressed: bool,
    states: u8,
    value: u8,
}

impl ToggleButton {
    /// Create a toggle with `states` states starting at `initial`, given
    /// the button's current pressed state.
    pub fn new(pressed: bool, states: u8, initial: u8) -> Self {
        Self {
            pressed,
            states,
            value: initial % states.max(1),
        }
    }

    /// Feed the current button state; true when the value advanced.
    pub fn process(&mut self, pressed: bool) -> bool {
        let advanced = pressed && !self.pressed;
        self.pressed = pressed;
        if advanced {
            self.value = (self.value + 1) % self.states.max(1);
        }
        advanced
    }

    /// Current state value in `0..states`.
    pub fn value(&self) -> u8 {
        self.value
    }
}
