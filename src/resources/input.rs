use bevy::prelude::*;
use std::collections::HashMap;

/// Latest value of every named control axis, written by whatever polls the
/// input devices and read by the control-surface actuators once per frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControlInputs {
    axes: HashMap<String, f32>,
}

impl ControlInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an axis value, clamped to [-1, 1]. NaN is stored as 0.
    pub fn set_axis(&mut self, name: impl Into<String>, value: f32) {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
        self.axes.insert(name.into(), value);
    }

    /// Current value of an axis; axes never written read as centred.
    pub fn axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }
}
