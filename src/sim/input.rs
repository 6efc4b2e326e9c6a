//! Lateral input mapping (pointer drag or device tilt)

use glam::Vec2;

use super::player::Body;
use crate::config::PlayerConfig;
use crate::{lerp, smoothing_factor};

/// Which device steers the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Drag,
    Tilt,
}

/// Raw device readings for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Pointer position in screen pixels, `Some` while pressed
    pub pointer: Option<Vec2>,
    /// Accelerometer X
    pub tilt_x: f32,
}

/// Maps raw input to a smoothed horizontal target in [-1, 1]
#[derive(Debug, Clone)]
pub struct LateralInput {
    mode: InputMode,
    move_speed: f32,
    drag_sensitivity: f32,
    tilt_sensitivity: f32,
    smoothing: f32,
    screen_width: f32,
    drag_origin: Option<Vec2>,
    current: f32,
}

impl LateralInput {
    pub fn new(config: &PlayerConfig, screen_width: f32) -> Self {
        Self {
            mode: InputMode::default(),
            move_speed: config.move_speed,
            drag_sensitivity: config.drag_sensitivity,
            tilt_sensitivity: config.tilt_sensitivity,
            smoothing: config.input_smoothing,
            screen_width,
            drag_origin: None,
            current: 0.0,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch device, discarding any drag in progress
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.drag_origin = None;
        self.current = 0.0;
    }

    /// Smoothed input in [-1, 1]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance smoothing toward this frame's target
    pub fn update(&mut self, sample: &InputSample, dt: f32) {
        let target = match self.mode {
            InputMode::Drag => self.read_drag(sample.pointer),
            InputMode::Tilt => (sample.tilt_x * self.tilt_sensitivity).clamp(-1.0, 1.0),
        };
        self.current = lerp(self.current, target, smoothing_factor(self.smoothing, dt));
    }

    fn read_drag(&mut self, pointer: Option<Vec2>) -> f32 {
        let Some(pos) = pointer else {
            self.drag_origin = None;
            return 0.0;
        };
        let origin = *self.drag_origin.get_or_insert(pos);
        let span = self.screen_width * self.drag_sensitivity;
        if span <= 0.0 {
            return 0.0;
        }
        ((pos.x - origin.x) / span).clamp(-1.0, 1.0)
    }

    /// Set the body's horizontal velocity, leaving vertical untouched
    pub fn apply(&self, body: &mut Body) {
        body.vel.x = self.current * self.move_speed;
    }
}
