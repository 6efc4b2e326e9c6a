//! Player body and jump behavior

use glam::Vec2;

use super::platform_field::ColliderKind;
use crate::config::PlayerConfig;

/// Kinematic state of the player
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO }
    }

    /// Semi-implicit Euler step under downward gravity
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vel.y -= gravity.abs() * dt;
        self.pos += self.vel * dt;
    }
}

/// A contact reported against the player's collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub other: ColliderKind,
    /// Normal pointing from the other collider toward the player
    pub normal: Vec2,
}

/// Applies the jump impulse on qualifying platform contacts
#[derive(Debug, Clone)]
pub struct JumpController {
    jump_force: f32,
    require_top_landing: bool,
    min_up_normal: f32,
    wrap_around: bool,
    wrap_padding: f32,
}

impl JumpController {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            jump_force: config.jump_force,
            require_top_landing: config.require_top_landing,
            min_up_normal: config.min_up_normal.clamp(0.0, 1.0),
            wrap_around: config.wrap_around,
            wrap_padding: config.wrap_padding,
        }
    }

    /// Initial jump velocity
    #[inline]
    pub fn jump_force(&self) -> f32 {
        self.jump_force
    }

    /// Handle a contact. Returns true if the player jumped.
    pub fn on_collision(&self, body: &mut Body, contact: &Contact) -> bool {
        if contact.other != ColliderKind::Platform {
            return false;
        }
        // Only jump when falling
        if body.vel.y > 0.0 {
            return false;
        }
        if self.require_top_landing && contact.normal.y < self.min_up_normal {
            return false;
        }
        body.vel.y = self.jump_force;
        true
    }

    /// Wrap the body to the opposite side once it leaves the view
    pub fn wrap(&self, body: &mut Body, left_x: f32, right_x: f32) {
        if !self.wrap_around {
            return;
        }
        if body.pos.x < left_x - self.wrap_padding {
            body.pos.x = right_x + self.wrap_padding;
        } else if body.pos.x > right_x + self.wrap_padding {
            body.pos.x = left_x - self.wrap_padding;
        }
    }
}
