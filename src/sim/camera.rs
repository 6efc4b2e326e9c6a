//! Upward-only camera follow
//!
//! The camera tracks its target only when the target climbs above the locked
//! height, so it never moves down.

use glam::Vec2;

use super::platform_field::ViewSpan;
use crate::config::CameraConfig;
use crate::{lerp, smoothing_factor};

#[derive(Debug, Clone)]
pub struct CameraFollower {
    pub pos: Vec2,
    /// Orthographic half-height
    pub half_height: f32,
    /// Width / height
    pub aspect: f32,
    y_offset: f32,
    smooth_speed: f32,
    min_y: f32,
    /// Locked height (never decreases)
    highest_y: f32,
}

impl CameraFollower {
    pub fn new(pos: Vec2, config: &CameraConfig) -> Self {
        Self {
            pos,
            half_height: config.half_height,
            aspect: config.aspect,
            y_offset: config.y_offset,
            smooth_speed: config.smooth_speed,
            min_y: config.min_y,
            highest_y: pos.y,
        }
    }

    /// Raise the lock toward the target and ease the camera toward it
    pub fn update(&mut self, target_y: f32, dt: f32) {
        let desired = target_y + self.y_offset;
        if desired > self.highest_y {
            self.highest_y = desired;
        }

        let goal = self.highest_y.max(self.min_y);
        let t = smoothing_factor(self.smooth_speed, dt);
        // Goal never drops below the current Y, so neither does the camera
        self.pos.y = lerp(self.pos.y, goal, t).max(self.pos.y);
    }

    /// Re-lock at the current height (restart without rebuilding the scene)
    pub fn reset_lock(&mut self) {
        self.highest_y = self.pos.y;
    }

    pub fn locked_y(&self) -> f32 {
        self.highest_y
    }

    /// Orthographic half-width
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_height * self.aspect
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.half_width()
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.half_width()
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.half_height
    }

    pub fn view_span(&self) -> ViewSpan {
        ViewSpan {
            center_x: self.pos.x,
            half_width: self.half_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraFollower {
        CameraFollower::new(Vec2::ZERO, &CameraConfig::default())
    }

    #[test]
    fn test_follows_upward() {
        let mut cam = camera();
        for _ in 0..300 {
            cam.update(10.0, 1.0 / 60.0);
        }
        assert!((cam.pos.y - 11.0).abs() < 1e-2);
        assert_eq!(cam.locked_y(), 11.0);
    }

    #[test]
    fn test_never_moves_down() {
        let mut cam = camera();
        let mut last = cam.pos.y;
        let targets = [5.0, 2.0, 8.0, -20.0, 3.0, 12.0, 0.0];
        for &target in &targets {
            for _ in 0..20 {
                cam.update(target, 1.0 / 60.0);
                assert!(cam.pos.y >= last);
                last = cam.pos.y;
            }
        }
        assert_eq!(cam.locked_y(), 13.0);
    }

    #[test]
    fn test_min_y_floor() {
        let mut cam = CameraFollower::new(
            Vec2::new(0.0, -10.0),
            &CameraConfig {
                min_y: -2.0,
                ..Default::default()
            },
        );
        for _ in 0..300 {
            cam.update(-10.0, 1.0 / 60.0);
        }
        assert!((cam.pos.y + 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_reset_lock() {
        let mut cam = camera();
        cam.update(50.0, 1.0 / 60.0);
        assert_eq!(cam.locked_y(), 51.0);
        cam.reset_lock();
        assert_eq!(cam.locked_y(), cam.pos.y);
    }

    #[test]
    fn test_view_extents() {
        let cam = camera();
        let half_width = 5.0 * 9.0 / 16.0;
        assert!((cam.half_width() - half_width).abs() < 1e-6);
        assert!((cam.left() + half_width).abs() < 1e-6);
        assert!((cam.right() - half_width).abs() < 1e-6);
        assert_eq!(cam.bottom(), -5.0);
        assert_eq!(cam.view_span().center_x, 0.0);
    }
}
