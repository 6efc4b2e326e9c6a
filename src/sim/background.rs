//! Seamless vertical background
//!
//! Two equal tiles stacked with a small overlap. The pair rides the camera
//! (optionally with parallax) and a tile that drops fully below the view is
//! moved above its partner.

use glam::Vec2;

use super::camera::CameraFollower;
use crate::config::BackgroundConfig;

/// One background tile. `local_y` is the tile center relative to the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub local_y: f32,
}

#[derive(Debug, Clone)]
pub struct BackgroundTiler {
    parallax: f32,
    overlap: f32,
    height: f32,
    root_start_y: f32,
    start_camera_y: f32,
    root_y: f32,
    tiles: [Tile; 2],
}

impl BackgroundTiler {
    /// Place tile A at the root and tile B directly above it
    pub fn new(root_y: f32, camera_y: f32, config: &BackgroundConfig) -> Self {
        let height = config.tile_height;
        Self {
            parallax: config.parallax_factor,
            overlap: config.overlap,
            height,
            root_start_y: root_y,
            start_camera_y: camera_y,
            root_y,
            tiles: [
                Tile { local_y: 0.0 },
                Tile {
                    local_y: height - config.overlap,
                },
            ],
        }
    }

    pub fn update(&mut self, camera: &CameraFollower) {
        let camera_delta = camera.pos.y - self.start_camera_y;
        self.root_y = self.root_start_y + camera_delta * self.parallax;

        let bottom = camera.bottom();
        self.wrap_if_needed(0, 1, bottom);
        self.wrap_if_needed(1, 0, bottom);
    }

    fn wrap_if_needed(&mut self, candidate: usize, other: usize, camera_bottom: f32) {
        if self.tile_top(candidate) < camera_bottom {
            self.tiles[candidate].local_y = self.tiles[other].local_y + self.height - self.overlap;
            log::trace!("Background tile {} wrapped to y={:.2}", candidate, self.tile_center(candidate));
        }
    }

    /// World Y of a tile's center
    pub fn tile_center(&self, index: usize) -> f32 {
        self.root_y + self.tiles[index].local_y
    }

    pub fn tile_top(&self, index: usize) -> f32 {
        self.tile_center(index) + self.height / 2.0
    }

    pub fn tile_bottom(&self, index: usize) -> f32 {
        self.tile_center(index) - self.height / 2.0
    }

    pub fn root_y(&self) -> f32 {
        self.root_y
    }
}

/// Scale that stretches a sprite of `sprite_size` over the whole view.
/// `None` for an empty sprite.
pub fn fit_scale(sprite_size: Vec2, camera: &CameraFollower) -> Option<Vec2> {
    if sprite_size.x <= 0.0 || sprite_size.y <= 0.0 {
        return None;
    }
    let height = camera.half_height * 2.0;
    let width = height * camera.aspect;
    Some(Vec2::new(width / sprite_size.x, height / sprite_size.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;

    fn parallax_config(parallax_factor: f32) -> BackgroundConfig {
        BackgroundConfig {
            parallax_factor,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_stack() {
        let bg = BackgroundTiler::new(0.0, 0.0, &BackgroundConfig::default());
        // B's bottom overlaps A's top by the configured amount
        assert!((bg.tile_top(0) - bg.tile_bottom(1) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_locked_background_follows_camera() {
        let mut camera = CameraFollower::new(Vec2::ZERO, &CameraConfig::default());
        let mut bg = BackgroundTiler::new(0.0, 0.0, &BackgroundConfig::default());
        camera.pos.y = 37.0;
        bg.update(&camera);
        assert_eq!(bg.root_y(), 37.0);
        assert_eq!(bg.tile_center(0), 37.0);
    }

    #[test]
    fn test_parallax_wraps_to_cover_view() {
        let mut camera = CameraFollower::new(Vec2::ZERO, &CameraConfig::default());
        let mut bg = BackgroundTiler::new(0.0, 0.0, &parallax_config(0.25));

        for step in 0..2000 {
            camera.pos.y = step as f32 * 0.05;
            bg.update(&camera);

            // Whichever tile is lower, the stack always covers the bottom of the view
            let lowest_bottom = bg.tile_bottom(0).min(bg.tile_bottom(1));
            let highest_top = bg.tile_top(0).max(bg.tile_top(1));
            assert!(lowest_bottom <= camera.bottom() + 1e-3);
            assert!(highest_top >= camera.bottom());
        }
    }

    #[test]
    fn test_fit_scale() {
        let camera = CameraFollower::new(Vec2::ZERO, &CameraConfig::default());
        let scale = fit_scale(Vec2::new(5.625, 5.0), &camera).unwrap();
        assert!((scale.x - 1.0).abs() < 1e-5);
        assert!((scale.y - 2.0).abs() < 1e-5);
        assert!(fit_scale(Vec2::ZERO, &camera).is_none());
    }
}
