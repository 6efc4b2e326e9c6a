//! Platform field: the corridor of jump targets above the player
//!
//! Vertical spacing is calibrated once from the jump arc so every gap is
//! reachable. Platforms are spawned ahead of the player and swept once they
//! fall far enough below the camera.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::FieldConfig;
use crate::consts::{FALLBACK_GRAVITY, GRAVITY_EPSILON, STEP_EPSILON};

/// Collision category carried by colliders and contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    Player,
    Platform,
}

/// A spawned platform. Carries no behavior, only position and category.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: u32,
    /// Center of the top surface
    pub pos: Vec2,
    pub half_width: f32,
    /// Cleared when something outside the field removes the platform
    pub alive: bool,
}

impl Platform {
    #[inline]
    pub fn kind(&self) -> ColliderKind {
        ColliderKind::Platform
    }

    /// Whether `x` lies over the platform (inclusive of `margin`)
    #[inline]
    pub fn spans_x(&self, x: f32, margin: f32) -> bool {
        (x - self.pos.x).abs() <= self.half_width + margin
    }
}

/// Prefab for new platforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformTemplate {
    pub width: f32,
}

impl PlatformTemplate {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    /// Build a live platform at `pos`
    pub fn instantiate(&self, id: u32, pos: Vec2) -> Platform {
        Platform {
            id,
            pos,
            half_width: self.width / 2.0,
            alive: true,
        }
    }
}

/// Horizontal extent of the camera view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpan {
    pub center_x: f32,
    pub half_width: f32,
}

/// Physics inputs to spacing calibration
#[derive(Debug, Clone, Copy)]
pub struct CalibrationInputs {
    /// Gravity magnitude (sign is ignored)
    pub gravity: f32,
    /// Initial jump velocity (sign is ignored)
    pub jump_velocity: f32,
    pub min_factor: f32,
    pub max_factor: f32,
    pub min_clamp: f32,
    pub max_clamp: f32,
}

impl CalibrationInputs {
    pub fn from_config(config: &FieldConfig, gravity: f32, jump_velocity: f32) -> Self {
        Self {
            gravity,
            jump_velocity,
            min_factor: config.min_jump_factor,
            max_factor: config.max_jump_factor,
            min_clamp: config.min_step_clamp,
            max_clamp: config.max_step_clamp,
        }
    }
}

/// Calibrated vertical step band. `min > 0` and `max >= min + STEP_EPSILON`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange {
    pub min: f32,
    pub max: f32,
}

/// Peak height of a jump launched at `jump_velocity` (h = v² / 2g)
#[inline]
pub fn max_jump_height(gravity: f32, jump_velocity: f32) -> f32 {
    jump_velocity * jump_velocity / (2.0 * gravity)
}

/// Derive the step band from jump physics.
///
/// The lower bound is clamped into `[min_clamp, max_clamp]`; the upper bound is
/// capped at `max_clamp` and then raised to at least `min + STEP_EPSILON`, so
/// the separation wins when the two collide.
pub fn calibrate(inputs: &CalibrationInputs) -> StepRange {
    let mut g = inputs.gravity.abs();
    if g.is_nan() || g < GRAVITY_EPSILON {
        log::warn!(
            "Degenerate gravity {}, falling back to {}",
            inputs.gravity,
            FALLBACK_GRAVITY
        );
        g = FALLBACK_GRAVITY;
    }

    let v0 = inputs.jump_velocity.abs();
    let height = max_jump_height(g, v0);

    // f32::max/min ignore NaN, so a NaN height lands on the clamps
    let min = (height * inputs.min_factor)
        .max(inputs.min_clamp)
        .min(inputs.max_clamp)
        .max(STEP_EPSILON);
    let max = (height * inputs.max_factor)
        .min(inputs.max_clamp)
        .max(min + STEP_EPSILON);

    log::info!(
        "Calibrated Y steps: {:.2} .. {:.2} (max jump height ~ {:.2})",
        min,
        max,
        height
    );

    StepRange { min, max }
}

/// Horizontal spawn bounds inside the view, falling back to the full width
/// when padding would invert them. The sign of `half_width` is ignored.
pub fn horizontal_bounds(view: ViewSpan, padding: f32) -> (f32, f32) {
    let half_width = view.half_width.abs();
    let min_x = view.center_x - half_width + padding;
    let max_x = view.center_x + half_width - padding;
    if min_x > max_x {
        (view.center_x - half_width, view.center_x + half_width)
    } else {
        (min_x, max_x)
    }
}

/// Owns every spawned platform for one session
#[derive(Debug, Clone)]
pub struct PlatformField {
    steps: StepRange,
    template: PlatformTemplate,
    spawn_ahead: f32,
    despawn_below: f32,
    x_padding: f32,
    initial_platforms: u32,
    start_margin: f32,
    /// Top of the spawned corridor (never decreases)
    highest_y: f32,
    platforms: Vec<Platform>,
    rng: Pcg32,
    next_id: u32,
}

impl PlatformField {
    /// Create an empty field with the corridor top at Y = 0
    pub fn new(steps: StepRange, template: PlatformTemplate, config: &FieldConfig, seed: u64) -> Self {
        Self {
            steps,
            template,
            spawn_ahead: config.spawn_ahead,
            despawn_below: config.despawn_below,
            x_padding: config.x_padding,
            initial_platforms: config.initial_platforms,
            start_margin: config.start_margin,
            highest_y: 0.0,
            platforms: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Lay the start platform under the player and pre-populate the corridor
    pub fn initialize(&mut self, player_start: Vec2, view: ViewSpan) {
        self.platforms.clear();

        let start_y = player_start.y - self.start_margin;
        self.spawn_at(Vec2::new(player_start.x, start_y));
        self.highest_y = start_y;

        for _ in 0..self.initial_platforms {
            self.spawn_next(view);
        }

        log::debug!(
            "Platform field initialized: {} platforms up to y={:.2}",
            self.platforms.len(),
            self.highest_y
        );
    }

    /// Spawn one platform a random step above the corridor top
    pub fn spawn_next(&mut self, view: ViewSpan) -> Vec2 {
        let step = self.rng.random_range(self.steps.min..=self.steps.max);
        let y = self.highest_y + step;

        let (min_x, max_x) = horizontal_bounds(view, self.x_padding);
        let x = self.rng.random_range(min_x..=max_x);

        let pos = Vec2::new(x, y);
        self.spawn_at(pos);
        self.highest_y = y;
        pos
    }

    fn spawn_at(&mut self, pos: Vec2) {
        let id = self.next_id;
        self.next_id += 1;
        log::trace!("Spawn platform {} at ({:.2}, {:.2})", id, pos.x, pos.y);
        self.platforms.push(self.template.instantiate(id, pos));
    }

    /// Spawn until the corridor reaches `player_y + spawn_ahead`.
    /// Returns the number of platforms spawned.
    pub fn maintain_window(&mut self, player_y: f32, spawn_ahead: f32, view: ViewSpan) -> u32 {
        let target = player_y + spawn_ahead;
        let mut spawned = 0;
        while self.highest_y < target {
            let before = self.highest_y;
            self.spawn_next(view);
            spawned += 1;
            // At huge Y the step is absorbed by f32 precision
            if self.highest_y <= before {
                log::warn!(
                    "Spawn corridor stalled at y={:.2} (target {:.2})",
                    self.highest_y,
                    target
                );
                break;
            }
        }
        spawned
    }

    /// Drop platforms below `camera_y - despawn_below` and any that were
    /// removed externally. Returns the number dropped.
    pub fn sweep(&mut self, camera_y: f32, despawn_below: f32) -> usize {
        let threshold = camera_y - despawn_below;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.alive && p.pos.y >= threshold);
        let removed = before - self.platforms.len();
        if removed > 0 {
            log::trace!("Swept {} platforms below y={:.2}", removed, threshold);
        }
        removed
    }

    /// Per-tick maintenance with the configured distances
    pub fn update(&mut self, player_y: f32, camera_y: f32, view: ViewSpan) {
        self.maintain_window(player_y, self.spawn_ahead, view);
        self.sweep(camera_y, self.despawn_below);
    }

    /// Mark a platform as removed by another subsystem
    pub fn invalidate(&mut self, id: u32) -> bool {
        match self.platforms.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.alive = false;
                true
            }
            None => false,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Platforms still present in the world
    pub fn live(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.alive)
    }

    pub fn highest_y(&self) -> f32 {
        self.highest_y
    }

    pub fn steps(&self) -> StepRange {
        self.steps
    }

    pub fn spawn_ahead(&self) -> f32 {
        self.spawn_ahead
    }

    pub fn despawn_below(&self) -> f32 {
        self.despawn_below
    }
}
