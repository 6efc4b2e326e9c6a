//! Game state and core simulation types
//!
//! Everything one session owns lives here. A restart builds a fresh state.

use glam::Vec2;

use super::background::BackgroundTiler;
use super::camera::CameraFollower;
use super::game_over::{GameOverMonitor, GameOverReport};
use super::input::LateralInput;
use super::platform_field::{CalibrationInputs, PlatformField, PlatformTemplate, calibrate};
use super::player::{Body, JumpController};
use super::score::ScoreTracker;
use crate::config::GameConfig;
use crate::persistence::ScoreStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, simulation frozen
    GameOver,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gravity magnitude applied to the player
    pub gravity: f32,
    pub player: Body,
    pub jump: JumpController,
    pub input: LateralInput,
    pub camera: CameraFollower,
    pub background: BackgroundTiler,
    pub field: PlatformField,
    pub score: ScoreTracker,
    pub monitor: GameOverMonitor,
    /// Set once the run ends
    pub report: Option<GameOverReport>,
}

impl GameState {
    /// Wire up a session: calibrate, lay the start platform, pre-populate the corridor
    pub fn new(
        config: &GameConfig,
        seed: u64,
        player: Body,
        camera_pos: Vec2,
        template: PlatformTemplate,
        store: &dyn ScoreStore,
    ) -> Self {
        let jump = JumpController::new(&config.player);
        let camera = CameraFollower::new(camera_pos, &config.camera);

        let inputs =
            CalibrationInputs::from_config(&config.field, config.player.gravity, jump.jump_force());
        let steps = calibrate(&inputs);

        let mut field = PlatformField::new(steps, template, &config.field, seed);
        field.initialize(player.pos, camera.view_span());

        Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            gravity: config.player.gravity,
            player,
            jump,
            input: LateralInput::new(&config.player, config.camera.screen_width),
            background: BackgroundTiler::new(camera_pos.y, camera_pos.y, &config.background),
            camera,
            field,
            score: ScoreTracker::new(player.pos.y, &config.score, store),
            monitor: GameOverMonitor::new(&config.game_over),
            report: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
