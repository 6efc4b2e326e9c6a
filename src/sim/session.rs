//! Session wiring and restart
//!
//! Collaborators are handed in explicitly. A session refuses to start when
//! one is missing instead of failing later inside the tick.

use std::fmt;

use glam::Vec2;

use super::game_over::GameOverReport;
use super::platform_field::PlatformTemplate;
use super::player::Body;
use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::config::GameConfig;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::persistence::ScoreStore;

/// A required collaborator was not wired up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    MissingPlayer,
    MissingCamera,
    MissingPlatformTemplate,
    MissingStore,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            SetupError::MissingPlayer => "player",
            SetupError::MissingCamera => "camera",
            SetupError::MissingPlatformTemplate => "platform template",
            SetupError::MissingStore => "score store",
        };
        write!(f, "missing {} reference", what)
    }
}

impl std::error::Error for SetupError {}

/// Collects collaborators for a session
pub struct SessionBuilder {
    config: GameConfig,
    seed: u64,
    player: Option<Body>,
    camera: Option<Vec2>,
    template: Option<PlatformTemplate>,
    store: Option<Box<dyn ScoreStore>>,
}

impl SessionBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seed: 0,
            player: None,
            camera: None,
            template: None,
            store: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Player spawn point
    pub fn player(mut self, pos: Vec2) -> Self {
        self.player = Some(Body::at(pos));
        self
    }

    /// Camera start position
    pub fn camera(mut self, pos: Vec2) -> Self {
        self.camera = Some(pos);
        self
    }

    pub fn platform_template(mut self, template: PlatformTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Standard scene: player at the origin, camera offset above, template from config
    pub fn default_scene(self) -> Self {
        let camera = Vec2::new(0.0, self.config.camera.y_offset);
        let template = PlatformTemplate::new(self.config.field.platform_width);
        self.player(Vec2::ZERO).camera(camera).platform_template(template)
    }

    pub fn build(self) -> Result<Session, SetupError> {
        let result = self.validate();
        if let Err(e) = &result {
            log::error!("Session not started: {}", e);
        }
        result
    }

    fn validate(self) -> Result<Session, SetupError> {
        let player = self.player.ok_or(SetupError::MissingPlayer)?;
        let camera = self.camera.ok_or(SetupError::MissingCamera)?;
        let template = self.template.ok_or(SetupError::MissingPlatformTemplate)?;
        let store = self.store.ok_or(SetupError::MissingStore)?;

        let state = GameState::new(&self.config, self.seed, player, camera, template, &*store);
        log::info!("Session started with seed: {}", self.seed);

        Ok(Session {
            config: self.config,
            player_start: player,
            camera_start: camera,
            template,
            store,
            state,
            accumulator: 0.0,
        })
    }
}

/// A running game: state plus everything needed to rebuild it
pub struct Session {
    config: GameConfig,
    player_start: Body,
    camera_start: Vec2,
    template: PlatformTemplate,
    store: Box<dyn ScoreStore>,
    state: GameState,
    accumulator: f32,
}

impl Session {
    pub fn builder(config: GameConfig) -> SessionBuilder {
        SessionBuilder::new(config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &dyn ScoreStore {
        &*self.store
    }

    /// Advance exactly one step of `dt`
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.state, input, dt, &mut *self.store);
    }

    /// Feed a variable frame time through the fixed timestep.
    /// Returns the number of substeps run.
    pub fn advance(&mut self, frame_dt: f32, input: &TickInput) -> u32 {
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick(input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    pub fn report(&self) -> Option<GameOverReport> {
        self.state.report
    }

    /// Rebuild the whole scene from config. The best score comes back from the store.
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(
            &self.config,
            seed,
            self.player_start,
            self.camera_start,
            self.template,
            &*self.store,
        );
        self.accumulator = 0.0;
        log::info!("Restarted with seed: {}", seed);
    }
}
