//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod camera;
pub mod game_over;
pub mod input;
pub mod platform_field;
pub mod player;
pub mod score;
pub mod session;
pub mod state;
pub mod tick;

pub use background::{BackgroundTiler, fit_scale};
pub use camera::CameraFollower;
pub use game_over::{GameOverMonitor, GameOverReport};
pub use input::{InputMode, InputSample, LateralInput};
pub use platform_field::{
    CalibrationInputs, ColliderKind, Platform, PlatformField, PlatformTemplate, StepRange,
    ViewSpan, calibrate, horizontal_bounds, max_jump_height,
};
pub use player::{Body, Contact, JumpController};
pub use score::ScoreTracker;
pub use session::{Session, SessionBuilder, SetupError};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
