//! Sky Hop - A vertical endless-jumper simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform field, player, camera, scoring)
//! - `persistence`: Best-score storage behind an injected interface
//! - `config`: Data-driven tuning, loaded once at startup
//! - `ui`: Menu panel state and HUD text

pub mod config;
pub mod persistence;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Standard gravity used when the configured value is degenerate
    pub const FALLBACK_GRAVITY: f32 = 9.81;
    /// Gravity magnitudes below this are treated as misconfiguration
    pub const GRAVITY_EPSILON: f32 = 0.0001;
    /// Minimum separation between the calibrated step bounds
    pub const STEP_EPSILON: f32 = 0.1;

    /// Start platform sits this far below the player's spawn point
    pub const START_PLATFORM_MARGIN: f32 = 1.5;

    /// Persisted best-score key
    pub const BEST_SCORE_KEY: &str = "BEST_SCORE";
}

/// Frame-rate independent blend factor for exponential smoothing
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothing_factor_range() {
        assert_eq!(smoothing_factor(8.0, 0.0), 0.0);
        let t = smoothing_factor(8.0, consts::SIM_DT);
        assert!(t > 0.0 && t < 1.0);
        // Large steps converge to (but never exceed) 1
        assert!(smoothing_factor(8.0, 100.0) <= 1.0);
    }

    #[test]
    fn test_smoothing_is_frame_rate_independent() {
        // Two half steps land on the same value as one full step
        let rate = 12.0;
        let dt = 0.1;
        let full = lerp(0.0, 1.0, smoothing_factor(rate, dt));
        let half = smoothing_factor(rate, dt / 2.0);
        let first = lerp(0.0, 1.0, half);
        let second = lerp(first, 1.0, half);
        assert!((full - second).abs() < 1e-5);
    }
}
