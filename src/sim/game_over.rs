//! Fall detection

use crate::config::GameOverConfig;

/// Final numbers shown when a run ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOverReport {
    pub score: f32,
    pub best: f32,
}

/// Ends the run once the player drops too far below the camera
#[derive(Debug, Clone)]
pub struct GameOverMonitor {
    fall_limit: f32,
    triggered: bool,
}

impl GameOverMonitor {
    pub fn new(config: &GameOverConfig) -> Self {
        Self {
            fall_limit: config.fall_limit,
            triggered: false,
        }
    }

    /// Returns true exactly once, on the tick the player falls out of view
    pub fn check(&mut self, player_y: f32, camera_y: f32) -> bool {
        if self.triggered {
            return false;
        }
        if player_y < camera_y - self.fall_limit {
            self.triggered = true;
            return true;
        }
        false
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_once() {
        let mut monitor = GameOverMonitor::new(&GameOverConfig::default());
        assert!(!monitor.check(0.0, 5.0));
        assert!(!monitor.check(-3.0, 5.0)); // exactly at the limit
        assert!(monitor.check(-3.1, 5.0));
        assert!(monitor.is_triggered());
        assert!(!monitor.check(-100.0, 5.0));
    }
}
