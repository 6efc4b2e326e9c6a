//! Height-based score and persisted best

use crate::config::ScoreConfig;
use crate::consts::BEST_SCORE_KEY;
use crate::persistence::ScoreStore;

#[derive(Debug, Clone)]
pub struct ScoreTracker {
    use_start_offset: bool,
    start_y: f32,
    current: f32,
    best: f32,
}

impl ScoreTracker {
    /// Start tracking from `start_y`, reading the best score from `store`
    pub fn new(start_y: f32, config: &ScoreConfig, store: &dyn ScoreStore) -> Self {
        let best = store.get(BEST_SCORE_KEY).unwrap_or(0.0) as f32;
        log::debug!("Best score on record: {:.1}", best);
        Self {
            use_start_offset: config.use_start_offset,
            start_y,
            current: 0.0,
            best,
        }
    }

    /// Recompute the score from the player's height. Returns true on a new best.
    pub fn update(&mut self, player_y: f32, store: &mut dyn ScoreStore) -> bool {
        self.current = if self.use_start_offset {
            (player_y - self.start_y).max(0.0)
        } else {
            player_y
        };

        if self.current > self.best {
            self.best = self.current;
            store.set(BEST_SCORE_KEY, self.best as f64);
            return true;
        }
        false
    }

    /// Measure from a new starting height
    pub fn reset_start(&mut self, start_y: f32) {
        self.start_y = start_y;
        self.current = 0.0;
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn best(&self) -> f32 {
        self.best
    }
}
