//! Main menu panels and HUD text

use crate::sim::GameOverReport;

/// What the menu asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    Quit,
}

/// Main menu with optional Settings and Credits panels
#[derive(Debug, Clone, Default)]
pub struct MainMenu {
    settings_open: bool,
    credits_open: bool,
}

impl MainMenu {
    /// Both panels start closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&self) -> MenuAction {
        MenuAction::StartGame
    }

    pub fn quit(&self) -> MenuAction {
        MenuAction::Quit
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn open_credits(&mut self) {
        self.credits_open = true;
    }

    pub fn close_credits(&mut self) {
        self.credits_open = false;
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn credits_open(&self) -> bool {
        self.credits_open
    }
}

/// Running score, whole meters
pub fn score_text(score: f32) -> String {
    format!("{} m", score.floor() as i64)
}

pub fn best_text(best: f32) -> String {
    format!("Best: {} m", best.floor() as i64)
}

/// Final score and best lines for the game over panel
pub fn game_over_text(report: &GameOverReport) -> (String, String) {
    (
        format!("Score: {} m", report.score.floor() as i64),
        best_text(report.best),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_panels() {
        let mut menu = MainMenu::new();
        assert!(!menu.settings_open() && !menu.credits_open());
        menu.open_settings();
        menu.open_credits();
        assert!(menu.settings_open() && menu.credits_open());
        menu.close_settings();
        assert!(!menu.settings_open());
        menu.close_credits();
        assert!(!menu.credits_open());
        assert_eq!(menu.play(), MenuAction::StartGame);
        assert_eq!(menu.quit(), MenuAction::Quit);
    }

    #[test]
    fn test_hud_text() {
        assert_eq!(score_text(12.9), "12 m");
        assert_eq!(best_text(0.0), "Best: 0 m");
        let (score, best) = game_over_text(&GameOverReport {
            score: 7.4,
            best: 31.99,
        });
        assert_eq!(score, "Score: 7 m");
        assert_eq!(best, "Best: 31 m");
    }
}
