//! Per-frame simulation step
//!
//! Order: input → lateral velocity → integrate → contacts → wrap → platform
//! field → camera → background → score → game over.

use glam::Vec2;

use super::game_over::GameOverReport;
use super::input::{InputMode, InputSample};
use super::platform_field::ColliderKind;
use super::player::Contact;
use super::state::{GamePhase, GameState};
use crate::persistence::ScoreStore;

/// Half width of the player's feet when testing platform overlap
pub const PLAYER_HALF_WIDTH: f32 = 0.3;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw device readings
    pub sample: InputSample,
    /// Switch input device before reading
    pub set_mode: Option<InputMode>,
    /// Autopilot mode - steer toward the next landing spot
    pub autopilot: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, store: &mut dyn ScoreStore) {
    // Frozen once the run is over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if let Some(mode) = input.set_mode {
        state.input.set_mode(mode);
    }

    let mut sample = input.sample;
    if input.autopilot {
        if state.input.mode() != InputMode::Tilt {
            state.input.set_mode(InputMode::Tilt);
        }
        sample = InputSample {
            pointer: None,
            tilt_x: autopilot_tilt(state),
        };
    }
    state.input.update(&sample, dt);
    state.input.apply(&mut state.player);

    let prev_y = state.player.pos.y;
    state.player.integrate(state.gravity, dt);

    if let Some((contact_y, other)) = landing_contact(state, prev_y) {
        let contact = Contact {
            other,
            normal: Vec2::Y,
        };
        if state.jump.on_collision(&mut state.player, &contact) {
            state.player.pos.y = contact_y;
            log::trace!("Jump from y={:.2}", contact_y);
        }
    }

    let (left, right) = (state.camera.left(), state.camera.right());
    state.jump.wrap(&mut state.player, left, right);

    let view = state.camera.view_span();
    state
        .field
        .update(state.player.pos.y, state.camera.pos.y, view);

    state.camera.update(state.player.pos.y, dt);
    state.background.update(&state.camera);

    if state.score.update(state.player.pos.y, store) {
        log::trace!("New best: {:.1}", state.score.best());
    }

    if state.monitor.check(state.player.pos.y, state.camera.pos.y) {
        let report = GameOverReport {
            score: state.score.current(),
            best: state.score.best(),
        };
        log::info!(
            "Game over after {} ticks: score {:.1}, best {:.1}",
            state.time_ticks,
            report.score,
            report.best
        );
        state.report = Some(report);
        state.phase = GamePhase::GameOver;
    }
}

/// Top and category of the highest platform the player's feet crossed downward this tick
fn landing_contact(state: &GameState, prev_y: f32) -> Option<(f32, ColliderKind)> {
    let body = &state.player;
    if body.vel.y > 0.0 {
        return None;
    }
    state
        .field
        .live()
        .filter(|p| prev_y >= p.pos.y && body.pos.y <= p.pos.y)
        .filter(|p| p.spans_x(body.pos.x, PLAYER_HALF_WIDTH))
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| (p.pos.y, p.kind()))
}

/// Tilt that steers toward the highest platform still reachable on this arc
fn autopilot_tilt(state: &GameState) -> f32 {
    let body = &state.player;
    let g = state.gravity.abs().max(f32::EPSILON);
    let apex = if body.vel.y > 0.0 {
        body.pos.y + body.vel.y * body.vel.y / (2.0 * g)
    } else {
        body.pos.y
    };

    let target = state
        .field
        .live()
        .filter(|p| p.pos.y <= apex)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(p) => ((p.pos.x - body.pos.x) * 2.0).clamp(-1.0, 1.0),
        None => 0.0,
    }
}
