//! One atomic frame transition.

use super::collision::crash_cause;
use super::obstacles::advance_obstacles;
use super::physics::integrate;
use super::types::{GameOverInfo, GameState, Phase, StepInput, StepOutcome};
use crate::config::GameConfig;
use rand::Rng;

/// Derive the next state from `state`.
///
/// Only runs while playing; otherwise the state comes back unchanged. On a
/// collision the phase flips to `GameOver` and everything else keeps its
/// pre-step value, so a crashing frame never credits score.
pub fn step<R: Rng + ?Sized>(
    state: &GameState,
    input: StepInput,
    config: &GameConfig,
    rng: Option<&mut R>,
) -> StepOutcome {
    if !state.is_playing() {
        return StepOutcome {
            state: state.clone(),
            game_over: None,
        };
    }

    let (bird_y, bird_velocity) =
        integrate(state.bird_y, state.bird_velocity, input.impulse, config);

    let update = advance_obstacles(
        &state.pipes,
        input.now_ms,
        state.last_spawn_ms,
        config,
        rng,
    );

    if let Some(cause) = crash_cause(bird_y, &update.pipes, config) {
        return StepOutcome {
            state: GameState {
                phase: Phase::GameOver,
                ..state.clone()
            },
            game_over: Some(GameOverInfo {
                final_score: state.score,
                cause,
            }),
        };
    }

    StepOutcome {
        state: GameState {
            phase: Phase::Playing,
            score: state.score + update.newly_passed,
            bird_y,
            bird_velocity,
            pipes: update.pipes,
            last_spawn_ms: update.last_spawn_ms,
        },
        game_over: None,
    }
}
