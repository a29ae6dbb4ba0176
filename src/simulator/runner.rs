//! Runs sessions headless through the same `Session` the game uses.

use super::autopilot::should_flap;
use super::config::SimConfig;
use super::report::{RunOutcome, RunStats, SimReport};
use crate::clock::ManualClock;
use crate::session::Session;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, rng);
        if config.logs_runs() {
            info!(
                "run {}/{}: score {}, {} frames, {:?}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.frames,
                stats.outcome
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one session with the autopilot until it crashes or times out.
pub fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> RunStats {
    let mut session = Session::new(config.game.clone(), Some(rng));
    let clock = ManualClock::new(0);
    session.start_session();

    let mut flaps = 0u64;
    for frame in 1..=config.max_frames_per_run {
        if should_flap(session.current_state(), session.config()) {
            session.request_impulse();
            flaps += 1;
        }
        clock.advance(config.frame_ms);

        if let Some(score) = session.tick(&clock) {
            // last_crash is always set on the frame that reports a score
            let outcome = session
                .last_crash()
                .map(RunOutcome::Crashed)
                .unwrap_or(RunOutcome::TimedOut);
            debug!("crashed at frame {} with score {}", frame, score);
            return RunStats {
                score,
                frames: frame,
                flaps,
                outcome,
            };
        }
    }

    RunStats {
        score: session.current_state().score,
        frames: config.max_frames_per_run,
        flaps,
        outcome: RunOutcome::TimedOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::simulation::CrashCause;

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig {
            verbosity: 0,
            max_frames_per_run: 1_000,
            ..SimConfig::quick(99)
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_autopilot_clears_pipes() {
        let config = SimConfig {
            verbosity: 0,
            ..SimConfig::quick(7)
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 10);
        assert!(report.max_score >= 1);
        assert!(report.avg_score > 0.0);
    }

    #[test]
    fn test_heavy_gravity_crashes_into_ground() {
        // Flaps can never outpace this, so every run ends on the ground.
        let config = SimConfig {
            verbosity: 0,
            num_runs: 3,
            game: GameConfig {
                gravity: 30.0,
                ..GameConfig::default()
            },
            ..SimConfig::quick(1)
        };
        let report = run_simulation(&config);
        assert_eq!(report.crashes_ground, 3);
        assert_eq!(report.max_score, 0);
        for run in &report.run_stats {
            assert_eq!(run.outcome, RunOutcome::Crashed(CrashCause::Ground));
        }
    }

    #[test]
    fn test_timeout_when_frames_run_out() {
        let config = SimConfig {
            verbosity: 0,
            num_runs: 1,
            max_frames_per_run: 5,
            ..SimConfig::quick(3)
        };
        let report = run_simulation(&config);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.run_stats[0].frames, 5);
    }
}
