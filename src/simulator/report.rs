//! Aggregated results of a simulation batch.

use crate::simulation::CrashCause;
use crate::utils::persistence::write_json;
use serde::Serialize;
use std::io;
use std::path::Path;

/// How a single run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Crashed(CrashCause),
    TimedOut,
}

/// Stats for one headless session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    pub flaps: u64,
    pub outcome: RunOutcome,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub min_score: u32,
    pub avg_frames: f64,
    pub avg_flaps_per_pipe: f64,

    // Crash breakdown
    pub crashes_ground: u32,
    pub crashes_ceiling: u32,
    pub crashes_pipe: u32,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));

        let count = |outcome: RunOutcome| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };

        let total_score: u64 = runs.iter().map(|r| u64::from(r.score)).sum();
        let total_flaps: u64 = runs.iter().map(|r| r.flaps).sum();

        Self {
            num_runs,
            runs_timed_out: count(RunOutcome::TimedOut),
            avg_score: total_score as f64 / divisor,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            avg_frames: runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor,
            avg_flaps_per_pipe: total_flaps as f64 / total_score.max(1) as f64,
            crashes_ground: count(RunOutcome::Crashed(CrashCause::Ground)),
            crashes_ceiling: count(RunOutcome::Crashed(CrashCause::Ceiling)),
            crashes_pipe: count(RunOutcome::Crashed(CrashCause::Pipe)),
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs,
            self.num_runs - self.runs_timed_out,
            self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!(
            "  Best / Worst:        {} / {}\n",
            self.max_score, self.min_score
        ));
        report.push_str(&format!("  Avg Frames Survived: {:.0}\n", self.avg_frames));
        report.push_str(&format!("  Flaps per Pipe:      {:.1}\n\n", self.avg_flaps_per_pipe));

        report.push_str("── CRASHES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Ground:              {}\n", self.crashes_ground));
        report.push_str(&format!("  Ceiling:             {}\n", self.crashes_ceiling));
        report.push_str(&format!("  Pipe:                {}\n", self.crashes_pipe));

        report
    }

    /// Write the report, per-run stats included, as pretty JSON.
    pub fn save_json(&self, path: &Path) -> io::Result<()> {
        write_json(path, self)
    }
}
