//! Simulation report generation.

use super::stats::{RunOutcome, RunStats};
use crate::audio::Cue;
use crate::leaderboard::{rank_for, HALL_OF_FAME};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub timeouts: u32,

    // Aggregated stats
    pub avg_actions: f64,
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_final_power: f64,
    pub avg_monsters_defeated: f64,
    pub avg_purchases: f64,
    pub avg_damage_taken: f64,
    pub hit_rate: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub cue_totals: BTreeMap<&'static str, usize>,

    /// Index into `run_stats` of the highest level/xp run.
    pub best_run: Option<usize>,
    /// Where the best run would land on the hall of fame (1-based).
    pub best_rank: Option<usize>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count =
            |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let victories = count(RunOutcome::Victory);
        let defeats = count(RunOutcome::GameOver);
        let timeouts = count(RunOutcome::TimedOut);

        let (hits, swings) = runs.iter().fold((0u64, 0u64), |(h, s), r| {
            (h + r.hits as u64, s + (r.hits + r.misses) as u64)
        });
        let hit_rate = if swings == 0 {
            0.0
        } else {
            hits as f64 / swings as f64
        };

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_player.level).or_insert(0) += 1;
        }

        let mut cue_totals = BTreeMap::new();
        for cue in Cue::all() {
            let total: usize = runs.iter().map(|r| r.cue_count(cue)).sum();
            cue_totals.insert(cue.name(), total);
        }

        let best_run = runs
            .iter()
            .enumerate()
            .max_by_key(|(_, r)| (r.final_player.level, r.final_player.xp))
            .map(|(i, _)| i);
        let best_rank = best_run.map(|i| rank_for(&runs[i].final_player));

        Self {
            num_runs,
            victories,
            defeats,
            timeouts,
            avg_actions: average(&runs, |r| r.actions as f64),
            avg_final_level: average(&runs, |r| r.final_player.level as f64),
            avg_final_gold: average(&runs, |r| r.final_player.gold as f64),
            avg_final_power: average(&runs, |r| r.final_player.power as f64),
            avg_monsters_defeated: average(&runs, |r| r.monsters_defeated as f64),
            avg_purchases: average(&runs, |r| r.purchases as f64),
            avg_damage_taken: average(&runs, |r| r.damage_taken as f64),
            hit_rate,
            level_distribution,
            cue_totals,
            best_run,
            best_rank,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            self.victories as f64 / self.num_runs as f64
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} victories, {} defeats, {} timed out\n\n",
            self.num_runs, self.victories, self.defeats, self.timeouts
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Actions:         {:.1}\n", self.avg_actions));
        report.push_str(&format!("  Avg Final Level:     {:.2}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Final Power:     {:.1}\n", self.avg_final_power));
        report.push_str(&format!("  Avg Final Gold:      {:.1}\n", self.avg_final_gold));
        report.push_str(&format!(
            "  Avg Monsters Beaten: {:.2}\n\n",
            self.avg_monsters_defeated
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Hit Rate:            {:.1}%\n", self.hit_rate * 100.0));
        report.push_str(&format!("  Avg Damage Taken:    {:.1}\n", self.avg_damage_taken));
        report.push_str(&format!("  Avg Purchases:       {:.2}\n\n", self.avg_purchases));

        report.push_str("── FINAL LEVEL ──────────────────────────────────────────────────\n");
        for (level, runs) in &self.level_distribution {
            let pct = (*runs as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── CUES ─────────────────────────────────────────────────────────\n");
        for (name, total) in &self.cue_totals {
            report.push_str(&format!("  {:<14} {}\n", name, total));
        }
        report.push('\n');

        report.push_str("── HALL OF FAME ─────────────────────────────────────────────────\n");
        if let (Some(i), Some(rank)) = (self.best_run, self.best_rank) {
            let best = &self.run_stats[i].final_player;
            report.push_str(&format!(
                "  Best run: Level {}, {} XP, {} Gold\n",
                best.level, best.xp, best.gold
            ));
            if rank <= HALL_OF_FAME.len() {
                report.push_str(&format!("  Would place #{} on the leaderboard\n", rank));
            } else {
                report.push_str("  Would not make the leaderboard\n");
            }
        }

        report.push_str("\n── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let win_rate = self.win_rate() * 100.0;
        let rating = if win_rate > 90.0 {
            "TOO EASY - Almost every run clears the roster"
        } else if win_rate > 40.0 {
            "GOOD - Challenging but fair"
        } else if win_rate > 10.0 {
            "HARD - Most runs fall before the end"
        } else {
            "TOO HARD - Victories are rare"
        };
        report.push_str(&format!("  Win Rate:        {:.1}%\n", win_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));
        if self.timeouts > 0 {
            report.push_str(&format!(
                "  ⚠️  {} runs hit the action cap - raise --max-actions?\n",
                self.timeouts
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// One line for `--quiet`.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} wins={} losses={} timeouts={} win_rate={:.1}% avg_level={:.2} avg_gold={:.1}",
            self.num_runs,
            self.victories,
            self.defeats,
            self.timeouts,
            self.win_rate() * 100.0,
            self.avg_final_level,
            self.avg_final_gold
        )
    }

    pub fn print_summary(&self) {
        print!("{}", self.to_text());
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
