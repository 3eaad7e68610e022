//! Simulation configuration.

use crate::config::SessionConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Session operations per run before giving up
    pub max_actions_per_run: u32,

    /// Whether the policy visits the store
    pub shopping: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Settings for each simulated session
    pub session: SessionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_actions_per_run: 500,
            shopping: true,
            verbosity: 1,
            session: SessionConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small seeded config for tests and quick balance checks.
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Same as [`SimConfig::quick`] but the player never shops.
    pub fn no_shop(num_runs: u32, seed: u64) -> Self {
        Self {
            shopping: false,
            ..Self::quick(num_runs, seed)
        }
    }
}
