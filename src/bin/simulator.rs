//! Guardian Headless Game Balance Simulator
//!
//! Plays whole sessions with a scripted policy and no UI, collecting metrics
//! for game balance analysis. Uses the same `Session` as the real game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N          Number of runs with incrementing seeds (default: 1000)
//!   --seed N          RNG seed (default: random)
//!   --max-actions N   Session operations per run before timeout (default: 500)
//!   --no-shop         Never visit the store
//!   --verbose         One line per run
//!   --quiet           Only final summary line
//!   --json            Print the report as JSON
//!   --version         Print version and exit

use guardian::config::SessionConfig;
use guardian::simulator::{run_simulation, SimConfig};
use guardian::utils::version_line;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ── CLI Configuration ────────────────────────────────────────────────

struct CliOptions {
    sim: SimConfig,
    json: bool,
}

enum Command {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{flag} requires a number"))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut sim = SimConfig::default();
    let mut json = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                sim.num_runs = parse_number("--runs", args.get(i))?;
            }
            "--seed" => {
                i += 1;
                sim.seed = Some(parse_number("--seed", args.get(i))?);
            }
            "--max-actions" => {
                i += 1;
                sim.max_actions_per_run = parse_number("--max-actions", args.get(i))?;
            }
            "--no-shop" => sim.shopping = false,
            "--verbose" => sim.verbosity = 2,
            "--quiet" => sim.verbosity = 0,
            "--json" => json = true,
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Command::Run(CliOptions { sim, json }))
}

fn print_usage() {
    eprintln!(
        "Guardian Headless Game Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N          Number of runs with incrementing seeds (default: 1000)\n\
         \x20 --seed N          RNG seed (default: random)\n\
         \x20 --max-actions N   Session operations per run before timeout (default: 500)\n\
         \x20 --no-shop         Never visit the store\n\
         \x20 --verbose         One line per run\n\
         \x20 --quiet           Only final summary line\n\
         \x20 --json            Print the report as JSON\n\
         \x20 --version, -V     Print version and exit\n\
         \x20 --help, -h        Show this help"
    );
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guardian=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut config = options.sim;
    config.session = SessionConfig::load();

    if config.verbosity > 0 {
        eprintln!(
            "Guardian Simulator: {} run(s), seed={}, max actions={}, shopping={}, player={}",
            config.num_runs,
            config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
            config.max_actions_per_run,
            config.shopping,
            config.session.player_name,
        );
    }

    let report = run_simulation(&config);
    tracing::info!(
        runs = report.num_runs,
        victories = report.victories,
        "simulation finished"
    );

    if options.json {
        println!("{}", report.to_json());
    } else if config.verbosity == 0 {
        println!("{}", report.summary_line());
    } else {
        report.print_summary();
    }

    Ok(())
}
