//! Headless balance simulator.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                  # 100 runs, random seeds
//!   cargo run --bin simulate -- -n 500 --seed 42
//!   cargo run --bin simulate -- --config tuned.json --json

use flappy::config::load_config_from;
use flappy::simulator::{run_simulation, SimConfig};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (mut config, config_path, write_json) = parse_args(&args);

    env_logger::builder()
        .filter_level(if config.logs_runs() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Some(path) = config_path {
        config.game = load_config_from(&path)?;
    }

    if config.prints_report() {
        print_banner(&config);
    }

    let report = run_simulation(&config);
    if config.prints_report() {
        println!("{}", report.to_text());
    }

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        report.save_json(Path::new(&filename))?;
        if config.prints_report() {
            println!("JSON report saved to: {}", filename);
        }
    }

    Ok(())
}

fn print_banner(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  FLAPPY BALANCE SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Frame:          {} ms", config.frame_ms);
    println!("  Max Frames:     {}", config.max_frames_per_run);
    println!(
        "  Gravity/Jump:   {} / {}",
        config.game.gravity, config.game.jump_force
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
}

fn parse_args(args: &[String]) -> (SimConfig, Option<PathBuf>, bool) {
    let mut config = SimConfig::default();
    let mut config_path = None;
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = value {
                    config.num_runs = parse_or_exit(args[i].as_str(), v);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = value {
                    config.seed = Some(parse_or_exit(args[i].as_str(), v));
                    i += 1;
                }
            }
            "-f" | "--frames" => {
                if let Some(v) = value {
                    config.max_frames_per_run = parse_or_exit(args[i].as_str(), v);
                    i += 1;
                }
            }
            "--frame-ms" => {
                if let Some(v) = value {
                    config.frame_ms = parse_or_exit(args[i].as_str(), v);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if let Some(v) = value {
                    config_path = Some(PathBuf::from(v));
                    i += 1;
                }
            }
            "--json" => write_json = true,
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'simulate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, config_path, write_json)
}

fn parse_or_exit<T: std::str::FromStr>(flag: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {}: {}", flag, value);
        std::process::exit(1);
    })
}

fn print_help() {
    println!("Flappy balance simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>       Number of runs (default 100)");
    println!("  -s, --seed <N>       Base seed; run i uses seed + i");
    println!("  -f, --frames <N>     Frames per run before timing out (default 36000)");
    println!("      --frame-ms <MS>  Simulated frame length (default 16)");
    println!("  -c, --config <PATH>  World tuning JSON file");
    println!("      --json           Also write the report as JSON");
    println!("  -v, --verbose        Log every run");
    println!("  -q, --quiet          Print nothing; pair with --json");
    println!("  -h, --help           Show this help message");
}
