use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::clock::SystemClock;
use flappy::config::{load_config, load_config_from, GameConfig};
use flappy::constants::{FRAME_INTERVAL_MS, LOG_FILE_NAME};
use flappy::driver::{self, DriverConfig, InputSource};
use flappy::input::{map_key, GameInput};
use flappy::session::Session;
use flappy::ui::TerminalRenderer;
use flappy::utils::persistence::data_path;
use log::info;
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Raw mode + alternate screen for as long as it lives.
///
/// Dropping it restores the terminal, so quitting, an I/O error and a
/// panic unwind all leave the shell usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Drains crossterm's event queue without blocking.
struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_input(&mut self) -> io::Result<Option<GameInput>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                let action = map_key(key);
                if action != GameInput::Other {
                    return Ok(Some(action));
                }
            }
        }
        Ok(None)
    }
}

struct CliOptions {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        seed: None,
        config_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - a Flappy Bird clone for the terminal\n");
                println!("Usage: flappy [options]\n");
                println!("Options:");
                println!("  --seed <N>       Reproducible pipe sequence");
                println!("  --config <PATH>  World tuning JSON (default ~/.flappy/config.json)");
                println!("  --version        Show version information");
                println!("  --help           Show this help message");
                println!("\nKeys: Space/Up/Enter flap, R reset, Q/Esc quit");
                std::process::exit(0);
            }
            "--seed" => {
                let Some(seed) = args.get(i + 1).and_then(|s| s.parse().ok()) else {
                    eprintln!("--seed needs a number");
                    std::process::exit(1);
                };
                options.seed = Some(seed);
                i += 1;
            }
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--config needs a path");
                    std::process::exit(1);
                };
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

/// Log to ~/.flappy/flappy.log; stderr would draw over the game.
fn init_logging() -> io::Result<()> {
    let file = File::create(data_path(LOG_FILE_NAME)?)?;
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_game(session: &mut Session) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut renderer = TerminalRenderer::<CrosstermBackend<Stdout>>::new(CrosstermBackend::new(
        io::stdout(),
    ))?;

    let summary = driver::run(
        session,
        &SystemClock,
        &mut CrosstermInput,
        &mut renderer,
        DriverConfig {
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            max_frames: None,
        },
    )?;
    info!(
        "exiting after {} frames, {} games",
        summary.frames, summary.games_over
    );
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging()?;

    let config: GameConfig = match &options.config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let mut session = match options.seed {
        Some(seed) => Session::seeded(config, seed),
        None => Session::from_entropy(config),
    };
    session.on_game_over(|score| info!("final score {}", score));

    run_game(&mut session)?;

    if session.best_score() > 0 {
        println!("Best score this run: {}", session.best_score());
    }
    Ok(())
}
