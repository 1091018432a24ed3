use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_grid::config::GameConfig;
use snake_grid::error::ConfigError;
use snake_grid::input::poll_action;
use snake_grid::renderer;
use snake_grid::session::{GameAction, Session};
use snake_grid::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Longest wait for input between two frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a fixed grid, in the terminal")]
struct Cli {
    /// Config file to read instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Simulation speed.
    #[arg(long = "ticks-per-second")]
    ticks_per_second: Option<u32>,

    /// Score awarded per food.
    #[arg(long = "points-per-food")]
    points_per_food: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file. `RUST_LOG` sets the filter.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlays command-line values on the file config and validates the result.
    fn resolve_config(&self, base: GameConfig) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            ticks_per_second: self.ticks_per_second.unwrap_or(base.ticks_per_second),
            points_per_food: self.points_per_food.unwrap_or(base.points_per_food),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load_from_path(path),
        None => GameConfig::load(),
    }
    .and_then(|base| cli.resolve_config(base))
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let session = match cli.seed {
        Some(seed) => Session::with_seed(&config, seed),
        None => Session::new(&config),
    }
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    info!(?config, seed = cli.seed, "starting");
    install_panic_hook();

    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, session, config.tick_interval())
}

fn run(
    terminal: &mut TerminalSession,
    mut session: Session,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, session.state()))?;

        let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(action) = poll_action(until_tick.min(FRAME_INTERVAL))? {
            session.apply_input(action);
            if action == GameAction::Quit {
                break;
            }
        }

        if last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();
        }
    }

    info!(score = session.state().score, "exiting");
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use snake_grid::config::GameConfig;
    use snake_grid::error::ConfigError;

    use super::Cli;

    #[test]
    fn command_line_overrides_file_values() {
        let cli = Cli::parse_from(["snake-grid", "--width", "30", "--points-per-food", "5"]);
        let base = GameConfig {
            height: 12,
            ..GameConfig::default()
        };

        let config = cli.resolve_config(base).expect("merged config is valid");

        assert_eq!(config.width, 30);
        assert_eq!(config.height, 12);
        assert_eq!(config.points_per_food, 5);
        assert_eq!(config.ticks_per_second, 5);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from(["snake-grid", "--width", "4"]);

        assert!(matches!(
            cli.resolve_config(GameConfig::default()),
            Err(ConfigError::GridTooNarrow { width: 4, .. })
        ));
    }

    #[test]
    fn oversized_override_is_rejected() {
        let cli = Cli::parse_from(["snake-grid", "--width", "65535", "--height", "65535"]);

        assert!(matches!(
            cli.resolve_config(GameConfig::default()),
            Err(ConfigError::GridTooWide { width: 65535, .. })
        ));
    }
}
