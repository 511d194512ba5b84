use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::ui::App;

/// Play Connect Four in the terminal with any number of players.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// File that receives log output while the game is on screen
    #[arg(long, default_value = "connect_four.log")]
    log_file: PathBuf,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override number of players
    #[arg(long)]
    players: Option<usize>,

    /// Seed for randomly generated player colors
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    file_logger(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    apply_overrides(&mut config, &cli);
    config.validate().context("invalid game settings")?;

    log::info!(
        "starting {}x{} game for {} players",
        config.board.height,
        config.board.width,
        config.players.count
    );
    run(&config).context("terminal UI failed")
}

/// Logger writing to `path`. The terminal belongs to the UI while it runs.
fn file_logger(path: &Path) -> io::Result<env_logger::Builder> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    Ok(builder)
}

/// Apply command line overrides on top of the loaded config.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(players) = cli.players {
        config.players.count = players;
        config.players.colors.truncate(players);
    }
    if cli.seed.is_some() {
        config.players.seed = cli.seed;
    }
}

/// Raw mode plus alternate screen, undone on drop even when setup fails halfway.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

fn run(config: &AppConfig) -> io::Result<()> {
    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Record};

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("connect-four").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &cli(&[]));
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
        assert_eq!(config.players.count, 2);
        assert_eq!(config.players.seed, None);
    }

    #[test]
    fn test_single_player_override_trims_colors() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &cli(&["--players", "1"]));
        assert_eq!(config.players.count, 1);
        assert_eq!(config.players.colors, vec!["red"]);
        config.validate().expect("one player with one color is valid");
    }

    #[test]
    fn test_overrides_are_validated() {
        let mut config = AppConfig::default();
        apply_overrides(
            &mut config,
            &cli(&["--height", "0", "--width", "9", "--seed", "5"]),
        );
        assert_eq!(config.board.width, 9);
        assert_eq!(config.players.seed, Some(5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_board_override_is_rejected() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &cli(&["--height", "100000", "--width", "100000"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_output_goes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.log");

        let mut builder = file_logger(&path).unwrap();
        builder.filter_level(LevelFilter::Info);
        let logger = builder.build();
        logger.log(
            &Record::builder()
                .args(format_args!("player 1 wins"))
                .level(Level::Info)
                .target("connect_four")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("player 1 wins"));
    }

    #[test]
    fn test_guard_restores_screen_on_drop() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard { out: &mut out };
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "left alternate screen");
        assert!(written.contains("\x1b[?25h"), "cursor shown");
    }
}
