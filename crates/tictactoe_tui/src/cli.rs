//! Command-line interface for the tictactoe binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::{GameConfig, StoreLayout};
use tracing::instrument;

/// Tic-Tac-Toe against a random opponent, with a persistent score tally
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Directory holding score records
    #[arg(long)]
    pub score_dir: Option<PathBuf>,

    /// How score records are laid out on disk
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Milliseconds a finished board stays visible before it is cleared
    #[arg(long)]
    pub reset_delay_ms: Option<u64>,

    /// Keep scores in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// File receiving log output (the terminal is taken by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

/// Persistence layout choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// One file, overwritten on every round
    Slot,
    /// One file per round, newest wins, removed on restart
    Versioned,
}

impl From<LayoutArg> for StoreLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Slot => StoreLayout::Slot,
            LayoutArg::Versioned => StoreLayout::Versioned,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    #[instrument(skip(self))]
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(dir) = &self.score_dir {
            config = config.with_score_dir(dir);
        }
        if let Some(layout) = self.layout {
            config = config.with_layout(layout.into());
        }
        if let Some(ms) = self.reset_delay_ms {
            config = config.with_reset_delay_ms(ms);
        }
        if self.no_persist {
            config = config.with_persist(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--score-dir",
            "/tmp/ttt",
            "--layout",
            "versioned",
            "--reset-delay-ms",
            "750",
            "--no-persist",
        ]);
        let config = cli.apply(GameConfig::default());
        assert_eq!(config.score_dir(), Path::new("/tmp/ttt"));
        assert_eq!(*config.layout(), StoreLayout::Versioned);
        assert_eq!(*config.reset_delay_ms(), 750);
        assert!(!*config.persist());
    }

    #[test]
    fn test_rejects_unknown_layout() {
        assert!(Cli::try_parse_from(["tictactoe", "--layout", "diagonal"]).is_err());
    }
}
