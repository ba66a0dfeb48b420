use checkers::pieces::Player;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checkers-demo", version, about = "Play checkers in the terminal")]
pub struct Cli {
    /// YAML file with display settings. Overrides CHECKERS_CONFIG_PATH.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start from this position instead of the opening, eg, "8/8/8/8/8/2C5/1B6/8".
    #[arg(long, value_name = "NOTATION")]
    pub position: Option<String>,

    /// The player to move first.
    #[arg(long, value_enum, default_value_t = PlayerArg::Black)]
    pub player: PlayerArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    Black,
    White
}

impl From<PlayerArg> for Player {
    fn from(value: PlayerArg) -> Self {
        match value {
            PlayerArg::Black => Player::Black,
            PlayerArg::White => Player::White,
        }
    }
}
