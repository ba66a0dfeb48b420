#![cfg(feature = "demo")]

mod cli;
mod config;
mod console;

use checkers::board::state::Board;
use checkers::game::Checkers;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let env = Env::default().filter_or("CHECKERS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path: Option<PathBuf> = cli.config
        .or_else(|| std::env::var_os("CHECKERS_CONFIG_PATH").map(|s| s.into()));
    let cfg = match config::Config::load(cfg_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE
        }
    };

    let game = match cli.position {
        Some(notation) => match Board::from_notation(&notation) {
            Ok(board) => Checkers::with_board(board, cli.player.into()),
            Err(e) => {
                eprintln!("Invalid position ({e}).");
                return ExitCode::FAILURE
            }
        },
        None => {
            let mut game = Checkers::new();
            game.set_current_player(cli.player.into());
            game
        }
    };

    println!("checkers demo");
    info!("Starting console with {cfg:?}");
    if let Err(e) = console::Console::new(game, cfg).run() {
        eprintln!("Error reading input ({e}).");
        return ExitCode::FAILURE
    }
    ExitCode::SUCCESS
}
