use crate::config::Config;
use checkers::board::geometry::BOARD_SIZE;
use checkers::game::{Checkers, GameStage};
use checkers::tiles::Tile;
use log::debug;
use std::io::{self, stdin, Write};
use std::str::FromStr;

fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Terminal client: draws the board, reads one square at a time and passes it to the engine.
pub struct Console {
    game: Checkers,
    config: Config,
}

impl Console {
    pub fn new(game: Checkers, config: Config) -> Self {
        Self { game, config }
    }

    /// Render the board, one line per row, with optional coordinates.
    pub fn draw(&self) -> String {
        let text = self.game.text_board();
        let mut out = String::new();
        if self.config.show_coordinates {
            out.push_str("   ");
            for col in 0..BOARD_SIZE {
                out.push_str(&format!("{:^4}", (b'A' + col) as char));
            }
            out.push('\n');
        }
        for (r, row) in text.iter().enumerate() {
            if self.config.show_coordinates {
                out.push_str(&format!("{:>2} ", BOARD_SIZE as usize - r));
            }
            for (c, cell) in row.iter().enumerate() {
                let tile = Tile::new(r as u8, c as u8);
                if !tile.is_playable() {
                    out.push_str(&self.config.light_cell);
                } else if cell.is_empty() {
                    out.push_str(&self.config.empty_cell);
                } else {
                    out.push_str(&format!("{cell:^4}"));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Play until the game ends or the user enters an empty line.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            println!("{}", self.draw());
            println!("{}", self.game.text_state());
            if self.game.game_state().0 == GameStage::GameEnd {
                return Ok(())
            }
            let line = input("Choose a square (eg, C3), or press enter to quit:")?;
            if line.is_empty() {
                return Ok(())
            }
            match Tile::from_str(&line) {
                Ok(tile) => {
                    if !self.game.process_input(tile.x(), tile.y()) {
                        debug!("Input at {tile} ignored");
                        println!("Only dark squares can be played.");
                    }
                },
                Err(e) => println!("Invalid square ({e}). Try again."),
            }
        }
    }
}
