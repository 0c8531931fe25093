// src/main.rs
use clap::Parser;
use std::error::Error;
use std::io;

mod board;
mod config;
mod engine;
mod error;
mod game;
mod piece;
mod player;
mod position;
mod render;
mod stats;

use config::{Cli, Config};
use error::InputError;
use game::Game;
use piece::Color;
use player::HumanPlayer;
use render::render;

/// Writes stats if enabled. Failures are reported but never abort shutdown.
fn save_stats(game: &Game, config: &Config) {
    let Some(filename) = &config.stats_file else {
        return;
    };
    match game.generate_stats().save_to_file(filename) {
        Ok(()) => println!("Game stats saved to '{}'.", filename),
        Err(e) => eprintln!("Warning: Failed to save stats: {}", e),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from(Cli::parse());

    let black = HumanPlayer::new(Color::Black, io::stdin(), io::stdout(), config.style);
    let white = HumanPlayer::new(Color::White, io::stdin(), io::stdout(), config.style);
    let mut game = Game::new(Box::new(black), Box::new(white));

    match game.play() {
        Ok(winner) => {
            print!("{}", render(game.board(), None, config.style));
            println!("{} won!!!", winner);
            save_stats(&game, &config);
        }
        Err(InputError::Quit) => {
            println!("\nQuit command received. Exiting game.");
            save_stats(&game, &config);
        }
        Err(InputError::Eof) => {
            println!("\nEnd of input detected. Quitting game.");
            save_stats(&game, &config);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            save_stats(&game, &config);
            return Err(e.into());
        }
    }

    if !game.history().is_empty() {
        println!("Move History:");
        for (number, record) in game.history().iter().enumerate() {
            println!("{:>3}. {:<5} {}", number + 1, record.player.to_string(), record.notation());
        }
    }
    println!("Game session finished after {} turns.", game.turns());
    Ok(())
}
