#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::board::Board;
use crate::common::{BoardError, Side};
use crate::player::Player;
use crate::search;
use rand::rngs::SmallRng;

pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn parse_position(input: &str) -> Option<u8> {
    let position: u8 = input.trim().parse().ok()?;
    if position > 8 {
        return None;
    }
    Some(position)
}

/// Print the grid with cell numbers alongside the marks, so positions can
/// be typed directly.
pub fn print_board(board: &Board) {
    std::println!();
    for r in 0..3u8 {
        std::print!("  ");
        for c in 0..3u8 {
            let position = r * 3 + c;
            let mark = match board.cell(position).ok().flatten() {
                Some(Side::X) => 'X',
                Some(Side::O) => 'O',
                None => char::from(b'0' + position),
            };
            std::print!(" {}", mark);
        }
        std::println!();
    }
    std::println!();
}

impl Player for CliPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        side: Side,
    ) -> Result<u8, BoardError> {
        print_board(board);
        // Show the engine's recommendation in brackets as the default.
        let suggested = search::best_move(board, side)?;
        loop {
            std::print!("Enter move for {} (0-8) [{}]: ", side, suggested);
            io::stdout().flush().ok();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return Ok(suggested);
            }
            let line = line.trim();
            if line.is_empty() {
                return Ok(suggested);
            }
            match parse_position(line) {
                Some(position) if board.available_moves().contains(position) => {
                    return Ok(position)
                }
                Some(position) => {
                    std::println!("Position {} is already taken", position);
                }
                None => std::println!("Invalid position (use 0-8)"),
            }
        }
    }

    fn notify_move(&mut self, position: u8, side: Side) {
        std::println!("{} plays {}", side, position);
    }
}
