// src/render.rs
//! Text rendering of a board snapshot. Pure: reads the board, never changes it.

use std::fmt;

use crate::board::Board;
use crate::piece::{Color, Piece};
use crate::position::Position;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
// Backgrounds for the two square shades and the cursor.
const BG_LIGHT: u8 = 41;
const BG_DARK: u8 = 45;
const BG_CURSOR: u8 = 104;

const BANNER: [&str; 6] = [
    " ~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
    " move cursor to select piece ",
    "   press enter to select ",
    "      piece and target",
    "       type q to quit ",
    " ~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// ANSI colors and unicode pieces when set, plain ASCII otherwise.
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle { color: true }
    }
}

/// Draws the board, cursor, side to move and last error.
pub fn render(board: &Board, to_move: Option<Color>, style: RenderStyle) -> String {
    Frame { board, to_move, style }.to_string()
}

/// One screenful of output for a board snapshot.
struct Frame<'a> {
    board: &'a Board,
    to_move: Option<Color>,
    style: RenderStyle,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.color {
            write!(f, "{}", CLEAR_SCREEN)?;
            for line in BANNER {
                writeln!(f, "{}{}{}", GREEN, line, RESET)?;
            }
            writeln!(f)?;
            write_colored_grid(self.board, f)?;
        } else {
            write_plain_grid(self.board, f)?;
        }
        writeln!(f)?;

        if let Some(color) = self.to_move {
            if self.style.color {
                writeln!(f, "{}{} to move.{}", color, GREEN, RESET)?;
            } else {
                writeln!(f, "{} to move.", color)?;
            }
        }
        if let Some(error) = &self.board.last_error {
            if self.style.color {
                writeln!(f, "{}{}{}", RED, error, RESET)?;
            } else {
                writeln!(f, "Error: {}", error)?;
            }
        }
        Ok(())
    }
}

fn write_colored_grid(board: &Board, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in 0..board.size() {
        write!(f, "      ")?;
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let background = if board.cursor == pos {
                BG_CURSOR
            } else if (row + col) % 2 == 0 {
                BG_LIGHT
            } else {
                BG_DARK
            };
            match board.at(pos).piece() {
                Some(piece) => write!(f, "\x1b[{};{}m{} {}", foreground(piece), background, piece.symbol(), RESET)?,
                None => write!(f, "\x1b[{}m  {}", background, RESET)?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

fn foreground(piece: &Piece) -> u8 {
    match piece.color {
        Color::Black => 30,
        Color::White => 37,
    }
}

fn write_plain_grid(board: &Board, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..board.size() {
        write!(f, " {} ", (b'a' + col as u8) as char)?;
    }
    writeln!(f)?;

    for row in 0..board.size() {
        write!(f, "{:>2} ", row + 1)?;
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let glyph = match board.at(pos).piece() {
                Some(piece) => piece.to_string(),
                None => ".".to_string(),
            };
            if board.cursor == pos {
                write!(f, "[{}]", glyph)?;
            } else {
                write!(f, " {} ", glyph)?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}
