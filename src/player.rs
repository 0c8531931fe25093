// src/player.rs
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::error::InputError;
use crate::piece::Color;
use crate::position::Position;
use crate::render::{render, RenderStyle};

lazy_static! {
    // Arrow keys arrive as ESC [ A..D; everything else is whitespace separated.
    static ref TOKEN_RE: Regex = Regex::new(r"\x1b\[[ABCD]|[^\s\x1b]+").expect("token pattern");
    static ref SQUARE_RE: Regex = Regex::new(r"^(?i)[a-z][0-9]{1,2}$").expect("square pattern");
}

/// A source of moves for one side.
///
/// `get_move` returns exactly `count` on-board positions. It does not judge
/// legality; that is left to the move rules.
pub trait Player {
    fn color(&self) -> Color;
    fn get_move(&mut self, board: &mut Board, count: usize) -> Result<Vec<Position>, InputError>;
}

/// Line-oriented input channel. `Ok(None)` means end of input.
pub trait LineInput {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineInput for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

#[cfg(test)]
impl<T: AsRef<[u8]>> LineInput for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Cursor(i32, i32),
    Select,
    SelectSquare(Position),
    Quit,
    Unknown(String),
}

/// Splits one line of input into commands. A blank line selects the cursor square.
fn parse_line(line: &str) -> Vec<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return vec![Command::Select];
    }
    TOKEN_RE.find_iter(line).map(|m| parse_token(m.as_str())).collect()
}

fn parse_token(token: &str) -> Command {
    match token.to_lowercase().as_str() {
        "\x1b[a" | "w" | "k" | "up" => Command::Cursor(-1, 0),
        "\x1b[b" | "s" | "j" | "down" => Command::Cursor(1, 0),
        "\x1b[c" | "d" | "l" | "right" => Command::Cursor(0, 1),
        "\x1b[d" | "a" | "h" | "left" => Command::Cursor(0, -1),
        "." | "space" | "select" => Command::Select,
        "q" | "quit" | "exit" => Command::Quit,
        _ if SQUARE_RE.is_match(token) => match Position::from_name(token) {
            Some(pos) => Command::SelectSquare(pos),
            None => Command::Unknown(token.to_string()),
        },
        _ => Command::Unknown(token.to_string()),
    }
}

/// A person at the terminal: steers the board cursor and picks squares.
pub struct HumanPlayer<I: LineInput, W: Write> {
    color: Color,
    input: I,
    output: W,
    style: RenderStyle,
}

impl<I: LineInput, W: Write> HumanPlayer<I, W> {
    pub fn new(color: Color, input: I, output: W, style: RenderStyle) -> Self {
        HumanPlayer { color, input, output, style }
    }

    fn prompt(&mut self, board: &Board, selected: &[Position]) -> io::Result<()> {
        write!(self.output, "{}", render(board, Some(self.color), self.style))?;
        if !selected.is_empty() {
            let names: Vec<String> = selected.iter().map(|p| p.to_name()).collect();
            writeln!(self.output, "Selected: {}", names.join(" "))?;
        }
        write!(self.output, "> ")?;
        self.output.flush()
    }
}

impl<I: LineInput, W: Write> Player for HumanPlayer<I, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn get_move(&mut self, board: &mut Board, count: usize) -> Result<Vec<Position>, InputError> {
        let mut positions = Vec::with_capacity(count);
        while positions.len() < count {
            self.prompt(board, &positions)?;
            let line = self.input.next_line()?.ok_or(InputError::Eof)?;

            for command in parse_line(&line) {
                if positions.len() == count {
                    break;
                }
                match command {
                    Command::Cursor(dr, dc) => {
                        board.move_cursor(dr, dc);
                    }
                    Command::Select => positions.push(board.cursor),
                    Command::SelectSquare(pos) if board.contains(pos) => {
                        board.cursor = pos;
                        positions.push(pos);
                    }
                    Command::SelectSquare(pos) => {
                        board.last_error = Some(format!("no such square: {}", pos));
                    }
                    Command::Quit => return Err(InputError::Quit),
                    Command::Unknown(token) => {
                        board.last_error = Some(format!("unknown input '{}'", token.escape_default()));
                    }
                }
            }
        }
        Ok(positions)
    }
}
