// src/position.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate. Signed so that stepping off the edge yields a value
/// the board can recognize as out of bounds instead of wrapping.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The square `steps` unit steps away along `dir`.
    pub fn offset(self, dir: (i32, i32), steps: i32) -> Position {
        Position::new(self.row + dir.0 * steps, self.col + dir.1 * steps)
    }

    /// Square halfway between two positions, i.e. the square a jump passes over.
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// True when `other` is exactly two diagonal steps away.
    pub fn is_jump_to(self, other: Position) -> bool {
        (other.row - self.row).abs() == 2 && (other.col - self.col).abs() == 2
    }

    /// Square name such as "c3": column letter, then row number counted from the top.
    pub fn to_name(self) -> String {
        if !(0..26).contains(&self.col) || self.row < 0 {
            return "??".to_string();
        }
        let file_char = (b'a' + self.col as u8) as char;
        format!("{}{}", file_char, self.row + 1)
    }

    /// Parses a square name such as "c3". Does not check board bounds.
    pub fn from_name(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        if !file_char.is_ascii_lowercase() {
            return None;
        }
        let row: i32 = chars.as_str().parse().ok()?;
        if row < 1 {
            return None;
        }
        Some(Position::new(row - 1, (file_char as u8 - b'a') as i32))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_name())
    }
}
