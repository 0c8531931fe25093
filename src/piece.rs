// src/piece.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{Board, Square};
use crate::position::Position;

// Diagonals a man may take, expressed for Black (toward increasing rows).
const FORWARD_DIAGONALS: [(i32, i32); 2] = [(1, -1), (1, 1)];
// Extra diagonals granted by a crown.
const BACKWARD_DIAGONALS: [(i32, i32); 2] = [(-1, 1), (-1, -1)];

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Row sign of this side's forward direction.
    fn forward(&self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// The far row on which a piece of this color is crowned.
    pub fn promotion_row(&self, size: i32) -> i32 {
        match self {
            Color::Black => size - 1,
            Color::White => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub position: Position,
}

impl Piece {
    pub fn new(color: Color, position: Position) -> Self {
        Piece { color, king: false, position }
    }

    /// Unit diagonals this piece may travel along. Men only go forward;
    /// kings also go backward.
    pub fn directions(&self) -> Vec<(i32, i32)> {
        let backward: &[(i32, i32)] = if self.king { &BACKWARD_DIAGONALS } else { &[] };
        FORWARD_DIAGONALS
            .iter()
            .chain(backward)
            .map(|&(dr, dc)| (dr * self.color.forward(), dc))
            .collect()
    }

    /// True if the neighbour along `dir` is an opposing piece and the square
    /// beyond it is on the board and empty.
    pub fn can_jump(&self, board: &Board, dir: (i32, i32)) -> bool {
        let over = match board.at(self.position.offset(dir, 1)) {
            Square::Occupied(piece) => piece.color != self.color,
            Square::Empty | Square::OutOfBounds => false,
        };
        over && board.at(self.position.offset(dir, 2)) == Square::Empty
    }

    pub fn possible_jumps(&self, board: &Board) -> Vec<Position> {
        self.directions()
            .into_iter()
            .filter(|&dir| self.can_jump(board, dir))
            .map(|dir| self.position.offset(dir, 2))
            .collect()
    }

    pub fn possible_slides(&self, board: &Board) -> Vec<Position> {
        self.directions()
            .into_iter()
            .map(|dir| self.position.offset(dir, 1))
            .filter(|&target| board.at(target) == Square::Empty)
            .collect()
    }

    /// Jumps first, then slides.
    pub fn possible_moves(&self, board: &Board) -> Vec<Position> {
        let mut moves = self.possible_jumps(board);
        moves.extend(self.possible_slides(board));
        moves
    }

    pub fn symbol(&self) -> char {
        if self.king { '♛' } else { '❂' }
    }
}

impl fmt::Display for Piece {
    // Plain-text glyph: lowercase for men, uppercase for kings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.color {
            Color::Black => 'b',
            Color::White => 'w',
        };
        let symbol = if self.king { symbol.to_ascii_uppercase() } else { symbol };
        write!(f, "{}", symbol)
    }
}
