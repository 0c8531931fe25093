// src/board.rs
use crate::piece::{Color, Piece};
use crate::position::Position;

pub const BOARD_SIZE: i32 = 8;
/// Total pieces in a standard game, split evenly between the two colors.
pub const STANDARD_PIECES: usize = 24;

/// Result of looking up a square. Off-board lookups are a separate case from
/// empty squares: a jump may never land off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square<'a> {
    Occupied(&'a Piece),
    Empty,
    OutOfBounds,
}

impl<'a> Square<'a> {
    pub fn piece(self) -> Option<&'a Piece> {
        match self {
            Square::Occupied(piece) => Some(piece),
            Square::Empty | Square::OutOfBounds => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    squares: Vec<Option<Piece>>,
    /// Square highlighted by the interactive player. Never consulted by the rules.
    pub cursor: Position,
    /// Message from the last rejected action, cleared by the next accepted one.
    pub last_error: Option<String>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: i32) -> Self {
        Board {
            size,
            squares: vec![None; (size * size) as usize],
            cursor: Position::new(0, 0),
            last_error: None,
        }
    }

    /// The opening position of a standard game.
    pub fn standard() -> Self {
        let mut board = Board::new(BOARD_SIZE);
        board.fill_standard(STANDARD_PIECES);
        board
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.row) && (0..self.size).contains(&pos.col)
    }

    pub fn at(&self, pos: Position) -> Square<'_> {
        if !self.contains(pos) {
            return Square::OutOfBounds;
        }
        match &self.squares[self.index(pos)] {
            Some(piece) => Square::Occupied(piece),
            None => Square::Empty,
        }
    }

    /// Writes a cell as-is. The position must already be known to be on the board.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        let index = self.index(pos);
        self.squares[index] = piece;
    }

    pub(crate) fn piece_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        if !self.contains(pos) {
            return None;
        }
        let index = self.index(pos);
        self.squares[index].as_mut()
    }

    /// All pieces on the board, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Lays out `num_pieces / 2` pieces per color on the dark squares,
    /// filling each side's back row first.
    pub fn fill_standard(&mut self, num_pieces: usize) {
        let per_color = num_pieces / 2;
        for color in Color::ALL {
            let mut placed = 0;
            let mut row = 0;
            while placed < per_color && row < self.size {
                for i in 0..self.size / 2 {
                    if placed == per_color {
                        break;
                    }
                    let pos = match color {
                        Color::Black => Position::new(row, 2 * i + row % 2),
                        Color::White => Position::new(self.size - row - 1, 2 * i + (row + 1) % 2),
                    };
                    self.set(pos, Some(Piece::new(color, pos)));
                    placed += 1;
                }
                row += 1;
            }
        }
    }

    /// Moves the cursor by the given delta. Moves that would leave the board are ignored.
    pub fn move_cursor(&mut self, dr: i32, dc: i32) -> bool {
        let target = self.cursor.offset((dr, dc), 1);
        if self.contains(target) {
            self.cursor = target;
            true
        } else {
            false
        }
    }

    fn index(&self, pos: Position) -> usize {
        (pos.row * self.size + pos.col) as usize
    }
}
