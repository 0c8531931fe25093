// src/engine.rs
//! Move rules: validation, capture, jump chains, crowning and the win check.
//!
//! Everything here works on a `Board` and a side to move; nothing reads the
//! cursor or talks to a player. Validation never mutates, so a refused move
//! leaves the board exactly as it was.

use crate::board::{Board, Square};
use crate::error::MoveError;
use crate::piece::Color;
use crate::position::Position;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveKind {
    Slide,
    Jump,
}

/// True if any piece of `color` has a capture available.
pub fn any_jump_available(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !piece.possible_jumps(board).is_empty())
}

/// Checks a primary move for `color` without touching the board.
///
/// A capture anywhere on the board for `color` makes every non-capturing
/// request illegal, so that check runs before the destination check.
pub fn validate_move(board: &Board, color: Color, from: Position, to: Position) -> Result<MoveKind, MoveError> {
    let piece = match board.at(from) {
        Square::Occupied(piece) => piece,
        Square::Empty | Square::OutOfBounds => return Err(MoveError::EmptyOrigin),
    };
    if piece.color != color {
        return Err(MoveError::WrongOwner);
    }

    let jumps = piece.possible_jumps(board);
    if jumps.contains(&to) {
        return Ok(MoveKind::Jump);
    }
    if any_jump_available(board, color) {
        return Err(MoveError::ForcedCaptureViolation);
    }
    if piece.possible_slides(board).contains(&to) {
        Ok(MoveKind::Slide)
    } else {
        Err(MoveError::IllegalDestination)
    }
}

/// Moves the piece on `from` to `to`, removing the jumped piece if the move
/// spans two diagonals. Returns the captured square, if any.
/// The move must already have been validated.
pub fn apply_move(board: &mut Board, from: Position, to: Position) -> Option<Position> {
    let mut piece = board.at(from).piece().copied()?;

    let captured = if from.is_jump_to(to) {
        let over = from.midpoint(to);
        board.set(over, None);
        Some(over)
    } else {
        None
    };

    board.set(from, None);
    piece.position = to;
    board.set(to, Some(piece));
    board.last_error = None;
    captured
}

/// Crowns the piece on `pos` if it stands on its promotion row.
/// Returns true only when the piece was newly crowned.
pub fn promote_if_possible(board: &mut Board, pos: Position) -> bool {
    let size = board.size();
    match board.piece_mut(pos) {
        Some(piece) if !piece.king && piece.position.row == piece.color.promotion_row(size) => {
            piece.king = true;
            true
        }
        _ => false,
    }
}

/// The single color left on the board, if only one remains.
pub fn winner(board: &Board) -> Option<Color> {
    let mut pieces = board.pieces();
    let first = pieces.next()?.color;
    pieces.all(|piece| piece.color == first).then_some(first)
}

/// State of a multi-jump in progress: which piece is jumping, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpChain {
    at: Position,
    color: Color,
}

impl JumpChain {
    /// Starts a chain for the piece that has just captured and now stands on `at`.
    pub fn new(at: Position, color: Color) -> Self {
        JumpChain { at, color }
    }

    pub fn position(&self) -> Position {
        self.at
    }

    /// The chain goes on while the piece can still capture and has not
    /// reached its promotion row.
    pub fn is_open(&self, board: &Board) -> bool {
        match board.at(self.at) {
            Square::Occupied(piece) if piece.color == self.color => {
                piece.position.row != piece.color.promotion_row(board.size())
                    && !piece.possible_jumps(board).is_empty()
            }
            _ => false,
        }
    }

    /// Performs one follow-up jump to `to`. On error the board is unchanged.
    pub fn jump(&mut self, board: &mut Board, to: Position) -> Result<Position, MoveError> {
        let piece = board
            .at(self.at)
            .piece()
            .ok_or(MoveError::IllegalJumpContinuation)?;
        if !piece.possible_jumps(board).contains(&to) {
            return Err(MoveError::IllegalJumpContinuation);
        }
        let captured = apply_move(board, self.at, to).ok_or(MoveError::IllegalJumpContinuation)?;
        self.at = to;
        Ok(captured)
    }
}
