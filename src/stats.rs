// src/stats.rs
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::SaveLoadError;
use crate::piece::Color;
use crate::position::Position;

/// One completed turn: the squares the piece visited, what it captured, and
/// whether it was crowned at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Color,
    pub path: Vec<Position>,
    pub captured: Vec<Position>,
    pub crowned: bool,
}

impl MoveRecord {
    pub fn new(player: Color, from: Position) -> Self {
        MoveRecord { player, path: vec![from], captured: Vec::new(), crowned: false }
    }

    /// Notation such as "c3-d4" for a slide or "c3xe5xg7" for a jump chain,
    /// with a trailing "K" when the piece was crowned.
    pub fn notation(&self) -> String {
        let separator = if self.captured.is_empty() { "-" } else { "x" };
        let squares: Vec<String> = self.path.iter().map(|p| p.to_name()).collect();
        let mut notation = squares.join(separator);
        if self.crowned {
            notation.push('K');
        }
        notation
    }
}

#[derive(Debug, Serialize)]
pub struct MoveStat {
    pub player: Color,
    pub notation: String,
    pub captures: usize,
}

/// Summary written when a session ends. `winner` is absent when the game was
/// abandoned before a side ran out of pieces.
#[derive(Debug, Serialize)]
pub struct GameStats {
    pub winner: Option<Color>,
    pub turns: usize,
    pub black_pieces: usize,
    pub white_pieces: usize,
    pub black_captures: usize,
    pub white_captures: usize,
    pub moves: Vec<MoveStat>,
}

impl GameStats {
    pub fn to_json(&self) -> Result<String, SaveLoadError> {
        serde_json::to_string_pretty(self).map_err(SaveLoadError::Serialization)
    }

    pub fn save_to_file(&self, filename: &str) -> Result<(), SaveLoadError> {
        let json_data = self.to_json()?;
        fs::write(filename, json_data).map_err(|e| SaveLoadError::Io(filename.to_string(), e))?;
        Ok(())
    }
}
