// src/error.rs
use std::error::Error;
use std::fmt;
use std::io;

/// Why a requested move was refused. Every variant is recoverable: the mover
/// is asked again and the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    EmptyOrigin,
    WrongOwner,
    IllegalDestination,
    ForcedCaptureViolation,
    IllegalJumpContinuation,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin => write!(f, "no piece there!"),
            MoveError::WrongOwner => write!(f, "not your piece"),
            MoveError::IllegalDestination => write!(f, "not a valid move"),
            MoveError::ForcedCaptureViolation => write!(f, "you must jump if you can"),
            MoveError::IllegalJumpContinuation => write!(f, "not a valid move"),
        }
    }
}
impl Error for MoveError {}

/// Ways an input source can stop producing moves.
#[derive(Debug)]
pub enum InputError {
    Quit,
    Eof,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Quit => write!(f, "Quit requested"),
            InputError::Eof => write!(f, "End of input"),
            InputError::Io(e) => write!(f, "Input/Output error: {}", e),
        }
    }
}
impl Error for InputError {}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

#[derive(Debug)]
pub enum SaveLoadError {
    Serialization(serde_json::Error),
    Io(String, io::Error),
}

impl fmt::Display for SaveLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveLoadError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SaveLoadError::Io(file, e) => write!(f, "I/O error with file '{}': {}", file, e),
        }
    }
}
impl Error for SaveLoadError {}
