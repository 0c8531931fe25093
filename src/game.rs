// src/game.rs
use crate::board::Board;
use crate::engine::{self, JumpChain, MoveKind};
use crate::error::InputError;
use crate::piece::Color;
use crate::player::Player;
use crate::position::Position;
use crate::stats::{GameStats, MoveRecord, MoveStat};

/// A game between two players. Player 0 moves on even turns, player 1 on odd.
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    turns: usize,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a game from the standard opening position.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self::with_board(Board::standard(), first, second)
    }

    pub fn with_board(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Game { board, players: [first, second], turns: 0, history: Vec::new() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn current_color(&self) -> Color {
        self.players[self.turns % 2].color()
    }

    pub fn winner(&self) -> Option<Color> {
        engine::winner(&self.board)
    }

    /// Plays turns until one color is left and returns it. Stops early if a
    /// player's input ends or they quit.
    pub fn play(&mut self) -> Result<Color, InputError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.take_turn()?;
        }
    }

    /// Runs one full turn for the current player: a primary move, any
    /// continuation jumps, then crowning. Refused moves are recorded in the
    /// board's last error and asked for again.
    pub fn take_turn(&mut self) -> Result<MoveRecord, InputError> {
        let index = self.turns % 2;
        let color = self.current_color();

        let (from, to, kind) = loop {
            let positions = self.players[index].get_move(&mut self.board, 2)?;
            let (from, to) = match positions[..] {
                [from, to] => (from, to),
                _ => continue,
            };
            match engine::validate_move(&self.board, color, from, to) {
                Ok(kind) => break (from, to, kind),
                Err(e) => self.board.last_error = Some(e.to_string()),
            }
        };

        let mut record = MoveRecord::new(color, from);
        record.captured.extend(engine::apply_move(&mut self.board, from, to));
        record.path.push(to);

        let landing = match kind {
            MoveKind::Slide => to,
            MoveKind::Jump => match self.continue_jumps(index, JumpChain::new(to, color), &mut record) {
                Ok(landing) => landing,
                Err(e) => {
                    // Captures already made stay on the board, so they stay in the history too.
                    self.history.push(record);
                    self.turns += 1;
                    return Err(e);
                }
            },
        };

        record.crowned = engine::promote_if_possible(&mut self.board, landing);
        self.history.push(record.clone());
        self.turns += 1;
        Ok(record)
    }

    /// Asks the same player for follow-up jumps until the chain closes.
    /// Returns where the piece ends up.
    fn continue_jumps(&mut self, index: usize, mut chain: JumpChain, record: &mut MoveRecord) -> Result<Position, InputError> {
        while chain.is_open(&self.board) {
            let positions = self.players[index].get_move(&mut self.board, 1)?;
            let Some(&to) = positions.first() else {
                continue;
            };
            match chain.jump(&mut self.board, to) {
                Ok(captured) => {
                    record.captured.push(captured);
                    record.path.push(to);
                }
                Err(e) => self.board.last_error = Some(e.to_string()),
            }
        }
        Ok(chain.position())
    }

    /// Summary of the session so far, for writing out when it ends.
    pub fn generate_stats(&self) -> GameStats {
        let captures_by = |color: Color| -> usize {
            self.history
                .iter()
                .filter(|record| record.player == color)
                .map(|record| record.captured.len())
                .sum()
        };

        GameStats {
            winner: self.winner(),
            turns: self.turns,
            black_pieces: self.board.count(Color::Black),
            white_pieces: self.board.count(Color::White),
            black_captures: captures_by(Color::Black),
            white_captures: captures_by(Color::White),
            moves: self
                .history
                .iter()
                .map(|record| MoveStat {
                    player: record.player,
                    notation: record.notation(),
                    captures: record.captured.len(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::piece::Piece;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays fixed squares and records each request and the error it was shown.
    /// Once the squares run out it reports end of input, or a quit if `quits` is set.
    struct ScriptedPlayer {
        color: Color,
        moves: VecDeque<Position>,
        quits: bool,
        seen_errors: Rc<RefCell<Vec<Option<String>>>>,
        requests: Rc<RefCell<Vec<usize>>>,
    }

    impl Player for ScriptedPlayer {
        fn color(&self) -> Color {
            self.color
        }

        fn get_move(&mut self, board: &mut Board, count: usize) -> Result<Vec<Position>, InputError> {
            self.seen_errors.borrow_mut().push(board.last_error.clone());
            self.requests.borrow_mut().push(count);
            let mut positions = Vec::with_capacity(count);
            for _ in 0..count {
                let next = self.moves.pop_front();
                positions.push(next.ok_or(if self.quits { InputError::Quit } else { InputError::Eof })?);
            }
            Ok(positions)
        }
    }

    struct Script {
        errors: Rc<RefCell<Vec<Option<String>>>>,
        requests: Rc<RefCell<Vec<usize>>>,
    }

    fn scripted(color: Color, squares: &[(i32, i32)]) -> (Box<dyn Player>, Script) {
        scripted_with(color, squares, false)
    }

    fn scripted_with(color: Color, squares: &[(i32, i32)], quits: bool) -> (Box<dyn Player>, Script) {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let player = ScriptedPlayer {
            color,
            moves: squares.iter().map(|&(r, c)| Position::new(r, c)).collect(),
            quits,
            seen_errors: Rc::clone(&errors),
            requests: Rc::clone(&requests),
        };
        (Box::new(player), Script { errors, requests })
    }

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn place(board: &mut Board, color: Color, row: i32, col: i32) {
        board.set(pos(row, col), Some(Piece::new(color, pos(row, col))));
    }

    #[test]
    fn slide_passes_the_turn() {
        let (black, _) = scripted(Color::Black, &[(2, 2), (3, 3)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::new(black, white);

        assert_eq!(game.current_color(), Color::Black);
        let record = game.take_turn().unwrap();

        assert_eq!(record.notation(), "c3-d4");
        assert_eq!(game.turns(), 1);
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.board().at(pos(2, 2)), Square::Empty);
        assert!(game.board().at(pos(3, 3)).piece().is_some());
    }

    #[test]
    fn refused_moves_reprompt_without_changing_the_board() {
        // Empty square, opponent's piece, then an illegal destination, then a real move.
        let (black, script) = scripted(
            Color::Black,
            &[(3, 3), (4, 4), (5, 1), (4, 0), (2, 2), (4, 4), (2, 2), (3, 1)],
        );
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::new(black, white);
        let before = game.board().clone();

        game.take_turn().unwrap();

        assert_eq!(
            *script.errors.borrow(),
            vec![
                None,
                Some("no piece there!".to_string()),
                Some("not your piece".to_string()),
                Some("not a valid move".to_string()),
            ]
        );
        assert_eq!(game.turns(), 1);
        assert_eq!(game.board().last_error, None);
        assert_eq!(game.board().count(Color::White), before.count(Color::White));
        assert!(game.board().at(pos(3, 1)).piece().is_some());
    }

    #[test]
    fn forced_capture_rejects_a_slide() {
        let mut board = Board::new(8);
        place(&mut board, Color::Black, 2, 2);
        place(&mut board, Color::Black, 0, 6);
        place(&mut board, Color::White, 3, 3);
        place(&mut board, Color::White, 7, 7);

        let (black, script) = scripted(Color::Black, &[(0, 6), (1, 7), (2, 2), (4, 4)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::with_board(board, black, white);

        let record = game.take_turn().unwrap();

        assert_eq!(script.errors.borrow()[1].as_deref(), Some("you must jump if you can"));
        assert_eq!(record.captured, vec![pos(3, 3)]);
        assert_eq!(game.board().count(Color::White), 1);
    }

    #[test]
    fn jump_chain_asks_for_continuations() {
        let mut board = Board::new(8);
        place(&mut board, Color::Black, 2, 2);
        place(&mut board, Color::White, 3, 3);
        place(&mut board, Color::White, 5, 5);
        place(&mut board, Color::White, 5, 1);

        // After landing on (4, 4): one bad continuation, then the jump to (6, 6).
        let (black, script) = scripted(Color::Black, &[(2, 2), (4, 4), (5, 3), (6, 6)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::with_board(board, black, white);

        let record = game.take_turn().unwrap();

        assert_eq!(*script.requests.borrow(), vec![2, 1, 1]);
        assert_eq!(script.errors.borrow()[2].as_deref(), Some("not a valid move"));
        assert_eq!(record.path, vec![pos(2, 2), pos(4, 4), pos(6, 6)]);
        assert_eq!(record.captured, vec![pos(3, 3), pos(5, 5)]);
        assert_eq!(record.notation(), "c3xe5xg7");
        assert_eq!(game.board().count(Color::White), 1);
        assert_eq!(game.board().last_error, None);
        assert_eq!(game.current_color(), Color::White);
    }

    #[test]
    fn reaching_the_far_row_crowns_and_ends_the_chain() {
        let mut board = Board::new(8);
        place(&mut board, Color::White, 2, 2);
        place(&mut board, Color::Black, 1, 1);
        place(&mut board, Color::Black, 1, 3);
        place(&mut board, Color::Black, 3, 5);

        let (black, _) = scripted(Color::Black, &[]);
        let (white, script) = scripted(Color::White, &[(2, 2), (0, 0)]);
        let mut game = Game::with_board(board, black, white);
        game.turns = 1;

        let record = game.take_turn().unwrap();

        assert!(record.crowned);
        assert_eq!(*script.requests.borrow(), vec![2]);
        let king = game.board().at(pos(0, 0)).piece().copied().unwrap();
        assert!(king.king);
        assert_eq!(king.directions().len(), 4);
    }

    #[test]
    fn play_ends_when_one_color_remains() {
        let mut board = Board::new(8);
        place(&mut board, Color::Black, 2, 2);
        place(&mut board, Color::White, 5, 5);
        place(&mut board, Color::White, 3, 3);

        // Black takes (3, 3), fumbles the continuation once, then takes (5, 5).
        let (black, _) = scripted(Color::Black, &[(2, 2), (4, 4), (4, 4), (6, 6)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::with_board(board, black, white);

        let winner = game.play().unwrap();

        assert_eq!(winner, Color::Black);
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn input_ending_mid_game_stops_play() {
        let (black, _) = scripted(Color::Black, &[(2, 2), (3, 3)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::new(black, white);

        assert!(matches!(game.play(), Err(InputError::Eof)));
        assert_eq!(game.turns(), 1);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn stats_summarize_the_history() {
        let mut board = Board::new(8);
        place(&mut board, Color::Black, 2, 2);
        place(&mut board, Color::White, 3, 3);

        let (black, _) = scripted(Color::Black, &[(2, 2), (4, 4)]);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::with_board(board, black, white);
        game.play().unwrap();

        let stats = game.generate_stats();
        assert_eq!(stats.winner, Some(Color::Black));
        assert_eq!(stats.turns, 1);
        assert_eq!(stats.black_pieces, 1);
        assert_eq!(stats.white_pieces, 0);
        assert_eq!(stats.black_captures, 1);
        assert_eq!(stats.white_captures, 0);
        assert_eq!(stats.moves[0].notation, "c3xe5");
    }

    #[test]
    fn quitting_mid_chain_keeps_the_capture_in_the_stats() {
        let mut board = Board::new(8);
        place(&mut board, Color::Black, 2, 2);
        place(&mut board, Color::White, 3, 3);
        place(&mut board, Color::White, 5, 5);
        place(&mut board, Color::White, 7, 1);

        // Black takes (3, 3), then quits when asked for the jump over (5, 5).
        let (black, script) = scripted_with(Color::Black, &[(2, 2), (4, 4)], true);
        let (white, _) = scripted(Color::White, &[]);
        let mut game = Game::with_board(board, black, white);

        assert!(matches!(game.play(), Err(InputError::Quit)));
        assert_eq!(*script.requests.borrow(), vec![2, 1]);
        assert_eq!(game.turns(), 1);
        assert_eq!(game.history()[0].notation(), "c3xe5");

        let stats = game.generate_stats();
        assert_eq!(stats.turns, 1);
        assert_eq!(stats.white_pieces, 2);
        assert_eq!(stats.black_captures, 1);
        assert_eq!(stats.moves.len(), 1);
        assert_eq!(stats.moves[0].captures, 1);
    }
}
