//! Game aggregate: the only mutable surface of the engine
//!
//! A [`Game`] owns the live board together with the turn, castling
//! rights, clock, move history, captured-piece ledgers and the winner.
//! [`Game::make_move`] (with its [`Game::try_make_move`] variant) and
//! [`Game::tick`] are the only mutators; every other method is a
//! read-only query, and all simulation happens on board copies.

use crate::attack;
use crate::board::Board;
use crate::castling;
use crate::clock::Clock;
use crate::movegen::{self, DestList};
use blitzchess_base::types::{CastlingRights, CastlingSide, Cell, Color, Piece, Square};

use thiserror::Error;

/// Default time per side, in seconds (five minutes)
pub const DEFAULT_TIME_SECS: i64 = 300;

/// Default increment per move, in seconds
pub const DEFAULT_INCREMENT_SECS: i64 = 0;

/// Reason a move was rejected by [`Game::try_make_move`]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("no piece of the side to move on {0}")]
    NotOwnPiece(Square),
    #[error("move {0}{1} is not legal")]
    NotLegal(Square, Square),
}

/// A single timed chess game
///
/// # Example
///
/// ```
/// # use blitzchess::{Color, Game, Square};
/// # use std::str::FromStr;
/// let mut game = Game::new();
/// let e2 = Square::from_str("E2").unwrap();
/// let e4 = Square::from_str("E4").unwrap();
/// assert!(game.make_move(e2, e4));
/// assert_eq!(game.turn(), Color::Black);
/// assert_eq!(game.history(), ["E4"]);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side: Color,
    rights: CastlingRights,
    clock: Clock,
    history: Vec<String>,
    captured: [Vec<Cell>; 2],
    winner: Option<Color>,
}

impl Game {
    /// Starts a game with the default time control
    pub fn new() -> Game {
        Game::with_clock(DEFAULT_TIME_SECS, DEFAULT_INCREMENT_SECS)
    }

    /// Starts a game with `total_secs` per side and `increment_secs`
    /// credited after each of a side's moves
    ///
    /// The values are not bounded: a non-positive total yields a clock
    /// that expires on the first tick.
    pub fn with_clock(total_secs: i64, increment_secs: i64) -> Game {
        Game {
            board: Board::initial(),
            side: Color::White,
            rights: CastlingRights::FULL,
            clock: Clock::new(total_secs, increment_secs),
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            winner: None,
        }
    }

    /// Returns a read-only view of the current position
    #[inline]
    pub fn position(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.side
    }

    /// Returns the contents of square `sq`
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.board.get(sq)
    }

    /// Returns the current castling rights
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    /// Returns a read-only view of the clock
    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Returns the winner, or `None` while the game continues
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns the notated moves played so far, in order
    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns the opponent pieces that color `c` has captured, in order
    #[inline]
    pub fn captured_by(&self, c: Color) -> &[Cell] {
        &self.captured[c.index()]
    }

    /// Returns the legal destinations of the piece on `from`
    ///
    /// An empty square yields an empty list. The result ignores whose
    /// turn it is; [`Game::make_move`] additionally requires the moved
    /// piece to belong to the side to move.
    pub fn legal_moves(&self, from: Square) -> DestList {
        movegen::legal(&self.board, from, self.rights)
    }

    /// Returns `true` if `from -> to` would be accepted by
    /// [`Game::make_move`] on the current position and turn
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        self.winner.is_none()
            && self.board.get(from).color() == Some(self.side)
            && self.legal_moves(from).contains(&to)
    }

    /// Returns `true` if the king of color `c` is currently in check
    pub fn is_in_check(&self, c: Color) -> bool {
        attack::is_king_in_check(&self.board, c)
    }

    /// Plays the move `from -> to` for the side to move
    ///
    /// Returns `false` and changes nothing if the move is rejected; see
    /// [`Game::try_make_move`] for the rejection reasons.
    #[inline]
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    /// Plays the move `from -> to` for the side to move, reporting why a
    /// rejected move was rejected
    ///
    /// Fails without changing anything if the game is already over,
    /// `from` does not hold a piece of the side to move, or `to` is not
    /// a legal destination. On success the whole transaction is applied:
    /// capture bookkeeping, the castling rook relocation, notation,
    /// castling-rights updates, the mover's clock increment, the turn
    /// flip and the winner recomputation.
    pub fn try_make_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let mover = self.side;
        let cell = self.board.get(from);
        let piece = match (cell.color(), cell.piece()) {
            (Some(c), Some(p)) if c == mover => p,
            _ => return Err(MoveError::NotOwnPiece(from)),
        };
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::NotLegal(from, to));
        }
        let captured = self.board.get(to);

        let castle = if piece == Piece::King && from == castling::king_home(mover) {
            [CastlingSide::King, CastlingSide::Queen]
                .into_iter()
                .find(|&s| to == castling::king_target(mover, s))
        } else {
            None
        };

        self.board = self.board.moved(from, to);
        let notation = match castle {
            Some(side) => {
                self.board = self
                    .board
                    .moved(castling::rook_home(mover, side), castling::rook_target(mover, side));
                match side {
                    CastlingSide::King => "O-O".to_string(),
                    CastlingSide::Queen => "O-O-O".to_string(),
                }
            }
            None => {
                let mut s = String::new();
                if let Some(letter) = piece.letter() {
                    s.push(letter);
                }
                if captured.is_occupied() {
                    s.push('x');
                }
                s.push_str(&to.to_string());
                s
            }
        };
        self.history.push(notation);

        if captured.is_occupied() {
            self.captured[mover.index()].push(captured);
        }

        match piece {
            Piece::King => self.rights.unset_color(mover),
            Piece::Rook => {
                for s in [CastlingSide::King, CastlingSide::Queen] {
                    if from == castling::rook_home(mover, s) {
                        self.rights.unset(mover, s);
                    }
                }
            }
            _ => {}
        }
        // a rook captured on its home square can never castle either
        if captured.piece() == Some(Piece::Rook) {
            for s in [CastlingSide::King, CastlingSide::Queen] {
                if to == castling::rook_home(mover.inv(), s) {
                    self.rights.unset(mover.inv(), s);
                }
            }
        }

        self.clock.add_increment(mover);
        self.side = mover.inv();
        self.winner = self.compute_winner();
        Ok(())
    }

    /// Removes one second from the side to move
    ///
    /// Meant to be driven once per real-time second by the caller. When
    /// the flag falls, the opponent wins immediately, regardless of the
    /// board. Once the game has a winner, ticking is a no-op.
    pub fn tick(&mut self) {
        if self.winner.is_some() {
            return;
        }
        if self.clock.tick(self.side) {
            self.winner = Some(self.side.inv());
        }
    }

    fn compute_winner(&self) -> Option<Color> {
        if self.clock.is_expired(Color::White) {
            return Some(Color::Black);
        }
        if self.clock.is_expired(Color::Black) {
            return Some(Color::White);
        }
        // TODO: stalemate is counted as a loss for the side to move;
        // distinguish it and declare a draw instead
        if !movegen::has_any_legal_move(&self.board, self.side, self.rights) {
            return Some(self.side.inv());
        }
        None
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blitzchess_base::types::File;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    fn mv(game: &mut Game, from: &str, to: &str) {
        assert!(game.make_move(sq(from), sq(to)), "{} -> {} rejected", from, to);
    }

    #[test]
    fn test_open_game_scenario() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Color::White);
        assert!(game.make_move(sq("E2"), sq("E4")));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.history(), ["E4"]);
        assert!(game.make_move(sq("E7"), sq("E5")));
        assert_eq!(game.history(), ["E4", "E5"]);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.clone();
        // wrong piece pattern, empty source, opponent's piece, same square
        for (from, to) in [("E2", "E5"), ("E4", "E5"), ("E7", "E5"), ("E2", "E2")] {
            assert!(!game.make_move(sq(from), sq(to)));
        }
        assert_eq!(game.position(), before.position());
        assert_eq!(game.turn(), before.turn());
        assert_eq!(game.history(), before.history());
        assert_eq!(game.captured_by(Color::White), before.captured_by(Color::White));
        assert_eq!(game.captured_by(Color::Black), before.captured_by(Color::Black));
        assert_eq!(game.clock(), before.clock());
        assert_eq!(game.castling_rights(), before.castling_rights());
    }

    #[test]
    fn test_capture_bookkeeping() {
        let mut game = Game::new();
        mv(&mut game, "E2", "E4");
        mv(&mut game, "D7", "D5");
        mv(&mut game, "E4", "D5");
        assert_eq!(game.history(), ["E4", "D5", "xD5"]);
        assert_eq!(
            game.captured_by(Color::White),
            [Cell::from_parts(Color::Black, Piece::Pawn)]
        );
        assert!(game.captured_by(Color::Black).is_empty());
        assert_eq!(
            game.get(sq("D5")),
            Cell::from_parts(Color::White, Piece::Pawn)
        );
    }

    #[test]
    fn test_piece_letter_notation() {
        let mut game = Game::new();
        mv(&mut game, "G1", "F3");
        mv(&mut game, "B8", "C6");
        mv(&mut game, "F3", "E5");
        mv(&mut game, "C6", "E5");
        assert_eq!(game.history(), ["NF3", "NC6", "NE5", "NxE5"]);
        assert_eq!(
            game.captured_by(Color::Black),
            [Cell::from_parts(Color::White, Piece::Knight)]
        );
    }

    #[test]
    fn test_kingside_castling_scenario() {
        let mut game = Game::new();
        mv(&mut game, "E2", "E4");
        mv(&mut game, "E7", "E5");
        mv(&mut game, "G1", "F3");
        mv(&mut game, "B8", "C6");
        mv(&mut game, "F1", "C4");
        mv(&mut game, "F8", "C5");
        assert!(game.legal_moves(sq("E1")).contains(&sq("G1")));
        mv(&mut game, "E1", "G1");
        assert_eq!(
            game.get(sq("G1")),
            Cell::from_parts(Color::White, Piece::King)
        );
        assert_eq!(
            game.get(sq("F1")),
            Cell::from_parts(Color::White, Piece::Rook)
        );
        assert!(game.get(sq("E1")).is_empty());
        assert!(game.get(sq("H1")).is_empty());
        assert_eq!(game.history().last().map(String::as_str), Some("O-O"));
        assert!(!game.castling_rights().has(Color::White, CastlingSide::King));
        assert!(!game.castling_rights().has(Color::White, CastlingSide::Queen));
        assert!(game.castling_rights().has(Color::Black, CastlingSide::King));
    }

    #[test]
    fn test_rook_move_loses_right() {
        let mut game = Game::new();
        mv(&mut game, "H2", "H4");
        mv(&mut game, "H7", "H5");
        mv(&mut game, "H1", "H3");
        assert!(!game.castling_rights().has(Color::White, CastlingSide::King));
        assert!(game.castling_rights().has(Color::White, CastlingSide::Queen));
        assert!(game.castling_rights().has(Color::Black, CastlingSide::King));
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new();
        mv(&mut game, "F2", "F3");
        mv(&mut game, "E7", "E5");
        mv(&mut game, "G2", "G4");
        mv(&mut game, "D8", "H4");
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.is_in_check(Color::White));
        // a finished game accepts no further moves
        assert_eq!(
            game.try_make_move(sq("E2"), sq("E4")),
            Err(MoveError::GameOver)
        );
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_tick_decrements_side_to_move() {
        let mut game = Game::with_clock(10, 0);
        game.tick();
        assert_eq!(game.clock().remaining(Color::White), 9);
        assert_eq!(game.clock().remaining(Color::Black), 10);
        mv(&mut game, "E2", "E4");
        game.tick();
        assert_eq!(game.clock().remaining(Color::White), 9);
        assert_eq!(game.clock().remaining(Color::Black), 9);
    }

    #[test]
    fn test_flag_fall_declares_opponent_winner() {
        let mut game = Game::with_clock(2, 0);
        game.tick();
        assert_eq!(game.winner(), None);
        game.tick();
        assert_eq!(game.winner(), Some(Color::Black));
        // board state is irrelevant and the game is frozen
        assert!(!game.make_move(sq("E2"), sq("E4")));
        let remaining = game.clock().remaining(Color::White);
        game.tick();
        assert_eq!(game.clock().remaining(Color::White), remaining);
    }

    #[test]
    fn test_increment_applied_after_move() {
        let mut game = Game::with_clock(10, 5);
        mv(&mut game, "E2", "E4");
        assert_eq!(game.clock().remaining(Color::White), 15);
        assert_eq!(game.clock().remaining(Color::Black), 10);
    }

    #[test]
    fn test_zero_clock_expires_on_first_move() {
        let mut game = Game::with_clock(0, 0);
        // no tick yet, so the game starts undecided
        assert_eq!(game.winner(), None);
        // winner recomputation after the move sees the expired clock
        mv(&mut game, "E2", "E4");
        assert_eq!(game.winner(), Some(Color::Black));
    }

    #[test]
    fn test_legal_moves_empty_square() {
        let game = Game::new();
        assert!(game.legal_moves(sq("E4")).is_empty());
    }

    #[test]
    fn test_cannot_move_opponent_piece() {
        let mut game = Game::new();
        assert!(!game.make_move(sq("E7"), sq("E5")));
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_rejection_reasons() {
        let mut game = Game::new();
        // empty source and opponent's piece report the bad source square
        assert_eq!(
            game.try_make_move(sq("E4"), sq("E5")),
            Err(MoveError::NotOwnPiece(sq("E4")))
        );
        assert_eq!(
            game.try_make_move(sq("E7"), sq("E5")),
            Err(MoveError::NotOwnPiece(sq("E7")))
        );
        assert_eq!(
            game.try_make_move(sq("E2"), sq("E5")),
            Err(MoveError::NotLegal(sq("E2"), sq("E5")))
        );
        assert_eq!(game.try_make_move(sq("E2"), sq("E4")), Ok(()));
        assert_eq!(game.history(), ["E4"]);
        assert_eq!(
            MoveError::NotLegal(sq("E2"), sq("E5")).to_string(),
            "move E2E5 is not legal"
        );
    }

    #[test]
    fn test_queenside_castling() {
        let mut game = Game::new();
        mv(&mut game, "D2", "D4");
        mv(&mut game, "D7", "D5");
        mv(&mut game, "C1", "F4");
        mv(&mut game, "C8", "F5");
        mv(&mut game, "B1", "C3");
        mv(&mut game, "B8", "C6");
        mv(&mut game, "D1", "D2");
        mv(&mut game, "D8", "D7");
        assert!(game.legal_moves(sq("E1")).contains(&sq("C1")));
        mv(&mut game, "E1", "C1");
        assert_eq!(
            game.get(sq("C1")),
            Cell::from_parts(Color::White, Piece::King)
        );
        assert_eq!(
            game.get(sq("D1")),
            Cell::from_parts(Color::White, Piece::Rook)
        );
        assert!(game.get(sq("A1")).is_empty());
        assert_eq!(game.history().last().map(String::as_str), Some("O-O-O"));
    }

    #[test]
    fn test_captured_home_rook_loses_right() {
        let mut game = Game::new();
        mv(&mut game, "G2", "G4");
        mv(&mut game, "G7", "G5");
        mv(&mut game, "F1", "G2");
        mv(&mut game, "F8", "G7");
        mv(&mut game, "G2", "B7");
        mv(&mut game, "G7", "B2");
        mv(&mut game, "B7", "A8");
        assert!(!game.castling_rights().has(Color::Black, CastlingSide::Queen));
        assert!(game.castling_rights().has(Color::Black, CastlingSide::King));
        assert_eq!(game.history().last().map(String::as_str), Some("BxA8"));
    }

    #[test]
    fn test_file_rank_surface() {
        // spot check that the typed surface lines up with A1..H8 ids
        let game = Game::new();
        assert_eq!(
            game.get(Square::from_parts(File::A, blitzchess_base::types::Rank::R1)),
            Cell::from_parts(Color::White, Piece::Rook)
        );
    }
}
