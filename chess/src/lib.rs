//! blitzchess is a chess rules library for timed games
//!
//! It provides board representation, legal move generation, check
//! detection, castling, a per-side countdown clock and win detection.
//! The [`Game`] type ties these together behind a small mutable surface;
//! everything underneath works on immutable board snapshots.
//!
//! # Example
//!
//! ```
//! # use blitzchess::{Color, Game, Square};
//! # use std::str::FromStr;
//! let mut game = Game::new();
//! let from = Square::from_str("G1").unwrap();
//! let to = Square::from_str("F3").unwrap();
//! assert!(game.legal_moves(from).contains(&to));
//! assert!(game.make_move(from, to));
//! assert_eq!(game.history(), ["NF3"]);
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub mod attack;
pub mod board;
pub mod castling;
pub mod clock;
pub mod game;
pub mod movegen;

pub use blitzchess_base::types;
pub use blitzchess_base::types::{
    CastlingRights, CastlingSide, Cell, Color, File, Piece, Rank, Square,
};

pub use board::Board;
pub use clock::Clock;
pub use game::{Game, MoveError};
pub use movegen::DestList;
