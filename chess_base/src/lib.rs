//! # Base types for blitzchess
//!
//! This is an auxiliary crate for `blitzchess`, which contains the core vocabulary:
//! files, ranks, squares, colors, pieces and the piece codec.
//!
//! Normally you don't want to use this crate directly. Use `blitzchess` instead.

pub mod types;

pub use types::{CastlingRights, CastlingSide, Cell, Color, File, Piece, Rank, Square};
