//! Attack oracle: which squares the opponent can reach

use crate::board::Board;
use crate::movegen;
use blitzchess_base::types::{Color, Square};

/// Returns `true` if some piece of color `by` has `sq` among its raw
/// reachable destinations
///
/// Reachability follows [`movegen::reachable`], so castling never counts
/// as an attack, and a pawn "attacks" the empty square it could push to.
pub fn is_square_attacked(b: &Board, sq: Square, by: Color) -> bool {
    b.pieces_of(by)
        .any(|(from, _)| movegen::reachable(b, from).contains(&sq))
}

/// Returns `true` if the king of color `c` is attacked by the opponent
///
/// A board with no king of that color reports no check.
pub fn is_king_in_check(b: &Board, c: Color) -> bool {
    match b.king_pos(c) {
        Some(king) => is_square_attacked(b, king, c.inv()),
        None => false,
    }
}
