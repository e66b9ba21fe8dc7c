//! Move generation
//!
//! Three entry points with strictly widening guarantees:
//!
//! - [`reachable`]: raw movement-pattern destinations, ignoring castling
//!   and king safety. This is what the attack oracle consults, so the
//!   mutual recursion between "is my king safe" and "what can the opponent
//!   reach" is structurally impossible.
//! - [`pseudo_legal`]: [`reachable`] plus castling candidates.
//! - [`legal`]: [`pseudo_legal`] minus moves that leave the mover's own
//!   king in check.

use crate::attack;
use crate::board::Board;
use crate::castling;
use blitzchess_base::types::{CastlingRights, CastlingSide, Cell, Color, Piece, Rank, Square};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

const fn pawn_forward(c: Color) -> isize {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

const fn pawn_start_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Destination squares of a single piece
///
/// A queen in the open reaches at most 27 squares, and a castling king at
/// most 10, so the capacity of 28 is never exceeded. The list derefs to
/// an [`ArrayVec`], so slice methods like `contains` work directly.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct DestList(ArrayVec<Square, 28>);

impl DestList {
    pub fn new() -> DestList {
        DestList(ArrayVec::new())
    }
}

impl Deref for DestList {
    type Target = ArrayVec<Square, 28>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DestList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a DestList {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DestList {
    type Item = Square;
    type IntoIter = arrayvec::IntoIter<Square, 28>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn gen_pawn(b: &Board, from: Square, color: Color, res: &mut DestList) {
    let dir = pawn_forward(color);
    if let Some(one) = from.shifted(0, dir) {
        if b.get(one).is_empty() {
            res.push(one);
            if from.rank() == pawn_start_rank(color) {
                if let Some(two) = from.shifted(0, 2 * dir) {
                    if b.get(two).is_empty() {
                        res.push(two);
                    }
                }
            }
        }
    }
    for df in [-1, 1] {
        if let Some(to) = from.shifted(df, dir) {
            if b.get(to).color() == Some(color.inv()) {
                res.push(to);
            }
        }
    }
}

fn gen_leaper(
    b: &Board,
    from: Square,
    color: Color,
    deltas: &[(isize, isize)],
    res: &mut DestList,
) {
    for &(df, dr) in deltas {
        if let Some(to) = from.shifted(df, dr) {
            if b.get(to).color() != Some(color) {
                res.push(to);
            }
        }
    }
}

fn gen_slider(
    b: &Board,
    from: Square,
    color: Color,
    dirs: &[(isize, isize)],
    res: &mut DestList,
) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.shifted(df, dr) {
            match b.get(to).color() {
                None => {
                    res.push(to);
                    cur = to;
                }
                Some(c) if c != color => {
                    // capture terminates the ray, destination included
                    res.push(to);
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Returns the raw movement-pattern destinations of the piece on `from`
///
/// No castling candidates and no king-safety filtering. An empty square
/// yields an empty list. This is the entry point the attack oracle uses:
/// a square is "attacked" exactly when it appears in some opposing
/// piece's reachable set, which keeps the original pawn semantics (a pawn
/// reaches the empty square in front of it, but not an occupied one).
pub fn reachable(b: &Board, from: Square) -> DestList {
    let mut res = DestList::new();
    let cell = b.get(from);
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(c), Some(p)) => (c, p),
        _ => return res,
    };
    match piece {
        Piece::Pawn => gen_pawn(b, from, color, &mut res),
        Piece::Knight => gen_leaper(b, from, color, &KNIGHT_DELTAS, &mut res),
        Piece::King => gen_leaper(b, from, color, &KING_DELTAS, &mut res),
        Piece::Bishop => gen_slider(b, from, color, &BISHOP_DIRS, &mut res),
        Piece::Rook => gen_slider(b, from, color, &ROOK_DIRS, &mut res),
        Piece::Queen => gen_slider(b, from, color, &QUEEN_DIRS, &mut res),
    }
    res
}

fn castling_allowed(b: &Board, c: Color, s: CastlingSide, rights: CastlingRights) -> bool {
    if !rights.has(c, s) {
        return false;
    }
    if b.get(castling::rook_home(c, s)) != Cell::from_parts(c, Piece::Rook) {
        return false;
    }
    let rank = castling::home_rank(c);
    if castling::between_files(s)
        .iter()
        .any(|&f| b.get2(f, rank).is_occupied())
    {
        return false;
    }
    !castling::path_files(s).iter().any(|&f| {
        attack::is_square_attacked(b, Square::from_parts(f, rank), c.inv())
    })
}

/// Returns the pseudo-legal destinations of the piece on `from`:
/// [`reachable`] squares plus castling candidates for an unmoved king
///
/// Pseudo-legal moves obey movement patterns and occupancy but may leave
/// the mover's own king in check.
pub fn pseudo_legal(b: &Board, from: Square, rights: CastlingRights) -> DestList {
    let mut res = reachable(b, from);
    let cell = b.get(from);
    if let (Some(color), Some(Piece::King)) = (cell.color(), cell.piece()) {
        if from == castling::king_home(color) {
            for side in [CastlingSide::King, CastlingSide::Queen] {
                if castling_allowed(b, color, side, rights) {
                    res.push(castling::king_target(color, side));
                }
            }
        }
    }
    res
}

/// Returns the legal destinations of the piece on `from`: pseudo-legal
/// moves that do not leave the mover's own king in check
///
/// Each candidate is validated by simulating the bare displacement on a
/// board copy. A castling candidate is simulated as the king displacement
/// alone; the rook stays put in the simulation, which cannot affect the
/// verdict since the castling path is already known to be unattacked.
pub fn legal(b: &Board, from: Square, rights: CastlingRights) -> DestList {
    let color = match b.get(from).color() {
        Some(c) => c,
        None => return DestList::new(),
    };
    let mut res = DestList::new();
    for to in pseudo_legal(b, from, rights) {
        let sim = b.moved(from, to);
        if !attack::is_king_in_check(&sim, color) {
            res.push(to);
        }
    }
    res
}

/// Returns `true` if some piece of color `c` has at least one legal move
pub fn has_any_legal_move(b: &Board, c: Color, rights: CastlingRights) -> bool {
    b.pieces_of(c)
        .any(|(sq, _)| !legal(b, sq, rights).is_empty())
}
