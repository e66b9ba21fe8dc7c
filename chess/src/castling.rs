//! Castling geometry: home, target and transit squares per color and side

use blitzchess_base::types::{CastlingSide, Color, File, Rank, Square};

/// Back rank of color `c`, where its king and rooks start
pub const fn home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Starting square of the king of color `c`
pub const fn king_home(c: Color) -> Square {
    Square::from_parts(File::E, home_rank(c))
}

/// Starting square of the rook of color `c` on the given side
pub const fn rook_home(c: Color, s: CastlingSide) -> Square {
    let file = match s {
        CastlingSide::Queen => File::A,
        CastlingSide::King => File::H,
    };
    Square::from_parts(file, home_rank(c))
}

/// Square the king lands on when castling to the given side
pub const fn king_target(c: Color, s: CastlingSide) -> Square {
    let file = match s {
        CastlingSide::Queen => File::C,
        CastlingSide::King => File::G,
    };
    Square::from_parts(file, home_rank(c))
}

/// Square the rook lands on when castling to the given side
pub const fn rook_target(c: Color, s: CastlingSide) -> Square {
    let file = match s {
        CastlingSide::Queen => File::D,
        CastlingSide::King => File::F,
    };
    Square::from_parts(file, home_rank(c))
}

/// Files strictly between the king's and the rook's home squares; all of
/// them must be empty for castling
pub fn between_files(s: CastlingSide) -> &'static [File] {
    match s {
        CastlingSide::Queen => &[File::B, File::C, File::D],
        CastlingSide::King => &[File::F, File::G],
    }
}

/// Files the king occupies or passes through, origin included; none of
/// them may be attacked by the opponent
pub fn path_files(s: CastlingSide) -> &'static [File] {
    match s {
        CastlingSide::Queen => &[File::E, File::D, File::C],
        CastlingSide::King => &[File::E, File::F, File::G],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    #[test]
    fn test_homes_and_targets() {
        assert_eq!(king_home(Color::White), sq("E1"));
        assert_eq!(king_home(Color::Black), sq("E8"));
        assert_eq!(rook_home(Color::White, CastlingSide::King), sq("H1"));
        assert_eq!(rook_home(Color::White, CastlingSide::Queen), sq("A1"));
        assert_eq!(rook_home(Color::Black, CastlingSide::King), sq("H8"));
        assert_eq!(rook_home(Color::Black, CastlingSide::Queen), sq("A8"));
        assert_eq!(king_target(Color::White, CastlingSide::King), sq("G1"));
        assert_eq!(king_target(Color::Black, CastlingSide::Queen), sq("C8"));
        assert_eq!(rook_target(Color::White, CastlingSide::King), sq("F1"));
        assert_eq!(rook_target(Color::Black, CastlingSide::Queen), sq("D8"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(between_files(CastlingSide::King).len(), 2);
        assert_eq!(between_files(CastlingSide::Queen).len(), 3);
        assert!(path_files(CastlingSide::King).contains(&File::E));
        assert!(path_files(CastlingSide::Queen).contains(&File::E));
    }
}
