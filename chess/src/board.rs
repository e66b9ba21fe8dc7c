//! Board and related things

use blitzchess_base::types::{Cell, Color, File, Piece, Rank, Square};

use std::fmt;

/// Chess position: the contents of the 64 squares
///
/// The board is a plain array indexed by [`Square::index`], with
/// [`Cell::EMPTY`] standing for an unoccupied square. It carries no
/// turn, castling or clock state; those belong to [`Game`](crate::Game),
/// which owns the live board. A `Board` value is cheap to copy, and move
/// simulation works on copies via [`Board::moved`].
///
/// # Example
///
/// ```
/// # use blitzchess::{Board, Cell, Color, Piece, Square};
/// # use std::str::FromStr;
/// let b = Board::initial();
/// let e2 = Square::from_str("E2").unwrap();
/// assert_eq!(b.get(e2), Cell::from_parts(Color::White, Piece::Pawn));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    /// Contents of the board
    ///
    /// The indices in this array are the indices of squares. You might
    /// probably want to use [`Board::get()`] or [`Board::put()`] instead
    /// of indexing this array directly.
    pub cells: [Cell; 64],
}

impl Board {
    /// Returns an empty board
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the standard starting position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Returns the contents of square `sq`
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        unsafe { *self.cells.get_unchecked(sq.index()) }
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Square::from_parts(file, rank))
    }

    /// Puts `cell` onto square `sq`
    #[inline]
    pub fn put(&mut self, sq: Square, cell: Cell) {
        unsafe {
            *self.cells.get_unchecked_mut(sq.index()) = cell;
        }
    }

    /// Puts `cell` onto the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Square::from_parts(file, rank), cell);
    }

    /// Iterates over all occupied squares with their contents
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::iter()
            .map(|sq| (sq, self.get(sq)))
            .filter(|(_, cell)| cell.is_occupied())
    }

    /// Iterates over the squares occupied by pieces of color `c`
    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.occupied().filter(move |(_, cell)| cell.color() == Some(c))
    }

    /// Returns the number of pieces of color `c` and kind `p` on the board
    pub fn count(&self, c: Color, p: Piece) -> usize {
        let cell = Cell::from_parts(c, p);
        self.cells.iter().filter(|&&x| x == cell).count()
    }

    /// Returns the position of the king of color `c`, or `None` if the
    /// board has no such king
    pub fn king_pos(&self, c: Color) -> Option<Square> {
        let king = Cell::from_parts(c, Piece::King);
        Square::iter().find(|&sq| self.get(sq) == king)
    }

    /// Returns a copy of the board with the contents of `from` displaced
    /// onto `to` and `from` left empty
    ///
    /// This is the simulation primitive for king-safety checks. It applies
    /// only the single displacement; in particular, simulating a castling
    /// king move does not relocate the rook.
    #[inline]
    pub fn moved(&self, from: Square, to: Square) -> Board {
        let mut res = *self;
        res.put(to, res.get(from));
        res.put(from, Cell::EMPTY);
        res
    }

    /// Wraps the board to allow pretty-printing with the given `style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use blitzchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |ABCDEFGH
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim_end(), res.trim_start_matches('\n').trim_end());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for pretty-printing the board
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces as ASCII letters
    Ascii,
    /// Print pieces as Unicode chess figurines
    Utf8,
}

/// Wrapper for pretty-printing [`Board`], produced by [`Board::pretty`]
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl<'a> fmt::Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let (sep, cross, dash) = match self.style {
            PrettyStyle::Ascii => ('|', '+', '-'),
            PrettyStyle::Utf8 => ('│', '┼', '─'),
        };
        for rank in (0..8).rev().map(Rank::from_index) {
            write!(f, "{}{}", rank.as_char(), sep)?;
            for file in File::iter() {
                let cell = self.board.get2(file, rank);
                let c = match self.style {
                    PrettyStyle::Ascii => cell.as_char(),
                    PrettyStyle::Utf8 => cell.as_utf8_char(),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", dash, cross)?;
        for _ in File::iter() {
            write!(f, "{}", dash)?;
        }
        writeln!(f)?;
        write!(f, " {}", sep)?;
        for file in File::iter() {
            write!(f, "{}", file.as_char())?;
        }
        writeln!(f)?;
        Ok(())
    }
}
