pub mod movegen;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self { Color::Light => Color::Dark, Color::Dark => Color::Light }
    }

    // Row delta of a man's forward step. Light heads for row 0, dark for row 7.
    pub fn forward(self) -> i32 {
        match self { Color::Light => -1, Color::Dark => 1 }
    }

    pub fn promotion_row(self) -> usize {
        match self { Color::Light => 0, Color::Dark => SIZE - 1 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::Light => write!(f, "light"), Color::Dark => write!(f, "dark") }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self { Self { color, rank: Rank::Man } }
    pub const fn king(color: Color) -> Self { Self { color, rank: Rank::King } }
    pub fn is_king(&self) -> bool { self.rank == Rank::King }

    fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::Dark, Rank::Man) => 'd',
            (Color::Dark, Rank::King) => 'D',
            (Color::Light, Rank::Man) => 'l',
            (Color::Light, Rank::King) => 'L',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Piece::man(Color::Dark)),
            'D' => Some(Piece::king(Color::Dark)),
            'l' => Some(Piece::man(Color::Light)),
            'L' => Some(Piece::king(Color::Light)),
            _ => None,
        }
    }
}

pub type Cell = Option<Piece>;

/// True iff `(row, col)` lies on the 8x8 board. Takes signed values so that
/// direction arithmetic can probe off the edge.
pub fn within_bounds(row: i32, col: i32) -> bool {
    (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if within_bounds(r, c) { Some(Square::new(r as usize, c as usize)) } else { None }
    }

    pub fn is_dark(self) -> bool { (self.row + self.col) % 2 == 1 }

    // Point reflection through the board centre; maps dark squares to dark squares.
    pub fn mirrored(self) -> Square { Square::new(SIZE - 1 - self.row, SIZE - 1 - self.col) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// 8x8 grid, row 0 at the top. Pieces are plain values so a copy of the
/// board shares nothing with its source.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    pub fn empty() -> Self { Self { cells: [[None; SIZE]; SIZE] } }

    /// Dark men on the dark squares of rows 0..3, light men on rows 5..8.
    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let sq = Square::new(row, col);
                if !sq.is_dark() { continue; }
                if row < 3 { b.place(sq, Some(Piece::man(Color::Dark))); }
                else if row > 4 { b.place(sq, Some(Piece::man(Color::Light))); }
            }
        }
        b
    }

    pub fn get(&self, sq: Square) -> Cell { self.cells[sq.row][sq.col] }

    /// Puts `cell` on `sq`. Pieces only ever stand on dark squares; clearing
    /// any square is allowed.
    pub fn set(&mut self, sq: Square, cell: Cell) -> Result<(), LightSquareError> {
        if cell.is_some() && !sq.is_dark() { return Err(LightSquareError(sq)); }
        self.place(sq, cell);
        Ok(())
    }

    // Unchecked write for squares that came from the setup, the diagram
    // parser or the move generator.
    pub(crate) fn place(&mut self, sq: Square, cell: Cell) {
        debug_assert!(cell.is_none() || sq.is_dark(), "piece placed on light square {sq}");
        self.cells[sq.row][sq.col] = cell;
    }

    pub fn take(&mut self, sq: Square) -> Cell { self.cells[sq.row][sq.col].take() }

    pub fn is_empty_at(&self, sq: Square) -> bool { self.get(sq).is_none() }

    /// Occupied squares of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..SIZE).flat_map(move |row| (0..SIZE).filter_map(move |col| {
            let sq = Square::new(row, col);
            self.get(sq).map(|p| (sq, p))
        }))
    }

    pub fn count(&self, color: Color) -> usize { self.pieces(color).count() }

    /// Every piece moved to its mirrored square with its color inverted. The
    /// result is the same position seen from the other side of the table.
    pub fn swap_colors(&self) -> Board {
        let mut out = Board::empty();
        for (sq, p) in self.occupied() {
            out.place(sq.mirrored(), Some(Piece { color: p.color.opponent(), rank: p.rank }));
        }
        out
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("piece placed on light square {0}")]
pub struct LightSquareError(pub Square);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {width} squares, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("unknown character {ch:?} at row {row}, col {col}")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("piece on light square at row {row}, col {col}")]
    LightSquare { row: usize, col: usize },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '\n' || c == '/')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != SIZE { return Err(BoardParseError::RowCount(rows.len())); }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != SIZE { return Err(BoardParseError::RowWidth { row, width }); }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' { continue; }
                let piece = Piece::from_char(ch).ok_or(BoardParseError::UnknownChar { ch, row, col })?;
                let sq = Square::new(row, col);
                if !sq.is_dark() { return Err(BoardParseError::LightSquare { row, col }); }
                board.place(sq, Some(piece));
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            let line: String = (0..SIZE)
                .map(|col| self.get(Square::new(row, col)).map_or('.', Piece::to_char))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{self}")
    }
}
