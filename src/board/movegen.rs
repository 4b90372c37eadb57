use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece, Square};

/// Fixed scan order for diagonal rays; move enumeration order follows it.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A destination for a piece whose origin is known to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    pub fn step(to: Square) -> Self { Self { to, captured: None } }
    pub fn capture(to: Square, captured: Square) -> Self { Self { to, captured: Some(captured) } }
    pub fn is_capture(&self) -> bool { self.captured.is_some() }
}

/// A move together with the square of the piece making it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub from: Square,
    pub mv: Move,
}

impl std::fmt::Display for PieceMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.mv.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.mv.to)
    }
}

// Directions a piece may travel: both forward diagonals for a man, all four for a king.
fn directions(piece: Piece) -> impl Iterator<Item = (i32, i32)> {
    let fwd = piece.color.forward();
    let king = piece.is_king();
    DIRECTIONS.into_iter().filter(move |&(dr, _)| king || dr == fwd)
}

// First non-empty square along a ray, with the empty squares walked past on the way.
fn first_blocker(board: &Board, from: Square, (dr, dc): (i32, i32)) -> (Vec<Square>, Option<Square>) {
    let mut run = Vec::new();
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
        if !board.is_empty_at(next) { return (run, Some(next)); }
        run.push(next);
        cur = next;
    }
    (run, None)
}

// Captures along one direction. A man jumps an adjacent enemy onto the square
// directly beyond; a king passes through empties to the first enemy and may
// land on any empty square beyond it up to the next occupied square.
fn captures_in_direction(board: &Board, from: Square, piece: Piece, dir: (i32, i32), out: &mut Vec<Move>) {
    let (dr, dc) = dir;
    let victim = if piece.is_king() {
        match first_blocker(board, from, dir) { (_, Some(sq)) => sq, (_, None) => return }
    } else {
        match from.offset(dr, dc) { Some(sq) if !board.is_empty_at(sq) => sq, _ => return }
    };
    match board.get(victim) {
        Some(p) if p.color != piece.color => {}
        _ => return,
    }
    if piece.is_king() {
        let (landings, _) = first_blocker(board, victim, dir);
        out.extend(landings.into_iter().map(|to| Move::capture(to, victim)));
    } else if let Some(to) = victim.offset(dr, dc) {
        if board.is_empty_at(to) { out.push(Move::capture(to, victim)); }
    }
}

fn steps_in_direction(board: &Board, from: Square, piece: Piece, (dr, dc): (i32, i32), out: &mut Vec<Move>) {
    if piece.is_king() {
        let (run, _) = first_blocker(board, from, (dr, dc));
        out.extend(run.into_iter().map(Move::step));
    } else if let Some(to) = from.offset(dr, dc) {
        if board.is_empty_at(to) { out.push(Move::step(to)); }
    }
}

/// True iff the piece on `sq` has at least one capturing move. False for an
/// empty square.
pub fn has_capture(board: &Board, sq: Square) -> bool {
    let Some(piece) = board.get(sq) else { return false };
    let mut buf = Vec::new();
    for dir in directions(piece) {
        captures_in_direction(board, sq, piece, dir, &mut buf);
        if !buf.is_empty() { return true; }
    }
    false
}

pub fn side_has_capture(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(sq, _)| has_capture(board, sq))
}

/// Moves for the piece on `sq`. With `must_capture` only captures are
/// returned. Captures come first in direction order, then steps.
pub fn legal_moves(board: &Board, sq: Square, must_capture: bool) -> Vec<Move> {
    let Some(piece) = board.get(sq) else { return Vec::new() };
    let mut moves = Vec::new();
    for dir in directions(piece) {
        captures_in_direction(board, sq, piece, dir, &mut moves);
    }
    if !must_capture {
        for dir in directions(piece) {
            steps_in_direction(board, sq, piece, dir, &mut moves);
        }
    }
    moves
}

/// Every legal move for `color` under the side-wide forced-capture flag,
/// pieces in row-major order.
pub fn generate_moves(board: &Board, color: Color) -> Vec<PieceMove> {
    let must_capture = side_has_capture(board, color);
    let mut out = Vec::new();
    for (from, _) in board.pieces(color) {
        out.extend(legal_moves(board, from, must_capture).into_iter().map(|mv| PieceMove { from, mv }));
    }
    out
}

pub fn side_has_any_move(board: &Board, color: Color) -> bool {
    let must_capture = side_has_capture(board, color);
    board.pieces(color).any(|(sq, _)| !legal_moves(board, sq, must_capture).is_empty())
}
