use crate::board::{Board, Color, Square};

pub const MAN: f64 = 1.0;
pub const KING: f64 = 3.0;
pub const CENTER_BONUS: f64 = 0.5;

// Win/loss scores for a side left without a move.
pub const WIN_SCORE: f64 = f64::INFINITY;
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

fn is_central(sq: Square) -> bool {
    (2..=5).contains(&sq.row) && (2..=5).contains(&sq.col)
}

// Material plus centre occupancy. Positive means dark is ahead.
pub fn evaluate(board: &Board) -> f64 {
    let mut score = 0.0;
    for (sq, piece) in board.occupied() {
        let mut v = if piece.is_king() { KING } else { MAN };
        if is_central(sq) { v += CENTER_BONUS; }
        score += if piece.color == Color::Dark { v } else { -v };
    }
    score
}
