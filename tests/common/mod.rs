#![allow(dead_code)]
use draughtsbot::board::{Board, Color, Piece, Square, SIZE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn sq(r: usize, c: usize) -> Square { Square::new(r, c) }

pub fn board(diagram: &str) -> Board { diagram.parse().expect("valid diagram") }

// Sparse random position: men never sit on their own promotion row.
pub fn random_board(seed: u64, density: f64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = Board::empty();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let s = sq(row, col);
            if !s.is_dark() || !rng.gen_bool(density) { continue; }
            let color = if rng.gen_bool(0.5) { Color::Dark } else { Color::Light };
            let king = rng.gen_bool(0.25) || row == color.promotion_row();
            b.set(s, Some(if king { Piece::king(color) } else { Piece::man(color) })).unwrap();
        }
    }
    b
}
