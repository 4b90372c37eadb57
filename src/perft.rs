use crate::board::{Board, Color};
use crate::game::complete_turns;

// Counts complete turns to `depth`; a multi-jump chain is a single ply.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let turns = complete_turns(board, color);
    if depth == 1 { return turns.len() as u64; }
    turns.iter().map(|t| perft(&t.result, color.opponent(), depth - 1)).sum()
}

// Per-first-leg breakdown at the root, for diffing against another generator.
pub fn divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    complete_turns(board, color)
        .into_iter()
        .map(|t| {
            let name = t.legs.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(" ");
            (name, perft(&t.result, color.opponent(), depth.saturating_sub(1)))
        })
        .collect()
}
