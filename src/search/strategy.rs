use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::movegen::{generate_moves, PieceMove};
use crate::board::{Board, Color};
use crate::game::GameState;
use crate::search::alphabeta::{Searcher, DEFAULT_DEPTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty {0:?}; expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self { Difficulty::Easy => "easy", Difficulty::Medium => "medium", Difficulty::Hard => "hard" };
        f.write_str(s)
    }
}

/// Uniform choice among every legal move for `color`.
pub fn random_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<PieceMove> {
    generate_moves(board, color).choose(rng).copied()
}

/// Machine player. All randomness comes from the owned `SmallRng`, so a
/// seeded player replays the same game.
pub struct AiPlayer {
    pub difficulty: Difficulty,
    pub depth: u32,
    rng: SmallRng,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty, depth: DEFAULT_DEPTH, rng: SmallRng::from_entropy() }
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self { difficulty, depth: DEFAULT_DEPTH, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn with_depth(mut self, depth: u32) -> Self { self.depth = depth.max(1); self }

    /// Opening leg of a turn for `color` according to the difficulty.
    pub fn choose_first(&mut self, board: &Board, color: Color) -> Option<PieceMove> {
        let use_search = match self.difficulty {
            Difficulty::Easy => false,
            Difficulty::Hard => true,
            Difficulty::Medium => !self.rng.gen_bool(0.5),
        };
        if use_search {
            Searcher::new().search_depth(board, color, self.depth).best
        } else {
            random_move(board, color, &mut self.rng)
        }
    }

    /// Plays a whole turn for the side to move: the opening leg, then a
    /// uniformly random pick among the forced captures until the chain ends.
    /// Returns the legs played; empty if the side cannot move.
    pub fn play_turn(&mut self, game: &mut GameState) -> Vec<PieceMove> {
        let mut legs = Vec::new();
        loop {
            if game.is_over() { break; }
            let choice = match game.continuation() {
                Some(from) => game.held_moves().choose(&mut self.rng).map(|&mv| PieceMove { from, mv }),
                None if legs.is_empty() => self.choose_first(game.board(), game.current()),
                None => break,
            };
            let Some(pm) = choice else { break };
            if game.apply_move(pm.from, &pm.mv).is_none() { break; }
            legs.push(pm);
        }
        legs
    }
}
