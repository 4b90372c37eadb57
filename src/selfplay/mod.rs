use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::movegen::PieceMove;
use crate::board::Color;
use crate::game::GameState;
use crate::search::strategy::{AiPlayer, Difficulty};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_turns: usize, // game is drawn once this many turns are played
    pub depth: u32,
    pub light: Difficulty,
    pub dark: Difficulty,
    pub seed: u64,
    pub threads: usize,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_turns: 150, depth: 3, light: Difficulty::Medium, dark: Difficulty::Medium, seed: 42, threads: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub legs: Vec<PieceMove>,
    pub turns: usize,
    pub winner: Option<Color>, // None: drawn on the turn limit
}

// Seeds for the two players of game `gi`; independent of scheduling order.
fn game_seeds(seed: u64, gi: usize) -> (u64, u64) {
    let mut rng = SmallRng::seed_from_u64(seed ^ (gi as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    (rng.gen(), rng.gen())
}

pub fn play_game(params: &SelfPlayParams, gi: usize) -> GameRecord {
    let (light_seed, dark_seed) = game_seeds(params.seed, gi);
    let mut light = AiPlayer::seeded(params.light, light_seed).with_depth(params.depth);
    let mut dark = AiPlayer::seeded(params.dark, dark_seed).with_depth(params.depth);
    let mut game = GameState::new();
    while !game.is_over() && game.turns() < params.max_turns {
        let player = if game.current() == Color::Light { &mut light } else { &mut dark };
        if player.play_turn(&mut game).is_empty() { break; }
    }
    let winner = game.no_moves().map(Color::opponent);
    log::debug!("game {gi}: {} turns, winner {:?}", game.turns(), winner);
    GameRecord { legs: game.history().to_vec(), turns: game.turns(), winner }
}

/// Plays `params.games` games. Output is identical for a given seed whatever
/// the thread count.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with_progress(params, |_| {})
}

/// Like `generate_games`, calling `on_game` once per finished game. Calls
/// arrive in completion order, which varies with `params.threads`.
pub fn generate_games_with_progress<F>(params: &SelfPlayParams, on_game: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |gi| {
        let g = play_game(params, gi);
        on_game(&g);
        g
    };
    if params.threads <= 1 {
        return (0..params.games).map(run).collect();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
        Ok(pool) => pool.install(|| (0..params.games).into_par_iter().map(run).collect::<Vec<_>>()),
        Err(e) => {
            log::warn!("falling back to one thread: {e}");
            (0..params.games).map(run).collect()
        }
    }
}

/// Re-applies a record's legs through the turn engine; `None` if any leg is
/// rejected.
pub fn replay(record: &GameRecord) -> Option<GameState> {
    let mut game = GameState::new();
    for leg in &record.legs {
        game.apply_move(leg.from, &leg.mv)?;
    }
    Some(game)
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
