use draughtsbot::search::strategy::Difficulty;
use draughtsbot::selfplay::{generate_games, generate_games_with_progress, read_jsonl, replay, write_jsonl, SelfPlayParams};
use std::sync::atomic::{AtomicUsize, Ordering};
use pretty_assertions::assert_eq;

fn params() -> SelfPlayParams {
    SelfPlayParams { games: 3, max_turns: 40, depth: 2, light: Difficulty::Easy, dark: Difficulty::Medium, seed: 42, threads: 1 }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let g1 = generate_games(&params());
    let g2 = generate_games(&params());
    assert_eq!(g1.len(), 3);
    assert_eq!(g1, g2);
}

#[test]
fn selfplay_is_independent_of_thread_count() {
    let mut p = params();
    let serial = generate_games(&p);
    p.threads = 3;
    assert_eq!(generate_games(&p), serial);
}

#[test]
fn progress_fires_once_per_game_on_any_thread_count() {
    let mut p = params();
    let serial = generate_games(&p);
    for threads in [1, 3] {
        p.threads = threads;
        let done = AtomicUsize::new(0);
        let turns = AtomicUsize::new(0);
        let games = generate_games_with_progress(&p, |g| {
            done.fetch_add(1, Ordering::Relaxed);
            turns.fetch_add(g.turns, Ordering::Relaxed);
        });
        assert_eq!(done.into_inner(), p.games, "threads {threads}");
        assert_eq!(turns.into_inner(), serial.iter().map(|g| g.turns).sum::<usize>());
        assert_eq!(games, serial);
    }
}

#[test]
fn selfplay_seed_changes_games() {
    let mut p = params();
    let g1 = generate_games(&p);
    p.seed = 7;
    let g2 = generate_games(&p);
    assert_ne!(g1, g2);
}

#[test]
fn records_replay_through_the_turn_engine() {
    for g in generate_games(&params()) {
        let state = replay(&g).expect("every recorded leg is legal");
        assert_eq!(state.turns(), g.turns);
        assert!(g.turns <= 40);
        assert_eq!(state.no_moves().map(|c| c.opponent()), g.winner);
    }
}

#[test]
fn jsonl_round_trip() -> std::io::Result<()> {
    let games = generate_games(&params());
    let path = std::env::temp_dir().join(format!("draughtsbot_selfplay_{}.jsonl", std::process::id()));
    write_jsonl(&games, &path)?;
    let back = read_jsonl(&path)?;
    std::fs::remove_file(&path)?;
    assert_eq!(back, games);
    Ok(())
}
