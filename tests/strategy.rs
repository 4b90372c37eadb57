mod common;

use common::board;
use draughtsbot::board::movegen::generate_moves;
use draughtsbot::board::{Board, Color};
use draughtsbot::game::GameState;
use draughtsbot::search::alphabeta::best_move;
use draughtsbot::search::strategy::{random_move, AiPlayer, Difficulty};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn dark_to_move() -> GameState {
    let g = GameState::new();
    assert_eq!(g.current(), Color::Dark);
    g
}

#[test]
fn random_move_is_legal_and_seeded() {
    let b = Board::startpos();
    let legal = generate_moves(&b, Color::Dark);
    let mut r1 = SmallRng::seed_from_u64(7);
    let mut r2 = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let a = random_move(&b, Color::Dark, &mut r1).expect("move");
        assert!(legal.contains(&a));
        assert_eq!(Some(a), random_move(&b, Color::Dark, &mut r2));
    }
}

#[test]
fn random_choice_covers_the_move_list() {
    let b = Board::startpos();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 { seen.insert(random_move(&b, Color::Dark, &mut rng).expect("move")); }
    assert_eq!(seen.len(), 7);
}

#[test]
fn hard_plays_the_search_move() {
    let g = dark_to_move();
    let want = best_move(g.board(), Color::Dark, 3);
    let mut ai = AiPlayer::seeded(Difficulty::Hard, 1).with_depth(3);
    assert_eq!(ai.choose_first(g.board(), Color::Dark), want);
}

#[test]
fn seeded_players_repeat_themselves() {
    for d in [Difficulty::Easy, Difficulty::Medium] {
        let mut a = AiPlayer::seeded(d, 99).with_depth(2);
        let mut b = AiPlayer::seeded(d, 99).with_depth(2);
        let mut ga = dark_to_move();
        let mut gb = dark_to_move();
        assert_eq!(a.play_turn(&mut ga), b.play_turn(&mut gb));
        assert_eq!(ga.board(), gb.board());
    }
}

#[test]
fn play_turn_finishes_a_capture_chain() {
    let b = board("
        ........
        ..d.....
        ...l....
        ........
        .....l..
        ........
        .l......
        ........");
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut g = GameState::from_board(b, Color::Dark);
        let mut ai = AiPlayer::seeded(d, 5).with_depth(3);
        let legs = ai.play_turn(&mut g);
        assert_eq!(legs.len(), 2, "{d}: {legs:?}");
        assert_eq!(g.current(), Color::Light);
        assert!(g.continuation().is_none());
    }
}

#[test]
fn play_turn_does_nothing_when_stuck() {
    let b = board("
        .d.d....
        l.l.....
        ...d....
        ........
        ........
        ........
        ........
        ........");
    let mut g = GameState::from_board(b, Color::Light);
    let mut ai = AiPlayer::seeded(Difficulty::Hard, 0);
    assert!(ai.play_turn(&mut g).is_empty());
    assert_eq!(g.current(), Color::Light);
}

#[test]
fn medium_mixes_random_and_search() {
    // over many seeds medium must sometimes agree with hard and sometimes not
    let g = dark_to_move();
    let hard = best_move(g.board(), Color::Dark, 2);
    let mut agree = 0;
    for seed in 0..64 {
        let mut ai = AiPlayer::seeded(Difficulty::Medium, seed).with_depth(2);
        if ai.choose_first(g.board(), Color::Dark) == hard { agree += 1; }
    }
    assert!(agree > 0 && agree < 64, "agree {agree}");
}
