use draughtsbot::console::Session;
use draughtsbot::{AiPlayer, Color, Difficulty};

fn run(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    session.run_loop(script.as_bytes(), &mut out).expect("in-memory io");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn engine_opens_when_human_plays_light() {
    let mut s = Session::new(AiPlayer::seeded(Difficulty::Hard, 1).with_depth(2), Color::Light);
    let out = run(&mut s, "board\n");
    assert!(out.starts_with("ai plays"), "{out}");
    assert!(out.contains("light to move"), "{out}");
    assert_eq!(s.game().turns(), 1);
}

#[test]
fn human_move_gets_an_immediate_reply() {
    let mut s = Session::new(AiPlayer::seeded(Difficulty::Easy, 1), Color::Light);
    // the engine's opening only reaches row 3, so (5,2) keeps both steps
    let out = run(&mut s, "click 5 2\nclick 4 3\n");
    assert!(out.contains("(5,2): (4,1) (4,3)"), "{out}");
    assert!(out.contains("moved (5,2)-(4,3)"), "{out}");
    assert_eq!(out.matches("ai plays").count(), 2, "{out}");
    assert_eq!(s.game().current(), Color::Light);
    assert_eq!(s.game().turns(), 3);
}

#[test]
fn human_playing_dark_moves_first() {
    let mut s = Session::new(AiPlayer::seeded(Difficulty::Hard, 1).with_depth(2), Color::Dark);
    let out = run(&mut s, "board\nclick 2 1\nclick 3 2\n");
    assert!(out.starts_with(".d.d.d.d"), "{out}");
    assert!(out.contains("dark to move"), "{out}");
    assert!(out.contains("moved (2,1)-(3,2)"), "{out}");
    assert_eq!(out.matches("ai plays").count(), 1, "{out}");
    assert_eq!(s.game().current(), Color::Dark);
}

#[test]
fn bad_input_is_reported_not_fatal() {
    let mut s = Session::new(AiPlayer::seeded(Difficulty::Easy, 1), Color::Light);
    let out = run(&mut s, "click 9 9\ndifficulty brutal\nfly\ndifficulty hard\nmoves\nquit\nboard\n");
    assert!(out.contains("usage: click"), "{out}");
    assert!(out.contains("unknown difficulty"), "{out}");
    assert!(out.contains("unknown command \"fly\""), "{out}");
    assert!(out.contains("difficulty hard"), "{out}");
    assert!(out.contains("no piece selected"), "{out}");
    // nothing after quit runs
    assert!(!out.contains("to move"), "{out}");
}
