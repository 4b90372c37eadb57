use anyhow::Result;
use clap::Parser;
use draughtsbot::console::Session;
use draughtsbot::{AiPlayer, Color, Difficulty};
use std::io;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play English draughts against the engine", long_about = None)]
struct Args {
    /// Engine strength
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Search depth in plies for the hard path
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Seed for the engine's random choices (fresh entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Your color: 'l' for light, 'd' for dark (dark moves first)
    #[arg(long, default_value = "l")]
    human: String,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "l" | "light" | "w" | "white" => Ok(Color::Light),
        "d" | "dark" | "b" | "black" => Ok(Color::Dark),
        _ => anyhow::bail!("Invalid color: use 'l' or 'd'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.depth == 0 { anyhow::bail!("depth must be at least 1"); }
    let human = parse_color(&args.human)?;

    let ai = match args.seed {
        Some(s) => AiPlayer::seeded(args.difficulty, s),
        None => AiPlayer::new(args.difficulty),
    }
    .with_depth(args.depth);

    println!("English draughts: you play {human}, engine plays {} at {}", human.opponent(), args.difficulty);
    println!("Commands: board | moves | click <row> <col> | difficulty <easy|medium|hard> | go | new | quit");

    let mut session = Session::new(ai, human);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run_loop(stdin.lock(), &mut stdout)?;
    Ok(())
}
