use clap::Parser;
use draughtsbot::selfplay::{generate_games_with_progress, write_jsonl, SelfPlayParams};
use draughtsbot::{Color, Difficulty};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "draughtsbot-selfplay", about = "Play engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 150)]
    max_turns: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    light: Difficulty,
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    dark: Difficulty,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_turns: a.max_turns,
        depth: a.depth.max(1),
        light: a.light,
        dark: a.dark,
        seed: a.seed,
        threads: a.threads,
    };
    eprintln!("Generating {} games (depth={}, light={}, dark={}, threads={})", a.games, params.depth, a.light, a.dark, a.threads);

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed_precise}")?);
    let games = generate_games_with_progress(&params, |_| bar.inc(1));
    bar.finish();

    let light_wins = games.iter().filter(|g| g.winner == Some(Color::Light)).count();
    let dark_wins = games.iter().filter(|g| g.winner == Some(Color::Dark)).count();
    eprintln!("light {light_wins}, dark {dark_wins}, drawn {}", games.len() - light_wins - dark_wins);

    if let Some(dir) = a.out.parent() { std::fs::create_dir_all(dir)?; }
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
