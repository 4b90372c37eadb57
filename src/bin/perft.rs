use anyhow::Context;
use clap::Parser;
use draughtsbot::board::{Board, Color};
use draughtsbot::game::complete_turns;
use draughtsbot::perft::{divide, perft};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the draughts move generator")]
struct Args {
    /// Search depth in complete turns
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board diagram with rows separated by '/', or "startpos"
    #[arg(value_name = "DIAGRAM", default_value = "startpos")]
    diagram: String,
    /// Side to move: light or dark
    #[arg(long, default_value = "dark")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count below each root turn
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board: Board = if args.diagram == "startpos" {
        Board::startpos()
    } else {
        args.diagram.parse::<Board>().context("invalid board diagram")?
    };
    let color = match args.side.as_str() {
        "light" | "l" => Color::Light,
        "dark" | "d" => Color::Dark,
        other => anyhow::bail!("unknown side {other:?}"),
    };

    if args.divide {
        for (name, n) in divide(&board, color, args.depth) { println!("{name}: {n}"); }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes: u64 = pool.install(|| {
        if args.threads <= 1 || args.depth <= 1 {
            perft(&board, color, args.depth)
        } else {
            complete_turns(&board, color)
                .par_iter()
                .map(|t| perft(&t.result, color.opponent(), args.depth - 1))
                .sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {nodes} elapsed: {dt:.3}s nps: {nps:.0}");
    } else {
        println!("nodes: {nodes}");
    }
    Ok(())
}
