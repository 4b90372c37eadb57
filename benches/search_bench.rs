use criterion::{criterion_group, criterion_main, Criterion, black_box};
use draughtsbot::board::{Board, Color};

fn bench_search(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("search_depth_5_startpos", |ben| {
        ben.iter(|| {
            let mut s = draughtsbot::search::alphabeta::Searcher::new();
            let p = draughtsbot::search::alphabeta::SearchParams { depth: 5, use_pruning: true };
            let r = s.search_with_params(black_box(&b), Color::Dark, p);
            black_box(r.nodes)
        })
    });
    c.bench_function("perft_5_startpos", |ben| {
        ben.iter(|| black_box(draughtsbot::perft::perft(black_box(&b), Color::Dark, 5)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
