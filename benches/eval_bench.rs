use criterion::{criterion_group, criterion_main, Criterion, black_box};
use draughtsbot::board::Board;

fn bench_eval(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = draughtsbot::search::eval::evaluate(black_box(&b));
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
