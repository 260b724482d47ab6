//! Move Engine Benchmarks
//!
//! Performance benchmarks for the evaluator, the move orderer and fixed-depth
//! searches using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use move_engine::board::{Board, Position};
use move_engine::evaluation::evaluate;
use move_engine::search::order_moves;
use move_engine::{find_best_move, SearchBudget};

const MIDDLEGAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_parse_fen(c: &mut Criterion) {
    c.bench_function("parse_fen_middlegame", |b| {
        b.iter(|| black_box(Board::from_fen(black_box(MIDDLEGAME))))
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = Board::starting_position();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&board)))
    });
}

fn bench_order_moves_middlegame(c: &mut Criterion) {
    let Ok(board) = Board::from_fen(MIDDLEGAME) else {
        return;
    };

    c.bench_function("order_moves_middlegame", |b| {
        b.iter(|| black_box(order_moves(&board, board.legal_moves())))
    });
}

fn bench_search_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_move");
    group.sample_size(10);

    for depth in 1..=3 {
        let Ok(budget) = SearchBudget::new(depth, 600.0) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("starting", depth), &budget, |b, budget| {
            let mut board = Board::starting_position();
            b.iter(|| black_box(find_best_move(&mut board, budget).best_move))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_fen,
    bench_evaluate_starting,
    bench_order_moves_middlegame,
    bench_search_depths,
);
criterion_main!(benches);
