use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3_engine::{
    apply_move, create_board, find_matches, legal_moves, EngineConfig, XorShiftSource,
};

const PALETTE: [u8; 5] = [0, 1, 2, 3, 4];

fn bench_find_matches(c: &mut Criterion) {
    for size in [8usize, 16, 32] {
        let mut source = XorShiftSource::new(&PALETTE, 0xdeadbeef).unwrap();
        let board = create_board(&mut source, size, size).unwrap();
        c.bench_function(&format!("find_matches_{size}x{size}"), |b| {
            b.iter(|| find_matches(black_box(board.grid()), 3))
        });
    }
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut source = XorShiftSource::new(&PALETTE, 0xcafe).unwrap();
    let board = create_board(&mut source, 8, 8).unwrap();

    c.bench_function("legal_moves_classic_8x8", |b| {
        b.iter(|| legal_moves(black_box(&board), &EngineConfig::classic()))
    });
    c.bench_function("legal_moves_aligned_8x8", |b| {
        b.iter(|| legal_moves(black_box(&board), &EngineConfig::aligned()))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let config = EngineConfig::classic();
    let mut source = XorShiftSource::new(&PALETTE, 1234).unwrap();
    let board = create_board(&mut source, 8, 8).unwrap();
    let Some(&(a, m)) = legal_moves(&board, &config).first() else {
        return;
    };

    c.bench_function("apply_move_8x8", |b| {
        b.iter(|| {
            let mut refill = XorShiftSource::new(&PALETTE, 99).unwrap();
            apply_move(black_box(&board), a, m, &mut refill, &config)
        })
    });
}

criterion_group!(benches, bench_find_matches, bench_legal_moves, bench_apply_move);
criterion_main!(benches);
