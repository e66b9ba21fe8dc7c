use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use blitzchess::{movegen, Board, CastlingRights, Color, Game, Square};

fn all_legal_moves(b: &Board, side: Color, rights: CastlingRights) -> usize {
    b.pieces_of(side)
        .map(|(from, _)| movegen::legal(b, from, rights).len())
        .sum()
}

fn bench_movegen_initial(c: &mut Criterion) {
    let b = Board::initial();
    c.bench_function("movegen_initial", |bench| {
        bench.iter(|| all_legal_moves(black_box(&b), Color::White, CastlingRights::FULL))
    });
}

fn bench_movegen_open(c: &mut Criterion) {
    let mut game = Game::new();
    let opening = [
        ("E2", "E4"),
        ("E7", "E5"),
        ("G1", "F3"),
        ("B8", "C6"),
        ("F1", "C4"),
        ("F8", "C5"),
    ];
    for (from, to) in opening {
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        assert!(game.make_move(from, to));
    }
    let b = *game.position();
    let rights = game.castling_rights();
    c.bench_function("movegen_open", |bench| {
        bench.iter(|| all_legal_moves(black_box(&b), Color::White, rights))
    });
}

fn bench_make_move(c: &mut Criterion) {
    let from: Square = "E2".parse().unwrap();
    let to: Square = "E4".parse().unwrap();
    c.bench_function("make_move", |bench| {
        bench.iter(|| {
            let mut game = Game::new();
            game.make_move(black_box(from), black_box(to))
        })
    });
}

fn random_playout(rng: &mut StdRng, max_moves: usize) -> usize {
    let mut game = Game::new();
    for played in 0..max_moves {
        if game.winner().is_some() {
            return played;
        }
        let moves: Vec<_> = game
            .position()
            .pieces_of(game.turn())
            .flat_map(|(from, _)| {
                game.legal_moves(from).into_iter().map(move |to| (from, to))
            })
            .collect();
        if moves.is_empty() {
            return played;
        }
        let (from, to) = moves[rng.gen_range(0..moves.len())];
        game.make_move(from, to);
    }
    max_moves
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout_40", |bench| {
        let mut rng = StdRng::seed_from_u64(0xC4E55);
        bench.iter(|| random_playout(&mut rng, black_box(40)))
    });
}

criterion_group!(
    benches,
    bench_movegen_initial,
    bench_movegen_open,
    bench_make_move,
    bench_random_playout
);
criterion_main!(benches);
