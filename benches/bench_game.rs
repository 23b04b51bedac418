use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use coup_engine::{Game, RandomDriver};

fn complete_game(num_players: usize) {
    let mut rng = Pcg64::seed_from_u64(num_players as u64);
    let mut io = RandomDriver::new(Pcg64::seed_from_u64(31 * num_players as u64));

    let mut game = black_box(Game::new(num_players, &mut rng));
    game.play(&mut io, &mut rng).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_game");
    for num_players in 3..=6usize {
        group.bench_with_input(BenchmarkId::from_parameter(num_players), &num_players, |b, &num_players| {
            b.iter(|| complete_game(num_players))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
