use ec_benchmarks::catalog::Benchmark;

use criterion::{black_box, Criterion};
use rand::{distributions::Uniform, thread_rng, Rng};

fn main() {
    let mut c = Criterion::default().configure_from_args();
    const DIM: usize = 100;
    let individual: Vec<f64> = thread_rng()
        .sample_iter(Uniform::new_inclusive(-5.12, 5.12))
        .take(DIM)
        .collect();
    for benchmark in Benchmark::ALL {
        c.bench_function(&format!("{}({})", benchmark, DIM), |b| {
            let rng = &mut thread_rng();
            b.iter(|| benchmark.evaluate(rng, black_box(&individual)));
        });
    }
    c.bench_function("rastrigin::<f32>(100)", |b| {
        let individual: Vec<f32> = individual.iter().map(|&x| x as f32).collect();
        b.iter(|| ec_benchmarks::rastrigin(black_box(&individual)));
    });
}
