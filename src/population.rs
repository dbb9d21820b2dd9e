//! Parallel evaluation of whole populations
//!
//! Only evaluates; selection and replacement are left to the calling engine.
//!
//! # Example
//!
//! ```
//! use ec_benchmarks::catalog::Benchmark;
//! use ec_benchmarks::population::evaluate_population;
//!
//! let population = vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![2.0, -1.0]];
//! let fitnesses = evaluate_population(Benchmark::Sphere, &population);
//! assert_eq!(fitnesses[2].value(), 5.0);
//! ```

use crate::catalog::Benchmark;
use crate::fitness::Fitness;
use crate::gene::Gene;

use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

/// Evaluate every individual of `population` in parallel
///
/// Each worker thread draws from its own thread-local generator, so results
/// of [`Benchmark::Rand`] are not reproducible; see
/// [`evaluate_population_seeded`] for that.
///
/// # Panics
///
/// Panics if an individual is invalid for `benchmark` (see
/// [`Benchmark::evaluate`]).
pub fn evaluate_population<T, I>(benchmark: Benchmark, population: &[I]) -> Vec<Fitness<T>>
where
    T: Gene,
    I: AsRef<[T]> + Sync,
{
    log::debug!(
        "evaluating {} individuals with {}",
        population.len(),
        benchmark
    );
    population
        .par_iter()
        .map_init(
            || rand::thread_rng(),
            |rng, individual| benchmark.evaluate(rng, individual.as_ref()),
        )
        .collect()
}

/// Same as [`evaluate_population`], but reproducible
///
/// Individual `i` is evaluated with a generator seeded by `seed + i`
/// (wrapping), independent of how work is distributed between threads.
pub fn evaluate_population_seeded<T, I>(
    benchmark: Benchmark,
    population: &[I],
    seed: u64,
) -> Vec<Fitness<T>>
where
    T: Gene,
    I: AsRef<[T]> + Sync,
{
    log::debug!(
        "evaluating {} individuals with {} (seed {})",
        population.len(),
        benchmark,
        seed
    );
    population
        .par_iter()
        .enumerate()
        .map(|(i, individual)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            benchmark.evaluate(&mut rng, individual.as_ref())
        })
        .collect()
}
