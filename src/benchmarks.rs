//! Benchmark objective functions for evolutionary algorithms.
//!
//! Every function takes an individual (a slice of genes) and returns its
//! [`Fitness`], where smaller values are better. The functions never retain
//! or modify the individual.
//!
//! Unimodal landscapes: [`rand()`], [`plane`], [`sphere`], [`cigar`],
//! [`rosenbrock`].
//! Multimodal landscapes: [`ackley`], [`bohachevsky`], [`griewank`],
//! [`rastrigin`], [`rastrigin_scaled`], [`rastrigin_skew`], [`schaffer`],
//! [`schwefel`].
//!
//! Input lengths are not validated. Functions documented with a minimum
//! length either panic or return NaN when called with fewer genes, as noted
//! for each function.
//!
//! # Example
//!
//! ```
//! use ec_benchmarks::benchmarks::{rastrigin, sphere};
//!
//! let individual = vec![0.0, 0.0, 0.0];
//! assert_eq!(sphere(&individual).value(), 0.0);
//! assert_eq!(rastrigin(&individual).value(), 0.0);
//! assert_eq!(sphere(&[3.0]), sphere(&[-3.0]));
//! ```

use crate::fitness::Fitness;
use crate::gene::Gene;

use rand::Rng;

/// Offset of the [`schwefel`] function per dimension.
pub const SCHWEFEL_OFFSET: f64 = 418.9828872724339;

/// Gene value where the [`schwefel`] function is (nearly) zero.
pub const SCHWEFEL_TARGET: f64 = 420.968746;

fn sum<T: Gene, I: Iterator<Item = T>>(iter: I) -> T {
    iter.fold(T::zero(), |acc, x| acc + x)
}

/// Overlapping pairs `(x[i], x[i + 1])`
fn adjacent_pairs<T: Copy>(individual: &[T]) -> impl '_ + Iterator<Item = (T, T)> {
    individual.windows(2).map(|pair| (pair[0], pair[1]))
}

fn rastrigin_term<T: Gene>(x: T) -> T {
    let ten = T::constant(10.0);
    x * x - ten * (T::constant(2.0) * T::PI() * x).cos()
}

/// Random objective, uniformly distributed in `[0, 1)`.
///
/// Gene values are ignored. Consumes one draw from `rng`; pass a seeded
/// generator (e.g. [`StdRng`]) for reproducible results.
///
/// [`StdRng`]: rand::rngs::StdRng
pub fn rand<T: Gene, R: Rng + ?Sized>(rng: &mut R, _individual: &[T]) -> Fitness<T> {
    Fitness::new(T::sample_unit(rng))
}

/// Plane function: value of the first gene.
///
/// # Panics
///
/// Panics if `individual` is empty.
pub fn plane<T: Gene>(individual: &[T]) -> Fitness<T> {
    Fitness::new(individual[0])
}

/// Sphere function: sum of squares.
///
/// Minimum is `0.0` at the origin.
pub fn sphere<T: Gene>(individual: &[T]) -> Fitness<T> {
    Fitness::new(sum(individual.iter().map(|&x| x * x)))
}

/// Cigar function: first gene squared plus `1e6` times the sum of squares
/// of all remaining genes.
///
/// # Panics
///
/// Panics if `individual` is empty.
pub fn cigar<T: Gene>(individual: &[T]) -> Fitness<T> {
    let first = individual[0];
    let rest = sum(individual[1..].iter().map(|&x| x * x));
    Fitness::new(first * first + T::constant(1e6) * rest)
}

/// Rosenbrock function, summed over all adjacent pairs of genes.
///
/// Minimum is `0.0` where every gene is `1.0`. Individuals with less than
/// two genes have no pairs and evaluate to `0.0`.
pub fn rosenbrock<T: Gene>(individual: &[T]) -> Fitness<T> {
    let hundred = T::constant(100.0);
    Fitness::new(sum(adjacent_pairs(individual).map(|(x, y)| {
        hundred * (x * x - y).powi(2) + (T::one() - x).powi(2)
    })))
}

/// Ackley function.
///
/// Typically used from `-15.0..=30.0`. Minimum is `0.0` at the origin (up
/// to rounding). An empty individual divides by zero and evaluates to NaN.
pub fn ackley<T: Gene>(individual: &[T]) -> Fitness<T> {
    let twenty = T::constant(20.0);
    let two_pi = T::constant(2.0) * T::PI();
    let n = T::constant(individual.len() as f64);
    let mean_square = sum(individual.iter().map(|&x| x * x)) / n;
    let mean_cos = sum(individual.iter().map(|&x| (two_pi * x).cos())) / n;
    Fitness::new(
        twenty - twenty * (T::constant(-0.2) * mean_square.sqrt()).exp() + T::E()
            - mean_cos.exp(),
    )
}

/// Bohachevsky function, summed over all adjacent pairs of genes.
///
/// Typically used from `-100.0..=100.0`. Minimum is `0.0` at the origin.
pub fn bohachevsky<T: Gene>(individual: &[T]) -> Fitness<T> {
    let pi = T::PI();
    let c = T::constant;
    Fitness::new(sum(adjacent_pairs(individual).map(|(x, x1)| {
        x * x + c(2.0) * x1 * x1 - c(0.3) * (c(3.0) * pi * x).cos()
            - c(0.4) * (c(4.0) * pi * x1).cos()
            + c(0.7)
    })))
}

/// Griewank function.
///
/// Typically used from `-600.0..=600.0`. Minimum is `0.0` at the origin.
pub fn griewank<T: Gene>(individual: &[T]) -> Fitness<T> {
    let squares = sum(individual.iter().map(|&x| x * x));
    let product = individual
        .iter()
        .enumerate()
        .fold(T::one(), |product, (i, &x)| {
            product * (x / T::constant((i + 1) as f64).sqrt()).cos()
        });
    Fitness::new(squares / T::constant(4000.0) - product + T::one())
}

/// Rastrigin function.
///
/// Typically used from `-5.12..=5.12`. Minimum is `0.0` at the origin.
/// Consider using a population of `20 * individual.len()`.
pub fn rastrigin<T: Gene>(individual: &[T]) -> Fitness<T> {
    let n = T::constant(individual.len() as f64);
    Fitness::new(T::constant(10.0) * n + sum(individual.iter().copied().map(rastrigin_term)))
}

/// Scaled Rastrigin function.
///
/// Gene `i` of `n` is multiplied by `10^(i / (n - 1))` before the Rastrigin
/// term is applied, so the last gene is scaled by `10`.
///
/// An empty individual evaluates to `0.0`.
///
/// # Panics
///
/// Panics if `individual` has exactly one gene, since the scaling exponent
/// divides by `n - 1`.
pub fn rastrigin_scaled<T: Gene>(individual: &[T]) -> Fitness<T> {
    let n = individual.len();
    if n == 0 {
        return Fitness::new(T::zero());
    }
    assert!(n != 1, "division by zero: rastrigin_scaled requires at least two genes");
    let last = (n - 1) as f64;
    let terms = individual.iter().enumerate().map(|(i, &x)| {
        let scale = T::constant(10f64.powf(i as f64 / last));
        rastrigin_term(scale * x)
    });
    Fitness::new(T::constant(10.0) * T::constant(n as f64) + sum(terms))
}

/// Skewed Rastrigin function.
///
/// Positive genes are multiplied by `10` before the Rastrigin term is
/// applied.
pub fn rastrigin_skew<T: Gene>(individual: &[T]) -> Fitness<T> {
    let ten = T::constant(10.0);
    let n = T::constant(individual.len() as f64);
    let terms = individual
        .iter()
        .map(|&x| rastrigin_term(if x > T::zero() { ten * x } else { x }));
    Fitness::new(ten * n + sum(terms))
}

/// Schaffer function, summed over all adjacent pairs of genes.
///
/// Typically used from `-100.0..=100.0`. Minimum is `0.0` at the origin.
pub fn schaffer<T: Gene>(individual: &[T]) -> Fitness<T> {
    let c = T::constant;
    Fitness::new(sum(adjacent_pairs(individual).map(|(x, x1)| {
        let s = x * x + x1 * x1;
        s.powf(c(0.25)) * ((c(50.0) * s.powf(c(0.1))).sin().powi(2) + T::one())
    })))
}

/// Schwefel function.
///
/// Typically used from `-500.0..=500.0`. Minimum is (nearly) `0.0` where
/// every gene is [`SCHWEFEL_TARGET`].
pub fn schwefel<T: Gene>(individual: &[T]) -> Fitness<T> {
    let n = T::constant(individual.len() as f64);
    let total = sum(individual.iter().map(|&x| x * x.abs().sqrt().sin()));
    Fitness::new(T::constant(SCHWEFEL_OFFSET) * n - total)
}
