//! Catalog of all benchmark functions with their customary metadata
//!
//! # Example
//!
//! ```
//! use ec_benchmarks::catalog::{Benchmark, Modality, SearchRange};
//! use rand::thread_rng;
//!
//! let benchmark: Benchmark = "griewank".parse().unwrap();
//! assert_eq!(benchmark.modality(), Modality::Multimodal);
//! assert!(matches!(
//!     benchmark.search_range(),
//!     SearchRange::Finite { low, high } if low == -600.0 && high == 600.0
//! ));
//!
//! let optimum = benchmark.optimum().unwrap();
//! let individual = vec![optimum.gene; 5];
//! let fitness = benchmark.evaluate(&mut thread_rng(), &individual);
//! assert_eq!(fitness.value(), optimum.value);
//! ```

use crate::benchmarks::{self, SCHWEFEL_TARGET};
use crate::fitness::Fitness;
use crate::gene::Gene;

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Customary search range for a single dimension
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SearchRange {
    /// Finite search range
    Finite {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// Infinite search range
    Infinite {
        /// Suggested average value for starting search
        average: f64,
        /// Suggested standard deviation for starting search
        stddev: f64,
    },
}

impl SearchRange {
    /// Unbounded range, starting search around the origin
    pub const UNBOUNDED: SearchRange = SearchRange::Infinite {
        average: 0.0,
        stddev: 1.0,
    };
    /// Return true if `gene` lies within the range
    pub fn contains(&self, gene: f64) -> bool {
        match *self {
            SearchRange::Finite { low, high } => (low..=high).contains(&gene),
            SearchRange::Infinite { .. } => !gene.is_nan(),
        }
    }
}

/// Search range for [`Benchmark::Schwefel`].
pub const SCHWEFEL_RANGE: SearchRange = SearchRange::Finite {
    low: -500.0,
    high: 500.0,
};

/// Shape of a landscape
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Modality {
    /// Single (global) optimum
    Unimodal,
    /// Many local optima
    Multimodal,
}

/// Global minimum reached when every gene has the same value
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Optimum {
    /// Value of every gene
    pub gene: f64,
    /// Objective value at the optimum
    pub value: f64,
}

/// Benchmark function, see module [`benchmarks`] for the formulas
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Benchmark {
    /// [`benchmarks::rand`]
    Rand,
    /// [`benchmarks::plane`]
    Plane,
    /// [`benchmarks::sphere`]
    Sphere,
    /// [`benchmarks::cigar`]
    Cigar,
    /// [`benchmarks::rosenbrock`]
    Rosenbrock,
    /// [`benchmarks::ackley`]
    Ackley,
    /// [`benchmarks::bohachevsky`]
    Bohachevsky,
    /// [`benchmarks::griewank`]
    Griewank,
    /// [`benchmarks::rastrigin`]
    Rastrigin,
    /// [`benchmarks::rastrigin_scaled`]
    RastriginScaled,
    /// [`benchmarks::rastrigin_skew`]
    RastriginSkew,
    /// [`benchmarks::schaffer`]
    Schaffer,
    /// [`benchmarks::schwefel`]
    Schwefel,
}

/// Error returned when parsing an unknown benchmark name
#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
#[error("unknown benchmark function \"{0}\"")]
pub struct UnknownBenchmark(
    /// Name that was not found
    pub String,
);

impl Benchmark {
    /// All benchmarks, unimodal ones first
    pub const ALL: [Benchmark; 13] = [
        Benchmark::Rand,
        Benchmark::Plane,
        Benchmark::Sphere,
        Benchmark::Cigar,
        Benchmark::Rosenbrock,
        Benchmark::Ackley,
        Benchmark::Bohachevsky,
        Benchmark::Griewank,
        Benchmark::Rastrigin,
        Benchmark::RastriginScaled,
        Benchmark::RastriginSkew,
        Benchmark::Schaffer,
        Benchmark::Schwefel,
    ];
    /// Name of the function in module [`benchmarks`]
    pub const fn name(self) -> &'static str {
        match self {
            Benchmark::Rand => "rand",
            Benchmark::Plane => "plane",
            Benchmark::Sphere => "sphere",
            Benchmark::Cigar => "cigar",
            Benchmark::Rosenbrock => "rosenbrock",
            Benchmark::Ackley => "ackley",
            Benchmark::Bohachevsky => "bohachevsky",
            Benchmark::Griewank => "griewank",
            Benchmark::Rastrigin => "rastrigin",
            Benchmark::RastriginScaled => "rastrigin_scaled",
            Benchmark::RastriginSkew => "rastrigin_skew",
            Benchmark::Schaffer => "schaffer",
            Benchmark::Schwefel => "schwefel",
        }
    }
    /// Unimodal or multimodal
    pub const fn modality(self) -> Modality {
        match self {
            Benchmark::Rand
            | Benchmark::Plane
            | Benchmark::Sphere
            | Benchmark::Cigar
            | Benchmark::Rosenbrock => Modality::Unimodal,
            _ => Modality::Multimodal,
        }
    }
    /// Minimum number of genes for a meaningful evaluation
    ///
    /// Pair based functions evaluate shorter individuals to `0.0`,
    /// [`Benchmark::RastriginScaled`] panics on a single gene.
    pub const fn min_len(self) -> usize {
        match self {
            Benchmark::Rosenbrock
            | Benchmark::Bohachevsky
            | Benchmark::RastriginScaled
            | Benchmark::Schaffer => 2,
            _ => 1,
        }
    }
    /// False if evaluation consumes random numbers
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Benchmark::Rand)
    }
    /// Customary search range for each gene
    pub const fn search_range(self) -> SearchRange {
        match self {
            Benchmark::Rand => SearchRange::Finite {
                low: 0.0,
                high: 1.0,
            },
            Benchmark::Plane | Benchmark::Sphere | Benchmark::Cigar | Benchmark::Rosenbrock => {
                SearchRange::UNBOUNDED
            }
            Benchmark::Ackley => SearchRange::Finite {
                low: -15.0,
                high: 30.0,
            },
            Benchmark::Bohachevsky | Benchmark::Schaffer => SearchRange::Finite {
                low: -100.0,
                high: 100.0,
            },
            Benchmark::Griewank => SearchRange::Finite {
                low: -600.0,
                high: 600.0,
            },
            Benchmark::Rastrigin | Benchmark::RastriginScaled | Benchmark::RastriginSkew => {
                SearchRange::Finite {
                    low: -5.12,
                    high: 5.12,
                }
            }
            Benchmark::Schwefel => SCHWEFEL_RANGE,
        }
    }
    /// Global minimum, if there is one
    ///
    /// The Schwefel optimum is only known approximately; its `value` is
    /// `0.0` up to an error below `1e-6` per gene.
    pub const fn optimum(self) -> Option<Optimum> {
        match self {
            Benchmark::Rand | Benchmark::Plane => None,
            Benchmark::Rosenbrock => Some(Optimum {
                gene: 1.0,
                value: 0.0,
            }),
            Benchmark::Schwefel => Some(Optimum {
                gene: SCHWEFEL_TARGET,
                value: 0.0,
            }),
            _ => Some(Optimum {
                gene: 0.0,
                value: 0.0,
            }),
        }
    }
    /// Evaluate `individual`
    ///
    /// `rng` is only used by [`Benchmark::Rand`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as the respective function in module
    /// [`benchmarks`].
    pub fn evaluate<T, R>(self, rng: &mut R, individual: &[T]) -> Fitness<T>
    where
        T: Gene,
        R: Rng + ?Sized,
    {
        match self {
            Benchmark::Rand => benchmarks::rand(rng, individual),
            Benchmark::Plane => benchmarks::plane(individual),
            Benchmark::Sphere => benchmarks::sphere(individual),
            Benchmark::Cigar => benchmarks::cigar(individual),
            Benchmark::Rosenbrock => benchmarks::rosenbrock(individual),
            Benchmark::Ackley => benchmarks::ackley(individual),
            Benchmark::Bohachevsky => benchmarks::bohachevsky(individual),
            Benchmark::Griewank => benchmarks::griewank(individual),
            Benchmark::Rastrigin => benchmarks::rastrigin(individual),
            Benchmark::RastriginScaled => benchmarks::rastrigin_scaled(individual),
            Benchmark::RastriginSkew => benchmarks::rastrigin_skew(individual),
            Benchmark::Schaffer => benchmarks::schaffer(individual),
            Benchmark::Schwefel => benchmarks::schwefel(individual),
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = UnknownBenchmark;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Benchmark::ALL
            .iter()
            .copied()
            .find(|benchmark| benchmark.name() == name)
            .ok_or_else(|| UnknownBenchmark(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Benchmark, Modality, SearchRange, UnknownBenchmark};
    use rand::{rngs::StdRng, thread_rng, SeedableRng};
    #[test]
    fn test_names() {
        for benchmark in Benchmark::ALL {
            let parsed: Benchmark = benchmark.to_string().parse().unwrap();
            assert_eq!(parsed, benchmark);
        }
        assert_eq!(
            "Sphere".parse::<Benchmark>(),
            Err(UnknownBenchmark("Sphere".to_owned()))
        );
        assert_eq!(
            UnknownBenchmark("foo".to_owned()).to_string(),
            "unknown benchmark function \"foo\""
        );
    }
    #[test]
    fn test_modality() {
        let unimodal = Benchmark::ALL
            .iter()
            .take_while(|b| b.modality() == Modality::Unimodal)
            .count();
        assert_eq!(unimodal, 5);
        assert!(Benchmark::ALL[unimodal..]
            .iter()
            .all(|b| b.modality() == Modality::Multimodal));
    }
    #[test]
    fn test_optimum() {
        let mut rng = thread_rng();
        for benchmark in Benchmark::ALL {
            let Some(optimum) = benchmark.optimum() else {
                continue;
            };
            assert!(benchmark.search_range().contains(optimum.gene));
            for dim in [2, 3, 10] {
                let individual = vec![optimum.gene; dim];
                let fitness = benchmark.evaluate(&mut rng, &individual);
                assert!(
                    (fitness.value() - optimum.value).abs() < 1e-6 * dim as f64,
                    "{} at optimum evaluated to {}",
                    benchmark,
                    fitness.value()
                );
            }
        }
    }
    #[test]
    fn test_min_len() {
        let mut rng = thread_rng();
        for benchmark in Benchmark::ALL {
            let individual = vec![0.5f64; benchmark.min_len()];
            assert!(benchmark.evaluate(&mut rng, &individual).value().is_finite());
        }
    }
    #[test]
    fn test_evaluate_dispatch() {
        let mut rng = thread_rng();
        let individual = [0.5, -1.5, 2.0];
        assert_eq!(
            Benchmark::Plane.evaluate(&mut rng, &individual).value(),
            0.5
        );
        assert_eq!(
            Benchmark::Sphere.evaluate(&mut rng, &individual).value(),
            6.5
        );
        assert_eq!(
            Benchmark::Cigar.evaluate(&mut rng, &individual).value(),
            0.25 + 6.25e6
        );
    }
    #[test]
    fn test_rand_determinism() {
        assert!(!Benchmark::Rand.is_deterministic());
        assert!(Benchmark::ALL[1..].iter().all(|b| b.is_deterministic()));
        let individual = [0.0f32; 4];
        let a = Benchmark::Rand.evaluate(&mut StdRng::seed_from_u64(3), &individual);
        let b = Benchmark::Rand.evaluate(&mut StdRng::seed_from_u64(3), &individual);
        assert_eq!(a, b);
        assert!((0.0..1.0).contains(&a.value()));
    }
    #[test]
    fn test_search_range() {
        assert!(Benchmark::Rastrigin.search_range().contains(5.12));
        assert!(!Benchmark::Rastrigin.search_range().contains(5.13));
        assert_eq!(Benchmark::Sphere.search_range(), SearchRange::UNBOUNDED);
        assert!(SearchRange::UNBOUNDED.contains(1e300));
        assert!(!SearchRange::UNBOUNDED.contains(f64::NAN));
    }
}
