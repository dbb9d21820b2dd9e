//! Benchmark objective functions for evolutionary computation
//!
//! See module [`benchmarks`] for the functions themselves and module
//! [`catalog`] for selecting them by name. The other modules are (public)
//! helper modules.

#![warn(missing_docs)]

pub mod benchmarks;
pub mod catalog;
pub mod fitness;
pub mod gene;
pub mod population;

pub use benchmarks::*;
pub use catalog::Benchmark;
pub use fitness::Fitness;
pub use gene::Gene;
